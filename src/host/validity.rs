use std::fmt;

use regex::Regex;

use crate::io::config_io::ConfigError;
use crate::model::{Document, IgnoreConfig, WindowKind};

/// Why a document is not trackable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    IgnoredName(String),
    IgnoredKind(String),
    IgnoredFiletype(String),
    IgnoredWindow(String),
    NotListed,
    NotLoaded,
    Scratch,
    SpecialWindow(WindowKind),
    Sidebar,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::IgnoredName(p) => write!(f, "name matches ignore pattern {}", p),
            Rejection::IgnoredKind(p) => write!(f, "kind matches ignore pattern {}", p),
            Rejection::IgnoredFiletype(p) => write!(f, "filetype matches ignore pattern {}", p),
            Rejection::IgnoredWindow(p) => write!(f, "window matches ignore pattern {}", p),
            Rejection::NotListed => f.write_str("neither listed nor loaded"),
            Rejection::NotLoaded => f.write_str("not loaded"),
            Rejection::Scratch => f.write_str("scratch or help buffer"),
            Rejection::SpecialWindow(kind) => write!(f, "shown in a {} window", kind),
            Rejection::Sidebar => f.write_str("sidebar surface"),
        }
    }
}

/// Return the first pattern that matches `text`.
pub fn matches_any<'a>(patterns: &'a [Regex], text: &str) -> Option<&'a Regex> {
    patterns.iter().find(|re| re.is_match(text))
}

/// Compiled ignore rules plus the fixed document checks.
#[derive(Debug, Clone, Default)]
pub struct ValidityRules {
    names: Vec<Regex>,
    kinds: Vec<Regex>,
    filetypes: Vec<Regex>,
    window_types: Vec<Regex>,
    require_loaded: bool,
}

fn compile(category: &'static str, patterns: &[String]) -> Result<Vec<Regex>, ConfigError> {
    patterns
        .iter()
        .map(|p| {
            Regex::new(p).map_err(|source| ConfigError::InvalidPattern {
                category,
                pattern: p.clone(),
                source,
            })
        })
        .collect()
}

impl ValidityRules {
    pub fn from_config(config: &IgnoreConfig) -> Result<Self, ConfigError> {
        Ok(ValidityRules {
            names: compile("names", &config.names)?,
            kinds: compile("kinds", &config.kinds)?,
            filetypes: compile("filetypes", &config.filetypes)?,
            window_types: compile("window_types", &config.window_types)?,
            require_loaded: config.ignore_not_loaded,
        })
    }

    pub fn is_valid(&self, doc: &Document) -> bool {
        self.explain(doc).is_none()
    }

    /// The first reason `doc` is rejected, or `None` if it is trackable.
    ///
    /// Pattern rules are checked before the fixed checks so `check` output
    /// names the user's own rule when both apply.
    pub fn explain(&self, doc: &Document) -> Option<Rejection> {
        if let Some(re) = matches_any(&self.names, &doc.name) {
            return Some(Rejection::IgnoredName(re.as_str().to_string()));
        }
        if let Some(re) = matches_any(&self.kinds, &doc.kind) {
            return Some(Rejection::IgnoredKind(re.as_str().to_string()));
        }
        if let Some(re) = matches_any(&self.filetypes, &doc.filetype) {
            return Some(Rejection::IgnoredFiletype(re.as_str().to_string()));
        }
        if let Some(re) = matches_any(&self.window_types, doc.window.as_str()) {
            return Some(Rejection::IgnoredWindow(re.as_str().to_string()));
        }
        if doc.sidebar {
            return Some(Rejection::Sidebar);
        }
        if self.require_loaded && !doc.loaded {
            return Some(Rejection::NotLoaded);
        }
        if !doc.listed && !doc.loaded {
            return Some(Rejection::NotListed);
        }
        if doc.is_scratch() {
            return Some(Rejection::Scratch);
        }
        match doc.window {
            WindowKind::Normal | WindowKind::Hidden => None,
            other => Some(Rejection::SpecialWindow(other)),
        }
    }
}
