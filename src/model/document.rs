use std::fmt;

use serde::{Deserialize, Serialize};

use super::handle::DocumentHandle;

/// Kind of window a document is shown in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    /// Not displayed in any window
    Hidden,
    #[default]
    Normal,
    Floating,
    Quickfix,
    Loclist,
    Popup,
}

impl WindowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowKind::Hidden => "hidden",
            WindowKind::Normal => "normal",
            WindowKind::Floating => "floating",
            WindowKind::Quickfix => "quickfix",
            WindowKind::Loclist => "loclist",
            WindowKind::Popup => "popup",
        }
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An open document as the session host sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub handle: DocumentHandle,
    /// Path or buffer name; empty for unnamed buffers
    #[serde(default)]
    pub name: String,
    /// Buffer kind: "" for a regular file, "nofile", "help", "terminal", ...
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub filetype: String,
    #[serde(default = "default_true")]
    pub listed: bool,
    #[serde(default = "default_true")]
    pub loaded: bool,
    #[serde(default)]
    pub modified: bool,
    #[serde(default)]
    pub window: WindowKind,
    /// Marks the sidebar's own buffer
    #[serde(default)]
    pub sidebar: bool,
}

fn default_true() -> bool {
    true
}

impl Document {
    /// A listed, loaded file shown in a normal window.
    pub fn file(handle: u32, name: &str) -> Self {
        Document {
            handle: DocumentHandle(handle),
            name: name.to_string(),
            kind: String::new(),
            filetype: String::new(),
            listed: true,
            loaded: true,
            modified: false,
            window: WindowKind::Normal,
            sidebar: false,
        }
    }

    pub fn is_scratch(&self) -> bool {
        matches!(self.kind.as_str(), "nofile" | "help")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_defaults() {
        let doc: Document = toml::from_str("handle = 3\nname = \"a.rs\"").unwrap();
        assert_eq!(doc, Document::file(3, "a.rs"));
    }

    #[test]
    fn window_defaults_to_normal() {
        assert_eq!(WindowKind::default(), WindowKind::Normal);
        let doc: Document = toml::from_str("handle = 1").unwrap();
        assert_eq!(doc.window, WindowKind::Normal);
    }

    #[test]
    fn scratch_kinds() {
        let mut doc = Document::file(1, "x");
        assert!(!doc.is_scratch());
        doc.kind = "help".into();
        assert!(doc.is_scratch());
    }
}
