use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from bufring.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ignore: IgnoreConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Pattern rules that exclude documents from tracking.
///
/// Each list is an ordered set of regular expressions; a document is ignored
/// as soon as one pattern in the relevant category matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IgnoreConfig {
    /// Matched against the document's display path
    #[serde(default)]
    pub names: Vec<String>,
    /// Matched against the document kind (e.g. "terminal", "prompt")
    #[serde(default)]
    pub kinds: Vec<String>,
    #[serde(default)]
    pub filetypes: Vec<String>,
    /// Matched against the kind of window the document is shown in
    #[serde(default)]
    pub window_types: Vec<String>,
    /// Require documents to be loaded, not merely listed
    #[serde(default)]
    pub ignore_not_loaded: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Mark documents with unsaved changes
    #[serde(default = "default_true")]
    pub show_modified: bool,
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_modified: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
