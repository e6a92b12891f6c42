use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// File name looked up in the working directory when no path is given
pub const CONFIG_FILE_NAME: &str = "bufring.toml";

/// Error type for loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid {category} ignore pattern {pattern:?}: {source}")]
    InvalidPattern {
        category: &'static str,
        pattern: String,
        source: regex::Error,
    },
}

/// Parse config text.
pub fn parse_config(text: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Read a config file.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&text)
}

/// Load the explicit config if given, else `bufring.toml` in `dir` if it
/// exists, else the defaults.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    let candidate = dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        tracing::debug!(path = %candidate.display(), "using config from working directory");
        read_config(&candidate)
    } else {
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert!(config.ignore.names.is_empty());
    }

    #[test]
    fn picks_up_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            "[ignore]\nkinds = [\"^terminal$\"]\n",
        )
        .unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert_eq!(config.ignore.kinds, vec!["^terminal$"]);
    }

    #[test]
    fn explicit_missing_path_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_config(Some(&tmp.path().join("nope.toml")), tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = parse_config("[ignore\nnames = 3").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
