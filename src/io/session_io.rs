use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::host::{SessionHost, ValidityRules};
use crate::model::{Document, DocumentHandle};

/// Error type for loading a session file
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse session: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("document handle {0} appears more than once")]
    DuplicateHandle(DocumentHandle),
    #[error("active document {0} is not in the session")]
    UnknownActive(DocumentHandle),
}

/// A snapshot of open documents, as written in a session file:
///
/// ```toml
/// active = 2
///
/// [[documents]]
/// handle = 1
/// name = "src/main.rs"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub active: Option<DocumentHandle>,
    #[serde(default)]
    pub documents: Vec<Document>,
}

impl Session {
    pub fn into_host(self, rules: ValidityRules) -> SessionHost {
        SessionHost::with_documents(rules, self.documents, self.active)
    }
}

/// Parse and validate session text.
pub fn parse_session(text: &str) -> Result<Session, SessionError> {
    let session: Session = toml::from_str(text)?;
    let mut seen = HashSet::new();
    for doc in &session.documents {
        if !seen.insert(doc.handle) {
            return Err(SessionError::DuplicateHandle(doc.handle));
        }
    }
    if let Some(active) = session.active
        && !seen.contains(&active)
    {
        return Err(SessionError::UnknownActive(active));
    }
    Ok(session)
}

pub fn read_session(path: &Path) -> Result<Session, SessionError> {
    let text = fs::read_to_string(path).map_err(|e| SessionError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_session(&text)
}
