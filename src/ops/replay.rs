use crate::host::SessionHost;
use crate::model::{Document, DocumentHandle};

use super::controller::MruController;

/// Error type for event scripts
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("unknown event: {0}")]
    UnknownEvent(String),
    #[error("bad document handle in {0:?}")]
    BadHandle(String),
    #[error("missing path in {0:?}")]
    MissingPath(String),
}

/// One step of an event script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Focus(DocumentHandle),
    Hide(DocumentHandle),
    Close(DocumentHandle),
    Unlist(DocumentHandle),
    Open(DocumentHandle, String),
    Next,
    Prev,
}

fn handle_arg(token: &str, arg: Option<&str>) -> Result<DocumentHandle, ReplayError> {
    arg.and_then(|a| a.parse().ok())
        .ok_or_else(|| ReplayError::BadHandle(token.to_string()))
}

/// Parse a script like `focus:3, next, close:2` (commas or newlines).
pub fn parse_script(script: &str) -> Result<Vec<Step>, ReplayError> {
    script
        .split([',', '\n'])
        .map(str::trim)
        .filter(|t| !t.is_empty() && !t.starts_with('#'))
        .map(|token| -> Result<Step, ReplayError> {
            let mut parts = token.splitn(3, ':');
            let name = parts.next().unwrap_or_default();
            let arg = parts.next();
            match name {
                "focus" => Ok(Step::Focus(handle_arg(token, arg)?)),
                "hide" => Ok(Step::Hide(handle_arg(token, arg)?)),
                "close" => Ok(Step::Close(handle_arg(token, arg)?)),
                "unlist" => Ok(Step::Unlist(handle_arg(token, arg)?)),
                "open" => {
                    let handle = handle_arg(token, arg)?;
                    let path = parts
                        .next()
                        .filter(|p| !p.is_empty())
                        .ok_or_else(|| ReplayError::MissingPath(token.to_string()))?;
                    Ok(Step::Open(handle, path.to_string()))
                }
                "next" => Ok(Step::Next),
                "prev" => Ok(Step::Prev),
                _ => Err(ReplayError::UnknownEvent(token.to_string())),
            }
        })
        .collect()
}

/// Apply one step to the host and deliver the resulting events.
pub fn apply_step(controller: &mut MruController, host: &mut SessionHost, step: &Step) {
    match step {
        Step::Focus(h) => host.focus(*h),
        Step::Hide(h) => host.hide(*h),
        Step::Close(h) => host.close(*h),
        Step::Unlist(h) => host.unlist(*h),
        Step::Open(h, path) => host.open(Document::file(h.0, path)),
        Step::Next => host.press_cycle_forward(),
        Step::Prev => host.press_cycle_backward(),
    }
    controller.pump(host);
}

pub fn replay(controller: &mut MruController, host: &mut SessionHost, steps: &[Step]) {
    for step in steps {
        apply_step(controller, host, step);
    }
}
