use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Events sent from the file watcher to the TUI event loop.
#[derive(Debug, PartialEq, Eq)]
pub enum FileEvent {
    /// The session file was written, replaced, or removed.
    SessionChanged,
}

/// Watches a single session file for external edits.
pub struct SessionWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<FileEvent>,
}

/// Whether a notify event concerns `target`.
fn is_relevant(event: &Event, target: &Path) -> bool {
    match event.kind {
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {}
        _ => return false,
    }
    // Editors often save via rename, so compare by file name within the dir.
    event.paths.iter().any(|p| {
        p == target || (p.file_name().is_some() && p.file_name() == target.file_name())
    })
}

impl SessionWatcher {
    /// Start watching `session_path`. The parent directory is watched so
    /// atomic replace-on-save is still seen.
    pub fn start(session_path: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let target: PathBuf = session_path.to_path_buf();
        let dir = session_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let event = match result {
                    Ok(e) => e,
                    Err(_) => return,
                };
                if is_relevant(&event, &target) {
                    let _ = tx.send(FileEvent::SessionChanged);
                }
            },
            Config::default(),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        Ok(SessionWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Non-blocking poll. Bursts of notifications collapse into one event.
    pub fn poll(&self) -> Option<FileEvent> {
        let mut changed = false;
        while let Ok(FileEvent::SessionChanged) = self.rx.try_recv() {
            changed = true;
        }
        changed.then_some(FileEvent::SessionChanged)
    }
}
