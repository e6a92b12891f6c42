use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::host::{SessionHost, ValidityRules};
use crate::io::session_io;
use crate::io::watcher::SessionWatcher;
use crate::model::{Config, DocumentHandle};
use crate::ops::MruController;

use super::input;
use super::render;
use super::theme::Theme;

/// Main application state
pub struct App {
    pub host: SessionHost,
    pub controller: MruController,
    pub theme: Theme,
    pub session_path: PathBuf,
    /// Selected row in the sidebar
    pub cursor: usize,
    pub should_quit: bool,
    /// Help overlay visible
    pub show_help: bool,
    /// One-shot message for the status row
    pub status_message: Option<String>,
}

impl App {
    pub fn new(host: SessionHost, config: &Config, session_path: PathBuf) -> Self {
        let mut controller = MruController::new(config.ui.show_modified);
        controller.initialise(&host);
        let mut app = App {
            host,
            controller,
            theme: Theme::from_config(&config.ui),
            session_path,
            cursor: 0,
            should_quit: false,
            show_help: false,
            status_message: None,
        };
        app.sync_cursor();
        app
    }

    /// Deliver pending host events to the controller, then put the cursor
    /// back on the current row.
    pub fn dispatch(&mut self) {
        if self.controller.pump(&mut self.host) > 0 {
            self.sync_cursor();
        }
    }

    /// Point the cursor at the current row (or clamp it if there is none).
    pub fn sync_cursor(&mut self) {
        let rows = self.controller.render();
        self.cursor = match rows.current_index() {
            Some(idx) => idx,
            None => self.cursor.min(rows.len().saturating_sub(1)),
        };
    }

    pub fn selected_handle(&self) -> Option<DocumentHandle> {
        self.controller
            .render()
            .items()
            .get(self.cursor)
            .map(|item| item.data.handle)
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.controller.render().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    /// Re-read the session file after an external edit.
    pub fn reload_session(&mut self) {
        match session_io::read_session(&self.session_path) {
            Ok(session) => {
                self.host
                    .replace_documents(session.documents, session.active);
                self.dispatch();
                self.status_message = Some("Session reloaded".to_string());
            }
            Err(e) => {
                tracing::warn!(error = %e, "session reload failed");
                self.status_message = Some(format!("Reload failed: {}", e));
            }
        }
    }
}

/// Run the TUI application
pub fn run(session_path: &Path, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let rules = ValidityRules::from_config(&config.ignore)?;
    let session = session_io::read_session(session_path)?;
    let mut app = App::new(session.into_host(rules), &config, session_path.to_path_buf());

    let watcher = match SessionWatcher::start(session_path) {
        Ok(w) => Some(w),
        Err(e) => {
            app.status_message = Some(format!("Not watching session file: {}", e));
            None
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&SessionWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if watcher.and_then(|w| w.poll()).is_some() {
            app.reload_session();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;
    use std::fs;
    use tempfile::TempDir;

    fn app() -> App {
        let host = SessionHost::with_documents(
            ValidityRules::default(),
            [
                Document::file(1, "a.rs"),
                Document::file(2, "b.rs"),
                Document::file(3, "c.rs"),
            ],
            Some(DocumentHandle(1)),
        );
        App::new(host, &Config::default(), PathBuf::from("session.toml"))
    }

    #[test]
    fn cursor_starts_on_current_row() {
        let app = app();
        // MRU [1,2,3] renders as [2, 1, 3]
        assert_eq!(app.cursor, 1);
        assert_eq!(app.selected_handle(), Some(DocumentHandle(1)));
    }

    #[test]
    fn move_cursor_clamps() {
        let mut app = app();
        app.move_cursor(-5);
        assert_eq!(app.cursor, 0);
        app.move_cursor(10);
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn reload_applies_removed_documents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("session.toml");
        fs::write(
            &path,
            "active = 1\n[[documents]]\nhandle = 1\nname = \"a.rs\"\n[[documents]]\nhandle = 3\nname = \"c.rs\"\n",
        )
        .unwrap();
        let mut app = app();
        app.session_path = path;
        app.reload_session();
        let order: Vec<u32> = app.controller.mru().iter().map(|h| h.0).collect();
        assert_eq!(order, vec![1, 3]);
        assert_eq!(app.status_message.as_deref(), Some("Session reloaded"));
    }

    #[test]
    fn reload_failure_keeps_state() {
        let tmp = TempDir::new().unwrap();
        let mut app = app();
        app.session_path = tmp.path().join("missing.toml");
        app.reload_session();
        assert_eq!(app.controller.mru().len(), 3);
        assert!(app.status_message.unwrap().starts_with("Reload failed"));
    }
}
