use std::path::PathBuf;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::host::{SessionHost, ValidityRules};
use crate::model::{Config, Document, DocumentHandle};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// App over a host with the given documents, focused on `active`.
pub fn app_with(docs: Vec<Document>, active: Option<u32>) -> App {
    let host = SessionHost::with_documents(
        ValidityRules::default(),
        docs,
        active.map(DocumentHandle),
    );
    App::new(host, &Config::default(), PathBuf::from("/tmp/bufring-test/session.toml"))
}

/// Four source files, the second one modified, focused on the first.
pub fn sample_app() -> App {
    let mut lib = Document::file(2, "src/lib.rs");
    lib.modified = true;
    app_with(
        vec![
            Document::file(1, "src/main.rs"),
            lib,
            Document::file(3, "src/model/mru.rs"),
            Document::file(4, "README.md"),
        ],
        Some(1),
    )
}
