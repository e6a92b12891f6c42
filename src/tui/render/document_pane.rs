use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::host::Host;
use crate::tui::app::App;
use crate::util::unicode::truncate_start_to_width;

const KEY_WIDTH: usize = 10;

/// Render details for the host's active document plus the raw MRU order
pub fn render_document_pane(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Document ")
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let key_style = Style::default().fg(app.theme.dim).bg(bg);
    let value_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    match app.host.active().and_then(|h| app.host.document(h)) {
        Some(doc) => {
            let path = if doc.name.is_empty() {
                "[No Name]".to_string()
            } else {
                doc.name.clone()
            };
            let mut field = |key: &str, value: String| {
                let value = truncate_start_to_width(&value, width.saturating_sub(KEY_WIDTH + 1));
                lines.push(Line::from(vec![
                    Span::styled(format!(" {:<w$}", key, w = KEY_WIDTH), key_style),
                    Span::styled(value, value_style),
                ]));
            };
            field("Path", path);
            field("Handle", doc.handle.to_string());
            field("Window", doc.window.to_string());
            if !doc.filetype.is_empty() {
                field("Filetype", doc.filetype.clone());
            }
            field("Modified", if doc.modified { "yes" } else { "no" }.to_string());
            let tracked = if app.controller.mru().contains(doc.handle) {
                "yes".to_string()
            } else {
                match app.host.rules().explain(doc) {
                    Some(reason) => format!("no ({})", reason),
                    None => "no".to_string(),
                }
            };
            field("Tracked", tracked);
        }
        None => lines.push(Line::from(Span::styled(" No active document", key_style))),
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Most recent first", header_style)));
    for (i, handle) in app.controller.mru().iter().enumerate() {
        let path = app
            .host
            .document_display_path(handle)
            .unwrap_or_else(|| "[No Name]".to_string());
        let prefix = format!(" {:>2}. {:>4}  ", i + 1, handle);
        let path = truncate_start_to_width(&path, width.saturating_sub(prefix.len()));
        let style = if app.controller.current() == Some(handle) {
            Style::default().fg(app.theme.current).bg(bg)
        } else {
            value_style
        };
        lines.push(Line::from(vec![
            Span::styled(prefix, key_style),
            Span::styled(path, style),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    fn pane_text(app: &App) -> Vec<String> {
        let output = render_to_string(50, 14, |frame, area| {
            render_document_pane(frame, app, area);
        });
        // Strip the side borders
        output
            .lines()
            .skip(1)
            .map(|l| l.trim_start_matches('\u{2502}').trim_end_matches('\u{2502}').trim_end().to_string())
            .collect()
    }

    #[test]
    fn shows_active_document_and_order() {
        let app = sample_app();
        let lines = pane_text(&app);
        assert_eq!(lines[0], " Path      src/main.rs");
        assert_eq!(lines[1], " Handle    1");
        assert_eq!(lines[2], " Window    normal");
        assert_eq!(lines[3], " Modified  no");
        assert_eq!(lines[4], " Tracked   yes");
        assert_eq!(lines[6], " Most recent first");
        assert_eq!(lines[7], "  1.    1  src/main.rs");
        assert_eq!(lines[8], "  2.    2  src/lib.rs");
    }

    #[test]
    fn no_active_document() {
        let app = app_with(vec![], None);
        let lines = pane_text(&app);
        assert_eq!(lines[0], " No active document");
    }
}
