use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

const HINT: &str = "Tab/S-Tab cycle  Enter focus  x close  ? help";

/// Render the status row (bottom of screen): message on the left, key hints on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let message = app.status_message.as_deref().unwrap_or_default();
    let hint_width = display_width(HINT);

    let mut spans = Vec::new();
    if hint_width + 1 < width {
        let message = truncate_to_width(message, width - hint_width - 1);
        let padding = width - display_width(&message) - hint_width;
        spans.push(Span::styled(
            message,
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(HINT, Style::default().fg(app.theme.dim).bg(bg)));
    } else {
        // Too narrow for hints
        spans.push(Span::styled(
            truncate_to_width(message, width),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
