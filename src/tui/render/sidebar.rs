use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Highlight, RenderItem};
use crate::tui::app::App;
use crate::util::unicode::truncate_to_width;

/// Render the MRU sidebar: one row per tracked document, current in the middle
pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Buffers ")
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .title_style(
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = app.controller.render().items();
    if rows.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            " No documents",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
        frame.render_widget(empty, inner);
        return;
    }

    // Keep the cursor row on screen
    let height = inner.height as usize;
    let offset = if height == 0 {
        0
    } else {
        app.cursor.saturating_sub(height - 1)
    };

    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(idx, item)| sidebar_line(app, item, idx == app.cursor, inner.width as usize))
        .collect();

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        inner,
    );
}

fn sidebar_line<'a>(app: &App, item: &'a RenderItem, is_cursor: bool, width: usize) -> Line<'a> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let color = app.theme.highlight_color(item.highlight);

    let cursor = if is_cursor { "\u{258E}" } else { " " };
    let marker = match item.highlight {
        Highlight::Current => "\u{25CF}",
        Highlight::Modified => "+",
        Highlight::Normal => " ",
    };
    let mut label_style = Style::default().fg(color).bg(bg);
    if item.highlight == Highlight::Current {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }

    Line::from(vec![
        Span::styled(
            cursor,
            Style::default().fg(app.theme.selection_border).bg(bg),
        ),
        Span::styled(marker, Style::default().fg(color).bg(bg)),
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            truncate_to_width(&item.label, width.saturating_sub(3)),
            label_style,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;

    #[test]
    fn sidebar_rows_around_current() {
        let app = sample_app();
        let output = render_to_string(30, 8, |frame, area| {
            render_sidebar(frame, &app, area);
        });
        assert_snapshot!(output, @r"
        ┌ Buffers ───────────────────┐
        │ + lib.rs                   │
        │▎● main.rs                  │
        │   README.md                │
        │   mru.rs                   │
        │                            │
        │                            │
        └────────────────────────────┘
        ");
    }

    #[test]
    fn sidebar_empty() {
        let app = app_with(vec![], None);
        let output = render_to_string(30, 4, |frame, area| {
            render_sidebar(frame, &app, area);
        });
        assert!(output.contains("No documents"));
    }

    #[test]
    fn long_labels_are_truncated() {
        let app = app_with(
            vec![Document::file(1, "src/a_very_long_module_name_for_testing.rs")],
            Some(1),
        );
        let output = render_to_string(20, 4, |frame, area| {
            render_sidebar(frame, &app, area);
        });
        let row = output.lines().nth(1).unwrap();
        assert_eq!(row, "│▎● a_very_long_mo…│");
    }

    #[test]
    fn cursor_row_scrolls_into_view() {
        let docs = (1..=10u32)
            .map(|n| Document::file(n, &format!("f{}.rs", n)))
            .collect();
        let mut app = app_with(docs, Some(1));
        app.cursor = 9;
        let output = render_to_string(30, 5, |frame, area| {
            render_sidebar(frame, &app, area);
        });
        // Three visible rows; the last one is the cursor row
        assert_eq!(output.lines().nth(3).unwrap().chars().nth(1), Some('\u{258E}'));
    }
}
