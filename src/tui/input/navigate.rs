use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => app.should_quit = true,
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.should_quit = true,
        (_, KeyCode::Char('?')) => app.show_help = true,

        // Cycling goes through the host so the focus comes back as an event
        (_, KeyCode::Tab) | (_, KeyCode::Char(']')) => {
            app.host.press_cycle_forward();
            app.dispatch();
        }
        (_, KeyCode::BackTab) | (_, KeyCode::Char('[')) => {
            app.host.press_cycle_backward();
            app.dispatch();
        }

        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => app.move_cursor(1),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => app.move_cursor(-1),
        (_, KeyCode::Char('g')) => app.cursor = 0,
        (_, KeyCode::Char('G')) => app.move_cursor(isize::MAX),

        (_, KeyCode::Enter) => {
            if let Some(handle) = app.selected_handle() {
                app.host.focus(handle);
                app.dispatch();
            }
        }
        (_, KeyCode::Char('x')) => {
            if let Some(handle) = app.selected_handle() {
                app.host.close(handle);
                app.dispatch();
                app.status_message = Some(format!("Closed {}", handle));
            }
        }
        (_, KeyCode::Char('h')) => {
            if let Some(handle) = app.selected_handle() {
                app.host.hide(handle);
                app.dispatch();
                app.status_message = Some(format!("Hid {}", handle));
            }
        }
        _ => {}
    }
}
