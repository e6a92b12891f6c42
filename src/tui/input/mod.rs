mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::App;

use navigate::handle_navigate;

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    // Help overlay swallows the next key
    if app.show_help {
        app.show_help = false;
        return;
    }

    handle_navigate(app, key);
}
