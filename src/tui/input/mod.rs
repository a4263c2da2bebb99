mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use edit::handle_input;
use navigate::handle_navigate;

pub use edit::{next_boundary, prev_boundary};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Input => handle_input(app, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = app_with_tasks(sample_tasks());
        app.show_help = true;
        handle_key(&mut app, key(KeyCode::Char('d')));
        assert_eq!(app.board.tasks().len(), 4);
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn test_ctrl_c_quits_in_input_mode() {
        let mut app = app_with_tasks(sample_tasks());
        app.mode = Mode::Input;
        handle_key(&mut app, ctrl(KeyCode::Char('c')));
        assert!(app.should_quit);
        assert_eq!(app.board.draft(), "");
    }
}
