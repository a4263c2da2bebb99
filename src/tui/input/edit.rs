use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::app::{App, Mode};

/// Byte offset of the grapheme boundary before `pos`
pub fn prev_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .grapheme_indices(true)
        .next_back()
        .map_or(0, |(i, _)| i)
}

/// Byte offset of the grapheme boundary after `pos`
pub fn next_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .graphemes(true)
        .next()
        .map_or(pos, |g| pos + g.len())
}

/// Keys while the draft input has focus
pub(super) fn handle_input(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Esc => {
            // Leaving the input abandons an edit; a new-task draft is kept
            app.board.cancel_edit();
            app.clamp_draft_cursor();
            app.mode = Mode::Navigate;
        }

        KeyCode::Left => app.draft_cursor = prev_boundary(app.board.draft(), app.draft_cursor),
        KeyCode::Right => app.draft_cursor = next_boundary(app.board.draft(), app.draft_cursor),
        KeyCode::Home => app.draft_cursor = 0,
        KeyCode::End => app.draft_cursor = app.board.draft().len(),
        KeyCode::Char('a') if ctrl => app.draft_cursor = 0,
        KeyCode::Char('e') if ctrl => app.draft_cursor = app.board.draft().len(),

        KeyCode::Char('u') if ctrl => {
            let rest = app.board.draft()[app.draft_cursor..].to_string();
            app.board.set_draft_text(rest);
            app.draft_cursor = 0;
        }
        KeyCode::Backspace => {
            let draft = app.board.draft();
            let start = prev_boundary(draft, app.draft_cursor);
            if start < app.draft_cursor {
                let mut text = draft.to_string();
                text.replace_range(start..app.draft_cursor, "");
                app.board.set_draft_text(text);
                app.draft_cursor = start;
            }
        }
        KeyCode::Delete => {
            let draft = app.board.draft();
            let end = next_boundary(draft, app.draft_cursor);
            if end > app.draft_cursor {
                let mut text = draft.to_string();
                text.replace_range(app.draft_cursor..end, "");
                app.board.set_draft_text(text);
            }
        }
        KeyCode::Char(c) if !ctrl => {
            let mut text = app.board.draft().to_string();
            text.insert(app.draft_cursor, c);
            app.board.set_draft_text(text);
            app.draft_cursor += c.len_utf8();
        }
        _ => {}
    }
}
