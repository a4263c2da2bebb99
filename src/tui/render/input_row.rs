use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::ops::InputMode;
use crate::tui::app::{App, Mode};

const PLACEHOLDER: &str = "Add your todo";

/// Pick the slice of `text` to show in `width` columns so that the byte
/// offset `cursor` stays visible. Returns (start byte, cursor column).
pub fn visible_window(text: &str, cursor: usize, width: usize) -> (usize, usize) {
    if width == 0 {
        return (0, 0);
    }
    let mut start = 0;
    let mut col = text[..cursor].width();
    if col < width {
        return (0, col);
    }
    // Drop leading graphemes until the cursor fits on the last column
    for g in text[..cursor].graphemes(true) {
        if col < width {
            break;
        }
        start += g.len();
        col -= g.width();
    }
    (start, col)
}

/// Render the bordered draft input and the Add/Update button beside it
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.mode == Mode::Input;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(area);

    let title = match app.board.mode() {
        InputMode::Adding => " New task ".to_string(),
        InputMode::Editing(id) => format!(" Editing #{} ", id),
    };
    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .title(Span::styled(title, Style::default().fg(border_color).bg(bg)));
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let draft = app.board.draft();
    let content = if draft.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        let (start, _) = visible_window(draft, app.draft_cursor, inner.width as usize);
        Line::from(Span::styled(
            draft[start..].to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
    };
    frame.render_widget(Paragraph::new(content), inner);

    if focused {
        let (_, col) = visible_window(draft, app.draft_cursor, inner.width as usize);
        frame.set_cursor_position(Position::new(inner.x + col as u16, inner.y));
    }

    // Button: label follows the input mode
    let button_style = Style::default()
        .fg(app.theme.background)
        .bg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let button_area = Rect {
        y: chunks[1].y + chunks[1].height / 2,
        height: 1,
        ..chunks[1]
    };
    let label = format!(" {} ", app.board.submit_label());
    let line = Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(label, button_style),
    ]);
    frame.render_widget(Paragraph::new(line), button_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn test_visible_window_short_text() {
        assert_eq!(visible_window("hello", 5, 20), (0, 5));
        assert_eq!(visible_window("hello", 2, 20), (0, 2));
        assert_eq!(visible_window("", 0, 0), (0, 0));
    }

    #[test]
    fn test_visible_window_scrolls_to_cursor() {
        let text = "abcdefghij";
        let (start, col) = visible_window(text, 10, 4);
        assert_eq!(&text[start..], "hij");
        assert_eq!(col, 3);
    }

    #[test]
    fn test_visible_window_wide_chars() {
        let text = "日本語テキスト";
        let (start, col) = visible_window(text, text.len(), 6);
        assert!(col < 6);
        assert_eq!(text[start..].width(), col);
    }

    #[test]
    fn adding_mode_shows_placeholder_and_add() {
        let app = app_with_tasks(sample_tasks());
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_input_row(frame, &app, area);
        });
        assert!(output.contains("New task"));
        assert!(output.contains("Add your todo"));
        assert!(output.contains(" Add "));
        assert!(!output.contains("Update"));
    }

    #[test]
    fn editing_mode_shows_update() {
        let mut app = app_with_tasks(sample_tasks());
        app.board.begin_edit(3);
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_input_row(frame, &app, area);
        });
        assert!(output.contains("Editing #3"));
        assert!(output.contains("fugiat veniam minus"));
        assert!(output.contains("Update"));
    }
}
