use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{BoardConfig, Task};
use crate::ops::Board;
use crate::tui::app::App;
use crate::tui::input::handle_key;

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

/// The first four tasks the demo service hands out.
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new(1, "delectus aut autem", false),
        Task::new(2, "quis ut nam facilis et officia qui", false),
        Task::new(3, "fugiat veniam minus", false),
        Task::new(4, "et porro tempora", true),
    ]
}

/// Build an App over an already-loaded board.
pub fn app_with_tasks(tasks: Vec<Task>) -> App {
    App::new(Board::with_tasks(tasks), &BoardConfig::default())
}

/// Build an App still waiting for its seed load.
pub fn loading_app() -> App {
    App::new(Board::new(), &BoardConfig::default())
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::CONTROL)
}

/// Feed each character of `text` as a key press.
pub fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        handle_key(app, key(KeyCode::Char(c)));
    }
}
