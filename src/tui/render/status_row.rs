use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): the current toast if any,
/// otherwise key hints for the mode
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let line = if let Some(toast) = &app.toast {
        let color = app.theme.notice_color(toast.notice.is_success());
        Line::from(Span::styled(
            format!(" {}", toast.notice.message),
            Style::default().fg(color).bg(bg),
        ))
    } else if app.show_key_hints {
        let hint = match app.mode {
            Mode::Navigate => " a add  e edit  space toggle  d delete  f filter  ? help  q quit",
            Mode::Input => " Enter submit  Esc leave input",
        };
        Line::from(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)))
    } else {
        Line::from(Span::styled(
            " ".repeat(area.width as usize),
            Style::default().bg(bg),
        ))
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
