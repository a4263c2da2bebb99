use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Filter;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Movement
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < app.visible_len() {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.visible_len().saturating_sub(1);
        }

        // Per-task actions
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.selected_task_id() {
                app.board.toggle_completed(id);
                // Under a completion filter the task may have left the view
                app.clamp_cursor();
            }
        }
        KeyCode::Char('e') => {
            if let Some(id) = app.selected_task_id() {
                app.board.begin_edit(id);
                app.draft_cursor = app.board.draft().len();
                app.mode = Mode::Input;
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selected_task_id() {
                let notice = app.board.delete_task(id);
                app.notify(notice);
                app.clamp_cursor();
                app.clamp_draft_cursor();
            }
        }

        // Focus the input; nothing can be added until the seed list is in
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Enter => {
            if app.board.is_loading() {
                return;
            }
            app.draft_cursor = app.board.draft().len();
            app.mode = Mode::Input;
        }
        KeyCode::Esc => {
            app.board.cancel_edit();
            app.clamp_draft_cursor();
        }

        // Bulk actions
        KeyCode::Char('A') => app.board.complete_all(),
        KeyCode::Char('D') => {
            app.board.clear_completed();
            app.clamp_cursor();
            app.clamp_draft_cursor();
        }

        // Filters
        KeyCode::Char('f') => {
            let next = app.board.filter().cycle();
            set_filter(app, next);
        }
        KeyCode::Char('1') => set_filter(app, Filter::All),
        KeyCode::Char('2') => set_filter(app, Filter::Uncompleted),
        KeyCode::Char('3') => set_filter(app, Filter::Completed),
        _ => {}
    }
}

fn set_filter(app: &mut App, filter: Filter) {
    app.board.set_filter(filter);
    app.cursor = 0;
    app.scroll_offset = 0;
}

#[cfg(test)]
mod tests {
    use crate::model::{Filter, Task};
    use crate::ops::InputMode;
    use crate::sync::{Completion, SyncOp};
    use crate::tui::app::Mode;
    use crate::tui::input::handle_key;
    use crate::tui::render::test_helpers::*;
    use crossterm::event::KeyCode;

    #[test]
    fn test_cursor_movement_stays_in_bounds() {
        let mut app = app_with_tasks(sample_tasks());
        handle_key(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.cursor, 0);
        for _ in 0..10 {
            handle_key(&mut app, key(KeyCode::Char('j')));
        }
        assert_eq!(app.cursor, 3);
        handle_key(&mut app, key(KeyCode::Char('g')));
        assert_eq!(app.cursor, 0);
        handle_key(&mut app, key(KeyCode::Char('G')));
        assert_eq!(app.cursor, 3);
    }

    #[test]
    fn test_space_toggles_selected_without_network() {
        let mut app = app_with_tasks(vec![Task::new(1, "A", false)]);
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.board.tasks(), &[Task::new(1, "A", true)]);
        assert!(app.outbox.is_empty());
    }

    #[test]
    fn test_toggle_under_filter_clamps_cursor() {
        let mut app = app_with_tasks(sample_tasks());
        handle_key(&mut app, key(KeyCode::Char('2')));
        handle_key(&mut app, key(KeyCode::Char('G')));
        let last = app.cursor;
        handle_key(&mut app, key(KeyCode::Char('x')));
        assert!(app.cursor < last || app.visible_len() == 0);
    }

    #[test]
    fn test_delete_selected_shows_toast() {
        let mut app = app_with_tasks(sample_tasks());
        handle_key(&mut app, key(KeyCode::Char('j')));
        handle_key(&mut app, key(KeyCode::Char('d')));
        let ids: Vec<i64> = app.board.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert_eq!(
            app.toast.as_ref().map(|t| t.notice.message.as_str()),
            Some("Task deleted successfully")
        );
    }

    #[test]
    fn test_edit_then_submit_queues_update() {
        let mut app = app_with_tasks(sample_tasks());
        handle_key(&mut app, key(KeyCode::Char('e')));
        assert_eq!(app.mode, Mode::Input);
        assert_eq!(app.board.mode(), InputMode::Editing(1));
        assert_eq!(app.draft_cursor, app.board.draft().len());

        type_str(&mut app, "!");
        handle_key(&mut app, key(KeyCode::Enter));
        match app.outbox.as_slice() {
            [SyncOp::Update { id: 1, payload }] => {
                assert_eq!(payload.title, "delectus aut autem!")
            }
            other => panic!("unexpected outbox {:?}", other),
        }
    }

    #[test]
    fn test_input_locked_while_loading() {
        let mut app = loading_app();
        handle_key(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.mode, Mode::Navigate);
        type_str(&mut app, "Buy milk");
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.outbox.is_empty());

        app.apply_completion(Completion::Loaded(Ok(vec![Task::new(1, "A", false)])));
        handle_key(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.mode, Mode::Input);
    }

    #[test]
    fn test_toggle_second_row_with_shared_id() {
        let mut app = app_with_tasks(vec![
            Task::new(201, "first add", false),
            Task::new(201, "second add", false),
        ]);
        handle_key(&mut app, key(KeyCode::Char('j')));
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert!(app.board.tasks().iter().all(|t| t.completed));
    }

    #[test]
    fn test_esc_in_navigate_cancels_edit() {
        let mut app = app_with_tasks(sample_tasks());
        app.board.begin_edit(2);
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.board.mode(), InputMode::Adding);
    }

    #[test]
    fn test_bulk_actions() {
        let mut app = app_with_tasks(sample_tasks());
        handle_key(&mut app, key(KeyCode::Char('A')));
        assert!(app.board.tasks().iter().all(|t| t.completed));
        handle_key(&mut app, key(KeyCode::Char('D')));
        assert!(app.board.tasks().is_empty());
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_filter_keys() {
        let mut app = app_with_tasks(sample_tasks());
        handle_key(&mut app, key(KeyCode::Char('j')));
        handle_key(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.board.filter(), Filter::Completed);
        assert_eq!(app.cursor, 0);
        handle_key(&mut app, key(KeyCode::Char('f')));
        assert_eq!(app.board.filter(), Filter::All);
        handle_key(&mut app, key(KeyCode::Char('f')));
        assert_eq!(app.board.filter(), Filter::Uncompleted);
    }
}
