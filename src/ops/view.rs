use crate::model::{Filter, Task};

use super::board::Board;

/// What the list shows right now, derived from a board on every render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView<'a> {
    pub filter: Filter,
    pub visible: Vec<&'a Task>,
    pub completed_count: usize,
    pub total_count: usize,
}

impl<'a> BoardView<'a> {
    pub fn of(board: &'a Board) -> Self {
        Self::from_tasks(board.tasks(), board.filter())
    }

    pub fn from_tasks(tasks: &'a [Task], filter: Filter) -> Self {
        BoardView {
            filter,
            visible: tasks.iter().filter(|t| filter.matches(t)).collect(),
            completed_count: tasks.iter().filter(|t| t.completed).count(),
            total_count: tasks.len(),
        }
    }

    pub fn remaining_count(&self) -> usize {
        self.total_count - self.completed_count
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
