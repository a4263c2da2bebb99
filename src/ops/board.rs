use crate::model::{Filter, Task, TaskId, TaskPayload};
use crate::sync::{Completion, SyncOp};

const MSG_ADDED: &str = "Task added successfully";
const MSG_ADD_FAILED: &str = "Error adding task";
const MSG_UPDATED: &str = "Task updated successfully";
const MSG_UPDATE_FAILED: &str = "Error updating task";
const MSG_DELETED: &str = "Task deleted successfully";

/// Outcome signal for the notification sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A transient message the UI shows after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

/// What the shared input control is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Adding,
    Editing(TaskId),
}

/// The board's whole state: tasks, draft text, filter, loading flag and edit
/// session. Owned by exactly one event loop.
#[derive(Debug, Clone)]
pub struct Board {
    tasks: Vec<Task>,
    draft: String,
    filter: Filter,
    loading: bool,
    editing: Option<TaskId>,
    /// Send `completed: false` on every update instead of the real value
    legacy_update_payload: bool,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// A fresh board waiting for its seed load
    pub fn new() -> Self {
        Board {
            tasks: Vec::new(),
            draft: String::new(),
            filter: Filter::All,
            loading: true,
            editing: None,
            legacy_update_payload: false,
        }
    }

    /// A board that starts out loaded with `tasks` (no seed fetch pending)
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Board {
            tasks,
            loading: false,
            ..Board::new()
        }
    }

    pub fn set_legacy_update_payload(&mut self, legacy: bool) {
        self.legacy_update_payload = legacy;
    }

    // --- accessors ---

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn mode(&self) -> InputMode {
        match self.editing {
            Some(id) => InputMode::Editing(id),
            None => InputMode::Adding,
        }
    }

    /// Label for the submit button
    pub fn submit_label(&self) -> &'static str {
        match self.mode() {
            InputMode::Adding => "Add",
            InputMode::Editing(_) => "Update",
        }
    }

    // --- local mutations ---

    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Flip completion of every task with `id`. Unknown ids are ignored.
    pub fn toggle_completed(&mut self, id: TaskId) {
        for task in self.tasks.iter_mut().filter(|t| t.id == id) {
            task.completed = !task.completed;
        }
    }

    /// Remove every task with `id`. Always reports success, even when nothing matched.
    /// Deleting the task under edit ends the edit session.
    pub fn delete_task(&mut self, id: TaskId) -> Notice {
        self.tasks.retain(|t| t.id != id);
        if self.editing == Some(id) {
            tracing::debug!(id, "deleted task was being edited; ending edit");
            self.end_edit();
        }
        Notice::success(MSG_DELETED)
    }

    /// Enter Editing mode for task `id` with its title as the draft.
    /// Unknown ids leave the board untouched.
    pub fn begin_edit(&mut self, id: TaskId) {
        let Some(task) = self.task(id) else {
            tracing::debug!(id, "begin_edit on unknown task ignored");
            return;
        };
        self.draft = task.title.clone();
        self.editing = Some(id);
    }

    /// Abandon the edit session and return to Adding mode with an empty draft
    pub fn cancel_edit(&mut self) {
        if self.editing.is_some() {
            self.end_edit();
        }
    }

    pub fn complete_all(&mut self) {
        for task in &mut self.tasks {
            task.completed = true;
        }
    }

    pub fn clear_completed(&mut self) {
        self.tasks.retain(|t| !t.completed);
        if let Some(id) = self.editing
            && self.task(id).is_none()
        {
            self.end_edit();
        }
    }

    fn end_edit(&mut self) {
        self.editing = None;
        self.draft.clear();
    }

    // --- two-phase network operations ---

    /// Guard phase of a submit. Returns the remote call to make, or `None`
    /// when the draft is blank or the seed load has not settled yet (a seed
    /// result replaces the whole list).
    pub fn submit_draft(&self) -> Option<SyncOp> {
        if self.loading {
            tracing::debug!("submit ignored while seed tasks are loading");
            return None;
        }
        if self.draft.trim().is_empty() {
            return None;
        }
        match self.editing {
            None => Some(SyncOp::Create {
                payload: TaskPayload::new(self.draft.clone(), false),
            }),
            Some(id) => {
                let completed = if self.legacy_update_payload {
                    false
                } else {
                    self.task(id).is_some_and(|t| t.completed)
                };
                Some(SyncOp::Update {
                    id,
                    payload: TaskPayload::new(self.draft.clone(), completed),
                })
            }
        }
    }

    /// Apply phase: fold a finished remote call into the board.
    pub fn apply(&mut self, completion: Completion) -> Option<Notice> {
        match completion {
            Completion::Loaded(Ok(tasks)) => {
                tracing::info!(count = tasks.len(), "seed tasks loaded");
                self.tasks = tasks;
                self.loading = false;
                None
            }
            Completion::Loaded(Err(e)) => {
                tracing::warn!(error = %e, "error fetching seed tasks");
                self.loading = false;
                None
            }
            Completion::Created(Ok(task)) => {
                tracing::info!(id = task.id, "task added");
                self.tasks.push(task);
                if self.editing.is_none() {
                    self.draft.clear();
                }
                Some(Notice::success(MSG_ADDED))
            }
            Completion::Created(Err(e)) => {
                tracing::warn!(error = %e, "error adding task");
                Some(Notice::failure(MSG_ADD_FAILED))
            }
            Completion::Updated { id, result: Ok(echo) } => {
                tracing::info!(id, "task updated");
                for task in self.tasks.iter_mut().filter(|t| t.id == id) {
                    task.title.clone_from(&echo.title);
                }
                if self.editing == Some(id) {
                    self.end_edit();
                }
                Some(Notice::success(MSG_UPDATED))
            }
            Completion::Updated { id, result: Err(e) } => {
                tracing::warn!(id, error = %e, "error updating task");
                Some(Notice::failure(MSG_UPDATE_FAILED))
            }
        }
    }
}
