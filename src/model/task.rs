use serde::{Deserialize, Serialize};

/// Remote-assigned task identifier
pub type TaskId = i64;

/// A single to-do item as the remote service describes it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>, completed: bool) -> Self {
        Task {
            id,
            title: title.into(),
            completed,
        }
    }
}

/// Request body for create/update calls: `{ "title": ..., "completed": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPayload {
    pub title: String,
    pub completed: bool,
}

impl TaskPayload {
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        TaskPayload {
            title: title.into(),
            completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_ignores_unknown_wire_fields() {
        let json = r#"{"userId":1,"id":3,"title":"fugiat veniam minus","completed":false}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task, Task::new(3, "fugiat veniam minus", false));
    }

    #[test]
    fn test_task_missing_completed_defaults_false() {
        let task: Task = serde_json::from_str(r#"{"id":201,"title":"x"}"#).unwrap();
        assert!(!task.completed);
    }

    #[test]
    fn test_payload_field_names() {
        let body = serde_json::to_value(TaskPayload::new("Buy milk", false)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "title": "Buy milk", "completed": false })
        );
    }
}
