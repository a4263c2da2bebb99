use std::io::{self, Write};

use serde::Serialize;

use crate::model::{Filter, Task};
use crate::ops::BoardView;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ListJson<'a> {
    pub filter: Filter,
    pub tasks: &'a [&'a Task],
    pub completed: usize,
    pub total: usize,
}

impl<'a> ListJson<'a> {
    pub fn from_view(view: &'a BoardView<'a>) -> Self {
        ListJson {
            filter: view.filter,
            tasks: &view.visible,
            completed: view.completed_count,
            total: view.total_count,
        }
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// One line per task: `[x] 4  title`
pub fn format_task_line(task: &Task) -> String {
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    format!("{} {}  {}", checkbox, task.id, task.title)
}

pub fn write_list(out: &mut dyn Write, view: &BoardView, json: bool) -> io::Result<()> {
    if json {
        let body = serde_json::to_string_pretty(&ListJson::from_view(view))?;
        return writeln!(out, "{}", body);
    }
    for task in &view.visible {
        writeln!(out, "{}", format_task_line(task))?;
    }
    if !view.visible.is_empty() {
        writeln!(out)?;
    }
    writeln!(
        out,
        "Completed: {}  Total Tasks: {}",
        view.completed_count, view.total_count
    )
}

pub fn write_task(out: &mut dyn Write, verb: &str, task: &Task, json: bool) -> io::Result<()> {
    if json {
        let body = serde_json::to_string_pretty(task)?;
        return writeln!(out, "{}", body);
    }
    writeln!(out, "{} {}", verb, format_task_line(task))
}
