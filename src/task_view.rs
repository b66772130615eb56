//! Task View Transform
//!
//! Filter and sort for the project-detail task list. Pure functions over the
//! current snapshot; the snapshot itself is never modified.

use std::cmp::Ordering;

use crate::dates::parse_timestamp;
use crate::models::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskSort {
    #[default]
    Title,
    /// Ascending, undated tasks first
    DueDate,
    /// Incomplete before complete
    Completed,
}

impl TaskSort {
    pub const ALL: [TaskSort; 3] = [TaskSort::Title, TaskSort::DueDate, TaskSort::Completed];

    pub fn key(&self) -> &'static str {
        match self {
            TaskSort::Title => "title",
            TaskSort::DueDate => "dueDate",
            TaskSort::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskSort::Title => "Title",
            TaskSort::DueDate => "Due date",
            TaskSort::Completed => "Status",
        }
    }

    pub fn from_key(key: &str) -> Option<TaskSort> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Case-insensitive substring match on the title; a blank query keeps everything
pub fn matches_filter(task: &Task, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || task.title.to_lowercase().contains(&query)
}

fn compare(a: &Task, b: &Task, sort: TaskSort) -> Ordering {
    match sort {
        TaskSort::Title => a
            .title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then_with(|| a.title.cmp(&b.title)),
        // None < Some, so undated tasks lead
        TaskSort::DueDate => due_key(a).cmp(&due_key(b)),
        TaskSort::Completed => a.is_completed.cmp(&b.is_completed),
    }
}

fn due_key(task: &Task) -> Option<chrono::DateTime<chrono::Utc>> {
    task.due_date.as_deref().and_then(parse_timestamp)
}

/// Filter, then stable-sort, a copy of the snapshot
pub fn visible_tasks(tasks: &[Task], query: &str, sort: TaskSort) -> Vec<Task> {
    let mut visible: Vec<Task> = tasks.iter().filter(|t| matches_filter(t, query)).cloned().collect();
    visible.sort_by(|a, b| compare(a, b, sort));
    visible
}
