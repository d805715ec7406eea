//! Task record model and DTOs.

use serde::{Deserialize, Serialize};
use taskdesk_core::error::validate_not_blank;
use taskdesk_core::task::TaskStatus;
use taskdesk_core::types::DbId;
use validator::Validate;

use crate::table::Record;

/// A row from `tasks.csv`. Field order matches the file's column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl Record for Task {
    const ENTITY: &'static str = "Task";
    const HEADERS: &'static [&'static str] = &["id", "title", "description", "status"];

    fn id(&self) -> DbId {
        self.id
    }
}

impl Task {
    /// Merge the provided fields of `changes` into this task.
    pub fn apply(&mut self, changes: &UpdateTask) {
        if let Some(title) = &changes.title {
            self.title.clone_from(title);
        }
        if let Some(description) = &changes.description {
            self.description.clone_from(description);
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
    }
}

/// DTO for creating a task.
///
/// A missing `title` deserializes as empty and is then rejected by
/// validation, so clients get a field-level error instead of a parse error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateTask {
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 200, message = "title must be at most 200 characters")
    )]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 2000, message = "description must be at most 2000 characters"))]
    pub description: String,
    /// Defaults to `Incomplete` if omitted.
    #[serde(default)]
    pub status: TaskStatus,
}

/// DTO for updating a task. All fields are optional; absent fields keep
/// their current value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTask {
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 200, message = "title must be at most 200 characters")
    )]
    pub title: Option<String>,
    #[validate(length(max = 2000, message = "description must be at most 2000 characters"))]
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

/// Exact-match narrowing for task listings. `None` fields do not filter.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub title: Option<String>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        self.status.is_none_or(|s| task.status == s)
            && self.title.as_deref().is_none_or(|t| task.title == t)
    }
}
