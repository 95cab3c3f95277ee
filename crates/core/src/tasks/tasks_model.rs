//! Task domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{FieldErrors, Result};
use crate::utils::record_utils::timestamp_now;

/// Domain model representing a task inside a goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub goal_id: String,
    pub name: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new task
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl NewTask {
    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();
        errors.require_present("name", &self.name);
        errors.into_result()
    }
}

/// Partial update for a task; absent attributes keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl TaskUpdate {
    /// Applies the update on top of `task` and validates the merged result.
    pub fn apply_to(self, mut task: Task) -> Result<Task> {
        if let Some(name) = self.name {
            task.name = name;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        let mut errors = FieldErrors::new();
        errors.require_present("name", &task.name);
        errors.into_result()?;
        task.updated_at = timestamp_now();
        Ok(task)
    }
}
