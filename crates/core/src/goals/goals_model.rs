//! Goals domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, FieldErrors, Result, ValidationError, MUST_EXIST};
use crate::utils::record_utils::{new_record_id, timestamp_now};

/// Domain model representing a goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub client_id: String,
    pub name: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new goal.
///
/// Also serves as the blank, unsaved goal handed to creation forms.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl NewGoal {
    /// Collects every attribute-level failure without touching storage.
    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require_present("name", &self.name);
        errors.require_present("description", &self.description);
        if self
            .client_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .is_none()
        {
            errors.add("client", MUST_EXIST);
        }
        errors
    }

    /// Builds the record to persist. Call only after validation.
    pub(crate) fn into_goal(self) -> Result<Goal> {
        let client_id = self.client_id.ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(
                "Goal requires a client".to_string(),
            ))
        })?;
        let now = timestamp_now();
        Ok(Goal {
            id: new_record_id(),
            client_id,
            name: self.name,
            description: self.description,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Partial update for a goal; absent attributes keep their stored value.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl GoalUpdate {
    /// Applies the update on top of `goal` and validates the merged result.
    pub fn apply_to(self, mut goal: Goal) -> Result<Goal> {
        if let Some(name) = self.name {
            goal.name = name;
        }
        if let Some(description) = self.description {
            goal.description = description;
        }
        let mut errors = FieldErrors::new();
        errors.require_present("name", &goal.name);
        errors.require_present("description", &goal.description);
        errors.into_result()?;
        goal.updated_at = timestamp_now();
        Ok(goal)
    }
}

/// Parameters of the goal list operation.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalSearch {
    pub query: Option<String>,
}

impl GoalSearch {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
        }
    }

    /// The trimmed query, or `None` when it is absent or blank.
    pub fn normalized_query(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }
}

/// What happens to a goal's tasks when the goal is deleted.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskDeletionPolicy {
    /// Refuse to delete a goal that still has tasks.
    #[default]
    Restrict,
    /// Delete the goal's tasks together with the goal.
    Cascade,
}

impl FromStr for TaskDeletionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "restrict" => Ok(TaskDeletionPolicy::Restrict),
            "cascade" => Ok(TaskDeletionPolicy::Cascade),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown task deletion policy '{}'",
                other
            )))),
        }
    }
}

impl fmt::Display for TaskDeletionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskDeletionPolicy::Restrict => write!(f, "restrict"),
            TaskDeletionPolicy::Cascade => write!(f, "cascade"),
        }
    }
}
