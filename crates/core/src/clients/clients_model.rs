//! Client domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{FieldErrors, Result};

/// Domain model representing a client (the account that owns goals).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub name: String,
}

impl NewClient {
    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();
        errors.require_present("name", &self.name);
        errors.into_result()
    }
}
