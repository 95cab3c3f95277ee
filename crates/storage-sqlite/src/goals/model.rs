//! Database models for goals.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::clients::ClientDB;

/// Database model for goals
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Associations,
    AsChangeset,
    Selectable,
    PartialEq,
    Debug,
    Clone,
)]
#[diesel(belongs_to(ClientDB, foreign_key = client_id))]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoalDB {
    pub id: String,
    pub client_id: String,
    pub name: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion to domain models
impl From<GoalDB> for goalmanager_core::goals::Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            client_id: db.client_id,
            name: db.name,
            description: db.description,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<goalmanager_core::goals::Goal> for GoalDB {
    fn from(domain: goalmanager_core::goals::Goal) -> Self {
        Self {
            id: domain.id,
            client_id: domain.client_id,
            name: domain.name,
            description: domain.description,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
