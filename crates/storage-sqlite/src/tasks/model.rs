//! Database models for tasks.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::goals::GoalDB;

/// Database model for tasks
#[derive(
    Queryable, Identifiable, Insertable, Associations, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(belongs_to(GoalDB, foreign_key = goal_id))]
#[diesel(table_name = crate::schema::tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskDB {
    pub id: String,
    pub goal_id: String,
    pub name: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<TaskDB> for goalmanager_core::tasks::Task {
    fn from(db: TaskDB) -> Self {
        Self {
            id: db.id,
            goal_id: db.goal_id,
            name: db.name,
            description: db.description,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<goalmanager_core::tasks::Task> for TaskDB {
    fn from(domain: goalmanager_core::tasks::Task) -> Self {
        Self {
            id: domain.id,
            goal_id: domain.goal_id,
            name: domain.name,
            description: domain.description,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
