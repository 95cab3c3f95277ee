//! Database models for clients.

use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Database model for clients
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::clients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ClientDB {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<ClientDB> for goalmanager_core::clients::Client {
    fn from(db: ClientDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<goalmanager_core::clients::Client> for ClientDB {
    fn from(domain: goalmanager_core::clients::Client) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
