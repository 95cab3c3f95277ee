use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;

/// Generates a new record id.
///
/// Ids are UUIDv7 strings, so sorting by id follows creation order within
/// this process.
pub fn new_record_id() -> String {
    Uuid::now_v7().to_string()
}

/// Current UTC time as stored in `created_at` / `updated_at` columns.
pub fn timestamp_now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
