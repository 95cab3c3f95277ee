//! SQLite storage implementation for the goal manager.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `goalmanager-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - A single writer actor that serializes every write
//! - Repository implementations for clients, goals, and tasks
//!
//! ```text
//!   server ──► core (domain, traits)
//!      │            ▲
//!      └──► storage-sqlite (this crate)
//!                   │
//!                   ▼
//!               SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod clients;
pub mod goals;
pub mod tasks;

// Re-export database utilities
pub use db::{
    check_connection, create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from goalmanager-core for convenience
pub use goalmanager_core::errors::{DatabaseError, Error, Result};
