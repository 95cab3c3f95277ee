//! Goal manager core - domain entities, services, and traits.
//!
//! This crate contains the business rules for clients, goals, and tasks.
//! It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate.

pub mod clients;
pub mod context;
pub mod errors;
pub mod goals;
pub mod tasks;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

pub use context::RequestContext;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
