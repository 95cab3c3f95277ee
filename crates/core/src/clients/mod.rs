//! Clients module - owners of goals.

mod clients_model;
mod clients_service;
mod clients_traits;

pub use clients_model::{Client, NewClient};
pub use clients_service::ClientService;
pub use clients_traits::{ClientRepositoryTrait, ClientServiceTrait};
