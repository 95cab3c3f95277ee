use crate::clients::clients_model::{Client, NewClient};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for client repository operations
#[async_trait]
pub trait ClientRepositoryTrait: Send + Sync {
    fn load_clients(&self) -> Result<Vec<Client>>;
    fn find_client(&self, client_id: &str) -> Result<Option<Client>>;
    async fn insert_client(&self, client: Client) -> Result<Client>;
}

/// Trait for client service operations
#[async_trait]
pub trait ClientServiceTrait: Send + Sync {
    fn get_clients(&self) -> Result<Vec<Client>>;
    fn get_client(&self, client_id: &str) -> Result<Client>;
    async fn create_client(&self, new_client: NewClient) -> Result<Client>;
}
