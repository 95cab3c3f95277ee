use crate::clients::clients_model::{Client, NewClient};
use crate::clients::clients_traits::{ClientRepositoryTrait, ClientServiceTrait};
use crate::errors::{Error, Result};
use crate::utils::record_utils::{new_record_id, timestamp_now};
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

pub struct ClientService {
    client_repo: Arc<dyn ClientRepositoryTrait>,
}

impl ClientService {
    pub fn new(client_repo: Arc<dyn ClientRepositoryTrait>) -> Self {
        ClientService { client_repo }
    }
}

#[async_trait]
impl ClientServiceTrait for ClientService {
    fn get_clients(&self) -> Result<Vec<Client>> {
        self.client_repo.load_clients()
    }

    fn get_client(&self, client_id: &str) -> Result<Client> {
        self.client_repo
            .find_client(client_id)?
            .ok_or_else(|| Error::not_found("Client", client_id))
    }

    async fn create_client(&self, new_client: NewClient) -> Result<Client> {
        new_client.validate()?;
        let now = timestamp_now();
        let client = Client {
            id: new_record_id(),
            name: new_client.name,
            created_at: now,
            updated_at: now,
        };
        let client = self.client_repo.insert_client(client).await?;
        info!("Created client {}", client.id);
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryStore;

    #[tokio::test]
    async fn create_and_fetch_client() {
        let service = ClientService::new(MemoryStore::new());
        let client = service
            .create_client(NewClient {
                name: "Acme".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(service.get_client(&client.id).unwrap(), client);
        assert_eq!(service.get_clients().unwrap(), vec![client]);
        assert!(service.get_client("missing").unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn blank_client_name_is_rejected() {
        let store = MemoryStore::new();
        let service = ClientService::new(store.clone());
        let err = service
            .create_client(NewClient::default())
            .await
            .unwrap_err();
        assert!(err.field_errors().unwrap().contains("name"));
        assert!(store.clients.read().unwrap().is_empty());
    }
}
