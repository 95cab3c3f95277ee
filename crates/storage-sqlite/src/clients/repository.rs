use goalmanager_core::clients::{Client, ClientRepositoryTrait};
use goalmanager_core::Result;

use super::model::ClientDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::clients;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct ClientRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ClientRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ClientRepository { pool, writer }
    }
}

#[async_trait]
impl ClientRepositoryTrait for ClientRepository {
    fn load_clients(&self) -> Result<Vec<Client>> {
        let mut conn = get_connection(&self.pool)?;
        let clients_db = clients::table
            .order((clients::created_at.asc(), clients::id.asc()))
            .select(ClientDB::as_select())
            .load::<ClientDB>(&mut conn)
            .into_core()?;
        Ok(clients_db.into_iter().map(Client::from).collect())
    }

    fn find_client(&self, client_id: &str) -> Result<Option<Client>> {
        let mut conn = get_connection(&self.pool)?;
        let client_db = clients::table
            .find(client_id)
            .select(ClientDB::as_select())
            .first::<ClientDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(client_db.map(Client::from))
    }

    async fn insert_client(&self, client: Client) -> Result<Client> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Client> {
                let client_db: ClientDB = client.into();
                let result_db = diesel::insert_into(clients::table)
                    .values(&client_db)
                    .returning(ClientDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Client::from(result_db))
            })
            .await
    }
}
