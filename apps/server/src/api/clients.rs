use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{Client, NewClient},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

#[utoipa::path(get, path = "/api/v1/manager/clients", responses((status = 200, body = [Client])))]
pub(crate) async fn list_clients(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Client>>> {
    let clients = state.client_service.get_clients()?;
    Ok(Json(clients.into_iter().map(Client::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/manager/clients/{id}",
    responses((status = 200, body = Client), (status = 404))
)]
pub(crate) async fn get_client(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Client>> {
    let client = state.client_service.get_client(&id)?;
    Ok(Json(client.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/manager/clients",
    request_body = NewClient,
    responses((status = 201, body = Client), (status = 422))
)]
pub(crate) async fn create_client(
    State(state): State<Arc<AppState>>,
    Json(new_client): Json<NewClient>,
) -> ApiResult<(StatusCode, Json<Client>)> {
    let client = state.client_service.create_client(new_client.into()).await?;
    Ok((StatusCode::CREATED, Json(client.into())))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/manager/clients", get(list_clients).post(create_client))
        .route("/manager/clients/{id}", get(get_client))
}
