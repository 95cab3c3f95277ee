use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Router};
use goalmanager_storage_sqlite::db;

#[utoipa::path(get, path = "/api/v1/healthz", responses((status = 200, description = "Health")))]
pub(crate) async fn healthz() -> &'static str {
    "ok"
}

/// Ready once a pooled connection answers a query.
#[utoipa::path(
    get,
    path = "/api/v1/readyz",
    responses((status = 200, description = "Ready"), (status = 500, description = "Database unavailable"))
)]
pub(crate) async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<&'static str> {
    db::check_connection(&state.pool)?;
    Ok("ok")
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
