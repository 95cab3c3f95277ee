use std::sync::Arc;

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use goalmanager_core::RequestContext;

use crate::{error::ApiError, main_lib::AppState};

pub const USER_ID_HEADER: &str = "x-user-id";
pub const CLIENT_ID_HEADER: &str = "x-client-id";

/// The caller's context, taken from the identity headers the upstream
/// authentication layer sets. Missing headers mean an unscoped caller.
#[derive(Debug, Clone)]
pub struct Caller(pub RequestContext);

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Caller(RequestContext {
            user_id: header_value(&parts.headers, USER_ID_HEADER),
            client_id: header_value(&parts.headers, CLIENT_ID_HEADER),
        }))
    }
}

/// Rejects requests without the configured bearer token. With no token
/// configured every request passes.
pub async fn require_token(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(expected) = state.api_token.as_deref() else {
        return Ok(next.run(request).await);
    };

    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))?;

    let mut parts = header.splitn(2, ' ');
    let (Some(scheme), Some(token)) = (parts.next(), parts.next()) else {
        return Err(ApiError::Unauthorized("Malformed authorization header".to_string()));
    };

    if !scheme.eq_ignore_ascii_case("Bearer") || token.trim() != expected {
        return Err(ApiError::Unauthorized("Invalid bearer token".to_string()));
    }

    Ok(next.run(request).await)
}
