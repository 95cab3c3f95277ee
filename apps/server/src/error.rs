use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use goalmanager_core::errors::{DatabaseError, Error as CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    Unauthorized(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(e) => match e {
                CoreError::Database(DatabaseError::NotFound(_)) => StatusCode::NOT_FOUND,
                CoreError::Database(DatabaseError::ForeignKeyViolation(_))
                | CoreError::Database(DatabaseError::UniqueViolation(_))
                | CoreError::ConstraintViolation(_) => StatusCode::CONFLICT,
                CoreError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let errors = match &self {
            ApiError::Core(CoreError::Validation(ValidationError::Fields(fields))) => {
                Some(fields.clone().into_map())
            }
            _ => None,
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
            errors,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
