//! Mapping from domain errors to HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use super::messages::{INTERNAL_SERVER_ERROR, STUDENT_NOT_FOUND};
use crate::domain::DomainError;

/// Error payload: `{"error": "..."}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// 400, raised before storage is touched
    BadRequest(String),
    /// 404
    NotFound(String),
    /// 500; the cause has already been logged and is never sent to the client
    Internal,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound { entity: "Student", .. } => {
                Self::NotFound(STUDENT_NOT_FOUND.to_string())
            }
            DomainError::NotFound { entity, .. } => Self::NotFound(format!("{} not found", entity)),
            DomainError::Storage(msg) => {
                error!("Request failed: {}", msg);
                Self::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            Self::BadRequest(msg) | Self::NotFound(msg) => msg,
            Self::Internal => INTERNAL_SERVER_ERROR.to_string(),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}
