//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Storage failures are logged and answered with a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use super::response::JsonResponse;
use crate::db::DbError;
use crate::models::ValidationErrors;
use crate::service::ServiceError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Guest failed validation (422)
    Validation(ValidationErrors),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// No route for the path (404)
    RouteNotFound,

    /// Path exists but not for this method (405)
    MethodNotAllowed,

    /// Request body unusable (400)
    BadRequest { reason: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(errors) => json!({ "errors": errors }),
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id = %id, "lookup missed");
                json!({ "error": format!("{} not found", resource) })
            }
            Self::RouteNotFound => json!({ "error": "Not Found" }),
            Self::MethodNotAllowed => json!({ "error": "Method Not Allowed" }),
            Self::BadRequest { reason } => json!({ "error": reason }),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                json!({ "error": "Internal Server Error" })
            }
        };

        JsonResponse::new(status, &body).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(e: ValidationErrors) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { id, .. } => Self::NotFound {
                resource: "Guest",
                id,
            },
            _ => Self::Database(e),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(errors) => Self::Validation(errors),
            ServiceError::NotFound(id) => Self::NotFound {
                resource: "Guest",
                id: id.to_string(),
            },
            ServiceError::Storage(e) => Self::from(e),
        }
    }
}
