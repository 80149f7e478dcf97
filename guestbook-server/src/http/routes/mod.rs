//! Route handlers organized by resource

pub mod guests;

use crate::http::error::ApiError;

/// Fallback for paths no router claims.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
