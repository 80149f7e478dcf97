//! HTTP server layer
//!
//! Axum server with:
//! - Opt-in CORS
//! - Request tracing
//! - Debug timing/memory headers on every response
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod response;
pub mod routes;
pub mod server;
pub mod timing;

pub use error::ApiError;
pub use response::JsonResponse;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use timing::RequestContext;
