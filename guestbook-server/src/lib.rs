//! guestbook-server: guest records over HTTP
//!
//! A REST endpoint for a single `guests` table: list, fetch, create, update
//! and delete. Requests flow router → service (validation, country
//! inference) → store → PostgreSQL and back as JSON.
//!
//! ```ignore
//! use std::sync::Arc;
//! use guestbook_server::{create_pool, run_server, GuestRepo, ServerConfig};
//!
//! let pool = create_pool(&database_url).await?;
//! run_server(Arc::new(GuestRepo::new(pool)), ServerConfig::default()).await?;
//! ```

pub mod db;
pub mod http;
pub mod models;
pub mod service;

pub use db::{create_pool, create_pool_with_options, DbError, GuestRepo, GuestStore, MemoryGuestStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{Guest, GuestDraft, GuestId, GuestPayload};
pub use service::{GuestService, ServiceError};
