//! Axum server setup
//!
//! Server skeleton with:
//! - Opt-in permissive CORS
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::{routes, timing};
use crate::db::GuestStore;
use crate::service::GuestService;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8080)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = no CORS headers)
    ///
    /// WARNING: Setting this to true allows any origin and answers OPTIONS
    /// as a preflight instead of 405.
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            cors_permissive: false,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub guests: GuestService,
}

impl AppState {
    pub fn new(store: Arc<dyn GuestStore>) -> Self {
        Self {
            guests: GuestService::new(store),
        }
    }
}

/// CORS is opt-in: the layer answers every OPTIONS request as a preflight,
/// so without it OPTIONS falls through to the router and gets 405.
fn cors_layer(config: &ServerConfig) -> Option<CorsLayer> {
    if !config.cors_permissive {
        return None;
    }

    tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
    Some(CorsLayer::permissive())
}

/// Build the application router with all routes and middleware.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let router = Router::new()
        .merge(routes::guests::router())
        .fallback(routes::not_found);

    let router = match cors_layer(config) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(timing::debug_headers))
        .with_state(Arc::new(state))
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// let store = Arc::new(GuestRepo::new(pool));
/// run_server(store, ServerConfig::default()).await?;
/// ```
pub async fn run_server(store: Arc<dyn GuestStore>, config: ServerConfig) -> Result<(), ServerError> {
    let app = build_router(AppState::new(store), &config);

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
