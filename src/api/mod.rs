//! HTTP layer - axum routers, authentication, DTOs, and the server loop.
//!
//! Routes live under `/api/student-portal`, the base path the web client is
//! built against. The layer itself stays thin: handlers authenticate,
//! translate wire shapes, and delegate to `core`.

/// Basic authentication extractor and authorization helpers
pub mod auth;
/// Wire-format request/response types
pub mod dto;
/// Error-to-response mapping
pub mod error;
/// Idea board endpoints
pub mod idea;
/// Marketplace endpoints
pub mod marketplace;

use crate::{config::AppConfig, errors::Result};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
};
use sea_orm::DatabaseConnection;
use std::time::Duration;
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Shared state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` around the given database connection.
    #[must_use]
    pub const fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

/// Builds the complete application router.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .nest("/api/student-portal/idea", idea::router())
        .nest("/api/student-portal/marketplace", marketplace::router())
        // Item images arrive inline in the multipart form
        .layer(DefaultBodyLimit::max(8 * 1024 * 1024))
        .layer(cors)
        .with_state(state)
}

/// Binds the listener and serves requests until SIGINT/SIGTERM.
///
/// # Errors
/// Returns an error if binding or serving fails.
pub async fn start_server(config: &AppConfig, database: DatabaseConnection) -> Result<()> {
    let app = build_router(AppState::new(database));

    let address = format!("0.0.0.0:{}", config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
