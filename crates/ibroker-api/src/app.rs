//! Application builder: wires router, middleware and state into a served app.

use axum::extract::Request;
use axum::{Router, ServiceExt};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tracing::{error, info, warn};

use ibroker_core::config::{AppConfig, DatabaseBackend};
use ibroker_core::error::AppError;
use ibroker_database::DatabasePool;

use crate::router::build_router;
use crate::state::{AppState, Backend};

/// Builds the complete application.
///
/// Trailing slashes are trimmed before routing, so `/broker/api/v1/` and
/// `/broker/api/v1` reach the same handler.
pub fn build_app(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}

/// Connects the configured backend and serves until Ctrl-C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    let backend = match config.database.backend {
        DatabaseBackend::Postgres => {
            Backend::Postgres(DatabasePool::connect(&config.database).await?)
        }
        DatabaseBackend::Memory => {
            warn!("Using in-memory catalog backend; data is lost on restart");
            Backend::Memory
        }
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, backend.clone());
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(%addr, "iBroker server listening");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Backend::Postgres(pool) = backend {
        pool.close().await;
    }

    info!("iBroker server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
