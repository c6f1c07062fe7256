//! HTTP surface: `POST /convert` and `GET /health`.
//!
//! The router is built from an [`AppState`] so tests can drive it in-process
//! with any [`crate::pipeline::engine::ConversionEngine`].

pub mod handlers;
pub mod response;
pub mod upload;

use crate::convert::Converter;
use crate::error::ServiceError;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// State shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub converter: Arc<Converter>,
}

impl AppState {
    pub fn new(converter: Converter) -> Self {
        Self {
            converter: Arc::new(converter),
        }
    }
}

/// Build the service router.
///
/// axum's request body limit is switched off: a limit hit while multer looks
/// for the first field would decide the outcome before the filename checks
/// run. The upload is bounded by [`upload::read_upload`] instead, which stops
/// reading once the `file` field passes the ceiling.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/convert", post(handlers::convert_pdf))
        .route("/health", get(handlers::health_check))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: &str, state: AppState) -> Result<(), ServiceError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServiceError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("  - POST /convert");
    tracing::info!("  - GET  /health");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServiceError::Serve)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::warn!("Cannot listen for Ctrl-C ({}); serving until killed", e);
            std::future::pending::<()>().await;
        }
    }
}
