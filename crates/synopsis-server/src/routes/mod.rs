//! Route definitions for the REST API server.

pub mod health;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Maximum accepted upload size: 80 MB.
pub const MAX_UPLOAD_BYTES: usize = 80 * 1024 * 1024;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/upload", post(upload::upload))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
