//! synopsis-server - REST API server for synopsis.
//!
//! The request boundary around the extraction and summarization core:
//! upload validation, document-kind classification, and response shaping.
//!
//! # Example
//!
//! ```ignore
//! use synopsis_server::{create_server, AppState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let state = AppState::from_env();
//!     let app = create_server(state);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{middleware as axum_middleware, Router};
use tower_http::trace::TraceLayer;

/// Create the server with all routes and middleware.
pub fn create_server(state: AppState) -> Router {
    routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors_layer())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
}
