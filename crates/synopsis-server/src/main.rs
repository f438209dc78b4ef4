//! synopsis-server - REST API server binary.

use std::net::SocketAddr;

use synopsis_server::{create_server, AppState};
use tokio::signal;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive(Level::INFO.into())
                .add_directive("synopsis_server=debug".parse().unwrap()),
        )
        .init();

    // Get configuration from environment
    let host = std::env::var("SYNOPSIS_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("SYNOPSIS_PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse()
        .expect("SYNOPSIS_PORT must be a valid port number");

    // Create application state: extraction capabilities from the compiled
    // feature set, summarization backend from the environment
    let state = AppState::from_env();
    let app = create_server(state);

    // Start server
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!("Starting synopsis-server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped cleanly");
    Ok(())
}
