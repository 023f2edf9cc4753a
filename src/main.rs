// src/main.rs
mod routes;
mod handlers;
mod models;
mod services;
mod store;
mod state;
mod dtos; // expose DTO modules
mod error;
mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::fmt::init as tracing_init;

use crate::config::AppConfig;
use crate::store::ProductStore;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load configuration (.env + environment)
    let config = AppConfig::from_env();

    // One store for the whole process, handed to the service through state
    let store = Arc::new(ProductStore::new());
    let app_state = state::AppState::new(store);

    let app = routes::app(app_state);

    let Some(listener) = bind_listener(&config).await else {
        return;
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error=%e, "Server error");
    }
}

/// Try `port..=port+port_attempts` so a busy port does not crash startup.
async fn bind_listener(config: &AppConfig) -> Option<TcpListener> {
    for offset in 0u16..=config.port_attempts {
        let port = config.port.saturating_add(offset);
        let addr = SocketAddr::from((config.host, port));
        match TcpListener::bind(addr).await {
            Ok(l) => {
                tracing::info!("Server running on {}", addr);
                return Some(l);
            }
            Err(e) => {
                if offset == 0 { tracing::warn!(%addr, error=%e, "Port in use, trying next"); }
            }
        }
    }

    tracing::error!("Failed to bind to any port starting at {} on {}", config.port, config.host);
    None
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error=%e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
