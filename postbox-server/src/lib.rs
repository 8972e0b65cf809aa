//! # postbox-server
//!
//! HTTP API for the message board: health check, list, create, mark-read.
//! Persistence comes from the `storage` crate; routing is axum. The binary
//! entry point lives in postbox-cli.

pub mod config;
pub mod handlers;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use storage::{FileStore, MessageRepository};
use tracing::info;

pub use config::ServerConfig;
pub use routes::{build_router, cors_layer};

/// Shared state handed to every handler.
pub struct AppState {
    pub repo: MessageRepository,
}

/// Builds the file store and router from `config`, binds the listener and
/// serves until the process is stopped.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let store = FileStore::new(&config.messages_dir).await?;
    let repo = MessageRepository::new(Arc::new(store));
    let state = Arc::new(AppState { repo });

    let router = build_router(state, cors_layer(&config.allowed_origins));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
