//! Server config: bind port, message directory, CORS allow-list. Loaded from env.

use std::env;

use anyhow::Result;

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PORT
    pub port: u16,
    /// MESSAGES_DIR — where message files are stored
    pub messages_dir: String,
    /// ALLOWED_ORIGINS — comma-separated origins allowed for CORS
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Load from environment variables. `port` and `messages_dir` override
    /// PORT and MESSAGES_DIR if provided.
    pub fn load(port: Option<u16>, messages_dir: Option<String>) -> Result<Self> {
        let port = match port {
            Some(port) => port,
            None => env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
        };
        let messages_dir = messages_dir
            .unwrap_or_else(|| env::var("MESSAGES_DIR").unwrap_or_else(|_| "./messages".to_string()));
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            port,
            messages_dir,
            allowed_origins,
        })
    }
}
