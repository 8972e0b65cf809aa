//! Route table and CORS layer for the message-board API.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, patch};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::handlers;
use crate::AppState;

pub fn build_router(state: Arc<AppState>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/messages",
            get(handlers::list_messages).post(handlers::create_message),
        )
        .route("/api/messages/{id}", patch(handlers::mark_read))
        .layer(cors)
        .with_state(state)
}

/// CORS layer restricted to the configured origins; origins that fail to
/// parse as header values are skipped.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers([header::CONTENT_TYPE])
}
