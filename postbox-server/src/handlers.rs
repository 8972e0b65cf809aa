//! HTTP handlers: health, list, create, mark-read.
//!
//! Storage failures are logged here and converted to `{"error": …}` bodies.
//! Not-found maps to 404; everything else is a 500 with a generic message.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Map, Value};
use storage::{MessageRecord, StorageError};
use tracing::error;

use crate::AppState;

type ApiError = (StatusCode, Json<Value>);

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn list_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MessageRecord>>, ApiError> {
    match state.repo.list().await {
        Ok(messages) => Ok(Json(messages)),
        Err(e) => {
            error!("Error reading messages: {}", e);
            Err(error_response(&e, "Failed to read messages"))
        }
    }
}

pub async fn create_message(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<MessageRecord>), ApiError> {
    match state.repo.create(payload).await {
        Ok(message) => Ok((StatusCode::CREATED, Json(message))),
        Err(e) => {
            error!("Error saving message: {}", e);
            Err(error_response(&e, "Failed to save message"))
        }
    }
}

pub async fn mark_read(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageRecord>, ApiError> {
    match state.repo.mark_read(&id).await {
        Ok(message) => Ok(Json(message)),
        Err(e) => {
            error!("Error updating message {}: {}", id, e);
            Err(error_response(&e, "Failed to update message"))
        }
    }
}

fn error_response(err: &StorageError, message: &str) -> ApiError {
    match err {
        StorageError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Message not found" })),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": message })),
        ),
    }
}
