//! Message repository: create, list and mark-read on top of a RecordStore.
//!
//! The backing store is injected at construction; callers never touch files
//! or paths directly.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::info;

use crate::error::StorageError;
use crate::models::MessageRecord;
use crate::store::RecordStore;

#[derive(Clone)]
pub struct MessageRepository {
    store: Arc<dyn RecordStore>,
}

impl MessageRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Creates a message from a client payload. The server assigns `id`,
    /// `created_at` and `read = false`; payload values under those keys are
    /// discarded. No uniqueness re-check is performed on the generated id.
    pub async fn create(&self, payload: Map<String, Value>) -> Result<MessageRecord, StorageError> {
        let record = MessageRecord::new(payload);
        self.store.put(&record).await?;
        info!("Saved message: id={}", record.id);
        Ok(record)
    }

    /// All messages, newest first. Ties on `created_at` are in no
    /// particular order.
    pub async fn list(&self) -> Result<Vec<MessageRecord>, StorageError> {
        let mut records = self.store.list().await?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        info!("Retrieved {} messages", records.len());
        Ok(records)
    }

    /// Sets `read = true` on the message with `id` and rewrites it.
    /// A record that is absent, or that cannot be loaded, is not found.
    pub async fn mark_read(&self, id: &str) -> Result<MessageRecord, StorageError> {
        let mut record = self
            .store
            .get(id)
            .await
            .unwrap_or(None)
            .ok_or_else(|| StorageError::NotFound(format!("message {id}")))?;
        record.read = true;
        self.store.put(&record).await?;
        info!("Marked message as read: id={}", id);
        Ok(record)
    }
}
