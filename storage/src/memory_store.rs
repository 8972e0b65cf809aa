//! In-memory implementation of the RecordStore trait.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::models::MessageRecord;
use crate::store::RecordStore;

type RecordMap = HashMap<String, MessageRecord>;

/// In-memory record store for testing and development.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    records: Arc<RwLock<RecordMap>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(RecordMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        let records = self.records.read().await;
        records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn clear(&self) {
        let mut records = self.records.write().await;
        records.clear();
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn put(&self, record: &MessageRecord) -> Result<(), StorageError> {
        let mut records = self.records.write().await;
        records.insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<MessageRecord>, StorageError> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<MessageRecord>, StorageError> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }
}
