//! Record store trait.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::MessageRecord;

/// Keyed record persistence. Implementations decide the backing medium;
/// callers only rely on put/get/list.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Writes the record under its id, replacing any previous content.
    async fn put(&self, record: &MessageRecord) -> Result<(), StorageError>;
    /// Loads the record for `id`; `None` if no record exists.
    async fn get(&self, id: &str) -> Result<Option<MessageRecord>, StorageError>;
    /// Loads every stored record, in no particular order.
    async fn list(&self) -> Result<Vec<MessageRecord>, StorageError>;
}
