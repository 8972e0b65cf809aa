//! File-backed record store: one pretty-printed JSON file per message.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use log::info;
use tokio::fs;

use crate::error::StorageError;
use crate::models::MessageRecord;
use crate::store::RecordStore;

/// Stores each record at `<dir>/<id>.json`; creates the directory if missing.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`, creating the directory if absent.
    pub async fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| StorageError::Write(format!("create {}: {}", dir.display(), e)))?;
        info!("Initialized message store at {}", dir.display());
        Ok(Self { dir })
    }

    /// Directory this store writes into.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

#[async_trait]
impl RecordStore for FileStore {
    async fn put(&self, record: &MessageRecord) -> Result<(), StorageError> {
        let path = self.path_for(&record.id);
        let body = serde_json::to_string_pretty(record)
            .map_err(|e| StorageError::Write(format!("serialize {}: {}", record.id, e)))?;
        fs::write(&path, body)
            .await
            .map_err(|e| StorageError::Write(format!("write {}: {}", path.display(), e)))?;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<MessageRecord>, StorageError> {
        let path = self.path_for(id);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::Read(format!("read {}: {}", path.display(), e)))
            }
        };
        let record = serde_json::from_str(&content)
            .map_err(|e| StorageError::Read(format!("parse {}: {}", path.display(), e)))?;
        Ok(Some(record))
    }

    async fn list(&self) -> Result<Vec<MessageRecord>, StorageError> {
        let mut entries = fs::read_dir(&self.dir)
            .await
            .map_err(|e| StorageError::Read(format!("read dir {}: {}", self.dir.display(), e)))?;

        let mut records = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StorageError::Read(format!("read dir {}: {}", self.dir.display(), e)))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let content = fs::read_to_string(&path)
                .await
                .map_err(|e| StorageError::Read(format!("read {}: {}", path.display(), e)))?;
            // One malformed file fails the whole listing; no partial results.
            let record = serde_json::from_str(&content)
                .map_err(|e| StorageError::Read(format!("parse {}: {}", path.display(), e)))?;
            records.push(record);
        }
        Ok(records)
    }
}
