//! Message record model for persistence.
//!
//! One record per submitted message; maps to a single `<id>.json` file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Field names assigned by the server. Client-supplied values under these
/// keys are discarded when a record is created.
pub const RESERVED_KEYS: [&str; 3] = ["id", "created_at", "read"];

/// A persisted message: server-assigned fields plus whatever else the
/// client submitted, kept flat on the wire and on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MessageRecord {
    /// Creates a new record with a generated UUID, current timestamp and
    /// `read = false`. Reserved keys in the payload are dropped so the
    /// server-assigned values always win.
    pub fn new(mut payload: Map<String, Value>) -> Self {
        for key in RESERVED_KEYS {
            payload.remove(key);
        }
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            read: false,
            extra: payload,
        }
    }
}
