use super::DataStore;
use crate::error::Result;
use crate::records::RecordStore;
use serde_json::Value;
use std::path::PathBuf;

/// In-memory storage for testing.
/// Keeps the mapping form of the last save; nothing touches the disk.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: Option<Value>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an already persisted mapping.
    pub fn with_snapshot(snapshot: Value) -> Self {
        Self {
            snapshot: Some(snapshot),
            saves: 0,
        }
    }

    pub fn snapshot(&self) -> Option<&Value> {
        self.snapshot.as_ref()
    }

    /// Number of times [`DataStore::save`] was called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<RecordStore> {
        match &self.snapshot {
            Some(data) => RecordStore::from_value(data),
            None => Ok(RecordStore::new()),
        }
    }

    fn save(&mut self, records: &RecordStore) -> Result<()> {
        self.snapshot = Some(Value::Object(records.to_mapping()));
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        None
    }
}
