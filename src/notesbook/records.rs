//! # Record Store
//!
//! [`RecordStore`] is the in-memory notes book: records keyed by id, kept in
//! insertion order. It exposes only its own operations (add, find, search by
//! tag, delete, mapping conversion) so every entry keeps satisfying
//! `key == record.id()`.
//!
//! ## Mapping Form
//!
//! The store converts to and from a flat JSON object, the on-disk format:
//!
//! ```text
//! {
//!   "1": {"Tags": ["#inc", "#text"], "Note": "hello I'm the first note"},
//!   "2": {"Tags": ["#digit"], "Note": "hello I'm the second note"}
//! }
//! ```
//!
//! [`RecordStore::from_mapping`] is the exact inverse of
//! [`RecordStore::to_mapping`].

use crate::error::{NotesError, Result};
use crate::field::{IntoField, TagRule};
use crate::model::Record;
use log::{debug, warn};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record` under its id. An existing record with the same id is
    /// replaced in place.
    pub fn add(&mut self, record: Record) {
        let id = record.id().to_string();
        if self.records.insert(id.clone(), record).is_some() {
            warn!("note {} replaced by a newer record with the same id", id);
        } else {
            debug!("note {} added", id);
            self.order.push(id);
        }
    }

    pub fn find(&self, id: &str) -> Result<&Record> {
        self.records.get(id).ok_or_else(|| not_found(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Result<&mut Record> {
        self.records.get_mut(id).ok_or_else(|| not_found(id))
    }

    /// Every record carrying `tag`, in insertion order.
    ///
    /// The query is validated like any tag, so a malformed one is an error
    /// even when the store is empty.
    pub fn find_by_tag<T: IntoField<TagRule>>(&self, tag: T) -> Result<Vec<&Record>> {
        let tag = tag.into_field()?;
        Ok(self.iter().filter(|r| r.has_tag(&tag)).collect())
    }

    /// Removes and returns the record stored under `id`.
    pub fn delete(&mut self, id: &str) -> Result<Record> {
        let record = self.records.remove(id).ok_or_else(|| not_found(id))?;
        self.order.retain(|k| k != id);
        debug!("note {} deleted", id);
        Ok(record)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Largest id that is a plain integer, or 0.
    pub fn max_numeric_id(&self) -> u64 {
        self.records
            .keys()
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
    }

    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for record in self.iter() {
            map.extend(record.to_mapping());
        }
        map
    }

    /// Adds every record described by `data`.
    ///
    /// All entries are validated first; if any is malformed the store is left
    /// untouched.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_mapping(&mut self, data: &Value) -> Result<()> {
        let entries = data.as_object().ok_or_else(|| {
            NotesError::Type(format!("notes data must be an object, got {}", data))
        })?;

        let restored = entries
            .iter()
            .map(|(id, entry)| Record::from_entry(id, entry))
            .collect::<Result<Vec<_>>>()?;

        for record in restored {
            self.add(record);
        }
        Ok(())
    }

    /// Builds a fresh store from the mapping form.
    pub fn from_value(data: &Value) -> Result<Self> {
        let mut store = Self::new();
        store.from_mapping(data)?;
        Ok(store)
    }
}

fn not_found(id: &str) -> NotesError {
    NotesError::NotFound(format!("there isn't a note with id {}", id))
}

impl fmt::Display for RecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.iter().map(Record::to_string).collect();
        f.write_str(&rendered.join("\n"))
    }
}
