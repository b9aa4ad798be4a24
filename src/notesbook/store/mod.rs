//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where a notes book is persisted. The
//! application works against the trait and never touches files directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - The whole book lives in one JSON file (`data_note.json` by default)
//!   - Writes go to a temporary sibling and are renamed into place
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Keeps the last saved mapping, no filesystem
//!
//! ## Storage Format
//!
//! Both backends persist the mapping form produced by
//! [`RecordStore::to_mapping`], so a save followed by a load goes through the
//! same validation as any other restore.

use crate::error::Result;
use crate::records::RecordStore;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for notes book persistence.
pub trait DataStore {
    /// Load the persisted book (an empty book if nothing was saved yet)
    fn load(&self) -> Result<RecordStore>;

    /// Persist the whole book, replacing what was there
    fn save(&mut self, records: &RecordStore) -> Result<()>;

    /// Where the book is stored, for backends that have a location
    fn location(&self) -> Option<PathBuf>;
}
