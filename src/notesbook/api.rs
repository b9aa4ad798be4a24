//! # API Facade
//!
//! [`NotesApi`] is the single entry point for notes book operations. It owns
//! the in-memory [`RecordStore`], the [`IdGenerator`] and a [`DataStore`]
//! backend, and:
//!
//! - **Dispatches** to the command functions in `commands/*.rs`
//! - **Persists** the book through the backend after every successful
//!   mutating command (read-only commands never write). A command that
//!   fails, or whose save fails, leaves the in-memory book untouched
//! - **Returns structured types** (`Result<CmdResult>`), never prints
//!
//! ## Id Seeding
//!
//! Records restored from the backend keep their stored ids. On construction
//! the generator is seeded past the largest numeric stored id, so notes
//! created afterwards never reuse one.
//!
//! ## Generic Over DataStore
//!
//! - Production: `NotesApi<FileStore>`
//! - Testing: `NotesApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::id::IdGenerator;
use crate::records::RecordStore;
use crate::store::DataStore;
use log::debug;
use std::path::PathBuf;

pub struct NotesApi<S: DataStore> {
    store: S,
    records: RecordStore,
    ids: IdGenerator,
    config_dir: PathBuf,
}

impl<S: DataStore> NotesApi<S> {
    /// Loads the book from `store`. `config_dir` is where `config.json`
    /// lives.
    pub fn new(store: S, config_dir: impl Into<PathBuf>) -> Result<Self> {
        let records = store.load()?;
        let ids = IdGenerator::starting_after(records.max_numeric_id());
        debug!("notes book opened, next id after {}", ids.last());
        Ok(Self {
            store,
            records,
            ids,
            config_dir: config_dir.into(),
        })
    }

    pub fn create_note<T: AsRef<str>>(
        &mut self,
        body: &str,
        tags: &[T],
    ) -> Result<commands::CmdResult> {
        let tags: Vec<String> = tags.iter().map(|t| t.as_ref().to_string()).collect();
        self.commit(|records, ids| commands::create::run(records, ids, body, &tags))
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.records)
    }

    pub fn view_notes<I: AsRef<str>>(&self, ids: &[I]) -> Result<commands::CmdResult> {
        commands::view::run(&self.records, ids)
    }

    pub fn search_tag(&self, tag: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.records, tag)
    }

    pub fn add_tags<T: AsRef<str>>(&mut self, id: &str, tags: &[T]) -> Result<commands::CmdResult> {
        self.commit(|records, _| commands::tagging::add(records, id, tags))
    }

    pub fn remove_tags<T: AsRef<str>>(
        &mut self,
        id: &str,
        tags: &[T],
    ) -> Result<commands::CmdResult> {
        self.commit(|records, _| commands::tagging::remove(records, id, tags))
    }

    pub fn update_note(&mut self, id: &str, body: &str) -> Result<commands::CmdResult> {
        self.commit(|records, _| commands::update::run(records, id, body))
    }

    pub fn delete_notes<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        self.commit(|records, _| commands::delete::run(records, ids))
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    /// Where the backend keeps the book, if it has a location.
    pub fn notes_location(&self) -> Option<PathBuf> {
        self.store.location()
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs a mutating command against a copy of the book and swaps it in
    /// only once the backend has saved it. On any failure the book and the
    /// id counter are left as they were.
    fn commit<F>(&mut self, command: F) -> Result<commands::CmdResult>
    where
        F: FnOnce(&mut RecordStore, &IdGenerator) -> Result<commands::CmdResult>,
    {
        let mut draft = self.records.clone();
        let last_id = self.ids.last();

        let outcome = command(&mut draft, &self.ids)
            .and_then(|result| self.store.save(&draft).map(|_| result));

        match outcome {
            Ok(result) => {
                self.records = draft;
                Ok(result)
            }
            Err(e) => {
                debug!("command failed, book left unchanged: {}", e);
                self.ids.rewind_to(last_id);
                Err(e)
            }
        }
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
