//! Record id generation.
//!
//! Ids are decimal strings drawn from a monotonically increasing counter. The
//! generator is an explicit object owned by the application (see
//! [`crate::api::NotesApi`]), so two books, or two tests, never share a
//! sequence.

use crate::error::{NotesError, Result};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct IdGenerator {
    counter: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator whose next id is `last + 1`.
    pub fn starting_after(last: u64) -> Self {
        Self {
            counter: AtomicU64::new(last),
        }
    }

    /// Advances the counter and returns the new value as an id.
    ///
    /// Fails once the counter sits at `u64::MAX`; it never wraps around to
    /// ids that may already be in use.
    pub fn next_id(&self) -> Result<String> {
        let prev = self
            .counter
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .map_err(|last| NotesError::Store(format!("no ids left after {}", last)))?;
        Ok((prev + 1).to_string())
    }

    /// The most recently issued value (0 if none).
    pub fn last(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.rewind_to(0);
    }

    /// Moves the counter back to `last`, so the next id is `last + 1`.
    pub fn rewind_to(&self, last: u64) {
        self.counter.store(last, Ordering::SeqCst);
    }
}
