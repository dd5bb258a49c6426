//! # Storage Layer
//!
//! The [`DataStore`] trait is the only thing the command layer knows about
//! persistence. A store hands out the whole collection and takes the whole
//! collection back; there are no partial writes.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON file holding an array of records
//! - [`memory::InMemoryStore`]: no persistence, used by command tests
//!
//! ## Missing vs. empty
//!
//! `load` distinguishes "nothing stored yet" (`None`) from "stored, but
//! empty" (`Some(vec![])`). Update needs the difference; add and search treat
//! both as an empty collection.
//!
//! ## Concurrency
//!
//! Stores assume exclusive single-process access. Every operation is a full
//! read-modify-write, so two overlapping writers race and the last one wins.

use crate::error::Result;
use crate::model::StudentRecord;

pub mod fs;
pub mod memory;

/// Abstract interface for record storage.
pub trait DataStore {
    /// Load the full collection, or `None` if nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<StudentRecord>>>;

    /// Replace the stored collection with `records`.
    fn save(&mut self, records: &[StudentRecord]) -> Result<()>;

    /// Load the full collection, treating missing storage as empty.
    fn load_or_empty(&self) -> Result<Vec<StudentRecord>> {
        Ok(self.load()?.unwrap_or_default())
    }
}
