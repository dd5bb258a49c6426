//! # API Facade
//!
//! `RosterApi` is the record store as callers see it: one object, built once
//! around a [`DataStore`] and the storage directory, passed to whichever UI
//! needs it. It dispatches to `commands/*.rs` and returns `Result<CmdResult>`;
//! it never prints and never exits.
//!
//! Generic over the backend:
//! - Production: `RosterApi<FileStore>`
//! - Testing: `RosterApi<InMemoryStore>`

use crate::commands;
use crate::config::RosterConfig;
use crate::error::Result;
use crate::model::UpdateField;
use crate::store::fs::FileStore;
use crate::store::DataStore;
use std::path::{Path, PathBuf};

pub struct RosterApi<S: DataStore> {
    store: S,
    root: PathBuf,
}

impl RosterApi<FileStore> {
    /// Opens the store in `root`, honouring `config.json` there if present.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config = RosterConfig::load(&root)?;
        let store = FileStore::new(config.data_path(&root)).with_indent(config.indent);
        Ok(Self::new(store, root))
    }
}

impl<S: DataStore> RosterApi<S> {
    pub fn new(store: S, root: impl Into<PathBuf>) -> Self {
        Self {
            store,
            root: root.into(),
        }
    }

    pub fn add_student(
        &mut self,
        student_id: i64,
        name: impl Into<String>,
        age: u32,
        grade: impl Into<String>,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, student_id, name.into(), age, grade.into())
    }

    pub fn search_student(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn update_student(
        &mut self,
        field: UpdateField,
        value: &str,
        student_id: i64,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, field, value, student_id)
    }

    pub fn list_students(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn age_stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.root, action)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{AgeStats, CmdMessage, CmdResult, MessageLevel};
