//! # Roster Architecture
//!
//! Roster keeps student records in a single JSON file: an array of
//! `{student_id, name, age, grade}` objects. The library is the product; the
//! `roster` binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints records, sets up logging        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - RosterApi: the record store handed to callers            │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, search, update, list, stats, config                 │
//! │  - Load, mutate, conditionally persist                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Access model
//!
//! Every operation reads the whole file, changes it in memory and (for add
//! and update) writes the whole file back. There is no locking: roster
//! assumes one process owns the storage directory at a time, and the last
//! writer wins.
//!
//! ## Failure model
//!
//! - A missing records file is an empty collection (add, search, list) or
//!   "nothing to update" (update). Never an error.
//! - A records file that is not a JSON array of records is
//!   [`error::RosterError::Corrupt`]; it is never silently replaced.
//! - Write failures come back as errors; they are not swallowed.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `StudentRecord`, `Age`, `UpdateField`
//! - [`config`]: Per-directory configuration
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
