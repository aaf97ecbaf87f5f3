//! # Storage Layer
//!
//! This module defines the storage abstraction for qrdaily. The [`DataStore`]
//! trait is the typed storage service the command layer talks to; it is
//! backed by a flat key-value [`backend::StorageBackend`].
//!
//! ## Key Space
//!
//! Every value lives under its own key and is read and written independently:
//!
//! | Key | Encoding |
//! |-----|----------|
//! | `streak` | decimal string |
//! | `last_solved` | RFC 3339 timestamp |
//! | `solved_puzzles` | JSON array of `SolvedEntry`, most recent first |
//! | `current_puzzle_index` | decimal string |
//! | `scan_history` | JSON array of `HistoryEntry`, most recent first |
//! | `notifications_enabled` | `"true"` / `"false"` |
//!
//! Key names are private to [`app_store`]; nothing above the store spells them.
//!
//! ## Absent vs. Failed
//!
//! Loads return `Result<Option<T>>` (or `Result<Vec<T>>` for collections):
//! - `Ok(None)` / `Ok(vec![])`: nothing was ever stored.
//! - `Err(StorageRead)`: the backend failed, or the stored value is corrupt
//!   (bad decimal, bad JSON, bad timestamp).
//!
//! The store never substitutes defaults for failures. Collapsing errors into
//! safe defaults is the command layer's job.
//!
//! ## No Transactions
//!
//! Each save is atomic for its own key only. Updating the streak and the
//! solved list is two independent writes; a failure between them leaves the
//! two out of step until the next successful write.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one file per key in the data directory.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.

use crate::error::Result;
use crate::model::{HistoryEntry, SolvedEntry};
use chrono::{DateTime, FixedOffset};

pub mod app_store;
pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

/// Abstract interface for qrdaily's persisted state.
pub trait DataStore {
    fn load_streak(&self) -> Result<Option<u32>>;
    fn save_streak(&mut self, streak: u32) -> Result<()>;

    fn load_last_solved(&self) -> Result<Option<DateTime<FixedOffset>>>;
    fn save_last_solved(&mut self, at: DateTime<FixedOffset>) -> Result<()>;

    /// Solved puzzles, most recent first.
    fn load_solved(&self) -> Result<Vec<SolvedEntry>>;
    fn save_solved(&mut self, entries: &[SolvedEntry]) -> Result<()>;
    /// Remove streak, last-solved and solved archive in one backend call.
    fn clear_progress(&mut self) -> Result<()>;

    fn load_puzzle_index(&self) -> Result<Option<u64>>;
    fn save_puzzle_index(&mut self, index: u64) -> Result<()>;

    /// Scan history, most recent first.
    fn load_history(&self) -> Result<Vec<HistoryEntry>>;
    fn save_history(&mut self, entries: &[HistoryEntry]) -> Result<()>;
    /// Remove the scan history key entirely.
    fn clear_history(&mut self) -> Result<()>;

    fn load_notifications_enabled(&self) -> Result<Option<bool>>;
    fn save_notifications_enabled(&mut self, enabled: bool) -> Result<()>;
}
