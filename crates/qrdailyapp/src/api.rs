//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all qrdaily operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the collaborators**: store, clock, puzzle catalog, data directory
//! - **Dispatches** to the appropriate command function
//! - **Returns plain values**: tracker and log operations are fail-soft and
//!   never return storage errors
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over DataStore and Clock
//!
//! `QrDailyApi<S: DataStore, C: Clock>`:
//! - Production: `QrDailyApi<FileStore, SystemClock>`
//! - Testing: `QrDailyApi<InMemoryStore, FixedClock>`

use crate::catalog::PuzzleCatalog;
use crate::clock::Clock;
use crate::commands::{self, history, notifications, profile, puzzle, streak};
use crate::error::Result;
use crate::model::{HistoryEntry, NewScan, Puzzle, SolvedEntry};
use crate::scan;
use crate::store::DataStore;
use chrono::{DateTime, FixedOffset};
use std::path::{Path, PathBuf};

pub use crate::commands::config::ConfigAction;
pub use crate::commands::profile::{ProfileSummary, StreakBadge};
pub use crate::commands::streak::SolveOutcome;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// Outcome of answering the current puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    /// The guess did not match; nothing was recorded.
    Incorrect,
    /// Counted (or already counted today, see `SolveOutcome::recorded`).
    Solved(SolveOutcome),
}

/// The main API facade for qrdaily operations.
pub struct QrDailyApi<S: DataStore, C: Clock> {
    store: S,
    clock: C,
    catalog: PuzzleCatalog,
    data_dir: PathBuf,
}

impl<S: DataStore, C: Clock> QrDailyApi<S, C> {
    pub fn new(store: S, clock: C, catalog: PuzzleCatalog, data_dir: PathBuf) -> Self {
        Self {
            store,
            clock,
            catalog,
            data_dir,
        }
    }

    // --- Puzzle Progress Tracker ---

    pub fn get_streak(&self) -> u32 {
        streak::get_streak(&self.store)
    }

    pub fn get_last_solved(&self) -> Option<DateTime<FixedOffset>> {
        streak::get_last_solved(&self.store)
    }

    pub fn get_solved_puzzles(&self) -> Vec<SolvedEntry> {
        streak::get_solved_puzzles(&self.store)
    }

    pub fn get_current_puzzle_index(&self) -> u64 {
        puzzle::get_current_puzzle_index(&self.store)
    }

    pub fn can_solve_today(&self) -> bool {
        streak::can_solve_today(&self.store, &self.clock)
    }

    pub fn mark_puzzle_solved(&mut self, puzzle: &Puzzle) -> SolveOutcome {
        streak::mark_puzzle_solved(&mut self.store, &self.clock, puzzle)
    }

    /// Clear the solved archive and the streak. The puzzle index is kept.
    pub fn reset_progress(&mut self) -> bool {
        streak::reset_progress(&mut self.store)
    }

    pub fn increment_puzzle_index(&mut self) -> u64 {
        puzzle::increment_puzzle_index(&mut self.store)
    }

    pub fn current_puzzle(&self) -> &Puzzle {
        puzzle::current_puzzle(&self.store, &self.catalog)
    }

    pub fn next_puzzle(&mut self) -> (u64, &Puzzle) {
        puzzle::next_puzzle(&mut self.store, &self.catalog)
    }

    /// Check `guess` against the current puzzle and mark it solved if right.
    /// Without a guess the puzzle is marked solved directly (self-reported).
    pub fn solve_current(&mut self, guess: Option<&str>) -> Attempt {
        let current = self.current_puzzle().clone();
        if let Some(guess) = guess {
            if !current.is_correct(guess) {
                return Attempt::Incorrect;
            }
        }
        Attempt::Solved(self.mark_puzzle_solved(&current))
    }

    // --- Scan History Log ---

    pub fn add_to_history(&mut self, entry: NewScan) -> Vec<HistoryEntry> {
        history::add_to_history(&mut self.store, &self.clock, entry)
    }

    /// Record a scan, deriving its category from the payload.
    pub fn record_scan(&mut self, kind: &str, data: &str) -> Vec<HistoryEntry> {
        let category = scan::classify(data);
        self.add_to_history(NewScan::new(kind, data, category.as_str()))
    }

    pub fn get_history(&self) -> Vec<HistoryEntry> {
        history::get_history(&self.store)
    }

    pub fn clear_history(&mut self) -> bool {
        history::clear_history(&mut self.store)
    }

    pub fn delete_history_item(&mut self, id: &str) -> Vec<HistoryEntry> {
        history::delete_history_item(&mut self.store, id)
    }

    // --- Supporting collaborators ---

    pub fn notifications_enabled(&self) -> bool {
        notifications::get_notifications_enabled(&self.store)
    }

    pub fn set_notifications_enabled(&mut self, enabled: bool) -> bool {
        notifications::set_notifications_enabled(&mut self.store, enabled)
    }

    pub fn profile(&self) -> ProfileSummary {
        profile::run(&self.store, &self.clock)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn catalog(&self) -> &PuzzleCatalog {
        &self.catalog
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
