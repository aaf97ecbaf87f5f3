//! # Streaks and Daily Gating
//!
//! A streak counts consecutive **calendar days** with a solve. Days are local
//! dates (year, month, day) from the clock's zone, not rolling 24 hour
//! windows: a solve at 23:59 and another at 00:01 land on two different days.
//! Each instant gets the date it had under the zone rules in force when it
//! happened, so daylight-saving changes neither block nor skip a day.
//!
//! ## Transition Rules
//!
//! Given the date of the last solve and today's date:
//!
//! | Last solve | Result |
//! |------------|--------|
//! | never | streak = 1 |
//! | today | no change (already solved) |
//! | yesterday | streak + 1 |
//! | earlier (or later, after a clock change) | streak = 1 |
//!
//! ## Already Solved Today
//!
//! [`mark_puzzle_solved`] on a day that already has a solve is an explicit
//! no-op: streak, last-solved time and the solved archive are left as they
//! are and [`SolveOutcome::recorded`] is `false`. Callers are expected to
//! check [`can_solve_today`] first; this path only guards against duplicate
//! archive entries for one day.
//!
//! ## Persistence
//!
//! A recorded solve issues three independent writes (streak, last-solved,
//! archive). They are not transactional. Failed writes are logged and the
//! computed outcome is returned regardless.
//!
//! [`reset_progress`] removes all three keys at once, which clears the
//! archive and sets the streak back to zero.

use super::helpers::{read_opt, read_or, write_logged};
use crate::clock::Clock;
use crate::model::{Puzzle, SolvedEntry, StreakState};
use crate::store::DataStore;
use chrono::{DateTime, Days, FixedOffset, NaiveDate};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    pub streak: u32,
    /// Full archive after the operation, most recent first.
    pub solved: Vec<SolvedEntry>,
    /// False when the day already had a solve and nothing changed.
    pub recorded: bool,
}

pub fn get_streak<S: DataStore>(store: &S) -> u32 {
    read_opt(store.load_streak(), "streak").unwrap_or(0)
}

pub fn get_last_solved<S: DataStore>(store: &S) -> Option<DateTime<FixedOffset>> {
    read_opt(store.load_last_solved(), "last solved time")
}

pub fn get_solved_puzzles<S: DataStore>(store: &S) -> Vec<SolvedEntry> {
    read_or(store.load_solved(), Vec::new(), "solved puzzles")
}

pub fn get_state<S: DataStore>(store: &S) -> StreakState {
    StreakState {
        streak: get_streak(store),
        last_solved_at: get_last_solved(store),
    }
}

pub fn can_solve_today<S: DataStore, C: Clock>(store: &S, clock: &C) -> bool {
    match get_last_solved(store) {
        None => true,
        Some(last) => clock.date_of(last) != clock.today(),
    }
}

/// The streak after a solve on `today`, or `None` if `today` already counted.
pub fn next_streak(current: u32, last: Option<NaiveDate>, today: NaiveDate) -> Option<u32> {
    let Some(last) = last else {
        return Some(1);
    };
    if last == today {
        return None;
    }
    let yesterday = today.checked_sub_days(Days::new(1));
    if yesterday == Some(last) {
        Some(current.saturating_add(1).max(1))
    } else {
        Some(1)
    }
}

pub fn mark_puzzle_solved<S: DataStore, C: Clock>(
    store: &mut S,
    clock: &C,
    puzzle: &Puzzle,
) -> SolveOutcome {
    let now = clock.now();
    let state = get_state(store);
    let last_date = state.last_solved_at.map(|last| clock.date_of(last));

    let Some(streak) = next_streak(state.streak, last_date, clock.date_of(now)) else {
        debug!(streak = state.streak, "puzzle already solved today");
        return SolveOutcome {
            streak: state.streak,
            solved: get_solved_puzzles(store),
            recorded: false,
        };
    };

    write_logged(store.save_streak(streak), "streak");
    write_logged(store.save_last_solved(now), "last solved time");

    let mut solved = get_solved_puzzles(store);
    solved.insert(0, SolvedEntry::new(puzzle.clone(), now, streak));
    write_logged(store.save_solved(&solved), "solved puzzles");

    info!(streak, total = solved.len(), "puzzle solved");
    SolveOutcome {
        streak,
        solved,
        recorded: true,
    }
}

/// Forget the streak, the last-solved time and the archive. Returns `false`
/// if the store could not remove them.
pub fn reset_progress<S: DataStore>(store: &mut S) -> bool {
    match store.clear_progress() {
        Ok(()) => {
            info!("puzzle progress reset");
            true
        }
        Err(e) => {
            warn!(error = %e, "failed to reset puzzle progress");
            false
        }
    }
}
