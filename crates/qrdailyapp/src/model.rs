//! # Domain Model
//!
//! Core data types shared by every layer: [`Puzzle`], [`SolvedEntry`],
//! [`StreakState`] and the scan log's [`HistoryEntry`].
//!
//! ## Persisted Shapes
//!
//! Solved entries and history entries are stored as JSON arrays with camelCase
//! field names, timestamps as RFC 3339 strings:
//!
//! ```text
//! solved_puzzles: [{ "question", "hint", "answer", "explanation", "category",
//!                    "solvedAt", "streak" }, ...]        most recent first
//! scan_history:   [{ "id", "type", "data", "category", "timestamp" }, ...]
//! ```
//!
//! A [`SolvedEntry`] embeds a full snapshot of the puzzle rather than an index
//! into the catalog, so the archive keeps rendering even if the catalog changes.
//!
//! ## Answer Matching
//!
//! [`Puzzle::is_correct`] is forgiving: surrounding whitespace, letter case and
//! runs of inner whitespace are ignored. `"  A  Map "` matches `"a map"`.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PuzzleCategory {
    Logic,
    Math,
    Riddles,
    Wordplay,
    Patterns,
}

impl PuzzleCategory {
    pub fn all() -> &'static [PuzzleCategory] {
        &[
            PuzzleCategory::Logic,
            PuzzleCategory::Math,
            PuzzleCategory::Riddles,
            PuzzleCategory::Wordplay,
            PuzzleCategory::Patterns,
        ]
    }
}

impl fmt::Display for PuzzleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PuzzleCategory::Logic => "Logic",
            PuzzleCategory::Math => "Math",
            PuzzleCategory::Riddles => "Riddles",
            PuzzleCategory::Wordplay => "Wordplay",
            PuzzleCategory::Patterns => "Patterns",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub question: String,
    pub hint: String,
    pub answer: String,
    pub explanation: String,
    pub category: PuzzleCategory,
}

impl Puzzle {
    pub fn new(
        question: impl Into<String>,
        hint: impl Into<String>,
        answer: impl Into<String>,
        explanation: impl Into<String>,
        category: PuzzleCategory,
    ) -> Self {
        Self {
            question: question.into(),
            hint: hint.into(),
            answer: answer.into(),
            explanation: explanation.into(),
            category,
        }
    }

    pub fn is_correct(&self, guess: &str) -> bool {
        let guess = normalize_answer(guess);
        !guess.is_empty() && guess == normalize_answer(&self.answer)
    }
}

fn normalize_answer(s: &str) -> String {
    s.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A puzzle snapshot recorded at the moment it was solved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolvedEntry {
    #[serde(flatten)]
    pub puzzle: Puzzle,
    pub solved_at: DateTime<FixedOffset>,
    /// Streak value after this solve was counted (always >= 1).
    pub streak: u32,
}

impl SolvedEntry {
    pub fn new(puzzle: Puzzle, solved_at: DateTime<FixedOffset>, streak: u32) -> Self {
        Self {
            puzzle,
            solved_at,
            streak,
        }
    }
}

/// Streak counter plus the time of the solve that last moved it.
///
/// `streak == 0` exactly when `last_solved_at` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakState {
    pub streak: u32,
    pub last_solved_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub data: String,
    pub category: String,
    pub timestamp: DateTime<FixedOffset>,
}

/// A scan as reported by the scanner, before the log assigns id and time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScan {
    pub kind: String,
    pub data: String,
    pub category: String,
}

impl NewScan {
    pub fn new(
        kind: impl Into<String>,
        data: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            data: data.into(),
            category: category.into(),
        }
    }
}
