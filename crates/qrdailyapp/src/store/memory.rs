use super::app_store::AppStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = AppStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        AppStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{HistoryEntry, Puzzle, PuzzleCategory, SolvedEntry};
    use crate::store::DataStore;
    use chrono::{DateTime, Duration, FixedOffset};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seed a streak as if the last solve happened at `last_solved`.
        pub fn with_streak(mut self, streak: u32, last_solved: DateTime<FixedOffset>) -> Self {
            self.store.save_streak(streak).unwrap();
            self.store.save_last_solved(last_solved).unwrap();
            self
        }

        /// Seed `count` solved entries, one per day ending at `latest`.
        pub fn with_solved(mut self, count: u32, latest: DateTime<FixedOffset>) -> Self {
            let entries: Vec<SolvedEntry> = (0..count)
                .map(|i| {
                    let puzzle = Puzzle::new(
                        format!("Question {}", count - i),
                        "hint",
                        "answer",
                        "explanation",
                        PuzzleCategory::Logic,
                    );
                    SolvedEntry::new(puzzle, latest - Duration::days(i as i64), count - i)
                })
                .collect();
            self.store.save_solved(&entries).unwrap();
            self
        }

        /// Seed `count` scans, newest first, one minute apart ending at `latest`.
        pub fn with_scans(mut self, count: usize, latest: DateTime<FixedOffset>) -> Self {
            let entries: Vec<HistoryEntry> = (0..count)
                .map(|i| HistoryEntry {
                    id: format!("scan-{}", count - i),
                    kind: "qr".to_string(),
                    data: format!("payload {}", count - i),
                    category: "text".to_string(),
                    timestamp: latest - Duration::minutes(i as i64),
                })
                .collect();
            self.store.save_history(&entries).unwrap();
            self
        }
    }
}
