use super::backend::StorageBackend;
use super::DataStore;
use crate::error::{QrDailyError, Result};
use crate::model::{HistoryEntry, SolvedEntry};
use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

const STREAK_KEY: &str = "streak";
const LAST_SOLVED_KEY: &str = "last_solved";
const SOLVED_PUZZLES_KEY: &str = "solved_puzzles";
const PUZZLE_INDEX_KEY: &str = "current_puzzle_index";
const SCAN_HISTORY_KEY: &str = "scan_history";
const NOTIFICATIONS_KEY: &str = "notifications_enabled";

pub struct AppStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> AppStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn load_number<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match self.backend.get(key)? {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map(Some)
                .map_err(|e| QrDailyError::read(key, format!("not a number ({}): {:?}", e, raw))),
        }
    }

    fn load_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        match self.backend.get(key)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| QrDailyError::read(key, e)),
        }
    }

    fn save_list<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        debug!(key, count = items.len(), "saving list");
        self.backend.set(key, &raw)
    }
}

impl<B: StorageBackend> DataStore for AppStore<B> {
    fn load_streak(&self) -> Result<Option<u32>> {
        self.load_number(STREAK_KEY)
    }

    fn save_streak(&mut self, streak: u32) -> Result<()> {
        debug!(streak, "saving streak");
        self.backend.set(STREAK_KEY, &streak.to_string())
    }

    fn load_last_solved(&self) -> Result<Option<DateTime<FixedOffset>>> {
        match self.backend.get(LAST_SOLVED_KEY)? {
            None => Ok(None),
            Some(raw) => DateTime::parse_from_rfc3339(raw.trim())
                .map(Some)
                .map_err(|e| QrDailyError::read(LAST_SOLVED_KEY, e)),
        }
    }

    fn save_last_solved(&mut self, at: DateTime<FixedOffset>) -> Result<()> {
        self.backend.set(LAST_SOLVED_KEY, &at.to_rfc3339())
    }

    fn load_solved(&self) -> Result<Vec<SolvedEntry>> {
        self.load_list(SOLVED_PUZZLES_KEY)
    }

    fn save_solved(&mut self, entries: &[SolvedEntry]) -> Result<()> {
        self.save_list(SOLVED_PUZZLES_KEY, entries)
    }

    fn clear_progress(&mut self) -> Result<()> {
        self.backend
            .remove(&[SOLVED_PUZZLES_KEY, STREAK_KEY, LAST_SOLVED_KEY])
    }

    fn load_puzzle_index(&self) -> Result<Option<u64>> {
        self.load_number(PUZZLE_INDEX_KEY)
    }

    fn save_puzzle_index(&mut self, index: u64) -> Result<()> {
        self.backend.set(PUZZLE_INDEX_KEY, &index.to_string())
    }

    fn load_history(&self) -> Result<Vec<HistoryEntry>> {
        self.load_list(SCAN_HISTORY_KEY)
    }

    fn save_history(&mut self, entries: &[HistoryEntry]) -> Result<()> {
        self.save_list(SCAN_HISTORY_KEY, entries)
    }

    fn clear_history(&mut self) -> Result<()> {
        self.backend.remove(&[SCAN_HISTORY_KEY])
    }

    fn load_notifications_enabled(&self) -> Result<Option<bool>> {
        match self.backend.get(NOTIFICATIONS_KEY)? {
            None => Ok(None),
            Some(raw) => match raw.trim() {
                "true" => Ok(Some(true)),
                "false" => Ok(Some(false)),
                other => Err(QrDailyError::read(
                    NOTIFICATIONS_KEY,
                    format!("expected \"true\" or \"false\", got {:?}", other),
                )),
            },
        }
    }

    fn save_notifications_enabled(&mut self, enabled: bool) -> Result<()> {
        self.backend
            .set(NOTIFICATIONS_KEY, if enabled { "true" } else { "false" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Puzzle, PuzzleCategory};
    use crate::store::memory::InMemoryStore;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn absent_keys_load_as_none_or_empty() {
        let store = InMemoryStore::new();
        assert_eq!(store.load_streak().unwrap(), None);
        assert_eq!(store.load_last_solved().unwrap(), None);
        assert!(store.load_solved().unwrap().is_empty());
        assert_eq!(store.load_puzzle_index().unwrap(), None);
        assert!(store.load_history().unwrap().is_empty());
        assert_eq!(store.load_notifications_enabled().unwrap(), None);
    }

    #[test]
    fn values_use_documented_encodings() {
        let mut store = InMemoryStore::new();
        store.save_streak(4).unwrap();
        store
            .save_last_solved(ts("2024-03-10T08:00:00+01:00"))
            .unwrap();
        store.save_puzzle_index(17).unwrap();
        store.save_notifications_enabled(true).unwrap();

        let backend = store.backend();
        assert_eq!(backend.raw(STREAK_KEY).as_deref(), Some("4"));
        assert_eq!(
            backend.raw(LAST_SOLVED_KEY).as_deref(),
            Some("2024-03-10T08:00:00+01:00")
        );
        assert_eq!(backend.raw(PUZZLE_INDEX_KEY).as_deref(), Some("17"));
        assert_eq!(backend.raw(NOTIFICATIONS_KEY).as_deref(), Some("true"));

        assert_eq!(store.load_streak().unwrap(), Some(4));
        assert_eq!(store.load_puzzle_index().unwrap(), Some(17));
        assert_eq!(store.load_notifications_enabled().unwrap(), Some(true));
    }

    #[test]
    fn solved_list_persists_as_json_array() {
        let mut store = InMemoryStore::new();
        let puzzle = Puzzle::new("q", "h", "a", "e", PuzzleCategory::Logic);
        let entry = SolvedEntry::new(puzzle, ts("2024-03-10T08:00:00Z"), 1);
        store.save_solved(std::slice::from_ref(&entry)).unwrap();

        let raw = store.backend().raw(SOLVED_PUZZLES_KEY).unwrap();
        assert!(raw.starts_with('['));
        assert_eq!(store.load_solved().unwrap(), vec![entry]);
    }

    #[test]
    fn corrupt_values_are_read_errors() {
        let store = InMemoryStore::new();
        store.backend().insert_raw(STREAK_KEY, "many");
        store.backend().insert_raw(SOLVED_PUZZLES_KEY, "{not json");
        store.backend().insert_raw(LAST_SOLVED_KEY, "yesterday");
        store.backend().insert_raw(NOTIFICATIONS_KEY, "yes");

        assert!(matches!(
            store.load_streak(),
            Err(QrDailyError::StorageRead { ref key, .. }) if key == STREAK_KEY
        ));
        assert!(matches!(
            store.load_solved(),
            Err(QrDailyError::StorageRead { .. })
        ));
        assert!(matches!(
            store.load_last_solved(),
            Err(QrDailyError::StorageRead { .. })
        ));
        assert!(matches!(
            store.load_notifications_enabled(),
            Err(QrDailyError::StorageRead { .. })
        ));
    }

    #[test]
    fn clear_history_removes_the_key() {
        let mut store = InMemoryStore::new();
        store.save_history(&[]).unwrap();
        assert!(store.backend().raw(SCAN_HISTORY_KEY).is_some());
        store.clear_history().unwrap();
        assert!(store.backend().raw(SCAN_HISTORY_KEY).is_none());
    }

    #[test]
    fn clear_progress_removes_tracker_keys_only() {
        let mut store = InMemoryStore::new();
        store.save_streak(3).unwrap();
        store.save_last_solved(ts("2024-03-10T09:00:00+00:00")).unwrap();
        store.save_solved(&[]).unwrap();
        store.save_puzzle_index(2).unwrap();
        store.save_history(&[]).unwrap();

        store.clear_progress().unwrap();

        assert!(store.backend().raw(STREAK_KEY).is_none());
        assert!(store.backend().raw(LAST_SOLVED_KEY).is_none());
        assert!(store.backend().raw(SOLVED_PUZZLES_KEY).is_none());
        assert_eq!(store.backend().raw(PUZZLE_INDEX_KEY).as_deref(), Some("2"));
        assert!(store.backend().raw(SCAN_HISTORY_KEY).is_some());
    }
}
