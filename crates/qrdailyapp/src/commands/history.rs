//! # Scan History Log
//!
//! The most recent scans, newest first, capped at [`HISTORY_CAPACITY`]. Adding
//! a scan past the cap drops the oldest entry from the tail. Every scan gets
//! its own entry, even if the same payload was scanned before.
//!
//! Entry ids are UUID v7 strings: unique, and ordered by creation time.

use super::helpers::{read_or, write_logged};
use crate::clock::Clock;
use crate::model::{HistoryEntry, NewScan};
use crate::store::DataStore;
use tracing::debug;
use uuid::Uuid;

pub const HISTORY_CAPACITY: usize = 20;

pub fn get_history<S: DataStore>(store: &S) -> Vec<HistoryEntry> {
    read_or(store.load_history(), Vec::new(), "scan history")
}

pub fn add_to_history<S: DataStore, C: Clock>(
    store: &mut S,
    clock: &C,
    scan: NewScan,
) -> Vec<HistoryEntry> {
    let entry = HistoryEntry {
        id: Uuid::now_v7().to_string(),
        kind: scan.kind,
        data: scan.data,
        category: scan.category,
        timestamp: clock.now(),
    };
    debug!(id = %entry.id, category = %entry.category, "recording scan");

    let mut history = get_history(store);
    history.insert(0, entry);
    history.truncate(HISTORY_CAPACITY);
    write_logged(store.save_history(&history), "scan history");
    history
}

/// Remove the whole log. Returns false if the store could not remove it.
pub fn clear_history<S: DataStore>(store: &mut S) -> bool {
    write_logged(store.clear_history(), "cleared scan history")
}

/// Drop the entry with `id`. Unknown ids leave the log untouched.
pub fn delete_history_item<S: DataStore>(store: &mut S, id: &str) -> Vec<HistoryEntry> {
    let mut history = get_history(store);
    let before = history.len();
    history.retain(|entry| entry.id != id);
    if history.len() != before {
        write_logged(store.save_history(&history), "scan history");
    }
    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use chrono::{DateTime, Duration};
    use std::collections::HashSet;

    fn scan(data: &str) -> NewScan {
        NewScan::new("qr", data, "text")
    }

    #[test]
    fn add_prepends_with_id_and_timestamp() {
        let mut store = InMemoryStore::new();
        let clock = FixedClock::at("2024-03-10T09:00:00+00:00").unwrap();

        add_to_history(&mut store, &clock, scan("first"));
        clock.advance(Duration::seconds(5));
        let history = add_to_history(&mut store, &clock, scan("second"));

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].data, "second");
        assert_eq!(history[0].kind, "qr");
        assert_eq!(history[0].timestamp, clock.now());
        assert_eq!(history[1].data, "first");
        assert_ne!(history[0].id, history[1].id);
        assert_eq!(get_history(&store), history);
    }

    #[test]
    fn never_exceeds_capacity_and_evicts_oldest() {
        let mut store = InMemoryStore::new();
        let clock = FixedClock::at("2024-03-10T09:00:00+00:00").unwrap();

        for i in 1..=HISTORY_CAPACITY {
            let history = add_to_history(&mut store, &clock, scan(&format!("scan {}", i)));
            assert_eq!(history.len(), i);
        }

        let history = add_to_history(&mut store, &clock, scan("scan 21"));
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history[0].data, "scan 21");
        assert_eq!(history[HISTORY_CAPACITY - 1].data, "scan 2");
        assert!(history.iter().all(|e| e.data != "scan 1"));
        assert_eq!(get_history(&store).len(), HISTORY_CAPACITY);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut store = InMemoryStore::new();
        let clock = FixedClock::at("2024-03-10T09:00:00+00:00").unwrap();
        add_to_history(&mut store, &clock, scan("same"));
        let history = add_to_history(&mut store, &clock, scan("same"));
        assert_eq!(history.len(), 2);
        let ids: HashSet<_> = history.iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn delete_removes_matching_entry() {
        let latest = DateTime::parse_from_rfc3339("2024-03-10T09:00:00Z").unwrap();
        let mut fixture = StoreFixture::new().with_scans(3, latest);

        let remaining = delete_history_item(&mut fixture.store, "scan-2");
        let ids: Vec<_> = remaining.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["scan-3", "scan-1"]);
        assert_eq!(get_history(&fixture.store), remaining);
    }

    #[test]
    fn delete_unknown_id_returns_history_unchanged() {
        let latest = DateTime::parse_from_rfc3339("2024-03-10T09:00:00Z").unwrap();
        let mut fixture = StoreFixture::new().with_scans(3, latest);
        let before = get_history(&fixture.store);

        let after = delete_history_item(&mut fixture.store, "nope");
        assert_eq!(after, before);
    }

    #[test]
    fn clear_removes_everything() {
        let latest = DateTime::parse_from_rfc3339("2024-03-10T09:00:00Z").unwrap();
        let mut fixture = StoreFixture::new().with_scans(5, latest);

        assert!(clear_history(&mut fixture.store));
        assert!(get_history(&fixture.store).is_empty());
        assert!(fixture.store.backend().raw("scan_history").is_none());
    }

    #[test]
    fn clear_reports_failure() {
        let mut store = InMemoryStore::new();
        store.backend().set_simulate_write_error(true);
        assert!(!clear_history(&mut store));
    }

    #[test]
    fn unreadable_history_reads_as_empty() {
        let mut store = InMemoryStore::new();
        store.backend().insert_raw("scan_history", "[{broken");
        assert!(get_history(&store).is_empty());

        // A new scan starts a fresh log over the corrupt one
        let clock = FixedClock::at("2024-03-10T09:00:00+00:00").unwrap();
        let history = add_to_history(&mut store, &clock, scan("fresh"));
        assert_eq!(history.len(), 1);
        assert_eq!(get_history(&store).len(), 1);
    }
}
