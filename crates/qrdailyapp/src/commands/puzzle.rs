use super::helpers::{read_opt, write_logged};
use crate::catalog::PuzzleCatalog;
use crate::model::Puzzle;
use crate::store::DataStore;
use tracing::debug;

pub fn get_current_puzzle_index<S: DataStore>(store: &S) -> u64 {
    read_opt(store.load_puzzle_index(), "current puzzle index").unwrap_or(0)
}

/// Advance the index by one. The index never wraps; the catalog does that on
/// lookup.
pub fn increment_puzzle_index<S: DataStore>(store: &mut S) -> u64 {
    let next = get_current_puzzle_index(store).saturating_add(1);
    write_logged(store.save_puzzle_index(next), "current puzzle index");
    debug!(index = next, "advanced puzzle index");
    next
}

pub fn current_puzzle<'c, S: DataStore>(store: &S, catalog: &'c PuzzleCatalog) -> &'c Puzzle {
    catalog.get(get_current_puzzle_index(store))
}

/// Advance to the next puzzle and return it along with the new index.
pub fn next_puzzle<'c, S: DataStore>(
    store: &mut S,
    catalog: &'c PuzzleCatalog,
) -> (u64, &'c Puzzle) {
    let index = increment_puzzle_index(store);
    (index, catalog.get(index))
}
