use crate::error::Result;
use tracing::warn;

/// Collapse a failed read into `fallback`, logging what was lost.
pub fn read_or<T>(result: Result<T>, fallback: T, what: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "failed to read {}; using default", what);
            fallback
        }
    }
}

/// Like [`read_or`] for optional values: a failed read counts as absent.
pub fn read_opt<T>(result: Result<Option<T>>, what: &str) -> Option<T> {
    read_or(result, None, what)
}

/// Log a failed write and carry on. Returns whether the write landed.
pub fn write_logged(result: Result<()>, what: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "failed to persist {}", what);
            false
        }
    }
}
