//! Daily reminder opt-in. Only the flag lives here; scheduling the reminder
//! is up to the platform.

use super::helpers::{read_opt, write_logged};
use crate::store::DataStore;

pub fn get_notifications_enabled<S: DataStore>(store: &S) -> bool {
    read_opt(store.load_notifications_enabled(), "notifications flag").unwrap_or(false)
}

/// Returns the requested value, whether or not it could be persisted.
pub fn set_notifications_enabled<S: DataStore>(store: &mut S, enabled: bool) -> bool {
    write_logged(
        store.save_notifications_enabled(enabled),
        "notifications flag",
    );
    enabled
}
