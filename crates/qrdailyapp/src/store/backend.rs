use crate::error::Result;

/// Abstract interface for raw key-value storage.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while AppStore handles the "what" (keys, encodings, typed values).
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing is stored there.
    /// Returns Err only on actual failures (I/O, permissions).
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic per key (e.g. write to tmp then rename).
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove every listed key. Missing keys are not an error.
    fn remove(&self, keys: &[&str]) -> Result<()>;
}
