use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrDailyError {
    #[error("Storage read failed for '{key}': {reason}")]
    StorageRead { key: String, reason: String },

    #[error("Storage write failed for '{key}': {reason}")]
    StorageWrite { key: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl QrDailyError {
    pub fn read(key: &str, reason: impl ToString) -> Self {
        QrDailyError::StorageRead {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn write(key: &str, reason: impl ToString) -> Self {
        QrDailyError::StorageWrite {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QrDailyError>;
