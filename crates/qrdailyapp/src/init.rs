//! # Context Initialization
//!
//! Wires the production collaborators together: data directory, config,
//! puzzle catalog, file store and system clock.
//!
//! ## Data Directory Resolution
//!
//! 1. An explicit override (the CLI's `--data-dir`).
//! 2. The `QRDAILY_DATA` environment variable.
//! 3. The OS data directory from the `directories` crate
//!    (e.g. `~/.local/share/qrdaily` on Linux).
//!
//! The directory is created lazily on first write.

use crate::api::QrDailyApi;
use crate::catalog::PuzzleCatalog;
use crate::clock::SystemClock;
use crate::config::QrDailyConfig;
use crate::error::{QrDailyError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DATA_DIR_ENV: &str = "QRDAILY_DATA";

pub struct QrDailyContext {
    pub api: QrDailyApi<FileStore, SystemClock>,
    pub config: QrDailyConfig,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_override {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "qrdaily", "qrdaily")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| QrDailyError::Config("Could not determine a data directory".to_string()))
}

/// Resolve a catalog path from config. Relative paths are taken from the
/// data directory.
fn load_catalog(data_dir: &Path, config: &QrDailyConfig) -> Result<PuzzleCatalog> {
    match &config.catalog_path {
        None => Ok(PuzzleCatalog::builtin()),
        Some(path) => {
            let path = if path.is_relative() {
                data_dir.join(path)
            } else {
                path.clone()
            };
            debug!(path = %path.display(), "loading puzzle catalog");
            PuzzleCatalog::load(&path)
        }
    }
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<QrDailyContext> {
    let data_dir = resolve_data_dir(data_override)?;
    debug!(data_dir = %data_dir.display(), "initializing");

    let config = QrDailyConfig::load(&data_dir)?;
    let catalog = load_catalog(&data_dir, &config)?;
    let store = FileStore::new(data_dir.clone());
    let api = QrDailyApi::new(store, SystemClock, catalog, data_dir);

    Ok(QrDailyContext { api, config })
}
