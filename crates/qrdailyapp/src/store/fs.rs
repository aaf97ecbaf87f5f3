use super::app_store::AppStore;
use super::fs_backend::FsBackend;
use std::path::PathBuf;

pub type FileStore = AppStore<FsBackend>;

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        AppStore::with_backend(FsBackend::new(root))
    }
}
