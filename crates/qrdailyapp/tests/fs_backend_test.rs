use qrdailyapp::store::backend::StorageBackend;
use qrdailyapp::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("data"));
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    // 1. Absent
    assert_eq!(backend.get("streak").unwrap(), None);

    // 2. Write creates the directory lazily
    backend.set("streak", "3").unwrap();
    assert_eq!(backend.get("streak").unwrap(), Some("3".to_string()));

    // 3. Overwrite
    backend.set("streak", "4").unwrap();
    assert_eq!(backend.get("streak").unwrap(), Some("4".to_string()));

    // 4. Remove
    backend.remove(&["streak"]).unwrap();
    assert_eq!(backend.get("streak").unwrap(), None);
}

#[test]
fn test_fs_backend_one_file_per_key() {
    let (dir, backend) = setup();
    backend.set("streak", "1").unwrap();
    backend.set("last_solved", "2024-03-10T09:00:00+00:00").unwrap();

    let root = dir.path().join("data");
    assert_eq!(fs::read_to_string(root.join("streak")).unwrap(), "1");
    assert_eq!(
        fs::read_to_string(root.join("last_solved")).unwrap(),
        "2024-03-10T09:00:00+00:00"
    );
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();
    backend.set("scan_history", "[]").unwrap();

    for entry in fs::read_dir(dir.path().join("data")).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_remove_missing_is_ok() {
    let (_dir, backend) = setup();
    backend.remove(&["streak", "scan_history"]).unwrap();
}

#[test]
fn test_fs_backend_rejects_path_like_keys() {
    let (_dir, backend) = setup();
    assert!(backend.set("../escape", "x").is_err());
    assert!(backend.get("a/b").is_err());
    assert!(backend.set("", "x").is_err());
}

#[test]
fn test_fs_backend_read_failure_is_error() {
    let (dir, backend) = setup();
    // A directory where a value file should be cannot be read as a string
    fs::create_dir_all(dir.path().join("data").join("streak")).unwrap();
    assert!(backend.get("streak").is_err());
}
