//! Tests that change the process working directory. Kept in their own binary
//! and serialized, since the working directory is shared by every thread.

use std::fs;
use std::sync::Mutex;

use extfind::{find_files, FindError, Signal};

static CWD: Mutex<()> = Mutex::new(());

#[test]
fn find_files_searches_the_working_directory() {
    let _lock = CWD.lock().unwrap_or_else(|e| e.into_inner());
    let original = std::env::current_dir().unwrap();

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "").unwrap();
    fs::create_dir(dir.path().join("var")).unwrap();
    fs::write(dir.path().join("var").join("c.go"), "").unwrap();

    std::env::set_current_dir(dir.path()).unwrap();
    let cwd = std::env::current_dir().unwrap();
    let result = find_files(&Signal::never(), &Signal::fired(), ".go");
    std::env::set_current_dir(&original).unwrap();

    let results = result.unwrap();
    assert_eq!(results.files.len(), 1);
    assert_eq!(results.files["c.go"].path, cwd.join("var").join("c.go"));
}

#[cfg(target_os = "linux")]
#[test]
fn deleted_working_directory_is_an_error() {
    let _lock = CWD.lock().unwrap_or_else(|e| e.into_inner());
    let original = std::env::current_dir().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let doomed = dir.path().join("doomed");
    fs::create_dir(&doomed).unwrap();
    std::env::set_current_dir(&doomed).unwrap();
    fs::remove_dir(&doomed).unwrap();

    let result = find_files(&Signal::never(), &Signal::fired(), ".go");
    std::env::set_current_dir(&original).unwrap();

    let err = result.unwrap_err();
    assert!(matches!(err, FindError::WorkingDirectory(_)));
    assert!(err.is_fatal());
}
