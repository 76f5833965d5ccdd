use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Writes the given files into a fresh temporary directory.
///
/// Also keeps the test run's log out of the user data directory.
pub fn write_fixture(files: &[(&str, &str)]) -> TempDir {
    koine_backend::logger::disable_file_log();

    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }
    dir
}

#[allow(dead_code)]
pub fn fixture_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

#[allow(dead_code)]
pub fn missing_path(dir: &TempDir) -> PathBuf {
    dir.path().join("does-not-exist")
}
