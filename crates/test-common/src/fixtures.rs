//! On-disk fixtures.

use std::{fs, path::PathBuf};

use tempfile::TempDir;

/// Write a drover config file with the given YAML contents and return its
/// path.
pub fn create_config_file(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.yaml");
    fs::write(&path, contents).expect("write config fixture");
    path
}
