#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SAMPLE_FILE: &str = "./tests/data/sample.csv";
pub const EMPTY_FILE: &str = "./tests/data/empty_with_header.csv";
pub const PIPE_FILE: &str = "./tests/data/unordered_pipe.csv";

/// Write `content` into `name` under the temp dir and return its path.
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

pub fn assert_close(actual: f64, expected: f64, margin: f64) {
    assert!(
        (actual - expected).abs() < margin,
        "{} is not within {} of {}",
        actual,
        margin,
        expected
    );
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}
