//! Test data generation utilities for the splitr test suite

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write `lines` lines of the form `Line number: <i>` (newline-terminated).
pub fn create_test_file(dir: &Path, name: &str, lines: usize) -> PathBuf {
    let path = dir.join(name);
    let mut file = fs::File::create(&path).expect("Failed to create test file");
    for i in 0..lines {
        writeln!(file, "Line number: {}", i).expect("Failed to write test line");
    }
    path
}

/// Write raw bytes as the test input.
pub fn create_raw_file(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, data).expect("Failed to create test file");
    path
}

/// Expected shard path, computed independently of the library:
/// input + ('a' + i / 26) + ('a' + i % 26).
pub fn expected_shard_path(input: &Path, index: usize) -> PathBuf {
    let hi = (b'a' + (index / 26) as u8) as char;
    let lo = (b'a' + (index % 26) as u8) as char;
    PathBuf::from(format!("{}{}{}", input.display(), hi, lo))
}

/// All shards present on disk for `input`, in index order.
pub fn existing_shards(input: &Path) -> Vec<PathBuf> {
    (0..26 * 26)
        .map(|i| expected_shard_path(input, i))
        .take_while(|p| p.exists())
        .collect()
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("Failed to read shard")
        .lines()
        .map(|l| l.to_string())
        .collect()
}

pub fn concat_shards(shards: &[PathBuf]) -> Vec<u8> {
    let mut out = Vec::new();
    for shard in shards {
        out.extend(fs::read(shard).expect("Failed to read shard"));
    }
    out
}
