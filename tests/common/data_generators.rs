use std::fs;
use std::path::{Path, PathBuf};

/// `"1234"` repeated `reps` times, the layout used by the scenario tests.
pub fn make_pattern(reps: usize) -> Vec<u8> {
    b"1234".repeat(reps)
}

/// `n` bytes that differ at every offset within a 256-byte window.
pub fn make_counting_data(n: usize) -> Vec<u8> {
    (0..n).map(|i| (i % 256) as u8).collect()
}

/// `data` followed by zeros up to `len` bytes.
pub fn padded(mut data: Vec<u8>, len: usize) -> Vec<u8> {
    data.resize(len, 0);
    data
}

/// Writes `data` to `name` inside `dir` and returns the path.
pub fn write_dump(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, data).unwrap();
    path
}
