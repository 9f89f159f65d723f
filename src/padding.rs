//! Target size inference for save dumps.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{LARGEST_VALID_SIZE, VALID_SIZES};

/// Returns the smallest valid dump size that can hold `length` bytes.
pub fn calculate_padding(length: u64) -> Result<u64> {
    VALID_SIZES
        .iter()
        .map(|size| size.bytes)
        .find(|&bytes| bytes >= length)
        .ok_or(Error::FileTooBig {
            size: length,
            max: LARGEST_VALID_SIZE,
        })
}

/// Like [`calculate_padding`], taking the length from an existing file.
pub fn calculate_padding_for_path(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let meta = fs::metadata(path).map_err(|source| Error::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    calculate_padding(meta.len())
}
