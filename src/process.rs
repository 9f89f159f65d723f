//! Per-file pipeline: read, size, swap, back up, write back.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::models::{Padding, SwapOptions, size_label};
use crate::padding::calculate_padding;
use crate::swap::transform;
use crate::writer::{replace_contents, write_backup};

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub original_len: u64,
    pub final_len: u64,
    pub backup: Option<PathBuf>,
}

/// Reads a whole dump into memory.
pub fn read_dump(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| Error::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves the padding request for a dump of `length` bytes.
pub fn resolve_padding(padding: Padding, length: u64) -> Result<u64> {
    match padding {
        Padding::Auto => calculate_padding(length),
        Padding::Disabled => Ok(0),
        Padding::Exact(target) => {
            if target < length {
                warn!(pad_to = target, length, "padding target is smaller than the file; not truncating");
            }
            Ok(target)
        }
    }
}

/// Swaps and pads the file at `path` in place.
///
/// All checks run before the backup is written or the original is touched,
/// so an error leaves the file exactly as it was and creates no backup.
pub fn process_path(path: impl AsRef<Path>, options: &SwapOptions) -> Result<ProcessOutcome> {
    let path = path.as_ref();
    let data = read_dump(path)?;
    let original_len = data.len() as u64;
    debug!(path = %path.display(), bytes = original_len, "read dump");

    let pad_to = resolve_padding(options.padding, original_len)?;
    let data = transform(data, options.swap_bytes, options.swap_words, pad_to)?;

    let backup = if options.backup {
        Some(write_backup(path)?)
    } else {
        None
    };
    replace_contents(path, &data)?;

    let final_len = data.len() as u64;
    match size_label(final_len) {
        Some(label) => info!(
            path = %path.display(),
            "{} -> {} bytes ({})",
            original_len,
            final_len,
            label
        ),
        None => info!(path = %path.display(), "{} -> {} bytes", original_len, final_len),
    }

    Ok(ProcessOutcome {
        original_len,
        final_len,
        backup,
    })
}
