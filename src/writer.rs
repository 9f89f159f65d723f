//! Backup and write-back of dump files.

use std::ffi::OsString;
use std::fs::{self, File, FileTimes};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::Result;

/// Appended to the input path to name its backup.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Returns `<path>.bak`.
pub fn backup_path(path: impl AsRef<Path>) -> PathBuf {
    let mut name = OsString::from(path.as_ref().as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Copies `path` to its backup location, keeping permissions and timestamps.
///
/// An existing backup is overwritten.
pub fn write_backup(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let backup = backup_path(path);

    let mut source = File::open(path)?;
    let meta = source.metadata()?;
    let mut dest = File::create(&backup)?;
    io::copy(&mut source, &mut dest)?;

    let mut times = FileTimes::new();
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    dest.set_times(times)?;
    dest.set_permissions(meta.permissions())?;
    dest.sync_all()?;

    debug!(backup = %backup.display(), "wrote backup");
    Ok(backup)
}

/// Replaces the contents of `path` with `data`.
///
/// The data goes to a temporary file in the same directory which is then
/// renamed over `path`, so readers see either the old or the new contents.
/// Symlinks are followed; the file they point at is the one replaced.
pub fn replace_contents(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let path = match fs::canonicalize(path.as_ref()) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == io::ErrorKind::NotFound => path.as_ref().to_path_buf(),
        Err(e) => return Err(e.into()),
    };
    let path = path.as_path();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(e.into()),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    if let Some(permissions) = permissions {
        tmp.as_file().set_permissions(permissions)?;
    }
    tmp.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), bytes = data.len(), "replaced file contents");
    Ok(())
}
