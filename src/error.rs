//! Error types for save dump operations.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can occur while swapping or padding a dump.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while writing the backup or the replacement file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file is missing or could not be read.
    #[error("Cannot read '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is bigger than the largest entry in the valid size table.
    #[error("File already exceeds largest valid size. ({size} > {max})")]
    FileTooBig { size: u64, max: u64 },

    /// File length is not a multiple of the requested swap increment.
    #[error("File length is not divisible by {divisor}: {length}")]
    FileIncomplete { length: u64, divisor: u64 },

    /// Explicit padding target cannot be held in memory on this platform.
    #[error("Padding target {0} is too large to allocate")]
    PadTooLarge(u64),
}

impl Error {
    /// True when the input path does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::Unreadable { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_messages_carry_diagnostics() {
        let err = Error::FileTooBig {
            size: 400000,
            max: 131072,
        };
        assert_eq!(
            err.to_string(),
            "File already exceeds largest valid size. (400000 > 131072)"
        );

        let err = Error::FileIncomplete {
            length: 5,
            divisor: 2,
        };
        assert_eq!(err.to_string(), "File length is not divisible by 2: 5");
    }

    #[test]
    fn test_is_not_found() {
        let missing = Error::Unreadable {
            path: PathBuf::from("missing.eep"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(missing.is_not_found());

        let denied = Error::Unreadable {
            path: PathBuf::from("locked.eep"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(!denied.is_not_found());
        assert!(!Error::PadTooLarge(1).is_not_found());
    }
}
