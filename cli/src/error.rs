//! Process exit codes.
//!
//! Exit codes:
//! - 0: every file succeeded
//! - 1: backup or write-back failed
//! - 10: input path missing or unreadable
//! - 20: file exceeds the largest valid size
//! - 30: file length not divisible by the swap increment
//!
//! Scripts branch on these values, so they must never be renumbered.

use std::process::ExitCode;

use saveswap::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    Success = 0,
    Failure = 1,
    MissingInput = 10,
    FileTooBig = 20,
    FileIncomplete = 30,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

impl From<&Error> for CliExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Unreadable { .. } => CliExitCode::MissingInput,
            Error::FileTooBig { .. } => CliExitCode::FileTooBig,
            Error::FileIncomplete { .. } => CliExitCode::FileIncomplete,
            Error::Io(_) | Error::PadTooLarge(_) => CliExitCode::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_error_mapping() {
        let missing = Error::Unreadable {
            path: PathBuf::from("x"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(CliExitCode::from(&missing), CliExitCode::MissingInput);
        assert_eq!(
            CliExitCode::from(&Error::FileTooBig { size: 1, max: 0 }),
            CliExitCode::FileTooBig
        );
        assert_eq!(
            CliExitCode::from(&Error::FileIncomplete { length: 5, divisor: 2 }),
            CliExitCode::FileIncomplete
        );
        assert_eq!(
            CliExitCode::from(&Error::Io(io::Error::other("disk full"))),
            CliExitCode::Failure
        );
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(CliExitCode::Success as u8, 0);
        assert_eq!(CliExitCode::MissingInput as u8, 10);
        assert_eq!(CliExitCode::FileTooBig as u8, 20);
        assert_eq!(CliExitCode::FileIncomplete as u8, 30);
    }
}
