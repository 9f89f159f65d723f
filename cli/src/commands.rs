//! Command handlers for the saveswap CLI

use std::path::Path;

use saveswap::{Error, SwapOptions, process_path};
use tracing::{debug, error};

use crate::cli_args::Cli;
use crate::error::CliExitCode;

/// Processes every path on the command line.
///
/// A failing file is logged and skipped. The exit code reflects the last
/// failure seen, or success if there was none.
pub fn run(cli: &Cli) -> CliExitCode {
    let options = cli.swap_options();
    debug!(?options, files = cli.paths.len(), "starting");

    let mut code = CliExitCode::Success;
    for path in &cli.paths {
        if let Err(e) = process_one(path, &options) {
            report_failure(path, &e);
            code = CliExitCode::from(&e);
        }
    }
    code
}

fn process_one(path: &Path, options: &SwapOptions) -> Result<(), Error> {
    let outcome = process_path(path, options)?;
    if let Some(backup) = &outcome.backup {
        debug!(backup = %backup.display(), "original preserved");
    }
    Ok(())
}

fn report_failure(path: &Path, err: &Error) {
    match err {
        e if e.is_not_found() => error!("File not found: {}", path.display()),
        Error::Unreadable { .. } => error!("{}", err),
        Error::FileTooBig { .. } => error!(
            "{}: {} Use --force-padding to override.",
            path.display(),
            err
        ),
        _ => error!("{}: {}", path.display(), err),
    }
}
