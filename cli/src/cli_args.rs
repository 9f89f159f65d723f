// Command-line argument parsing
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use saveswap::{Padding, SwapOptions, VALID_SIZES};
use tracing::level_filters::LevelFilter;

/// Logging levels selectable with -v/-q, quietest first.
const LOG_LEVELS: [LevelFilter; 6] = [
    LevelFilter::OFF,
    LevelFilter::ERROR,
    LevelFilter::WARN,
    LevelFilter::INFO,
    LevelFilter::DEBUG,
    LevelFilter::TRACE,
];
const DEFAULT_LOG_LEVEL: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "saveswap",
    version,
    about = "Translate Nintendo 64 save dumps between the byte orders used by dumpers, emulators and flash carts.",
    long_about = "Translate among the SRAM/EEPROM/Flash dump formats for Nintendo 64 cartridges as supported by various dumpers, emulators, and flash cartridges.\n\nEach file is rewritten in place after a backup copy is saved next to it with a .bak suffix.",
    after_help = after_help()
)]
pub struct Cli {
    /// Increase the verbosity. Use twice for extra effect.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Decrease the verbosity. Use twice for extra effect.
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Set the type of byte-swapping to be performed.
    #[arg(long, value_enum, default_value_t = SwapMode::Both)]
    pub swap_mode: SwapMode,

    /// Override autodetected padding size. This also disables the associated
    /// safety checks, allowing this tool to be used on other types of files.
    /// Specify 0 to disable padding entirely.
    #[arg(long = "force-padding", value_name = "NEW_SIZE")]
    pub pad_to: Option<u64>,

    /// Don't save a .bak copy of each file before rewriting it.
    #[arg(long)]
    pub no_backup: bool,

    /// One or more Nintendo 64 save memory dumps to byte-swap
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SwapMode {
    /// 12 34 -> 43 21
    Both,
    /// 12 34 -> 21 43
    BytesOnly,
    /// 12 34 -> 34 12
    WordsOnly,
}

impl SwapMode {
    /// Returns `(swap_bytes, swap_words)`.
    pub fn flags(self) -> (bool, bool) {
        match self {
            SwapMode::Both => (true, true),
            SwapMode::BytesOnly => (true, false),
            SwapMode::WordsOnly => (false, true),
        }
    }
}

impl Cli {
    pub fn swap_options(&self) -> SwapOptions {
        let (swap_bytes, swap_words) = self.swap_mode.flags();
        SwapOptions {
            swap_bytes,
            swap_words,
            padding: Padding::from(self.pad_to),
            backup: !self.no_backup,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        let index = DEFAULT_LOG_LEVEL + i32::from(self.verbose) - i32::from(self.quiet);
        LOG_LEVELS[index.clamp(0, LOG_LEVELS.len() as i32 - 1) as usize]
    }
}

fn after_help() -> String {
    let mut help = String::from(
        "The swap modes behave as follows:\n        both: 12 34 -> 43 21\n  bytes-only: 12 34 -> 21 43\n  words-only: 12 34 -> 34 12\n\nThe valid padding sizes for N64 save dumps are as follows:\n",
    );
    for size in VALID_SIZES {
        help.push_str(&format!("  {:>7}  ({})\n", size.bytes, size.label));
    }
    help
}
