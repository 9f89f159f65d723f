//! Byte-swapping and padding for Nintendo 64 save memory dumps.
//!
//! Dumpers, emulators and flash carts disagree on the byte order of EEPROM,
//! SRAM and Flash saves. This crate reorders a dump between those layouts and
//! pads it to a size the target expects.

pub mod error;
pub mod models;
pub mod padding;
pub mod process;
pub mod swap;
pub mod writer;

pub use error::{Error, Result};
pub use models::{LARGEST_VALID_SIZE, Padding, SwapOptions, VALID_SIZES, ValidSize, size_label};
pub use padding::{calculate_padding, calculate_padding_for_path};
pub use process::{ProcessOutcome, process_path, read_dump};
pub use swap::{swap_bytes_in_place, swap_in_place, swap_words_in_place, transform};
pub use writer::{BACKUP_SUFFIX, backup_path};
