//! Byte and half-word reordering for save dumps.
//!
//! Two independent operations can be applied to a dump:
//!
//! - byte swap: `12 34 -> 21 43`, the two bytes of every 16-bit unit trade
//!   places.
//! - word swap: `12 34 -> 34 12`, the two half-words of every 32-bit unit
//!   trade places while keeping their internal byte order.
//!
//! Applied together they reverse every 32-bit unit (`12 34 -> 43 21`).

use tracing::debug;

use crate::error::{Error, Result};

/// Fails unless `length` is a multiple of `divisor`. `divisor` must be non-zero.
#[inline]
pub(crate) fn check_alignment(length: usize, divisor: usize) -> Result<()> {
    if length % divisor != 0 {
        return Err(Error::FileIncomplete {
            length: length as u64,
            divisor: divisor as u64,
        });
    }
    Ok(())
}

/// Exchanges the bytes of every 16-bit unit in place.
pub fn swap_bytes_in_place(buffer: &mut [u8]) -> Result<()> {
    check_alignment(buffer.len(), 2)?;
    for pair in buffer.chunks_exact_mut(2) {
        pair.swap(0, 1);
    }
    Ok(())
}

/// Exchanges the half-words of every 32-bit unit in place.
pub fn swap_words_in_place(buffer: &mut [u8]) -> Result<()> {
    check_alignment(buffer.len(), 4)?;
    for word in buffer.chunks_exact_mut(4) {
        word.rotate_left(2);
    }
    Ok(())
}

/// Applies the requested swaps in place.
///
/// Every alignment requirement is checked against the untouched buffer
/// before any byte moves, so an error leaves `buffer` unchanged.
pub fn swap_in_place(buffer: &mut [u8], swap_bytes: bool, swap_words: bool) -> Result<()> {
    let length = buffer.len();
    if swap_bytes {
        check_alignment(length, 2)?;
    }
    if swap_words {
        check_alignment(length, 4)?;
    }

    if swap_bytes {
        swap_bytes_in_place(buffer)?;
    }
    if swap_words {
        swap_words_in_place(buffer)?;
    }
    Ok(())
}

/// Swaps `buffer` as requested, then zero-pads it up to `pad_to` bytes.
///
/// A `pad_to` at or below the current length leaves the length unchanged.
pub fn transform(
    mut buffer: Vec<u8>,
    swap_bytes: bool,
    swap_words: bool,
    pad_to: u64,
) -> Result<Vec<u8>> {
    let length = buffer.len();
    swap_in_place(&mut buffer, swap_bytes, swap_words)?;

    if pad_to > length as u64 {
        let target = usize::try_from(pad_to).map_err(|_| Error::PadTooLarge(pad_to))?;
        buffer
            .try_reserve_exact(target - length)
            .map_err(|_| Error::PadTooLarge(pad_to))?;
        debug!(from = length, to = target, "padding dump");
        buffer.resize(target, 0);
    }

    Ok(buffer)
}
