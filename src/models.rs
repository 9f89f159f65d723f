/// A dump size known to match real cartridge save hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidSize {
    pub bytes: u64,
    pub label: &'static str,
}

/// Known-good dump sizes, smallest first.
///
/// The padding calculator relies on this ordering to pick the smallest size
/// that fits, so entries must stay ascending and word aligned.
pub const VALID_SIZES: &[ValidSize] = &[
    ValidSize { bytes: 512, label: "4kbit EEPROM" },
    ValidSize { bytes: 2048, label: "16kbit EEPROM" },
    ValidSize { bytes: 32768, label: "256kbit SRAM" },
    ValidSize { bytes: 131072, label: "1Mbit SRAM/Flash" },
];

pub const LARGEST_VALID_SIZE: u64 = VALID_SIZES[VALID_SIZES.len() - 1].bytes;

const fn sizes_are_valid(sizes: &[ValidSize]) -> bool {
    if sizes.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < sizes.len() {
        let bytes = sizes[i].bytes;
        if bytes == 0 || bytes % 4 != 0 {
            return false;
        }
        if i > 0 && sizes[i - 1].bytes >= bytes {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    sizes_are_valid(VALID_SIZES),
    "VALID_SIZES must be non-empty, ascending and divisible by 4"
);

/// Returns the hardware description for a valid dump size.
pub fn size_label(bytes: u64) -> Option<&'static str> {
    VALID_SIZES
        .iter()
        .find(|size| size.bytes == bytes)
        .map(|size| size.label)
}

/// How the output length is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    /// Pad up to the smallest valid size that fits, rejecting oversized files.
    #[default]
    Auto,
    /// Leave the length alone.
    Disabled,
    /// Pad to exactly this many bytes, skipping the valid size checks.
    Exact(u64),
}

impl From<Option<u64>> for Padding {
    fn from(value: Option<u64>) -> Self {
        match value {
            None => Padding::Auto,
            Some(0) => Padding::Disabled,
            Some(n) => Padding::Exact(n),
        }
    }
}

/// Settings applied to every file in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOptions {
    /// Exchange the two bytes of every 16-bit unit.
    pub swap_bytes: bool,
    /// Exchange the two half-words of every 32-bit unit.
    pub swap_words: bool,
    pub padding: Padding,
    /// Copy the original to `<path>.bak` before rewriting it.
    pub backup: bool,
}

impl Default for SwapOptions {
    fn default() -> Self {
        SwapOptions {
            swap_bytes: true,
            swap_words: true,
            padding: Padding::Auto,
            backup: true,
        }
    }
}
