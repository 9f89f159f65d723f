#![no_main]
use libfuzzer_sys::fuzz_target;
use saveswap::{swap_in_place, transform};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte selects the swap flags and a padding slack; the rest is the dump.
    let swap_bytes = data[0] & 1 != 0;
    let swap_words = data[0] & 2 != 0;
    let slack = (data[0] >> 2) as u64;
    let dump = &data[1..];
    let pad_to = dump.len() as u64 + slack;

    let mut scratch = dump.to_vec();
    match swap_in_place(&mut scratch, swap_bytes, swap_words) {
        Ok(()) => {
            swap_in_place(&mut scratch, swap_bytes, swap_words).unwrap();
            assert_eq!(scratch, dump);
        }
        Err(_) => {
            assert_eq!(scratch, dump);
            return;
        }
    }

    let padded = transform(dump.to_vec(), swap_bytes, swap_words, pad_to).unwrap();
    assert_eq!(padded.len() as u64, pad_to);
    assert!(padded[dump.len()..].iter().all(|&b| b == 0));
});
