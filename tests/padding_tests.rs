use saveswap::{Error, LARGEST_VALID_SIZE, VALID_SIZES, calculate_padding, calculate_padding_for_path};

mod common;
use common::data_generators::*;

#[test]
fn padding_matches_original_scenarios() {
    for (reps, expected) in [(100, 512), (500, 2048), (1000, 32768), (10000, 131072)] {
        assert_eq!(calculate_padding(4 * reps).unwrap(), expected);
    }
}

#[test]
fn padding_is_smallest_fitting_size() {
    for length in (0..=LARGEST_VALID_SIZE).step_by(509) {
        let target = calculate_padding(length).unwrap();
        assert!(target >= length);
        assert!(VALID_SIZES.iter().any(|s| s.bytes == target));
        assert!(
            VALID_SIZES
                .iter()
                .filter(|s| s.bytes >= length)
                .all(|s| s.bytes >= target)
        );
    }
}

#[test]
fn padding_rejects_oversize() {
    for length in [LARGEST_VALID_SIZE + 1, 400000, u64::MAX] {
        match calculate_padding(length) {
            Err(Error::FileTooBig { size, max }) => {
                assert_eq!(size, length);
                assert_eq!(max, LARGEST_VALID_SIZE);
            }
            other => panic!("expected FileTooBig, got {other:?}"),
        }
    }
}

#[test]
fn padding_for_path_uses_file_length() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dump(dir.path(), "fake_dump", &make_pattern(1000));
    assert_eq!(calculate_padding_for_path(&path).unwrap(), 32768);

    let path = write_dump(dir.path(), "too_big", &make_pattern(100000));
    assert!(matches!(
        calculate_padding_for_path(&path),
        Err(Error::FileTooBig { size: 400000, .. })
    ));
}
