#![no_main]

use libfuzzer_sys::fuzz_target;
use slp_wire::length_prefix::{decode_length_prefix, prefix_width};

// Fuzz target: octet-count parsing.
//
// Catches bugs in:
// - Overflow on long digit runs
// - Offsets at or past the end of the buffer
//
// A successful parse with no leading zero must consume exactly
// prefix_width(value) digits.
fuzz_target!(|data: &[u8]| {
    for offset in 0..=data.len().min(4) {
        if let Ok((value, digits)) = decode_length_prefix(data, offset) {
            assert!(digits >= 1);
            if data[offset] != b'0' {
                assert_eq!(digits, prefix_width(value));
            }
        }
    }
});
