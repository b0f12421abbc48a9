#![no_main]

use libfuzzer_sys::fuzz_target;
use slp_decoder::{BatchDecoder, DecodeError};

// Fuzz target: BatchDecoder::decode_str over arbitrary bodies.
//
// Input format:
//   byte 0: declared frame count
//   bytes 1..: body (must be UTF-8)
//
// Catches bugs in:
// - Cursor arithmetic on truncated or overlong frames
// - Slicing across multi-byte characters
// - Reconciliation of the count against the body
fuzz_target!(|data: &[u8]| {
    let Some((&count, rest)) = data.split_first() else {
        return;
    };
    let Ok(body) = std::str::from_utf8(rest) else {
        return;
    };

    match BatchDecoder::new().decode_str(usize::from(count), body) {
        Ok(decoded) => {
            assert_eq!(decoded.len(), usize::from(count));
            assert_eq!(decoded.consumed(), body.len());
        }
        Err(DecodeError::Overflow { parsed, .. }) => assert!(parsed < usize::from(count)),
        Err(_) => {}
    }
});
