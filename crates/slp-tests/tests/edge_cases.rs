//! Edge case integration tests for the batch decoder.
//!
//! Four categories of input that a relay can realistically send:
//!
//! - **Count mismatches**: the declared count is higher or lower than the
//!   number of frames in the body, including empty bodies and frames that
//!   declare more octets than the body holds.
//!
//! - **Broken framing**: a missing octet count, a missing separator, an
//!   oversized frame under a configured limit, and a frame boundary that
//!   lands inside a multi-byte character.
//!
//! - **Grammar failures**: a well-framed frame whose content is not a
//!   syslog record. Any failure is batch-fatal.
//!
//! - **Lenient content**: values the grammar accepts even though they are
//!   not meaningful syslog, such as a priority above 191.

use slp_decoder::{BatchDecoder, DecodeError, DecoderConfig, ErrorKind, FrameFault};
use slp_tests::{frame_all, golden};
use slp_types::GrammarError;
use slp_wire::WireError;

const HELLO: &str = "<34>1 2023-01-01T00:00:00Z myhost myapp 1234 - hello world";

fn decode(count: usize, body: &str) -> Result<slp_decoder::DecodedBatch, DecodeError> {
    BatchDecoder::new().decode_str(count, body)
}

// ── Count mismatches ──────────────────────────────────────────────────────────

#[test]
fn zero_count_empty_body() {
    let decoded = decode(0, "").expect("an empty batch is valid");
    assert!(decoded.is_empty());
}

#[test]
fn zero_count_with_frames_underflows() {
    let body = format!("58 {HELLO}");
    assert_eq!(
        decode(0, &body),
        Err(DecodeError::Underflow {
            expected: 0,
            consumed: 0,
            body_len: 61,
        })
    );
}

#[test]
fn nonzero_count_empty_body_overflows() {
    assert_eq!(
        decode(1, ""),
        Err(DecodeError::Overflow {
            expected: 1,
            parsed: 0,
            offset: 0,
        })
    );
}

#[test]
fn huge_declared_count_overflows_without_preallocating() {
    let body = format!("58 {HELLO}");
    let err = decode(usize::MAX, &body).unwrap_err();
    assert_eq!(
        err,
        DecodeError::Overflow {
            expected: usize::MAX,
            parsed: 1,
            offset: 61,
        }
    );
}

#[test]
fn truncated_last_frame_underflows() {
    // Declares 58 octets but only 52 follow the separator.
    let body = format!("58 {}", &HELLO[..52]);
    assert_eq!(
        decode(1, &body),
        Err(DecodeError::Underflow {
            expected: 1,
            consumed: 61,
            body_len: 55,
        })
    );
}

#[test]
fn truncated_last_frame_reports_overrun() {
    let body = format!("58 {}", &HELLO[..52]);
    assert_eq!(
        decode(1, &body).unwrap_err().to_string(),
        "message count 1 is inconsistent with body, last frame overran the body by 6 bytes"
    );
}

#[test]
fn truncated_frame_before_declared_end_overflows() {
    // The second frame claims 100 octets, which runs the cursor past the
    // end, so the third declared frame is never found.
    let body = format!("58 {HELLO}100 {HELLO}");
    assert_eq!(
        decode(3, &body),
        Err(DecodeError::Overflow {
            expected: 3,
            parsed: 2,
            offset: 165,
        })
    );
}

#[test]
fn overlong_count_misaligns_next_frame() {
    // 70 octets swallow the start of the next frame; decoding resumes in
    // the middle of its timestamp.
    let body = format!("70 {HELLO}58 {HELLO}");
    let err = decode(2, &body).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedFrame);
    assert!(matches!(
        err,
        DecodeError::MalformedFrame {
            index: 1,
            offset: 73,
            ..
        }
    ));
}

#[test]
fn golden_body_wrong_counts() {
    let body = golden("logplex");
    assert_eq!(decode(4, &body).unwrap_err().kind(), ErrorKind::Overflow);
    assert_eq!(decode(2, &body).unwrap_err().kind(), ErrorKind::Underflow);
    assert_eq!(decode(0, &body).unwrap_err().kind(), ErrorKind::Underflow);
}

// ── Broken framing ────────────────────────────────────────────────────────────

#[test]
fn missing_octet_count() {
    assert_eq!(
        decode(1, HELLO),
        Err(DecodeError::MalformedFrame {
            index: 0,
            offset: 0,
            cause: FrameFault::Wire(WireError::MissingLength { offset: 0 }),
        })
    );
}

#[test]
fn missing_separator() {
    let body = format!("58{HELLO}");
    assert_eq!(
        decode(1, &body),
        Err(DecodeError::MalformedFrame {
            index: 0,
            offset: 0,
            cause: FrameFault::Wire(WireError::MissingSeparator { offset: 2 }),
        })
    );
}

#[test]
fn garbage_between_frames() {
    let body = format!("58 {HELLO}\n58 {HELLO}");
    let err = decode(2, &body).unwrap_err();
    assert_eq!(
        err,
        DecodeError::MalformedFrame {
            index: 1,
            offset: 61,
            cause: FrameFault::Wire(WireError::MissingLength { offset: 61 }),
        }
    );
}

#[test]
fn frame_over_limit() {
    let body = format!("58 {HELLO}");
    let decoder = BatchDecoder::with_config(DecoderConfig::default().with_max_frame_len(32));
    assert_eq!(
        decoder.decode_str(1, &body),
        Err(DecodeError::MalformedFrame {
            index: 0,
            offset: 0,
            cause: FrameFault::Wire(WireError::FrameTooLarge {
                offset: 0,
                len: 58,
                limit: 32,
            }),
        })
    );

    // Exactly at the limit is accepted.
    let decoder = BatchDecoder::with_config(DecoderConfig::default().with_max_frame_len(58));
    assert!(decoder.decode_str(1, &body).is_ok());
}

#[test]
fn boundary_inside_multibyte_character() {
    // "é" is two bytes; a count of 1 ends the frame between them.
    let body = "1 é";
    assert_eq!(
        decode(1, body),
        Err(DecodeError::MalformedFrame {
            index: 0,
            offset: 0,
            cause: FrameFault::Wire(WireError::SplitCharacter { offset: 3 }),
        })
    );
}

// ── Grammar failures ──────────────────────────────────────────────────────────

#[test]
fn non_syslog_content_is_fatal() {
    let batch = frame_all(&[HELLO, "not a syslog line", HELLO]);
    let err = decode(batch.count, &batch.body).unwrap_err();
    assert_eq!(
        err,
        DecodeError::MalformedFrame {
            index: 1,
            offset: 61,
            cause: FrameFault::Grammar(GrammarError::NoMatch {
                preview: "not a syslog line".into(),
            }),
        }
    );
}

#[test]
fn empty_frame_is_malformed() {
    let err = decode(1, "0 ").unwrap_err();
    assert!(matches!(
        err,
        DecodeError::MalformedFrame {
            cause: FrameFault::Grammar(GrammarError::NoMatch { .. }),
            ..
        }
    ));
}

#[test]
fn missing_dash_is_malformed() {
    let content = "<34>1 2023-01-01T00:00:00Z myhost myapp 1234 hello world";
    let batch = frame_all(&[content]);
    assert_eq!(
        decode(1, &batch.body).unwrap_err().kind(),
        ErrorKind::MalformedFrame
    );
}

#[test]
fn error_message_names_frame() {
    let batch = frame_all(&[HELLO, "oops"]);
    let err = decode(2, &batch.body).unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed frame 1 at offset 61: frame does not match the syslog grammar: \"oops\""
    );
}

// ── Lenient content ───────────────────────────────────────────────────────────

#[test]
fn out_of_range_priority_still_decodes() {
    let batch = frame_all(&["<999>1 2023-01-01T00:00:00Z h a p - m"]);
    let decoded = decode(1, &batch.body).unwrap();
    let record = &decoded.records[0];
    assert_eq!(record.priority, "999");
    assert_eq!(
        record.priority_value(),
        Err(GrammarError::PriorityOutOfRange { value: 999 })
    );
}

#[test]
fn leading_zeros_in_count() {
    let body = format!("058 {HELLO}");
    let decoded = decode(1, &body).unwrap();
    assert_eq!(decoded.frames[0].prefix_len, 3);
    assert_eq!(decoded.frames[0].content_len, 58);
}

#[test]
fn trailing_text_after_newline_ignored() {
    let content = format!("{HELLO}\nsecond line");
    let batch = frame_all(&[content.as_str()]);
    let decoded = decode(1, &batch.body).unwrap();
    assert_eq!(decoded.records[0].message, "hello world");
}
