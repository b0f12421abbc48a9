//! Shared fixtures for the slp integration tests, benches and the golden
//! generator.
//!
//! The golden bodies under `tests/golden/` are written by
//! `src/bin/generate_golden.rs` from the frame lists below, so a test can
//! either read the committed file or rebuild the body in memory and get
//! the same bytes.

use std::path::{Path, PathBuf};

use slp_encoder::{BatchEncoder, EncodedBatch};
use slp_types::Record;

/// Three Heroku Logplex drain frames, each ending in a line feed the way
/// the router sends them.
pub const LOGPLEX_FRAMES: [&str; 3] = [
    "<158>1 2012-10-11T03:47:20+00:00 host heroku router - at=info method=GET path=/ host=example.herokuapp.com status=200 bytes=1337\n",
    "<190>1 2012-10-11T03:47:21+00:00 host app web.1 - Started GET \"/\" for 127.0.0.1\n",
    "<45>1 2012-10-11T03:47:22+00:00 host heroku web.1 - State changed from starting to up\n",
];

/// RFC 5424 §6.5 example messages with the structured-data and MSGID
/// parts folded away, plus the canonical single-record example.
pub const RFC5424_FRAMES: [&str; 3] = [
    "<34>1 2003-10-11T22:14:15.003Z mymachine.example.com su - - 'su root' failed for lonvick on /dev/pts/8",
    "<165>1 2003-08-24T05:14:15.000003-07:00 192.0.2.1 myproc 8710 - %% It's time to make the do-nuts.",
    "<34>1 2023-01-01T00:00:00Z myhost myapp 1234 - hello world",
];

/// Golden fixture names and the frames they are built from.
pub const GOLDEN: [(&str, &[&str]); 2] = [("logplex", &LOGPLEX_FRAMES), ("rfc5424", &RFC5424_FRAMES)];

/// Path of `tests/golden/<name>/body.log`.
pub fn golden_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden")
        .join(name)
        .join("body.log")
}

/// Read a committed golden body.
pub fn golden(name: &str) -> String {
    let path = golden_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden fixture {}: {e}", path.display()))
}

/// Frame raw contents verbatim.
pub fn frame_all(frames: &[&str]) -> EncodedBatch {
    let mut encoder = BatchEncoder::new();
    for frame in frames {
        encoder.add_frame(frame);
    }
    encoder.encode().expect("at least one frame")
}

/// Encode records through the validating path.
pub fn encode_records(records: &[Record]) -> EncodedBatch {
    let mut encoder = BatchEncoder::new();
    for record in records {
        encoder.add_record(record);
    }
    encoder.encode().expect("records are valid")
}

/// A deterministic, well-formed record; `i` varies every field.
pub fn sample_record(i: usize) -> Record {
    Record {
        priority: (i % 192).to_string(),
        syslog_version: "1".into(),
        timestamp: format!("2024-03-{:02}T12:00:{:02}.{i:06}Z", i % 28 + 1, i % 60),
        host: format!("host-{}", i % 7),
        app_name: format!("app{}", i % 3),
        process_name: format!("web.{i}"),
        message: format!("request {i} handled in {} ms - status=200", i * 3 % 997),
    }
}

/// `n` sample records.
pub fn sample_records(n: usize) -> Vec<Record> {
    (0..n).map(sample_record).collect()
}
