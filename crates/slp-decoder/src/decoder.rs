use slp_types::FrameGrammar;
use slp_wire::read_frame;
use tracing::{debug, trace};

use crate::batch::{Batch, DecodedBatch, FrameSpan};
use crate::config::DecoderConfig;
use crate::error::{DecodeError, FrameFault};

/// Synchronous batch decoder: splits an octet-counted body into frames
/// and each frame into a [`Record`](slp_types::Record).
///
/// Decoding runs `expected_count` iterations over a byte cursor:
///
///   1. **Overflow check**: a cursor at or past the end of the body
///      means fewer frames exist than declared.
///   2. **Frame**: read the octet count and separator, then slice the
///      content (leniently, if the body is short). See
///      [`slp_wire::read_frame`].
///   3. **Advance** the cursor by the declared count, not by what was
///      actually sliced.
///   4. **Grammar**: match the content with [`FrameGrammar`].
///
/// After the loop the cursor must sit exactly at the end of the body
/// (reconciliation). Any failure discards every record built so far.
///
/// # Example
///
/// ```rust
/// use slp_decoder::{BatchDecoder, ErrorKind};
///
/// let body = "58 <34>1 2023-01-01T00:00:00Z myhost myapp 1234 - hello world";
///
/// let decoded = BatchDecoder::new().decode_str(1, body).unwrap();
/// assert_eq!(decoded.records[0].message, "hello world");
///
/// let err = BatchDecoder::new().decode_str(2, body).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Overflow);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BatchDecoder {
    config: DecoderConfig,
}

impl BatchDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a [`Batch`].
    ///
    /// # Errors
    ///
    /// See [`decode_str`](Self::decode_str).
    pub fn decode(&self, batch: &Batch) -> Result<DecodedBatch, DecodeError> {
        self.decode_str(batch.expected_count(), batch.body())
    }

    /// Decode `expected_count` frames from `body`.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Overflow`] if the body runs out before
    ///   `expected_count` frames are read.
    /// - [`DecodeError::Underflow`] if bytes remain after the last
    ///   declared frame (or the last frame overran the body).
    /// - [`DecodeError::MalformedFrame`] if an octet count or separator
    ///   is missing, a frame exceeds `max_frame_len`, a frame boundary
    ///   splits a character, or the content does not match the grammar.
    pub fn decode_str(&self, expected_count: usize, body: &str) -> Result<DecodedBatch, DecodeError> {
        debug!(expected_count, body_len = body.len(), "decoding batch");

        let result = self.decode_inner(expected_count, body);
        match &result {
            Ok(decoded) => debug!(records = decoded.len(), "batch decoded"),
            Err(e) => debug!(kind = %e.kind(), error = %e, "batch rejected"),
        }
        result
    }

    fn decode_inner(&self, expected_count: usize, body: &str) -> Result<DecodedBatch, DecodeError> {
        let grammar = FrameGrammar::standard();

        // The smallest possible frame is two bytes ("0 "), which bounds
        // how many frames the body can hold whatever count was declared.
        let capacity = expected_count.min(body.len() / 2 + 1);
        let mut records = Vec::with_capacity(capacity);
        let mut frames = Vec::with_capacity(capacity);
        let mut cursor = 0;

        for index in 0..expected_count {
            // 1. Overflow check
            if cursor >= body.len() {
                return Err(DecodeError::Overflow {
                    expected: expected_count,
                    parsed: index,
                    offset: cursor,
                });
            }

            // 2. Octet count, separator and content
            let frame = read_frame(body, cursor, self.config.max_frame_len)
                .map_err(|e| malformed(index, cursor, e))?;

            // 3. Advance by the declared length
            cursor = frame.end();

            // 4. Grammar
            let record = grammar
                .parse(frame.content)
                .map_err(|e| malformed(index, frame.offset, e))?;

            trace!(
                index,
                offset = frame.offset,
                len = frame.declared_len,
                host = %record.host,
                app_name = %record.app_name,
                "frame decoded"
            );

            frames.push(FrameSpan::from(&frame));
            records.push(record);
        }

        // Reconciliation
        if cursor != body.len() {
            return Err(DecodeError::Underflow {
                expected: expected_count,
                consumed: cursor,
                body_len: body.len(),
            });
        }

        Ok(DecodedBatch { records, frames })
    }
}

fn malformed(index: usize, offset: usize, cause: impl Into<FrameFault>) -> DecodeError {
    DecodeError::MalformedFrame {
        index,
        offset,
        cause: cause.into(),
    }
}
