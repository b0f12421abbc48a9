use std::ops::Range;

use slp_types::Record;
use slp_wire::FrameRef;

use crate::decoder::BatchDecoder;
use crate::error::DecodeError;

/// A batch waiting to be decoded: the raw body plus the frame count the
/// transport declared for it (e.g. Logplex's `Logplex-Msg-Count` header).
///
/// Immutable once built; decode it with [`parse`](Self::parse) or
/// [`BatchDecoder::decode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Batch {
    expected_count: usize,
    body: String,
}

impl Batch {
    pub fn new(expected_count: usize, body: impl Into<String>) -> Self {
        Self {
            expected_count,
            body: body.into(),
        }
    }

    pub fn expected_count(&self) -> usize {
        self.expected_count
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decode with the default [`DecoderConfig`](crate::DecoderConfig).
    ///
    /// # Errors
    ///
    /// See [`BatchDecoder::decode_str`].
    pub fn parse(&self) -> Result<DecodedBatch, DecodeError> {
        BatchDecoder::new().decode(self)
    }
}

/// Where one frame sat in the body. Offsets are in bytes.
///
/// ```text
///   offset ─► "58" + " " + "<34>1 2023-01-01T00:00:00Z ... hello world"
///             prefix_len=2       content_len=58
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSpan {
    pub offset: usize,
    pub prefix_len: usize,
    pub content_len: usize,
}

impl FrameSpan {
    /// Bytes the frame occupies, prefix and separator included.
    pub fn span_len(&self) -> usize {
        self.prefix_len + 1 + self.content_len
    }

    /// Byte range of the frame content within the body.
    pub fn content_range(&self) -> Range<usize> {
        let start = self.offset + self.prefix_len + 1;
        start..start + self.content_len
    }
}

impl From<&FrameRef<'_>> for FrameSpan {
    fn from(frame: &FrameRef<'_>) -> Self {
        Self {
            offset: frame.offset,
            prefix_len: frame.prefix_len,
            content_len: frame.declared_len,
        }
    }
}

/// The result of decoding a batch.
///
/// `records` and `frames` are parallel and in body order. A successful
/// decode always holds exactly the declared number of records, and the
/// frame spans tile the body with no gaps:
///
/// ```text
///   frames[0].span_len() + frames[1].span_len() + ... == body.len()
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodedBatch {
    pub records: Vec<Record>,
    pub frames: Vec<FrameSpan>,
}

impl DecodedBatch {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total bytes covered by the frame spans.
    pub fn consumed(&self) -> usize {
        self.frames.iter().map(FrameSpan::span_len).sum()
    }

    /// Records paired with their spans.
    pub fn iter(&self) -> impl Iterator<Item = (&FrameSpan, &Record)> {
        self.frames.iter().zip(&self.records)
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}
