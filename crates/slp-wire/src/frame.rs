use std::fmt;

use crate::error::WireError;
use crate::length_prefix::{decode_length_prefix, expect_separator, prefix_width};

/// One octet-counted frame located inside a batch body.
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │ octet count  (ASCII digits, prefix_len bytes)    │
/// │ separator    (one space)                         │
/// │ content      [declared_len bytes]                │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// `content` borrows from the body. When the body ends before
/// `declared_len` bytes are available, `content` holds only what remains
/// and [`is_truncated`](Self::is_truncated) reports it; the caller decides
/// whether that is fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRef<'a> {
    /// Byte offset of the first digit of the octet count.
    pub offset: usize,

    /// Number of digits in the octet count.
    pub prefix_len: usize,

    /// The octet count as written on the wire.
    pub declared_len: usize,

    /// The frame content (at most `declared_len` bytes).
    pub content: &'a str,
}

impl FrameRef<'_> {
    /// Byte offset of the first content byte.
    pub fn content_start(&self) -> usize {
        self.offset + self.prefix_len + 1
    }

    /// Byte offset just past the declared content.
    ///
    /// This is where the next frame's octet count is expected. For a
    /// truncated frame it lies beyond the end of the body.
    pub fn end(&self) -> usize {
        self.content_start().saturating_add(self.declared_len)
    }

    /// Whether the body ended before `declared_len` bytes were available.
    pub fn is_truncated(&self) -> bool {
        self.content.len() < self.declared_len
    }
}

/// Read the frame whose octet count starts at `offset` in `body`.
///
/// Slicing is lenient: if fewer than `declared_len` bytes remain, the
/// frame takes what is available.
///
/// # Errors
///
/// - [`WireError::MissingLength`] / [`WireError::LengthOverflow`] from the
///   octet-count scan.
/// - [`WireError::MissingSeparator`] if the count is not followed by a
///   space, including when the digits run to the end of the body.
/// - [`WireError::FrameTooLarge`] if `max_len` is set and exceeded.
/// - [`WireError::SplitCharacter`] if the frame end falls inside a
///   multi-byte UTF-8 character.
pub fn read_frame(
    body: &str,
    offset: usize,
    max_len: Option<usize>,
) -> Result<FrameRef<'_>, WireError> {
    let bytes = body.as_bytes();

    // 1. Octet count
    let (declared_len, prefix_len) = decode_length_prefix(bytes, offset)?;

    // 2. Separator
    let separator_at = offset + prefix_len;
    expect_separator(bytes, separator_at)?;

    if let Some(limit) = max_len
        && declared_len > limit
    {
        return Err(WireError::FrameTooLarge {
            offset,
            len: declared_len,
            limit,
        });
    }

    // 3. Content. `start` follows an ASCII space so it is always a char
    // boundary; only `end` can split a character.
    let start = separator_at + 1;
    let end = start.saturating_add(declared_len).min(body.len());
    let content = body
        .get(start..end)
        .ok_or(WireError::SplitCharacter { offset: end })?;

    if content.len() < declared_len {
        tracing::trace!(
            offset,
            declared_len,
            available = content.len(),
            "frame truncated by end of body"
        );
    }

    Ok(FrameRef {
        offset,
        prefix_len,
        declared_len,
        content,
    })
}

/// Write `content` as one octet-counted frame.
///
/// # Returns
///
/// Total number of bytes written (digits + separator + content).
///
/// # Errors
///
/// [`WireError::Fmt`] if the sink rejects the write.
pub fn write_frame(w: &mut impl fmt::Write, content: &str) -> Result<usize, WireError> {
    write!(w, "{} ", content.len())?;
    w.write_str(content)?;
    Ok(prefix_width(content.len()) + 1 + content.len())
}
