use std::fmt;

use slp_types::GrammarError;
use slp_wire::WireError;

/// Errors that abort a batch decode.
///
/// Every variant is batch-fatal: no records are returned alongside it.
/// The first two come from reconciling the declared count against the
/// body; the third from a single frame that could not be read.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── Overflow        ← body ran out before expected_count frames
///   ├── Underflow       ← expected_count frames read, cursor not at body end
///   └── MalformedFrame  ← one frame could not be read
///         FrameFault
///         ├── Wire(WireError)       ← octet count, separator, boundary, size
///         └── Grammar(GrammarError) ← content is not a syslog record
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The body was exhausted after `parsed` frames, before the declared
    /// `expected` count was reached.
    #[error(
        "message count {expected} is inconsistent with body, overflowed body after {parsed} frame(s)"
    )]
    Overflow {
        expected: usize,
        parsed: usize,
        offset: usize,
    },

    /// All `expected` frames were read but the cursor did not land on the
    /// end of the body.
    ///
    /// Usually the body holds more frames than declared. `consumed` can
    /// also exceed `body_len` when the last frame declared more octets
    /// than the body had left.
    #[error(
        "message count {expected} is inconsistent with body, {}",
        underflow_detail(.consumed, .body_len)
    )]
    Underflow {
        expected: usize,
        consumed: usize,
        body_len: usize,
    },

    /// Frame `index` (zero-based), whose octet count starts at byte
    /// `offset`, could not be read or does not match the grammar.
    #[error("malformed frame {index} at offset {offset}: {cause}")]
    MalformedFrame {
        index: usize,
        offset: usize,
        cause: FrameFault,
    },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn underflow_detail(consumed: &usize, body_len: &usize) -> String {
    if consumed > body_len {
        format!("last frame overran the body by {} bytes", consumed - body_len)
    } else {
        format!("missing frames to parse ({consumed} of {body_len} bytes accounted for)")
    }
}

/// Why a single frame was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FrameFault {
    #[error(transparent)]
    Wire(#[from] WireError),

    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

/// The three failure categories, for callers that branch on kind only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Overflow,
    Underflow,
    MalformedFrame,
}

impl DecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Overflow { .. } => ErrorKind::Overflow,
            Self::Underflow { .. } => ErrorKind::Underflow,
            Self::MalformedFrame { .. } => ErrorKind::MalformedFrame,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Overflow => "OverflowError",
            Self::Underflow => "UnderflowError",
            Self::MalformedFrame => "MalformedFrameError",
        })
    }
}
