/// Errors raised while reading or writing RFC 6587 octet-counted frames.
///
/// Every read-side variant carries the byte `offset` into the batch body
/// where the problem was detected, so a diagnostic can point at the exact
/// frame that broke.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// No decimal digit where an octet count should start.
    #[error("expected an octet count at offset {offset}")]
    MissingLength { offset: usize },

    /// The digit run is too long to fit in a `usize`.
    #[error("octet count at offset {offset} does not fit in a usize")]
    LengthOverflow { offset: usize },

    /// The octet count is not followed by exactly one space.
    #[error("expected a space after the octet count at offset {offset}")]
    MissingSeparator { offset: usize },

    /// A frame boundary lands inside a multi-byte UTF-8 character.
    #[error("frame boundary at offset {offset} splits a UTF-8 character")]
    SplitCharacter { offset: usize },

    /// The declared octet count exceeds the configured limit.
    #[error("frame at offset {offset} declares {len} octets, limit is {limit}")]
    FrameTooLarge {
        offset: usize,
        len: usize,
        limit: usize,
    },

    /// Formatting into the output sink failed.
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}
