/// Configuration for the batch decoder.
///
/// ```text
/// ┌───────────────┬─────────────────────────────────────────────────────┐
/// │ Field         │ Purpose                                             │
/// ├───────────────┼─────────────────────────────────────────────────────┤
/// │ max_frame_len │ Reject frames declaring more octets than this       │
/// └───────────────┴─────────────────────────────────────────────────────┘
/// ```
///
/// The default places no limit: RFC 6587 octet counting has no upper
/// bound, and the lenient slicing never reads past the body anyway.
/// Set a limit when batches come from an untrusted relay and an absurd
/// octet count should be reported as a malformed frame rather than as
/// an overflow of the whole batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Largest accepted octet count, if any.
    pub max_frame_len: Option<usize>,
}

impl DecoderConfig {
    #[must_use]
    pub fn with_max_frame_len(mut self, limit: usize) -> Self {
        self.max_frame_len = Some(limit);
        self
    }
}
