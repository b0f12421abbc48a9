use slp_wire::WireError;

/// Errors that can occur while building an octet-counted batch.
///
/// Error hierarchy:
///
/// ```text
///   EncodeError
///   ├── EmptyBatch        ← no frames were added before .encode()
///   ├── InvalidField      ← a record field would not survive the grammar
///   └── Wire(WireError)   ← from slp-wire frame writing
/// ```
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("no frames have been added to the encoder")]
    EmptyBatch,

    /// Record `index` has a `field` the decoder could not read back.
    #[error("record {index}: field {field} {reason}")]
    InvalidField {
        index: usize,
        field: &'static str,
        reason: &'static str,
    },

    #[error(transparent)]
    Wire(#[from] WireError),
}
