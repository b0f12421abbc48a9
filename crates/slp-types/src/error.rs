/// Errors raised when frame content does not fit the syslog grammar.
///
/// These sit one level above `slp_wire::WireError`: the frame was
/// located and sliced correctly, but its content is not a record.
///
/// ```text
/// ┌────────────────────┬──────────────────────────────────────────────┐
/// │ Variant            │ Cause                                        │
/// ├────────────────────┼──────────────────────────────────────────────┤
/// │ NoMatch            │ Content does not start with the grammar      │
/// │ InvalidPriority    │ PRI text is not a decimal number             │
/// │ PriorityOutOfRange │ PRI value above 191 (facility 23, sev 7)     │
/// │ InvalidEnumValue   │ Facility / severity code out of range        │
/// └────────────────────┴──────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
  /// The frame content does not match the syslog grammar.
  ///
  /// `preview` holds the first characters of the content so the
  /// diagnostic shows what was actually there.
  #[error("frame does not match the syslog grammar: {preview:?}")]
  NoMatch { preview: String },

  #[error("priority {value:?} is not a decimal number")]
  InvalidPriority { value: String },

  #[error("priority {value} is out of range (0..=191)")]
  PriorityOutOfRange { value: u32 },

  #[error("invalid {enum_name} code: {value}")]
  InvalidEnumValue { enum_name: &'static str, value: u8 },
}
