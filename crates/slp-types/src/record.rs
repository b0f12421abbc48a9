use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GrammarError;
use crate::priority::Priority;

/// One syslog record extracted from a frame.
///
/// Fields appear in grammar order. All seven are always present on a
/// record produced by [`FrameGrammar`](crate::FrameGrammar); there are
/// no optional fields. Values are kept verbatim as they appeared on the
/// wire. `priority` in particular stays a digit string; use
/// [`priority_value`](Self::priority_value) to decode it.
///
/// Serialises as a flat JSON object keyed by [`FIELD_NAMES`](Self::FIELD_NAMES).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
  pub priority: String,
  pub syslog_version: String,
  pub timestamp: String,
  pub host: String,
  pub app_name: String,
  pub process_name: String,
  pub message: String,
}

impl Record {
  /// Field names in grammar order.
  pub const FIELD_NAMES: [&'static str; 7] = [
    "priority",
    "syslog_version",
    "timestamp",
    "host",
    "app_name",
    "process_name",
    "message",
  ];

  /// Look up a field by name.
  pub fn get(&self, name: &str) -> Option<&str> {
    let value = match name {
      "priority" => &self.priority,
      "syslog_version" => &self.syslog_version,
      "timestamp" => &self.timestamp,
      "host" => &self.host,
      "app_name" => &self.app_name,
      "process_name" => &self.process_name,
      "message" => &self.message,
      _ => return None,
    };
    Some(value)
  }

  /// `(name, value)` pairs in grammar order.
  pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
    [
      &self.priority,
      &self.syslog_version,
      &self.timestamp,
      &self.host,
      &self.app_name,
      &self.process_name,
      &self.message,
    ]
    .into_iter()
    .zip(Self::FIELD_NAMES)
    .map(|(value, name)| (name, value.as_str()))
  }

  /// Decode the `priority` digits into facility and severity.
  ///
  /// # Errors
  ///
  /// See [`Priority::parse`].
  pub fn priority_value(&self) -> Result<Priority, GrammarError> {
    Priority::parse(&self.priority)
  }
}

/// Renders the record as frame content, the exact inverse of the grammar:
///
/// ```text
/// <34>1 2023-01-01T00:00:00Z myhost myapp 1234 - hello world
/// ```
impl fmt::Display for Record {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "<{}>{} {} {} {} {} - {}",
      self.priority,
      self.syslog_version,
      self.timestamp,
      self.host,
      self.app_name,
      self.process_name,
      self.message
    )
  }
}
