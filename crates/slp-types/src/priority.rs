use std::fmt;

use crate::error::GrammarError;

/// Highest PRI value RFC 5424 allows: facility 23 (local7), severity 7.
pub const MAX_PRIORITY: u8 = 191;

// ── Macro for code-mapped enum boilerplate ────────────────────────────
//
// Facility and severity are both small fixed tables of named codes with
// a keyword used in logs and config files. The macro generates the
// code/keyword conversions; doc comments and derives stay at the call
// site.

macro_rules! code_enum {
  (
    $(#[$meta:meta])*
    pub enum $name:ident {
      $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $keyword:literal ),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    pub enum $name {
      $( $(#[$vmeta])* $variant ),+
    }

    impl $name {
      /// The numeric code of this variant.
      pub fn code(self) -> u8 {
        match self {
          $( Self::$variant => $code ),+
        }
      }

      /// Look up a variant by numeric code.
      ///
      /// # Errors
      ///
      /// [`GrammarError::InvalidEnumValue`] if no variant has this code.
      pub fn from_code(value: u8) -> Result<Self, GrammarError> {
        match value {
          $( $code => Ok(Self::$variant), )+
          other => Err(GrammarError::InvalidEnumValue {
            enum_name: stringify!($name),
            value: other,
          }),
        }
      }

      /// The conventional lowercase keyword (`kern`, `local0`, `err`, ...).
      pub fn keyword(self) -> &'static str {
        match self {
          $( Self::$variant => $keyword ),+
        }
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
      }
    }
  };
}

code_enum! {
  /// Syslog facility (RFC 5424 §6.2.1, table 1).
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum Facility {
    Kern = 0 => "kern",
    User = 1 => "user",
    Mail = 2 => "mail",
    Daemon = 3 => "daemon",
    Auth = 4 => "auth",
    Syslog = 5 => "syslog",
    Lpr = 6 => "lpr",
    News = 7 => "news",
    Uucp = 8 => "uucp",
    Cron = 9 => "cron",
    AuthPriv = 10 => "authpriv",
    Ftp = 11 => "ftp",
    Ntp = 12 => "ntp",
    /// Log audit.
    Audit = 13 => "audit",
    /// Log alert.
    Alert = 14 => "alert",
    /// Clock daemon.
    Clock = 15 => "clock",
    Local0 = 16 => "local0",
    Local1 = 17 => "local1",
    Local2 = 18 => "local2",
    Local3 = 19 => "local3",
    Local4 = 20 => "local4",
    Local5 = 21 => "local5",
    Local6 = 22 => "local6",
    Local7 = 23 => "local7",
  }
}

code_enum! {
  /// Syslog severity (RFC 5424 §6.2.1, table 2). Lower is more severe.
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
  pub enum Severity {
    Emergency = 0 => "emerg",
    Alert = 1 => "alert",
    Critical = 2 => "crit",
    Error = 3 => "err",
    Warning = 4 => "warning",
    Notice = 5 => "notice",
    Informational = 6 => "info",
    Debug = 7 => "debug",
  }
}

/// A decoded PRI value: `facility * 8 + severity`.
///
/// The scanner keeps the raw `priority` digits in each [`Record`]; this
/// type is only built on demand through
/// [`Record::priority_value`](crate::Record::priority_value).
///
/// [`Record`]: crate::Record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Priority {
  pub facility: Facility,
  pub severity: Severity,
}

impl Priority {
  /// Split a numeric PRI value into facility and severity.
  ///
  /// # Errors
  ///
  /// [`GrammarError::PriorityOutOfRange`] if `value > 191`.
  pub fn from_value(value: u32) -> Result<Self, GrammarError> {
    let code = u8::try_from(value)
      .ok()
      .filter(|&code| code <= MAX_PRIORITY)
      .ok_or(GrammarError::PriorityOutOfRange { value })?;
    Ok(Self {
      facility: Facility::from_code(code / 8)?,
      severity: Severity::from_code(code % 8)?,
    })
  }

  /// Parse the textual PRI digits from a record.
  ///
  /// # Errors
  ///
  /// - [`GrammarError::InvalidPriority`] if `text` is not all ASCII digits
  ///   or does not fit in a `u32`.
  /// - [`GrammarError::PriorityOutOfRange`] if the value exceeds 191.
  pub fn parse(text: &str) -> Result<Self, GrammarError> {
    let invalid = || GrammarError::InvalidPriority {
      value: text.to_owned(),
    };
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
      return Err(invalid());
    }
    let value: u32 = text.parse().map_err(|_| invalid())?;
    Self::from_value(value)
  }

  /// The numeric PRI value.
  pub fn value(self) -> u32 {
    u32::from(self.facility.code()) * 8 + u32::from(self.severity.code())
  }
}

impl fmt::Display for Priority {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{}", self.facility, self.severity)
  }
}
