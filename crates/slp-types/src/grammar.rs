use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::GrammarError;
use crate::record::Record;

/// The frame grammar, one piece per field.
///
/// ```text
/// ┌────────────────────────┬──────────────────┬──────────────────────┐
/// │ Piece                  │ Field            │ Example              │
/// ├────────────────────────┼──────────────────┼──────────────────────┤
/// │ <digits>               │ priority         │ <34>                 │
/// │ digit + space          │ syslog_version   │ 1                    │
/// │ token + space          │ timestamp        │ 2023-01-01T00:00:00Z │
/// │ token + space          │ host             │ myhost               │
/// │ token + space          │ app_name         │ myapp                │
/// │ token + space          │ process_name     │ 1234                 │
/// │ "- "                   │ (not captured)   │                      │
/// │ rest of the line       │ message          │ hello world          │
/// └────────────────────────┴──────────────────┴──────────────────────┘
/// ```
///
/// Anchored at the start of the frame only. `message` stops before the
/// first line feed and anything after it is ignored, so a trailing `\n`
/// (as Logplex sends) never ends up in the record.
///
/// Token fields stop only at ASCII whitespace (see [`is_field_delimiter`]);
/// a no-break space or other Unicode space is part of the token.
pub const FRAME_PATTERN: &str = concat!(
  r"\A<(?P<priority>[0-9]+)>",
  r"(?P<syslog_version>[0-9]) ",
  r"(?P<timestamp>[^ \t\r\n\f\v]+) ",
  r"(?P<host>[^ \t\r\n\f\v]+) ",
  r"(?P<app_name>[^ \t\r\n\f\v]+) ",
  r"(?P<process_name>[^ \t\r\n\f\v]+) ",
  r"- (?P<message>.+)",
);

/// Whether `c` ends a token field: space, tab, CR, LF, form feed or
/// vertical tab. Matches the excluded set in [`FRAME_PATTERN`].
pub fn is_field_delimiter(c: char) -> bool {
  matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0C' | '\x0B')
}

/// How many characters of unmatched content go into a diagnostic.
const PREVIEW_CHARS: usize = 32;

static STANDARD: LazyLock<FrameGrammar> = LazyLock::new(|| FrameGrammar {
  regex: Regex::new(FRAME_PATTERN).expect("FRAME_PATTERN is a valid regex"),
});

/// Matches one frame's content against [`FRAME_PATTERN`].
///
/// Independent of framing: it takes raw content strings, so it can be
/// exercised without building an octet-counted body.
///
/// # Example
///
/// ```rust
/// use slp_types::FrameGrammar;
///
/// let record = FrameGrammar::standard()
///     .parse("<34>1 2023-01-01T00:00:00Z myhost myapp 1234 - hello world")
///     .unwrap();
/// assert_eq!(record.host, "myhost");
/// assert_eq!(record.message, "hello world");
/// ```
#[derive(Clone, Debug)]
pub struct FrameGrammar {
  regex: Regex,
}

impl FrameGrammar {
  /// The process-wide compiled grammar.
  pub fn standard() -> &'static Self {
    &STANDARD
  }

  /// The source pattern.
  pub fn pattern(&self) -> &str {
    self.regex.as_str()
  }

  /// Whether `content` starts with a complete record.
  pub fn is_match(&self, content: &str) -> bool {
    self.regex.is_match(content)
  }

  /// Extract a [`Record`] from frame content.
  ///
  /// # Errors
  ///
  /// [`GrammarError::NoMatch`] if `content` does not start with a
  /// complete record.
  pub fn parse(&self, content: &str) -> Result<Record, GrammarError> {
    let caps = self
      .regex
      .captures(content)
      .ok_or_else(|| GrammarError::NoMatch {
        preview: content.chars().take(PREVIEW_CHARS).collect(),
      })?;

    Ok(Record {
      priority: capture(&caps, "priority"),
      syslog_version: capture(&caps, "syslog_version"),
      timestamp: capture(&caps, "timestamp"),
      host: capture(&caps, "host"),
      app_name: capture(&caps, "app_name"),
      process_name: capture(&caps, "process_name"),
      message: capture(&caps, "message"),
    })
  }
}

// Every group in FRAME_PATTERN is mandatory, so a match always has it.
fn capture(caps: &Captures<'_>, name: &str) -> String {
  caps.name(name).map_or_else(String::new, |m| m.as_str().to_owned())
}

#[cfg(test)]
mod tests {
  use super::*;

  const LITERAL: &str = "<34>1 2023-01-01T00:00:00Z myhost myapp 1234 - hello world";

  fn parse(content: &str) -> Result<Record, GrammarError> {
    FrameGrammar::standard().parse(content)
  }

  #[test]
  fn literal_case() {
    let record = parse(LITERAL).unwrap();
    assert_eq!(record.priority, "34");
    assert_eq!(record.syslog_version, "1");
    assert_eq!(record.timestamp, "2023-01-01T00:00:00Z");
    assert_eq!(record.host, "myhost");
    assert_eq!(record.app_name, "myapp");
    assert_eq!(record.process_name, "1234");
    assert_eq!(record.message, "hello world");
  }

  #[test]
  fn logplex_router_line() {
    let record =
      parse("<158>1 2012-10-11T03:47:20+00:00 host heroku router - at=info method=GET path=/\n")
        .unwrap();
    assert_eq!(record.priority, "158");
    assert_eq!(record.app_name, "heroku");
    assert_eq!(record.process_name, "router");
    assert_eq!(record.message, "at=info method=GET path=/");
  }

  #[test]
  fn message_keeps_inner_separators() {
    let record = parse("<13>1 ts h a p - one - two - three").unwrap();
    assert_eq!(record.message, "one - two - three");
  }

  #[test]
  fn trailing_lines_are_ignored() {
    let record = parse("<13>1 ts h a p - first line\nsecond line").unwrap();
    assert_eq!(record.message, "first line");
  }

  #[test]
  fn display_is_inverse_of_parse() {
    let record = parse(LITERAL).unwrap();
    assert_eq!(record.to_string(), LITERAL);
  }

  #[test]
  fn unicode_spaces_stay_inside_tokens() {
    let record = parse("<34>1 ts my\u{a0}host app\u{3000}x p - msg").unwrap();
    assert_eq!(record.host, "my\u{a0}host");
    assert_eq!(record.app_name, "app\u{3000}x");
    assert_eq!(record.message, "msg");
  }

  #[test]
  fn ascii_whitespace_splits_tokens() {
    assert!(parse("<34>1 ts my\thost app p - msg").is_err());
    assert!(parse("<34>1 ts h app\x0Bx p - msg").is_err());
  }

  #[test]
  fn field_delimiters() {
    for c in [' ', '\t', '\r', '\n', '\x0C', '\x0B'] {
      assert!(is_field_delimiter(c), "{c:?}");
    }
    for c in ['a', '-', '\u{a0}', '\u{3000}', '\u{2028}'] {
      assert!(!is_field_delimiter(c), "{c:?}");
    }
  }

  #[test]
  fn missing_angle_brackets() {
    assert!(matches!(
      parse("34 1 2023-01-01T00:00:00Z myhost myapp 1234 - hello"),
      Err(GrammarError::NoMatch { .. })
    ));
  }

  #[test]
  fn anchored_at_start() {
    // A valid record later in the content does not count
    assert!(!FrameGrammar::standard().is_match(&format!("x{LITERAL}")));
  }

  #[test]
  fn version_is_single_digit() {
    assert!(parse("<34>12 ts h a p - msg").is_err());
  }

  #[test]
  fn non_ascii_digits_rejected() {
    assert!(parse("<٣٤>1 ts h a p - msg").is_err());
  }

  #[test]
  fn missing_dash_separator() {
    assert!(parse("<34>1 ts h a p msg").is_err());
  }

  #[test]
  fn missing_process_name() {
    assert!(parse("<34>1 ts h a - msg").is_err());
  }

  #[test]
  fn empty_message_rejected() {
    assert!(parse("<34>1 ts h a p - ").is_err());
    assert!(parse("<34>1 ts h a p - \nnext").is_err());
  }

  #[test]
  fn empty_content_rejected() {
    assert_eq!(
      parse(""),
      Err(GrammarError::NoMatch {
        preview: String::new()
      })
    );
  }

  #[test]
  fn preview_is_truncated() {
    let junk = "x".repeat(100);
    let Err(GrammarError::NoMatch { preview }) = parse(&junk) else {
      panic!("expected NoMatch");
    };
    assert_eq!(preview.chars().count(), PREVIEW_CHARS);
  }

  #[test]
  fn pattern_is_exposed() {
    assert_eq!(FrameGrammar::standard().pattern(), FRAME_PATTERN);
  }
}
