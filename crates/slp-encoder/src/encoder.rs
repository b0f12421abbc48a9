use slp_types::Record;
use slp_types::grammar::is_field_delimiter;
use slp_wire::write_frame;

use crate::error::EncodeError;

/// A batch ready to hand to a transport: the body plus the frame count
/// to declare alongside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedBatch {
    pub count: usize,
    pub body: String,
}

/// A frame queued on the encoder.
#[derive(Clone, Debug)]
enum PendingFrame {
    Record(Record),
    Raw(String),
}

/// Builder for octet-counted syslog batches, the inverse of
/// `slp_decoder::BatchDecoder`.
///
/// Records are rendered as
/// `<priority>version timestamp host app_name process_name - message`
/// and validated so that decoding the output yields the same records.
/// Raw frames are written as given, which makes the encoder usable for
/// building deliberately broken batches in tests.
///
/// # Example
///
/// ```rust
/// use slp_encoder::BatchEncoder;
///
/// let batch = BatchEncoder::new()
///     .add_frame("<34>1 2023-01-01T00:00:00Z myhost myapp 1234 - hello world")
///     .encode()
///     .unwrap();
///
/// assert_eq!(batch.count, 1);
/// assert!(batch.body.starts_with("58 <34>1"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct BatchEncoder {
    frames: Vec<PendingFrame>,
}

impl BatchEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a record. It is validated when [`encode`](Self::encode) runs.
    pub fn add_record(&mut self, record: &Record) -> &mut Self {
        self.frames.push(PendingFrame::Record(record.clone()));
        self
    }

    /// Queue raw frame content, written verbatim.
    pub fn add_frame(&mut self, content: &str) -> &mut Self {
        self.frames.push(PendingFrame::Raw(content.to_owned()));
        self
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Write every queued frame into one body.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::EmptyBatch`] if nothing was queued.
    /// - [`EncodeError::InvalidField`] if a record has a field the
    ///   grammar could not read back.
    pub fn encode(&self) -> Result<EncodedBatch, EncodeError> {
        if self.frames.is_empty() {
            return Err(EncodeError::EmptyBatch);
        }

        let mut body = String::new();

        for (index, frame) in self.frames.iter().enumerate() {
            match frame {
                PendingFrame::Record(record) => {
                    validate_record(index, record)?;
                    write_frame(&mut body, &record.to_string())?;
                }
                PendingFrame::Raw(raw) => {
                    write_frame(&mut body, raw)?;
                }
            }
        }

        tracing::debug!(
            count = self.frames.len(),
            body_len = body.len(),
            "batch encoded"
        );

        Ok(EncodedBatch {
            count: self.frames.len(),
            body,
        })
    }
}

/// Check that `record` renders to content the grammar parses back into
/// the same record.
fn validate_record(index: usize, record: &Record) -> Result<(), EncodeError> {
    let invalid = |field, reason| EncodeError::InvalidField {
        index,
        field,
        reason,
    };

    if record.priority.is_empty() || !record.priority.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("priority", "must be one or more ASCII digits"));
    }
    if record.syslog_version.len() != 1 || !record.syslog_version.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("syslog_version", "must be a single ASCII digit"));
    }

    for (field, value) in [
        ("timestamp", &record.timestamp),
        ("host", &record.host),
        ("app_name", &record.app_name),
        ("process_name", &record.process_name),
    ] {
        if value.is_empty() {
            return Err(invalid(field, "must not be empty"));
        }
        if value.chars().any(is_field_delimiter) {
            return Err(invalid(field, "must not contain ASCII whitespace"));
        }
    }

    if record.message.is_empty() {
        return Err(invalid("message", "must not be empty"));
    }
    if record.message.contains('\n') {
        return Err(invalid("message", "must not contain a line feed"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use slp_decoder::BatchDecoder;

    use super::*;

    fn record(host: &str, message: &str) -> Record {
        Record {
            priority: "165".into(),
            syslog_version: "1".into(),
            timestamp: "2003-10-11T22:14:15.003Z".into(),
            host: host.into(),
            app_name: "evntslog".into(),
            process_name: "-".into(),
            message: message.into(),
        }
    }

    #[test]
    fn empty_encoder_fails() {
        assert!(matches!(
            BatchEncoder::new().encode(),
            Err(EncodeError::EmptyBatch)
        ));
    }

    #[test]
    fn raw_frames_written_verbatim() {
        let batch = BatchEncoder::new()
            .add_frame("hello")
            .add_frame("")
            .encode()
            .unwrap();
        assert_eq!(batch.count, 2);
        assert_eq!(batch.body, "5 hello0 ");
    }

    #[test]
    fn records_roundtrip_through_decoder() {
        let records = [
            record("mymachine.example.com", "An application event"),
            record("10.0.0.1", "  leading spaces - and dashes"),
        ];
        let mut encoder = BatchEncoder::new();
        for r in &records {
            encoder.add_record(r);
        }
        let batch = encoder.encode().unwrap();

        let decoded = BatchDecoder::new()
            .decode_str(batch.count, &batch.body)
            .unwrap();
        assert_eq!(decoded.records, records);
    }

    #[test]
    fn frame_count_tracks_queue() {
        let mut encoder = BatchEncoder::new();
        encoder.add_record(&record("h", "m")).add_frame("raw");
        assert_eq!(encoder.frame_count(), 2);
    }

    #[test]
    fn rejects_whitespace_in_host() {
        let err = BatchEncoder::new()
            .add_record(&record("my host", "m"))
            .encode()
            .unwrap_err();
        assert!(matches!(
            err,
            EncodeError::InvalidField {
                index: 0,
                field: "host",
                ..
            }
        ));
    }

    #[test]
    fn rejects_tab_in_app_name() {
        let mut bad = record("h", "m");
        bad.app_name = "my\tapp".into();
        assert!(matches!(
            BatchEncoder::new().add_record(&bad).encode(),
            Err(EncodeError::InvalidField {
                field: "app_name",
                ..
            })
        ));
    }

    #[test]
    fn unicode_spaces_in_tokens_roundtrip() {
        let mut nbsp = record("my\u{a0}host", "m");
        nbsp.app_name = "app\u{3000}x".into();
        let batch = BatchEncoder::new().add_record(&nbsp).encode().unwrap();

        let decoded = BatchDecoder::new()
            .decode_str(batch.count, &batch.body)
            .unwrap();
        assert_eq!(decoded.records, [nbsp]);
    }

    #[test]
    fn rejects_empty_message() {
        let err = BatchEncoder::new()
            .add_record(&record("h", "ok"))
            .add_record(&record("h", ""))
            .encode()
            .unwrap_err();
        assert!(matches!(
            err,
            EncodeError::InvalidField {
                index: 1,
                field: "message",
                ..
            }
        ));
    }

    #[test]
    fn rejects_multiline_message() {
        let err = BatchEncoder::new()
            .add_record(&record("h", "one\ntwo"))
            .encode()
            .unwrap_err();
        assert!(matches!(
            err,
            EncodeError::InvalidField {
                field: "message",
                ..
            }
        ));
    }

    #[test]
    fn rejects_bad_priority_and_version() {
        let mut bad = record("h", "m");
        bad.priority = "x1".into();
        assert!(matches!(
            BatchEncoder::new().add_record(&bad).encode(),
            Err(EncodeError::InvalidField {
                field: "priority",
                ..
            })
        ));

        let mut bad = record("h", "m");
        bad.syslog_version = "10".into();
        assert!(matches!(
            BatchEncoder::new().add_record(&bad).encode(),
            Err(EncodeError::InvalidField {
                field: "syslog_version",
                ..
            })
        ));
    }
}
