/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Message assembler.
//!
//! A [`Reader`] consumes one record per line, dispatches each on its tag, and
//! accumulates the parsed segments into a [`Message`]. Depending on its
//! [`ReaderConfig`], it validates each segment and enforces the conditional
//! schema as records arrive so the first failure aborts the read.

use crate::config::ReaderConfig;
use crate::message::Message;
use crate::schema::SchemaContext;
use fedwire_codec::{char_count, split_at_char};
use fedwire_core::error::{FedwireError, Result, SegmentError};
use fedwire_core::types::TAG_LENGTH;
use fedwire_segment::{Segment, parse_segment};
use std::io::BufRead;
use std::str::FromStr;
use tracing::{debug, trace, warn};

/// Reads a message from a line-oriented source.
#[derive(Debug)]
pub struct Reader<R> {
    inner: R,
    config: ReaderConfig,
    line: usize,
}

impl<R: BufRead> Reader<R> {
    /// Creates a reader with default configuration.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, ReaderConfig::default())
    }

    /// Creates a reader with the given configuration.
    #[must_use]
    pub const fn with_config(inner: R, config: ReaderConfig) -> Self {
        Self {
            inner,
            config,
            line: 0,
        }
    }

    /// Returns the reader configuration.
    #[must_use]
    pub const fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Returns the number of lines consumed so far.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Consumes the reader, returning the underlying source.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Reads every remaining record and assembles them into a message.
    ///
    /// Blank lines are skipped and a trailing `\r` is tolerated.
    ///
    /// # Errors
    /// Returns the first I/O, parse, validation, or schema failure, tagged
    /// with the 1-based line it occurred on. Provisionally accepted segments
    /// whose controlling code never arrived fail after the last record.
    pub fn read(&mut self) -> Result<Message> {
        let mut message = Message::new();
        let mut context = SchemaContext::new();
        let mut buf = String::new();

        loop {
            buf.clear();
            let read = self
                .inner
                .read_line(&mut buf)
                .map_err(|e| FedwireError::from(e).at_line(self.line + 1))?;
            if read == 0 {
                break;
            }
            self.line += 1;

            let record = buf.trim_end_matches(['\r', '\n']);
            if record.trim().is_empty() {
                continue;
            }
            trace!("Line {}: {}", self.line, record);

            let segment = self.read_record(record, &mut context).map_err(|e| {
                warn!("Read aborted at line {}: {}", self.line, e);
                e.at_line(self.line)
            })?;
            debug!("Assembled {} {}", segment.kind(), segment.kind().name());
            message.push(segment);
        }

        if self.config.enforce_schema {
            context.resolve().map_err(|e| {
                warn!("Read aborted after line {}: {}", self.line, e);
                FedwireError::from(e)
            })?;
        }
        if self.config.validate_message {
            message.validate().inspect_err(|e| {
                warn!("Assembled message is invalid: {}", e);
            })?;
        }

        debug!("Read {} segments from {} lines", message.len(), self.line);
        Ok(message)
    }

    fn read_record(&self, record: &str, context: &mut SchemaContext) -> Result<Segment> {
        let length = char_count(record);
        if length > self.config.max_record_length {
            let (tag, _) = split_at_char(record, TAG_LENGTH);
            return Err(FedwireError::segment(
                tag,
                SegmentError::TagMaxLength {
                    expected: self.config.max_record_length,
                    actual: length,
                },
            ));
        }

        let segment = parse_segment(record)?;
        if self.config.validate_segments {
            segment
                .validate()
                .map_err(|source| FedwireError::segment(segment.kind().tag(), source))?;
        }
        if self.config.enforce_schema {
            context.accept(&segment)?;
        }
        Ok(segment)
    }
}

impl FromStr for Message {
    type Err = FedwireError;

    /// Reads a message with the default reader configuration.
    fn from_str(s: &str) -> Result<Self> {
        Reader::new(s.as_bytes()).read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::tests::mock_customer_transfer;
    use fedwire_core::error::{SchemaError, Violation};
    use fedwire_core::types::FormatOptions;
    use fedwire_segment::{Amount, SegmentKind};

    #[test]
    fn test_read_fixed_message() {
        let expected = mock_customer_transfer();
        let input = expected.format(FormatOptions::fixed());
        let message: Message = input.parse().unwrap();
        assert_eq!(message.len(), expected.len());
        assert!(message.validate().is_ok());
        assert_eq!(message.segment::<Amount>(), expected.segment::<Amount>());
    }

    #[test]
    fn test_read_tolerates_crlf_and_blank_lines() {
        let input = mock_customer_transfer()
            .format(FormatOptions::variable())
            .replace('\n', "\r\n\r\n");
        let mut reader = Reader::new(input.as_bytes());
        let message = reader.read().unwrap();
        assert_eq!(message.len(), 9);
        assert_eq!(reader.line(), 18);
    }

    #[test]
    fn test_read_empty_input() {
        let message = Message::from_str("").unwrap();
        assert!(message.is_empty());
    }

    #[test]
    fn test_unknown_tag_reports_line() {
        let input = "{1500}30User ReqT \n{9999}ABC\n";
        let err = Message::from_str(input).unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert!(matches!(
            err.schema_error(),
            Some(SchemaError::UnknownTag(tag)) if tag == "{9999}"
        ));
    }

    #[test]
    fn test_segment_validation_is_interleaved() {
        let input = "{3320}REF*\n{2000}00000000012X\n";
        let err = Message::from_str(input).unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.violation(), Some(&Violation::NonNumeric));
        assert!(err.to_string().starts_with("line 2: {2000} Amount"));
    }

    #[test]
    fn test_length_violation_reported_before_content() {
        let err = Message::from_str("{8450}USD12Z      \n").unwrap_err();
        assert_eq!(err.line(), Some(1));
        assert_eq!(err.segment_error().and_then(SegmentError::field), Some("Amount"));
        assert_eq!(
            err.violation(),
            Some(&Violation::WrongLength {
                expected: 19,
                actual: 9
            })
        );
    }

    #[test]
    fn test_segment_validation_can_be_disabled() {
        let config = ReaderConfig::new().with_validate_segments(false);
        let input = "{2000}00000000012X\n";
        let message = Reader::with_config(input.as_bytes(), config)
            .read()
            .unwrap();
        assert!(message.contains(SegmentKind::Amount));
        assert!(message.validate().is_err());
    }

    #[test]
    fn test_duplicate_segment_reports_line() {
        let input = "{3320}REF*\n{3320}REF2*\n";
        let err = Message::from_str(input).unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert!(matches!(
            err.schema_error(),
            Some(SchemaError::Duplicate { tag: "{3320}" })
        ));
    }

    #[test]
    fn test_schema_enforcement_can_be_disabled() {
        let config = ReaderConfig::new().with_enforce_schema(false);
        let input = "{3320}REF*\n{3320}REF2*\n";
        let message = Reader::with_config(input.as_bytes(), config)
            .read()
            .unwrap();
        assert_eq!(message.len(), 2);
    }

    #[test]
    fn test_not_permitted_segment() {
        let input = "{3600}CTR   \n{8450}USD1234.56*\n";
        let err = Message::from_str(input).unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert!(matches!(
            err.schema_error(),
            Some(SchemaError::NotPermitted { tag: "{8450}", .. })
        ));
    }

    #[test]
    fn test_unresolved_segment_fails_after_last_record() {
        let err = Message::from_str("{8450}USD1234.56*\n").unwrap_err();
        assert_eq!(err.line(), None);
        assert!(matches!(
            err.schema_error(),
            Some(SchemaError::NotPermitted { tag: "{8450}", .. })
        ));
    }

    #[test]
    fn test_validate_message_reports_missing() {
        let mut message = mock_customer_transfer();
        message.remove(SegmentKind::Originator);
        let input = message.format(FormatOptions::fixed());

        assert!(Message::from_str(&input).is_ok());

        let config = ReaderConfig::new().with_validate_message(true);
        let err = Reader::with_config(input.as_bytes(), config)
            .read()
            .unwrap_err();
        assert!(matches!(
            err.schema_error(),
            Some(SchemaError::Missing { tag: "{5000}", .. })
        ));
    }

    #[test]
    fn test_max_record_length() {
        let config = ReaderConfig::new().with_max_record_length(8);
        let err = Reader::with_config("{3320}REF*\n".as_bytes(), config)
            .read()
            .unwrap_err();
        assert_eq!(err.line(), Some(1));
        assert_eq!(
            err.segment_error(),
            Some(&SegmentError::TagMaxLength {
                expected: 8,
                actual: 10
            })
        );
    }
}
