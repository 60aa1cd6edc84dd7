/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error types for Fedwire message encoding and validation.
//!
//! The hierarchy is layered the same way a message is:
//! - [`Violation`]: the rule a single field value broke
//! - [`FieldError`]: a violation attributed to a named field, with the offending value
//! - [`SegmentError`]: structural (length) or field failures inside one segment
//! - [`SchemaError`]: cross-segment failures of the conditional message schema
//! - [`FedwireError`]: top-level error wrapping the above with segment/line context

use std::fmt;
use thiserror::Error;

/// Result type alias using [`FedwireError`] as the error type.
pub type Result<T> = std::result::Result<T, FedwireError>;

/// Top-level error type for all Fedwire operations.
#[derive(Debug, Error)]
pub enum FedwireError {
    /// A segment failed to parse or validate.
    #[error("{tag} {source}")]
    Segment {
        /// Tag of the segment being processed.
        tag: String,
        /// Underlying segment failure.
        #[source]
        source: SegmentError,
    },

    /// The message violates the conditional segment schema.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Failure while reading a specific input line.
    #[error("line {line}: {source}")]
    Line {
        /// 1-based line number in the input.
        line: usize,
        /// Underlying failure.
        #[source]
        source: Box<FedwireError>,
    },

    /// I/O error from the underlying reader or writer.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FedwireError {
    /// Wraps a segment error with the tag that was being processed.
    #[must_use]
    pub fn segment(tag: impl Into<String>, source: SegmentError) -> Self {
        Self::Segment {
            tag: tag.into(),
            source,
        }
    }

    /// Wraps this error with the input line it occurred on.
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        Self::Line {
            line,
            source: Box::new(self),
        }
    }

    /// Returns the field-level violation at the root of this error, if any.
    #[must_use]
    pub fn violation(&self) -> Option<&Violation> {
        self.segment_error().and_then(SegmentError::violation)
    }

    /// Returns the segment error at the root of this error, if any.
    #[must_use]
    pub fn segment_error(&self) -> Option<&SegmentError> {
        match self {
            Self::Segment { source, .. } => Some(source),
            Self::Line { source, .. } => source.segment_error(),
            _ => None,
        }
    }

    /// Returns the schema error at the root of this error, if any.
    #[must_use]
    pub fn schema_error(&self) -> Option<&SchemaError> {
        match self {
            Self::Schema(err) => Some(err),
            Self::Line { source, .. } => source.schema_error(),
            _ => None,
        }
    }

    /// Returns the 1-based input line this error was attributed to, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Line { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// The rule a field value violated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Mandatory field is empty.
    #[error("is a mandatory field and has a default value")]
    FieldRequired,

    /// Field contains characters other than digits.
    #[error("has non numeric characters")]
    NonNumeric,

    /// Field contains characters outside the permitted text charset.
    #[error("has non alphanumeric characters")]
    NonAlphanumeric,

    /// Field is not a valid amount.
    #[error("is an invalid amount")]
    NonAmount,

    /// Field is not a recognized currency code.
    #[error("is not a recognized currency code")]
    NonCurrencyCode,

    /// Field is not a permitted identification code.
    #[error("is an invalid identification code")]
    IdentificationCode,

    /// Field is not a permitted advice code.
    #[error("is an invalid advice code")]
    AdviceCode,

    /// Field holds a value that is not allowed in this context.
    #[error("is an invalid property")]
    InvalidProperty,

    /// Segment tag does not match the segment kind.
    #[error("is an invalid tag for this type")]
    ValidTagForType,

    /// Field is not a valid CCYYMMDD date.
    #[error("is an invalid date format")]
    ValidDate,

    /// Field is not a known business function code.
    #[error("is an invalid business function code")]
    BusinessFunctionCode,

    /// Field is not a known local instrument code.
    #[error("is an invalid local instrument code")]
    LocalInstrumentCode,

    /// Field is not a known type code.
    #[error("is an invalid type code")]
    TypeCode,

    /// Field is not a known sub type code.
    #[error("is an invalid sub type code")]
    SubTypeCode,

    /// Field is not a test/production indicator.
    #[error("is an invalid test production code")]
    TestProductionCode,

    /// Field is not a message duplication indicator.
    #[error("is an invalid message duplication code")]
    MessageDuplicationCode,

    /// Field is not the supported format version.
    #[error("is an invalid format version")]
    FormatVersion,

    /// Fewer characters remain than the field requires.
    #[error("must be at least {required} characters and found {actual}")]
    MinLength {
        /// Characters the field requires.
        required: usize,
        /// Characters available.
        actual: usize,
    },

    /// An unterminated variable field is shorter than its declared width.
    #[error("must be {expected} characters or delimiter terminated and found {actual}")]
    WrongLength {
        /// Declared field width.
        expected: usize,
        /// Characters available.
        actual: usize,
    },

    /// Field value is longer than its declared width.
    #[error("exceeds maximum length {max} with {actual} characters")]
    MaxLength {
        /// Declared field width.
        max: usize,
        /// Actual value length.
        actual: usize,
    },

    /// A fixed-width field contains the field delimiter.
    #[error("contains an unexpected delimiter")]
    UnexpectedDelimiter,
}

/// A violation attributed to a specific field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the failing field.
    pub field: &'static str,
    /// The rule that was violated.
    pub violation: Violation,
    /// The rejected value, when one is available.
    pub value: Option<String>,
}

impl FieldError {
    /// Creates a field error without an offending value.
    #[must_use]
    pub const fn new(field: &'static str, violation: Violation) -> Self {
        Self {
            field,
            violation,
            value: None,
        }
    }

    /// Creates a field error carrying the rejected value.
    #[must_use]
    pub fn with_value(field: &'static str, violation: Violation, value: impl Into<String>) -> Self {
        Self {
            field,
            violation,
            value: Some(value.into()),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {:?} {}", self.field, value, self.violation),
            None => write!(f, "{} {}", self.field, self.violation),
        }
    }
}

impl std::error::Error for FieldError {}

/// Errors raised while parsing or validating a single segment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// Record is shorter than the segment's structural minimum.
    #[error("must be at least {required} characters and found {actual}")]
    TagMinLength {
        /// Minimum record length in characters.
        required: usize,
        /// Actual record length in characters.
        actual: usize,
    },

    /// Record holds data beyond what the segment schema accounts for.
    #[error("found data of {actual} characters but expected {expected}")]
    TagMaxLength {
        /// Characters consumed by the schema.
        expected: usize,
        /// Actual record length in characters.
        actual: usize,
    },

    /// A field failed to parse or validate.
    #[error(transparent)]
    Field(#[from] FieldError),
}

impl SegmentError {
    /// Returns the field violation carried by this error, if any.
    #[must_use]
    pub const fn violation(&self) -> Option<&Violation> {
        match self {
            Self::Field(err) => Some(&err.violation),
            _ => None,
        }
    }

    /// Returns the name of the failing field, if any.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Field(err) => Some(err.field),
            _ => None,
        }
    }
}

/// Violations of the conditional message schema.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Record starts with a tag no segment is registered for.
    #[error("unrecognized tag {0:?}")]
    UnknownTag(String),

    /// Segment is not legal given the message's business context.
    #[error("{tag} is not permitted: {reason}")]
    NotPermitted {
        /// Offending segment tag.
        tag: &'static str,
        /// Why the segment is not permitted.
        reason: String,
    },

    /// Segment required by the message's business context is absent.
    #[error("{tag} is required: {reason}")]
    Missing {
        /// Missing segment tag.
        tag: &'static str,
        /// Why the segment is required.
        reason: String,
    },

    /// A non-repeatable segment appears more than once.
    #[error("{tag} appears more than once")]
    Duplicate {
        /// Duplicated segment tag.
        tag: &'static str,
    },
}
