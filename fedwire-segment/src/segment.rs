/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! The contract every segment kind implements.
//!
//! This module provides:
//! - [`WireSegment`]: Parse, validate, and format for one tag
//! - Validation helpers shared by all segment kinds ([`check_tag`], [`require`], [`check`])

use fedwire_core::error::{FieldError, SegmentError, Violation};
use fedwire_core::field::{FieldDef, SegmentLayout};
use fedwire_core::types::{DELIMITER, FormatOptions};
use fedwire_core::validator::Check;

/// Parse, validate, and format contract for a single segment kind.
///
/// Implementations hold only their own field data; wire handling is delegated
/// to the codec by walking [`WireSegment::LAYOUT`].
pub trait WireSegment: Default + Clone + PartialEq + std::fmt::Debug {
    /// The segment's constant 6-character tag.
    const TAG: &'static str;

    /// Ordered field definitions.
    const LAYOUT: SegmentLayout;

    /// Returns the tag currently held by this instance.
    fn tag(&self) -> &str;

    /// Populates this segment from a record beginning with its tag.
    ///
    /// Parsing is structural only: a parsed segment may still fail
    /// [`WireSegment::validate`].
    ///
    /// # Errors
    /// Returns the first length or field error encountered.
    fn parse(&mut self, record: &str) -> Result<(), SegmentError>;

    /// Checks mandatory fields, tag identity, and field content, in that order.
    ///
    /// # Errors
    /// Returns the first violation found.
    fn validate(&self) -> Result<(), SegmentError>;

    /// Renders the segment in the selected wire shape.
    #[must_use]
    fn format(&self, options: FormatOptions) -> String;

    /// Parses a record into a new instance.
    ///
    /// # Errors
    /// Returns the first length or field error encountered.
    fn from_record(record: &str) -> Result<Self, SegmentError> {
        let mut segment = Self::default();
        segment.parse(record)?;
        Ok(segment)
    }
}

/// Rejects a tag that does not belong to the segment kind.
///
/// # Errors
/// Returns [`Violation::ValidTagForType`] attributed to the `tag` field.
pub fn check_tag(tag: &str, expected: &str) -> Result<(), FieldError> {
    if tag != expected {
        return Err(FieldError::with_value("tag", Violation::ValidTagForType, tag));
    }
    Ok(())
}

/// Rejects an empty mandatory field.
///
/// # Errors
/// Returns [`Violation::FieldRequired`] attributed to `def`.
pub fn require(def: &FieldDef, value: &str) -> Result<(), FieldError> {
    fedwire_core::validator::require(value).map_err(|violation| FieldError::new(def.name, violation))
}

/// Checks a field's length, then its content.
///
/// The field delimiter is rejected in every field, so any value that
/// validates can be formatted and parsed back unchanged.
///
/// # Arguments
/// * `def` - Definition of the field being checked
/// * `value` - The field value
/// * `validator` - Content validator for the field
///
/// # Errors
/// Returns [`Violation::MaxLength`], [`Violation::UnexpectedDelimiter`], or the
/// validator's violation, attributed to `def`.
pub fn check(def: &FieldDef, value: &str, validator: fn(&str) -> Check) -> Result<(), FieldError> {
    def.check_length(value)?;
    if value.contains(DELIMITER) {
        return Err(def.error(Violation::UnexpectedDelimiter, value));
    }
    validator(value).map_err(|violation| def.error(violation, value))
}
