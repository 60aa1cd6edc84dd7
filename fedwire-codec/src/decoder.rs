/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Field parsing primitives and the record cursor.
//!
//! The free functions read one field from the front of the remaining record
//! and report how many characters they consumed. [`RecordDecoder`] walks a
//! [`SegmentLayout`] with them, attributing failures to the field being read.

use crate::chars::{char_count, split_at_char};
use fedwire_core::error::{FieldError, SegmentError, Violation};
use fedwire_core::field::{Encoding, FieldDef, SegmentLayout};
use fedwire_core::types::{DELIMITER_BYTE, TAG_LENGTH};
use memchr::memchr;

/// Reads exactly `n` characters from the start of `input`.
///
/// # Arguments
/// * `input` - Remaining record content
/// * `n` - Declared field width
///
/// # Returns
/// The trimmed value and the number of characters consumed (`n`).
///
/// # Errors
/// Returns [`Violation::MinLength`] if fewer than `n` characters remain, or
/// [`Violation::UnexpectedDelimiter`] if the field holds the delimiter.
pub fn parse_fixed_string_field(input: &str, n: usize) -> Result<(String, usize), Violation> {
    let (head, _) = split_at_char(input, n);
    let actual = char_count(head);
    if actual < n {
        return Err(Violation::MinLength {
            required: n,
            actual,
        });
    }
    if memchr(DELIMITER_BYTE, head.as_bytes()).is_some() {
        return Err(Violation::UnexpectedDelimiter);
    }
    Ok((head.trim().to_string(), n))
}

/// Reads a variable-width field of at most `max` characters.
///
/// The field ends at the first delimiter found within `max + 1` characters
/// (a full-width value may still be terminated). Without a delimiter, the
/// field is a padded fixed-width rendering and must supply all `max`
/// characters. An empty remainder is a field stripped from the end of a
/// variable-length record and parses to `""`.
///
/// # Arguments
/// * `input` - Remaining record content
/// * `max` - Declared maximum field width
///
/// # Returns
/// The trimmed value and the number of characters consumed, including the
/// delimiter when one terminated the field.
///
/// # Errors
/// Returns [`Violation::WrongLength`] if the remainder is neither delimiter
/// terminated nor long enough to hold the padded field.
pub fn parse_variable_string_field(input: &str, max: usize) -> Result<(String, usize), Violation> {
    if input.is_empty() {
        return Ok((String::new(), 0));
    }

    let (window, _) = split_at_char(input, max + 1);
    if let Some(i) = memchr(DELIMITER_BYTE, window.as_bytes()) {
        let value = &window[..i];
        return Ok((value.trim().to_string(), char_count(value) + 1));
    }

    let available = char_count(window);
    if available < max {
        return Err(Violation::WrongLength {
            expected: max,
            actual: available,
        });
    }
    let (value, _) = split_at_char(window, max);
    Ok((value.trim().to_string(), max))
}

/// Checks that the fields read account for the entire record.
///
/// # Arguments
/// * `record` - The full record, tag included
/// * `consumed` - Characters consumed by the tag and every field
///
/// # Errors
/// Returns [`SegmentError::TagMaxLength`] if the record length differs.
pub fn verify_data_with_read_length(record: &str, consumed: usize) -> Result<(), SegmentError> {
    let actual = char_count(record);
    if actual != consumed {
        return Err(SegmentError::TagMaxLength {
            expected: consumed,
            actual,
        });
    }
    Ok(())
}

/// Cursor reading the fields of one record in layout order.
#[derive(Debug)]
pub struct RecordDecoder<'a> {
    /// The full record.
    record: &'a str,
    /// Content not yet consumed.
    rest: &'a str,
    /// Characters consumed so far, tag included.
    consumed: usize,
}

impl<'a> RecordDecoder<'a> {
    /// Creates a cursor positioned after the record's tag.
    ///
    /// # Arguments
    /// * `record` - The full record, beginning with its 6-character tag
    /// * `layout` - The segment layout the record is read against
    ///
    /// # Errors
    /// Returns [`SegmentError::TagMinLength`] if the record is shorter than
    /// the layout's minimum length.
    pub fn new(record: &'a str, layout: &SegmentLayout) -> Result<Self, SegmentError> {
        let actual = char_count(record);
        let required = layout.min_length();
        if actual < required {
            return Err(SegmentError::TagMinLength { required, actual });
        }
        let (_, rest) = split_at_char(record, TAG_LENGTH);
        Ok(Self {
            record,
            rest,
            consumed: TAG_LENGTH,
        })
    }

    /// Returns the record's tag as written.
    #[inline]
    #[must_use]
    pub fn tag(&self) -> &'a str {
        split_at_char(self.record, TAG_LENGTH).0
    }

    /// Reads the next field.
    ///
    /// # Arguments
    /// * `def` - Definition of the field at the cursor
    ///
    /// # Errors
    /// Returns a [`SegmentError::Field`] naming `def` on any parse failure.
    pub fn read(&mut self, def: &FieldDef) -> Result<String, SegmentError> {
        let parsed = match def.encoding {
            Encoding::Fixed | Encoding::ZeroPadded => parse_fixed_string_field(self.rest, def.width),
            Encoding::Variable => parse_variable_string_field(self.rest, def.width),
        };
        let (value, read) = parsed.map_err(|violation| FieldError::new(def.name, violation))?;
        self.rest = split_at_char(self.rest, read).1;
        self.consumed += read;
        Ok(value)
    }

    /// Returns the number of characters consumed so far.
    #[inline]
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.consumed
    }

    /// Returns the content not yet consumed.
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> &'a str {
        self.rest
    }

    /// Completes the read, rejecting trailing data.
    ///
    /// # Errors
    /// Returns [`SegmentError::TagMaxLength`] if unread data remains.
    pub fn finish(self) -> Result<(), SegmentError> {
        verify_data_with_read_length(self.record, self.consumed)
    }
}
