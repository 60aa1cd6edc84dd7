/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Field formatting primitives and the record builder.
//!
//! This module renders field values in either wire shape selected by
//! [`FormatOptions`]. [`RecordEncoder`] appends fields in layout order and
//! applies [`strip_delimiters`] once, after the whole record is built.

use crate::chars::char_count;
use fedwire_core::field::{Encoding, FieldDef};
use fedwire_core::types::{DELIMITER, FormatOptions};

/// Right-pads `value` with spaces to `n` characters.
///
/// Values already `n` characters or longer are returned unchanged; callers
/// validate length before formatting.
///
/// # Arguments
/// * `value` - The field value
/// * `n` - Declared field width
#[must_use]
pub fn alpha_field(value: &str, n: usize) -> String {
    let len = char_count(value);
    let mut out = String::with_capacity(value.len() + n.saturating_sub(len));
    out.push_str(value);
    out.extend(std::iter::repeat_n(' ', n.saturating_sub(len)));
    out
}

/// Renders a variable-width field value for the selected wire shape.
///
/// # Arguments
/// * `value` - The field value
/// * `n` - Declared maximum field width
/// * `options` - Selected wire shape
///
/// # Returns
/// The trimmed value in variable-length mode, the padded value otherwise.
#[must_use]
pub fn format_alpha_field(value: &str, n: usize, options: FormatOptions) -> String {
    if options.variable_length_fields {
        value.trim().to_string()
    } else {
        alpha_field(value, n)
    }
}

/// Left-pads a numeric `value` with zeros to `n` characters.
///
/// # Arguments
/// * `value` - The numeric field value
/// * `n` - Declared field width
#[must_use]
pub fn numeric_string_field(value: &str, n: usize) -> String {
    let value = value.trim();
    let len = char_count(value);
    let mut out = String::with_capacity(n.max(value.len()));
    out.extend(std::iter::repeat_n('0', n.saturating_sub(len)));
    out.push_str(value);
    out
}

/// Collapses the trailing run of delimiters to a single delimiter.
///
/// Interior delimiters mark the position of empty fields and are kept. A
/// buffer without a trailing delimiter is returned unchanged.
///
/// # Arguments
/// * `buf` - A fully-built variable-length record
#[must_use]
pub fn strip_delimiters(buf: &str) -> String {
    let trimmed = buf.trim_end_matches(DELIMITER);
    if trimmed.len() == buf.len() {
        return buf.to_string();
    }
    let mut out = String::with_capacity(trimmed.len() + 1);
    out.push_str(trimmed);
    out.push(DELIMITER);
    out
}

/// Builder appending the fields of one record in layout order.
#[derive(Debug)]
pub struct RecordEncoder {
    /// Record under construction, tag first.
    buf: String,
    /// Selected wire shape.
    options: FormatOptions,
}

impl RecordEncoder {
    /// Creates a builder that starts with `tag`.
    ///
    /// # Arguments
    /// * `tag` - The segment tag
    /// * `options` - Selected wire shape
    /// * `capacity` - Initial buffer capacity in bytes
    #[must_use]
    pub fn new(tag: &str, options: FormatOptions, capacity: usize) -> Self {
        let mut buf = String::with_capacity(capacity.max(tag.len()));
        buf.push_str(tag);
        Self { buf, options }
    }

    /// Appends one field.
    ///
    /// Fixed fields are always padded to their width. Variable fields are
    /// padded in fixed-width mode and followed by the delimiter otherwise.
    ///
    /// # Arguments
    /// * `def` - Definition of the field
    /// * `value` - The field value
    pub fn put(&mut self, def: &FieldDef, value: &str) -> &mut Self {
        match def.encoding {
            Encoding::Fixed => self.buf.push_str(&alpha_field(value, def.width)),
            Encoding::ZeroPadded => self.buf.push_str(&numeric_string_field(value, def.width)),
            Encoding::Variable => {
                self.buf
                    .push_str(&format_alpha_field(value, def.width, self.options));
                if self.options.variable_length_fields {
                    self.buf.push(DELIMITER);
                }
            }
        }
        self
    }

    /// Returns the record built so far.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Completes the record.
    ///
    /// # Returns
    /// The record, with trailing delimiters collapsed in variable-length mode.
    #[must_use]
    pub fn finish(self) -> String {
        if self.options.variable_length_fields {
            strip_delimiters(&self.buf)
        } else {
            self.buf
        }
    }
}
