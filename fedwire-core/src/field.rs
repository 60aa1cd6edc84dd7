/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Field and segment layout definitions.
//!
//! This module provides:
//! - [`Encoding`]: How a field is laid out on the wire
//! - [`FieldDef`]: Name, width, and encoding of one field
//! - [`SegmentLayout`]: The tag and ordered field list of one segment kind
//!
//! Layouts are `const` data. Every segment declares its fields once and both
//! parsing and formatting walk the same definitions, so the minimum record
//! length and the fixed-width record length are derived rather than hand-counted.

use crate::error::{FieldError, Violation};
use crate::types::TAG_LENGTH;
use serde::{Deserialize, Serialize};

/// Wire encoding of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    /// Always present, space-padded on the right to the declared width.
    Fixed,
    /// Always present, zero-padded on the left to the declared width.
    ZeroPadded,
    /// Space-padded in fixed-width mode; natural length followed by the
    /// delimiter in variable-length mode.
    Variable,
}

impl Encoding {
    /// Returns true if the field occupies its full width in every format.
    #[inline]
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Fixed | Self::ZeroPadded)
    }
}

/// Definition of a single field within a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDef {
    /// Field name used in error attribution.
    pub name: &'static str,
    /// Maximum width in characters (Unicode code points).
    pub width: usize,
    /// Wire encoding.
    pub encoding: Encoding,
}

impl FieldDef {
    /// Creates a fixed-width, space-padded field definition.
    #[inline]
    #[must_use]
    pub const fn fixed(name: &'static str, width: usize) -> Self {
        Self {
            name,
            width,
            encoding: Encoding::Fixed,
        }
    }

    /// Creates a fixed-width, zero-padded numeric field definition.
    #[inline]
    #[must_use]
    pub const fn zero_padded(name: &'static str, width: usize) -> Self {
        Self {
            name,
            width,
            encoding: Encoding::ZeroPadded,
        }
    }

    /// Creates a variable-width, delimiter-terminated field definition.
    #[inline]
    #[must_use]
    pub const fn variable(name: &'static str, width: usize) -> Self {
        Self {
            name,
            width,
            encoding: Encoding::Variable,
        }
    }

    /// Checks that `value` fits within the declared width.
    ///
    /// # Errors
    /// Returns a [`FieldError`] with [`Violation::MaxLength`] if the value is too long.
    pub fn check_length(&self, value: &str) -> Result<(), FieldError> {
        let actual = value.chars().count();
        if actual > self.width {
            return Err(FieldError::with_value(
                self.name,
                Violation::MaxLength {
                    max: self.width,
                    actual,
                },
                value,
            ));
        }
        Ok(())
    }

    /// Attributes a violation to this field, carrying the rejected value.
    #[must_use]
    pub fn error(&self, violation: Violation, value: &str) -> FieldError {
        FieldError::with_value(self.name, violation, value)
    }
}

/// Tag and ordered field list of one segment kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentLayout {
    /// The 6-character segment tag, e.g. `{8450}`.
    pub tag: &'static str,
    /// Fields in wire order.
    pub fields: &'static [FieldDef],
}

impl SegmentLayout {
    /// Creates a new layout.
    #[must_use]
    pub const fn new(tag: &'static str, fields: &'static [FieldDef]) -> Self {
        Self { tag, fields }
    }

    /// Minimum record length: the tag plus every always-present field.
    ///
    /// A record of exactly this length parses with all variable fields empty.
    #[must_use]
    pub const fn min_length(&self) -> usize {
        let mut total = TAG_LENGTH;
        let mut i = 0;
        while i < self.fields.len() {
            if self.fields[i].encoding.is_fixed() {
                total += self.fields[i].width;
            }
            i += 1;
        }
        total
    }

    /// Length of the fixed-width rendering: the tag plus every field at full width.
    #[must_use]
    pub const fn fixed_length(&self) -> usize {
        let mut total = TAG_LENGTH;
        let mut i = 0;
        while i < self.fields.len() {
            total += self.fields[i].width;
            i += 1;
        }
        total
    }

    /// Upper bound of the variable-length rendering, used to size buffers.
    #[must_use]
    pub const fn max_variable_length(&self) -> usize {
        let mut total = self.fixed_length();
        let mut i = 0;
        while i < self.fields.len() {
            if !self.fields[i].encoding.is_fixed() {
                total += 1;
            }
            i += 1;
        }
        total
    }

    /// Looks up a field definition by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}
