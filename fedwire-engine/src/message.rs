/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! The in-memory message.
//!
//! A [`Message`] owns its segments in insertion order. Serialization walks
//! them in canonical order instead, so assembly order never leaks to the wire.

use crate::schema::SchemaContext;
use fedwire_core::error::{FedwireError, Result};
use fedwire_core::types::{BusinessFunctionCode, FormatOptions, LocalInstrumentCode};
use fedwire_segment::{BusinessFunction, LocalInstrument, Segment, SegmentKind, SegmentVariant};
use serde::{Deserialize, Serialize};

/// An ordered collection of segments forming one funds-transfer message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message {
    segments: Vec<Segment>,
}

impl Message {
    /// Creates an empty message.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Sets the segment of its kind, replacing an existing one in place.
    ///
    /// # Returns
    /// The replaced segment, if one was present.
    pub fn set(&mut self, segment: impl Into<Segment>) -> Option<Segment> {
        let segment = segment.into();
        match self.position(segment.kind()) {
            Some(index) => Some(std::mem::replace(&mut self.segments[index], segment)),
            None => {
                self.segments.push(segment);
                None
            }
        }
    }

    /// Appends a segment without replacing others of its kind.
    pub fn push(&mut self, segment: impl Into<Segment>) {
        self.segments.push(segment.into());
    }

    /// Returns the first segment of `kind`.
    #[must_use]
    pub fn get(&self, kind: SegmentKind) -> Option<&Segment> {
        self.segments.iter().find(|s| s.kind() == kind)
    }

    /// Returns the first segment of type `T`.
    #[must_use]
    pub fn segment<T: SegmentVariant>(&self) -> Option<&T> {
        self.segments.iter().find_map(T::from_segment)
    }

    /// Returns the first segment of type `T` mutably.
    #[must_use]
    pub fn segment_mut<T: SegmentVariant>(&mut self) -> Option<&mut T> {
        self.segments.iter_mut().find_map(T::from_segment_mut)
    }

    /// Removes every segment of `kind`.
    ///
    /// # Returns
    /// The first removed segment, if any.
    pub fn remove(&mut self, kind: SegmentKind) -> Option<Segment> {
        let first = self.position(kind).map(|index| self.segments.remove(index));
        self.segments.retain(|s| s.kind() != kind);
        first
    }

    /// Returns true if a segment of `kind` is present.
    #[must_use]
    pub fn contains(&self, kind: SegmentKind) -> bool {
        self.position(kind).is_some()
    }

    /// Returns the number of segments.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the message holds no segments.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over segments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Returns segments in canonical wire order.
    ///
    /// Segments of the same kind keep their insertion order.
    #[must_use]
    pub fn canonical(&self) -> Vec<&Segment> {
        let mut ordered: Vec<&Segment> = self.segments.iter().collect();
        ordered.sort_by_key(|s| s.kind());
        ordered
    }

    /// Returns the business function code, if `{3600}` holds a known one.
    #[must_use]
    pub fn business_function_code(&self) -> Option<BusinessFunctionCode> {
        self.segment::<BusinessFunction>().and_then(BusinessFunction::code)
    }

    /// Returns the local instrument code, if `{3610}` holds a known one.
    #[must_use]
    pub fn local_instrument_code(&self) -> Option<LocalInstrumentCode> {
        self.segment::<LocalInstrument>().and_then(LocalInstrument::code)
    }

    /// Validates every segment, then the conditional schema of the whole message.
    ///
    /// # Errors
    /// Returns the first segment violation, wrapped with its tag, or the first
    /// schema violation.
    pub fn validate(&self) -> Result<()> {
        for segment in &self.segments {
            segment
                .validate()
                .map_err(|source| FedwireError::segment(segment.kind().tag(), source))?;
        }
        SchemaContext::check_message(self)?;
        Ok(())
    }

    /// Renders every segment in canonical order, one record per line.
    #[must_use]
    pub fn format(&self, options: FormatOptions) -> String {
        self.canonical()
            .into_iter()
            .fold(String::new(), |mut out, segment| {
                out.push_str(&segment.format(options));
                out.push('\n');
                out
            })
    }

    /// Serializes the message as JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserializes a message from JSON. Tags are never read from the input.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn position(&self, kind: SegmentKind) -> Option<usize> {
        self.segments.iter().position(|s| s.kind() == kind)
    }
}

impl<'a> IntoIterator for &'a Message {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl FromIterator<Segment> for Message {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}
