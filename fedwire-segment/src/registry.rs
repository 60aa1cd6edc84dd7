/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Closed registry of segment kinds.
//!
//! This module provides:
//! - [`SegmentKind`]: One variant per tag, ordered canonically
//! - [`Segment`]: Sum type over every segment kind
//! - [`SegmentVariant`]: Typed access from a [`Segment`] to its concrete kind
//! - [`parse_segment`]: Tag dispatch for a raw record
//!
//! Every table here is generated from a single list, so adding a kind is one line.

use crate::advice::{FIBeneficiaryFIAdvice, OriginatorToBeneficiary};
use crate::cover::{BeneficiaryCustomer, CurrencyInstructedAmount};
use crate::drawdown::{AccountCreditedDrawdown, AccountDebitedDrawdown};
use crate::function::{BusinessFunction, LocalInstrument};
use crate::header::{InputMessageAccountabilityData, SenderSupplied, TypeSubType};
use crate::institution::{
    Amount, ReceiverDepositoryInstitution, SenderDepositoryInstitution, SenderReference,
};
use crate::party::{Beneficiary, Originator};
use crate::remittance::{ActualAmountPaid, AmountNegotiatedDiscount};
use crate::segment::WireSegment;
use fedwire_codec::split_at_char;
use fedwire_core::error::{FedwireError, SchemaError, SegmentError};
use fedwire_core::field::SegmentLayout;
use fedwire_core::types::{FormatOptions, TAG_LENGTH};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Typed access from a [`Segment`] to one concrete segment kind.
pub trait SegmentVariant: WireSegment {
    /// The registry entry for this kind.
    const KIND: SegmentKind;

    /// Returns the concrete segment if `segment` is of this kind.
    fn from_segment(segment: &Segment) -> Option<&Self>;

    /// Returns the concrete segment mutably if `segment` is of this kind.
    fn from_segment_mut(segment: &mut Segment) -> Option<&mut Self>;
}

macro_rules! define_segments {
    ($($kind:ident,)*) => {
        /// Segment kinds, declared in canonical wire order.
        ///
        /// The derived ordering is the order in which a message is written.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum SegmentKind {
            $(
                #[doc = concat!("`", stringify!($kind), "` segment.")]
                $kind,
            )*
        }

        impl SegmentKind {
            /// Every kind, in canonical order.
            pub const ALL: &'static [Self] = &[$(Self::$kind,)*];

            /// Returns the kind's constant tag.
            #[must_use]
            pub const fn tag(self) -> &'static str {
                match self {
                    $(Self::$kind => <$kind as WireSegment>::TAG,)*
                }
            }

            /// Returns the kind's field layout.
            #[must_use]
            pub const fn layout(self) -> SegmentLayout {
                match self {
                    $(Self::$kind => <$kind as WireSegment>::LAYOUT,)*
                }
            }

            /// Returns the kind's name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$kind => stringify!($kind),)*
                }
            }

            /// Creates an empty segment of this kind.
            #[must_use]
            pub fn empty(self) -> Segment {
                match self {
                    $(Self::$kind => Segment::$kind(<$kind>::default()),)*
                }
            }

            /// Parses a record as this kind.
            ///
            /// # Errors
            /// Returns the first length or field error encountered.
            pub fn parse(self, record: &str) -> Result<Segment, SegmentError> {
                match self {
                    $(Self::$kind => <$kind>::from_record(record).map(Segment::$kind),)*
                }
            }
        }

        /// A parsed segment of any kind.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum Segment {
            $(
                #[doc = concat!("`", stringify!($kind), "` segment.")]
                $kind($kind),
            )*
        }

        impl Segment {
            /// Returns the kind of this segment.
            #[must_use]
            pub const fn kind(&self) -> SegmentKind {
                match self {
                    $(Self::$kind(_) => SegmentKind::$kind,)*
                }
            }

            /// Returns the tag held by the segment instance.
            #[must_use]
            pub fn tag(&self) -> &str {
                match self {
                    $(Self::$kind(s) => s.tag(),)*
                }
            }

            /// Validates the segment.
            ///
            /// # Errors
            /// Returns the first violation found.
            pub fn validate(&self) -> Result<(), SegmentError> {
                match self {
                    $(Self::$kind(s) => s.validate(),)*
                }
            }

            /// Renders the segment in the selected wire shape.
            #[must_use]
            pub fn format(&self, options: FormatOptions) -> String {
                match self {
                    $(Self::$kind(s) => s.format(options),)*
                }
            }
        }

        $(
            impl SegmentVariant for $kind {
                const KIND: SegmentKind = SegmentKind::$kind;

                fn from_segment(segment: &Segment) -> Option<&Self> {
                    match segment {
                        Segment::$kind(s) => Some(s),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }

                fn from_segment_mut(segment: &mut Segment) -> Option<&mut Self> {
                    match segment {
                        Segment::$kind(s) => Some(s),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }
            }

            impl From<$kind> for Segment {
                fn from(segment: $kind) -> Self {
                    Self::$kind(segment)
                }
            }

            impl fmt::Display for $kind {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.format(FormatOptions::fixed()))
                }
            }
        )*
    };
}

define_segments! {
    SenderSupplied,
    TypeSubType,
    InputMessageAccountabilityData,
    Amount,
    SenderDepositoryInstitution,
    SenderReference,
    ReceiverDepositoryInstitution,
    BusinessFunction,
    LocalInstrument,
    CurrencyInstructedAmount,
    Beneficiary,
    AccountDebitedDrawdown,
    Originator,
    AccountCreditedDrawdown,
    OriginatorToBeneficiary,
    FIBeneficiaryFIAdvice,
    BeneficiaryCustomer,
    ActualAmountPaid,
    AmountNegotiatedDiscount,
}

impl SegmentKind {
    /// Looks up the kind registered for `tag`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(FormatOptions::fixed()))
    }
}

/// Reads a record's tag and parses the record as the registered kind.
///
/// # Arguments
/// * `record` - One record, beginning with its 6-character tag
///
/// # Errors
/// Returns [`SchemaError::UnknownTag`] if no kind is registered for the tag,
/// or the segment's parse error wrapped with the tag.
pub fn parse_segment(record: &str) -> Result<Segment, FedwireError> {
    let (tag, _) = split_at_char(record, TAG_LENGTH);
    let kind =
        SegmentKind::from_tag(tag).ok_or_else(|| SchemaError::UnknownTag(tag.to_string()))?;
    kind.parse(record)
        .map_err(|source| FedwireError::segment(kind.tag(), source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fedwire_core::error::Violation;

    #[test]
    fn test_tags_are_unique_and_ordered() {
        let tags: Vec<&str> = SegmentKind::ALL.iter().map(|kind| kind.tag()).collect();
        let mut sorted = tags.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(tags, sorted);
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(SegmentKind::from_tag("{8450}"), Some(SegmentKind::ActualAmountPaid));
        assert_eq!(SegmentKind::from_tag("{3600}"), Some(SegmentKind::BusinessFunction));
        assert_eq!(SegmentKind::from_tag("{9999}"), None);
    }

    #[test]
    fn test_empty_segment_carries_tag() {
        for &kind in SegmentKind::ALL {
            let segment = kind.empty();
            assert_eq!(segment.kind(), kind);
            assert_eq!(segment.tag(), kind.tag());
        }
    }

    #[test]
    fn test_parse_segment_dispatches() {
        let segment = parse_segment("{8450}USD1234.56*").unwrap();
        assert_eq!(segment.kind(), SegmentKind::ActualAmountPaid);
        let aap = ActualAmountPaid::from_segment(&segment).unwrap();
        assert_eq!(aap.remittance_amount.amount, "1234.56");
        assert!(Amount::from_segment(&segment).is_none());
    }

    #[test]
    fn test_parse_segment_unknown_tag() {
        let err = parse_segment("{9999}ABC").unwrap_err();
        assert!(matches!(
            err.schema_error(),
            Some(SchemaError::UnknownTag(tag)) if tag == "{9999}"
        ));
    }

    #[test]
    fn test_parse_segment_wraps_tag() {
        let err = parse_segment("{8450}USD1234.56          ").unwrap_err();
        assert!(err.to_string().starts_with("{8450} Amount"));
        assert!(matches!(err.violation(), Some(Violation::WrongLength { .. })));
    }

    #[test]
    fn test_display_is_fixed_format() {
        let segment = parse_segment("{3320}REF*").unwrap();
        assert_eq!(segment.to_string(), "{3320}REF             ");
        assert_eq!(segment.to_string().chars().count(), 22);
    }

    #[test]
    fn test_segment_json_is_keyed_by_kind() {
        let segment: Segment = SegmentKind::SenderReference.empty();
        let json = serde_json::to_string(&segment).unwrap();
        assert_eq!(json, r#"{"senderReference":{"senderReference":""}}"#);
        let back: Segment = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tag(), "{3320}");
    }

    #[test]
    fn test_from_segment_mut() {
        let mut segment: Segment = SenderReference::new().into();
        if let Some(sr) = SenderReference::from_segment_mut(&mut segment) {
            sr.sender_reference = "REF".to_string();
        }
        assert!(segment.validate().is_ok());
    }
}
