/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Cover payment segments, permitted with local instrument `COVS`.
//!
//! - [`CurrencyInstructedAmount`] `{3710}`
//! - [`CoverPayment`]: SWIFT field tag plus free-text lines
//! - [`BeneficiaryCustomer`] `{7033}`

use crate::segment::{WireSegment, check, check_tag};
use fedwire_codec::{RecordDecoder, RecordEncoder};
use fedwire_core::error::{FieldError, SegmentError, Violation};
use fedwire_core::field::{FieldDef, SegmentLayout};
use fedwire_core::types::FormatOptions;
use fedwire_core::validator::{is_alphanumeric, is_amount};
use serde::{Deserialize, Serialize};

const SWIFT_FIELD_TAG: FieldDef = FieldDef::variable("SwiftFieldTag", 5);
/// Space-padded: instructed amounts carry their own decimal comma.
const INSTRUCTED_AMOUNT: FieldDef = FieldDef::variable("Amount", 18);

const SWIFT_LINE_ONE: FieldDef = FieldDef::variable("SwiftLineOne", 35);
const SWIFT_LINE_TWO: FieldDef = FieldDef::variable("SwiftLineTwo", 35);
const SWIFT_LINE_THREE: FieldDef = FieldDef::variable("SwiftLineThree", 35);
const SWIFT_LINE_FOUR: FieldDef = FieldDef::variable("SwiftLineFour", 35);
const SWIFT_LINE_FIVE: FieldDef = FieldDef::variable("SwiftLineFive", 35);
const SWIFT_LINE_SIX: FieldDef = FieldDef::variable("SwiftLineSix", 35);

/// Currency instructed amount, `{3710}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrencyInstructedAmount {
    #[serde(skip)]
    pub(crate) tag: String,
    /// SWIFT field tag.
    pub swift_field_tag: String,
    /// Instructed amount, e.g. `1500,49`.
    pub amount: String,
}

impl CurrencyInstructedAmount {
    /// Creates an empty segment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for CurrencyInstructedAmount {
    fn default() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            swift_field_tag: String::new(),
            amount: String::new(),
        }
    }
}

impl WireSegment for CurrencyInstructedAmount {
    const TAG: &'static str = "{3710}";
    const LAYOUT: SegmentLayout =
        SegmentLayout::new(Self::TAG, &[SWIFT_FIELD_TAG, INSTRUCTED_AMOUNT]);

    fn tag(&self) -> &str {
        &self.tag
    }

    fn parse(&mut self, record: &str) -> Result<(), SegmentError> {
        let mut decoder = RecordDecoder::new(record, &Self::LAYOUT)?;
        self.tag = decoder.tag().to_string();
        self.swift_field_tag = decoder.read(&SWIFT_FIELD_TAG)?;
        self.amount = decoder.read(&INSTRUCTED_AMOUNT)?;
        decoder.finish()
    }

    fn validate(&self) -> Result<(), SegmentError> {
        check_tag(&self.tag, Self::TAG)?;
        check(&SWIFT_FIELD_TAG, &self.swift_field_tag, is_alphanumeric)?;
        check(&INSTRUCTED_AMOUNT, &self.amount, is_amount)?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut encoder =
            RecordEncoder::new(&self.tag, options, Self::LAYOUT.max_variable_length());
        encoder
            .put(&SWIFT_FIELD_TAG, &self.swift_field_tag)
            .put(&INSTRUCTED_AMOUNT, &self.amount);
        encoder.finish()
    }
}

/// SWIFT field tag with up to six lines of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoverPayment {
    /// SWIFT field tag.
    pub swift_field_tag: String,
    /// First line.
    pub swift_line_one: String,
    /// Second line.
    pub swift_line_two: String,
    /// Third line.
    pub swift_line_three: String,
    /// Fourth line.
    pub swift_line_four: String,
    /// Fifth line.
    pub swift_line_five: String,
    /// Sixth line; not carried by every cover segment.
    pub swift_line_six: String,
}

/// Beneficiary customer, `{7033}`.
///
/// Only five SWIFT lines are on the wire; the sixth must stay empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BeneficiaryCustomer {
    #[serde(skip)]
    pub(crate) tag: String,
    /// The cover payment text.
    pub cover_payment: CoverPayment,
}

impl BeneficiaryCustomer {
    /// Creates an empty segment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for BeneficiaryCustomer {
    fn default() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            cover_payment: CoverPayment::default(),
        }
    }
}

impl WireSegment for BeneficiaryCustomer {
    const TAG: &'static str = "{7033}";
    const LAYOUT: SegmentLayout = SegmentLayout::new(
        Self::TAG,
        &[
            SWIFT_FIELD_TAG,
            SWIFT_LINE_ONE,
            SWIFT_LINE_TWO,
            SWIFT_LINE_THREE,
            SWIFT_LINE_FOUR,
            SWIFT_LINE_FIVE,
        ],
    );

    fn tag(&self) -> &str {
        &self.tag
    }

    fn parse(&mut self, record: &str) -> Result<(), SegmentError> {
        let mut decoder = RecordDecoder::new(record, &Self::LAYOUT)?;
        self.tag = decoder.tag().to_string();
        self.cover_payment = CoverPayment {
            swift_field_tag: decoder.read(&SWIFT_FIELD_TAG)?,
            swift_line_one: decoder.read(&SWIFT_LINE_ONE)?,
            swift_line_two: decoder.read(&SWIFT_LINE_TWO)?,
            swift_line_three: decoder.read(&SWIFT_LINE_THREE)?,
            swift_line_four: decoder.read(&SWIFT_LINE_FOUR)?,
            swift_line_five: decoder.read(&SWIFT_LINE_FIVE)?,
            swift_line_six: String::new(),
        };
        decoder.finish()
    }

    fn validate(&self) -> Result<(), SegmentError> {
        let cp = &self.cover_payment;
        if !cp.swift_line_six.is_empty() {
            return Err(FieldError::with_value(
                SWIFT_LINE_SIX.name,
                Violation::InvalidProperty,
                cp.swift_line_six.as_str(),
            )
            .into());
        }
        check_tag(&self.tag, Self::TAG)?;
        check(&SWIFT_FIELD_TAG, &cp.swift_field_tag, is_alphanumeric)?;
        check(&SWIFT_LINE_ONE, &cp.swift_line_one, is_alphanumeric)?;
        check(&SWIFT_LINE_TWO, &cp.swift_line_two, is_alphanumeric)?;
        check(&SWIFT_LINE_THREE, &cp.swift_line_three, is_alphanumeric)?;
        check(&SWIFT_LINE_FOUR, &cp.swift_line_four, is_alphanumeric)?;
        check(&SWIFT_LINE_FIVE, &cp.swift_line_five, is_alphanumeric)?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let cp = &self.cover_payment;
        let mut encoder =
            RecordEncoder::new(&self.tag, options, Self::LAYOUT.max_variable_length());
        encoder
            .put(&SWIFT_FIELD_TAG, &cp.swift_field_tag)
            .put(&SWIFT_LINE_ONE, &cp.swift_line_one)
            .put(&SWIFT_LINE_TWO, &cp.swift_line_two)
            .put(&SWIFT_LINE_THREE, &cp.swift_line_three)
            .put(&SWIFT_LINE_FOUR, &cp.swift_line_four)
            .put(&SWIFT_LINE_FIVE, &cp.swift_line_five);
        encoder.finish()
    }
}
