/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Structured remittance amount segments, permitted with local instrument `RMTS`.
//!
//! - [`RemittanceAmount`]: currency code and amount
//! - [`ActualAmountPaid`] `{8450}`
//! - [`AmountNegotiatedDiscount`] `{8550}`

use crate::segment::{WireSegment, check, check_tag, require};
use fedwire_codec::{RecordDecoder, RecordEncoder};
use fedwire_core::error::{FieldError, SegmentError};
use fedwire_core::field::{FieldDef, SegmentLayout};
use fedwire_core::types::FormatOptions;
use fedwire_core::validator::{is_amount, is_currency_code};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const CURRENCY_CODE: FieldDef = FieldDef::fixed("CurrencyCode", 3);
const AMOUNT: FieldDef = FieldDef::variable("Amount", 19);
const REMITTANCE_FIELDS: &[FieldDef] = &[CURRENCY_CODE, AMOUNT];

/// Currency code and amount of a remittance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RemittanceAmount {
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Amount with a `,` or `.` decimal marker, e.g. `1234.56`.
    pub amount: String,
}

impl RemittanceAmount {
    /// Returns the amount as a decimal, accepting either decimal marker.
    #[must_use]
    pub fn to_decimal(&self) -> Option<Decimal> {
        self.amount.replace(',', ".").parse().ok()
    }

    fn read(decoder: &mut RecordDecoder<'_>) -> Result<Self, SegmentError> {
        Ok(Self {
            currency_code: decoder.read(&CURRENCY_CODE)?,
            amount: decoder.read(&AMOUNT)?,
        })
    }

    fn write(&self, encoder: &mut RecordEncoder) {
        encoder
            .put(&CURRENCY_CODE, &self.currency_code)
            .put(&AMOUNT, &self.amount);
    }

    fn check_inclusion(&self) -> Result<(), FieldError> {
        require(&AMOUNT, &self.amount)?;
        require(&CURRENCY_CODE, &self.currency_code)
    }

    fn check_fields(&self) -> Result<(), FieldError> {
        check(&CURRENCY_CODE, &self.currency_code, is_currency_code)?;
        check(&AMOUNT, &self.amount, is_amount)
    }
}

/// Actual amount paid, `{8450}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActualAmountPaid {
    #[serde(skip)]
    pub(crate) tag: String,
    /// The amount paid.
    pub remittance_amount: RemittanceAmount,
}

impl ActualAmountPaid {
    /// Creates an empty segment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for ActualAmountPaid {
    fn default() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            remittance_amount: RemittanceAmount::default(),
        }
    }
}

impl WireSegment for ActualAmountPaid {
    const TAG: &'static str = "{8450}";
    const LAYOUT: SegmentLayout = SegmentLayout::new(Self::TAG, REMITTANCE_FIELDS);

    fn tag(&self) -> &str {
        &self.tag
    }

    fn parse(&mut self, record: &str) -> Result<(), SegmentError> {
        let mut decoder = RecordDecoder::new(record, &Self::LAYOUT)?;
        self.tag = decoder.tag().to_string();
        self.remittance_amount = RemittanceAmount::read(&mut decoder)?;
        decoder.finish()
    }

    fn validate(&self) -> Result<(), SegmentError> {
        self.remittance_amount.check_inclusion()?;
        check_tag(&self.tag, Self::TAG)?;
        self.remittance_amount.check_fields()?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut encoder =
            RecordEncoder::new(&self.tag, options, Self::LAYOUT.max_variable_length());
        self.remittance_amount.write(&mut encoder);
        encoder.finish()
    }
}

/// Amount of negotiated discount, `{8550}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AmountNegotiatedDiscount {
    #[serde(skip)]
    pub(crate) tag: String,
    /// The discount amount.
    pub remittance_amount: RemittanceAmount,
}

impl AmountNegotiatedDiscount {
    /// Creates an empty segment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for AmountNegotiatedDiscount {
    fn default() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            remittance_amount: RemittanceAmount::default(),
        }
    }
}

impl WireSegment for AmountNegotiatedDiscount {
    const TAG: &'static str = "{8550}";
    const LAYOUT: SegmentLayout = SegmentLayout::new(Self::TAG, REMITTANCE_FIELDS);

    fn tag(&self) -> &str {
        &self.tag
    }

    fn parse(&mut self, record: &str) -> Result<(), SegmentError> {
        let mut decoder = RecordDecoder::new(record, &Self::LAYOUT)?;
        self.tag = decoder.tag().to_string();
        self.remittance_amount = RemittanceAmount::read(&mut decoder)?;
        decoder.finish()
    }

    fn validate(&self) -> Result<(), SegmentError> {
        self.remittance_amount.check_inclusion()?;
        check_tag(&self.tag, Self::TAG)?;
        self.remittance_amount.check_fields()?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut encoder =
            RecordEncoder::new(&self.tag, options, Self::LAYOUT.max_variable_length());
        self.remittance_amount.write(&mut encoder);
        encoder.finish()
    }
}
