/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Amount and depository institution segments.
//!
//! - [`Amount`] `{2000}`: transfer amount in cents, zero-padded
//! - [`SenderDepositoryInstitution`] `{3100}`
//! - [`SenderReference`] `{3320}`
//! - [`ReceiverDepositoryInstitution`] `{3400}`

use crate::segment::{WireSegment, check, check_tag, require};
use fedwire_codec::{RecordDecoder, RecordEncoder};
use fedwire_core::error::SegmentError;
use fedwire_core::field::{FieldDef, SegmentLayout};
use fedwire_core::types::FormatOptions;
use fedwire_core::validator::{is_alphanumeric, is_numeric};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const AMOUNT: FieldDef = FieldDef::zero_padded("Amount", 12);

const SENDER_ABA_NUMBER: FieldDef = FieldDef::fixed("SenderABANumber", 9);
const SENDER_SHORT_NAME: FieldDef = FieldDef::variable("SenderShortName", 18);

const SENDER_REFERENCE: FieldDef = FieldDef::variable("SenderReference", 16);

const RECEIVER_ABA_NUMBER: FieldDef = FieldDef::fixed("ReceiverABANumber", 9);
const RECEIVER_SHORT_NAME: FieldDef = FieldDef::variable("ReceiverShortName", 18);

/// Transfer amount, `{2000}`.
///
/// The amount is twelve digits with two implied decimal places, so
/// `000000123456` is 1234.56.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Amount {
    #[serde(skip)]
    pub(crate) tag: String,
    /// Amount in cents, digits only.
    pub amount: String,
}

impl Amount {
    /// Creates an empty segment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the amount with its implied decimals applied.
    #[must_use]
    pub fn to_decimal(&self) -> Option<Decimal> {
        let cents: i64 = self.amount.parse().ok()?;
        Some(Decimal::new(cents, 2))
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            amount: String::new(),
        }
    }
}

impl WireSegment for Amount {
    const TAG: &'static str = "{2000}";
    const LAYOUT: SegmentLayout = SegmentLayout::new(Self::TAG, &[AMOUNT]);

    fn tag(&self) -> &str {
        &self.tag
    }

    fn parse(&mut self, record: &str) -> Result<(), SegmentError> {
        let mut decoder = RecordDecoder::new(record, &Self::LAYOUT)?;
        self.tag = decoder.tag().to_string();
        self.amount = decoder.read(&AMOUNT)?;
        decoder.finish()
    }

    fn validate(&self) -> Result<(), SegmentError> {
        require(&AMOUNT, &self.amount)?;
        check_tag(&self.tag, Self::TAG)?;
        check(&AMOUNT, &self.amount, is_numeric)?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut encoder =
            RecordEncoder::new(&self.tag, options, Self::LAYOUT.max_variable_length());
        encoder.put(&AMOUNT, &self.amount);
        encoder.finish()
    }
}

/// Sender depository institution, `{3100}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SenderDepositoryInstitution {
    #[serde(skip)]
    pub(crate) tag: String,
    /// Sender ABA routing number.
    pub sender_aba_number: String,
    /// Sender short name.
    pub sender_short_name: String,
}

impl SenderDepositoryInstitution {
    /// Creates an empty segment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for SenderDepositoryInstitution {
    fn default() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            sender_aba_number: String::new(),
            sender_short_name: String::new(),
        }
    }
}

impl WireSegment for SenderDepositoryInstitution {
    const TAG: &'static str = "{3100}";
    const LAYOUT: SegmentLayout =
        SegmentLayout::new(Self::TAG, &[SENDER_ABA_NUMBER, SENDER_SHORT_NAME]);

    fn tag(&self) -> &str {
        &self.tag
    }

    fn parse(&mut self, record: &str) -> Result<(), SegmentError> {
        let mut decoder = RecordDecoder::new(record, &Self::LAYOUT)?;
        self.tag = decoder.tag().to_string();
        self.sender_aba_number = decoder.read(&SENDER_ABA_NUMBER)?;
        self.sender_short_name = decoder.read(&SENDER_SHORT_NAME)?;
        decoder.finish()
    }

    fn validate(&self) -> Result<(), SegmentError> {
        require(&SENDER_ABA_NUMBER, &self.sender_aba_number)?;
        check_tag(&self.tag, Self::TAG)?;
        check(&SENDER_ABA_NUMBER, &self.sender_aba_number, is_numeric)?;
        check(&SENDER_SHORT_NAME, &self.sender_short_name, is_alphanumeric)?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut encoder =
            RecordEncoder::new(&self.tag, options, Self::LAYOUT.max_variable_length());
        encoder
            .put(&SENDER_ABA_NUMBER, &self.sender_aba_number)
            .put(&SENDER_SHORT_NAME, &self.sender_short_name);
        encoder.finish()
    }
}

/// Sender reference, `{3320}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SenderReference {
    #[serde(skip)]
    pub(crate) tag: String,
    /// Sender's own reference for the transfer.
    pub sender_reference: String,
}

impl SenderReference {
    /// Creates an empty segment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for SenderReference {
    fn default() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            sender_reference: String::new(),
        }
    }
}

impl WireSegment for SenderReference {
    const TAG: &'static str = "{3320}";
    const LAYOUT: SegmentLayout = SegmentLayout::new(Self::TAG, &[SENDER_REFERENCE]);

    fn tag(&self) -> &str {
        &self.tag
    }

    fn parse(&mut self, record: &str) -> Result<(), SegmentError> {
        let mut decoder = RecordDecoder::new(record, &Self::LAYOUT)?;
        self.tag = decoder.tag().to_string();
        self.sender_reference = decoder.read(&SENDER_REFERENCE)?;
        decoder.finish()
    }

    fn validate(&self) -> Result<(), SegmentError> {
        require(&SENDER_REFERENCE, &self.sender_reference)?;
        check_tag(&self.tag, Self::TAG)?;
        check(&SENDER_REFERENCE, &self.sender_reference, is_alphanumeric)?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut encoder =
            RecordEncoder::new(&self.tag, options, Self::LAYOUT.max_variable_length());
        encoder.put(&SENDER_REFERENCE, &self.sender_reference);
        encoder.finish()
    }
}

/// Receiver depository institution, `{3400}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReceiverDepositoryInstitution {
    #[serde(skip)]
    pub(crate) tag: String,
    /// Receiver ABA routing number.
    pub receiver_aba_number: String,
    /// Receiver short name.
    pub receiver_short_name: String,
}

impl ReceiverDepositoryInstitution {
    /// Creates an empty segment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for ReceiverDepositoryInstitution {
    fn default() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            receiver_aba_number: String::new(),
            receiver_short_name: String::new(),
        }
    }
}

impl WireSegment for ReceiverDepositoryInstitution {
    const TAG: &'static str = "{3400}";
    const LAYOUT: SegmentLayout =
        SegmentLayout::new(Self::TAG, &[RECEIVER_ABA_NUMBER, RECEIVER_SHORT_NAME]);

    fn tag(&self) -> &str {
        &self.tag
    }

    fn parse(&mut self, record: &str) -> Result<(), SegmentError> {
        let mut decoder = RecordDecoder::new(record, &Self::LAYOUT)?;
        self.tag = decoder.tag().to_string();
        self.receiver_aba_number = decoder.read(&RECEIVER_ABA_NUMBER)?;
        self.receiver_short_name = decoder.read(&RECEIVER_SHORT_NAME)?;
        decoder.finish()
    }

    fn validate(&self) -> Result<(), SegmentError> {
        require(&RECEIVER_ABA_NUMBER, &self.receiver_aba_number)?;
        check_tag(&self.tag, Self::TAG)?;
        check(&RECEIVER_ABA_NUMBER, &self.receiver_aba_number, is_numeric)?;
        check(&RECEIVER_SHORT_NAME, &self.receiver_short_name, is_alphanumeric)?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut encoder =
            RecordEncoder::new(&self.tag, options, Self::LAYOUT.max_variable_length());
        encoder
            .put(&RECEIVER_ABA_NUMBER, &self.receiver_aba_number)
            .put(&RECEIVER_SHORT_NAME, &self.receiver_short_name);
        encoder.finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use fedwire_core::error::Violation;

    pub(crate) fn mock_amount() -> Amount {
        let mut amt = Amount::new();
        amt.amount = "000001234567".to_string();
        amt
    }

    pub(crate) fn mock_sender_di() -> SenderDepositoryInstitution {
        let mut sdi = SenderDepositoryInstitution::new();
        sdi.sender_aba_number = "121042882".to_string();
        sdi.sender_short_name = "Wells Fargo NA".to_string();
        sdi
    }

    pub(crate) fn mock_sender_reference() -> SenderReference {
        let mut sr = SenderReference::new();
        sr.sender_reference = "Sender Reference".to_string();
        sr
    }

    pub(crate) fn mock_receiver_di() -> ReceiverDepositoryInstitution {
        let mut rdi = ReceiverDepositoryInstitution::new();
        rdi.receiver_aba_number = "231380104".to_string();
        rdi.receiver_short_name = "Citadel".to_string();
        rdi
    }

    #[test]
    fn test_mock_institution_segments_validate() {
        assert!(mock_amount().validate().is_ok());
        assert!(mock_sender_di().validate().is_ok());
        assert!(mock_sender_reference().validate().is_ok());
        assert!(mock_receiver_di().validate().is_ok());
    }

    #[test]
    fn test_amount_zero_padded() {
        let mut amt = Amount::new();
        amt.amount = "123456".to_string();
        assert_eq!(amt.format(FormatOptions::fixed()), "{2000}000000123456");
        assert_eq!(amt.format(FormatOptions::variable()), "{2000}000000123456");

        let parsed = Amount::from_record("{2000}000000123456").unwrap();
        assert_eq!(parsed.amount, "000000123456");
        assert_eq!(parsed.to_decimal(), Some(Decimal::new(123_456, 2)));
    }

    #[test]
    fn test_amount_non_numeric() {
        let mut amt = mock_amount();
        amt.amount = "1234.56".to_string();
        let err = amt.validate().unwrap_err();
        assert_eq!(err.field(), Some("Amount"));
        assert_eq!(err.violation(), Some(&Violation::NonNumeric));
        assert_eq!(amt.to_decimal(), None);
    }

    #[test]
    fn test_amount_max_length() {
        let mut amt = mock_amount();
        amt.amount = "1234567890123".to_string();
        assert_eq!(
            amt.validate().unwrap_err().violation(),
            Some(&Violation::MaxLength { max: 12, actual: 13 })
        );
    }

    #[test]
    fn test_sender_di_round_trips() {
        let sdi = mock_sender_di();
        let fixed = sdi.format(FormatOptions::fixed());
        assert_eq!(fixed, "{3100}121042882Wells Fargo NA    ");
        assert_eq!(SenderDepositoryInstitution::from_record(&fixed).unwrap(), sdi);

        let variable = sdi.format(FormatOptions::variable());
        assert_eq!(variable, "{3100}121042882Wells Fargo NA*");
        assert_eq!(
            SenderDepositoryInstitution::from_record(&variable).unwrap(),
            sdi
        );
    }

    #[test]
    fn test_sender_di_aba_required() {
        let mut sdi = mock_sender_di();
        sdi.sender_aba_number = String::new();
        let err = sdi.validate().unwrap_err();
        assert_eq!(err.field(), Some("SenderABANumber"));
        assert_eq!(err.violation(), Some(&Violation::FieldRequired));
    }

    #[test]
    fn test_sender_reference_required() {
        let mut sr = mock_sender_reference();
        sr.sender_reference = String::new();
        assert_eq!(
            sr.validate().unwrap_err().violation(),
            Some(&Violation::FieldRequired)
        );
    }

    #[test]
    fn test_sender_reference_rejects_delimiter_in_variable_field() {
        let mut sr = mock_sender_reference();
        sr.sender_reference = "A*B".to_string();
        let err = sr.validate().unwrap_err();
        assert_eq!(err.field(), Some("SenderReference"));
        assert_eq!(err.violation(), Some(&Violation::UnexpectedDelimiter));

        assert!(SenderReference::from_record(&sr.format(FormatOptions::variable())).is_err());
        assert!(SenderReference::from_record(&sr.format(FormatOptions::fixed())).is_err());
    }

    #[test]
    fn test_receiver_di_short_name_alphanumeric() {
        let mut rdi = mock_receiver_di();
        rdi.receiver_short_name = "®".to_string();
        let err = rdi.validate().unwrap_err();
        assert_eq!(err.field(), Some("ReceiverShortName"));
        assert_eq!(err.violation(), Some(&Violation::NonAlphanumeric));
    }

    #[test]
    fn test_receiver_di_min_length() {
        assert_eq!(
            ReceiverDepositoryInstitution::from_record("{3400}23138010").unwrap_err(),
            SegmentError::TagMinLength {
                required: 15,
                actual: 14
            }
        );
        let parsed = ReceiverDepositoryInstitution::from_record("{3400}231380104").unwrap();
        assert!(parsed.receiver_short_name.is_empty());
    }
}
