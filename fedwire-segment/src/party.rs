/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Party segments and the identification block they share.
//!
//! - [`Personal`] / [`Address`]: identification code, identifier, name, address
//! - [`Beneficiary`] `{4200}`
//! - [`Originator`] `{5000}`

use crate::segment::{WireSegment, check, check_tag, require};
use fedwire_codec::{RecordDecoder, RecordEncoder};
use fedwire_core::error::{FieldError, SegmentError};
use fedwire_core::field::{FieldDef, SegmentLayout};
use fedwire_core::types::FormatOptions;
use fedwire_core::validator::{is_alphanumeric, is_identification_code};
use serde::{Deserialize, Serialize};

pub(crate) const IDENTIFICATION_CODE: FieldDef = FieldDef::fixed("IdentificationCode", 1);
pub(crate) const IDENTIFIER: FieldDef = FieldDef::variable("Identifier", 34);
pub(crate) const NAME: FieldDef = FieldDef::variable("Name", 35);
const ADDRESS_LINE_ONE: FieldDef = FieldDef::variable("AddressLineOne", 35);
const ADDRESS_LINE_TWO: FieldDef = FieldDef::variable("AddressLineTwo", 35);
const ADDRESS_LINE_THREE: FieldDef = FieldDef::variable("AddressLineThree", 35);

/// Wire order of a [`Personal`] block.
pub(crate) const PERSONAL_FIELDS: &[FieldDef] = &[
    IDENTIFICATION_CODE,
    IDENTIFIER,
    NAME,
    ADDRESS_LINE_ONE,
    ADDRESS_LINE_TWO,
    ADDRESS_LINE_THREE,
];

/// Three lines of free-form address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    /// First address line.
    pub address_line_one: String,
    /// Second address line.
    pub address_line_two: String,
    /// Third address line.
    pub address_line_three: String,
}

/// Identification of a party to the transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Personal {
    /// How [`Personal::identifier`] is to be read, e.g. `D` for a DDA account.
    pub identification_code: String,
    /// Account number or other identifier.
    pub identifier: String,
    /// Party name.
    pub name: String,
    /// Party address.
    pub address: Address,
}

impl Personal {
    pub(crate) fn read(decoder: &mut RecordDecoder<'_>) -> Result<Self, SegmentError> {
        Ok(Self {
            identification_code: decoder.read(&IDENTIFICATION_CODE)?,
            identifier: decoder.read(&IDENTIFIER)?,
            name: decoder.read(&NAME)?,
            address: Address {
                address_line_one: decoder.read(&ADDRESS_LINE_ONE)?,
                address_line_two: decoder.read(&ADDRESS_LINE_TWO)?,
                address_line_three: decoder.read(&ADDRESS_LINE_THREE)?,
            },
        })
    }

    pub(crate) fn write(&self, encoder: &mut RecordEncoder) {
        encoder
            .put(&IDENTIFICATION_CODE, &self.identification_code)
            .put(&IDENTIFIER, &self.identifier)
            .put(&NAME, &self.name)
            .put(&ADDRESS_LINE_ONE, &self.address.address_line_one)
            .put(&ADDRESS_LINE_TWO, &self.address.address_line_two)
            .put(&ADDRESS_LINE_THREE, &self.address.address_line_three);
    }

    /// Identification code and identifier are present together or not at all.
    pub(crate) fn check_inclusion(&self) -> Result<(), FieldError> {
        if !self.identification_code.is_empty() {
            require(&IDENTIFIER, &self.identifier)?;
        }
        if !self.identifier.is_empty() {
            require(&IDENTIFICATION_CODE, &self.identification_code)?;
        }
        Ok(())
    }

    pub(crate) fn check_code(&self) -> Result<(), FieldError> {
        check(
            &IDENTIFICATION_CODE,
            &self.identification_code,
            is_identification_code,
        )
    }

    pub(crate) fn check_text(&self) -> Result<(), FieldError> {
        check(&IDENTIFIER, &self.identifier, is_alphanumeric)?;
        check(&NAME, &self.name, is_alphanumeric)?;
        check(&ADDRESS_LINE_ONE, &self.address.address_line_one, is_alphanumeric)?;
        check(&ADDRESS_LINE_TWO, &self.address.address_line_two, is_alphanumeric)?;
        check(
            &ADDRESS_LINE_THREE,
            &self.address.address_line_three,
            is_alphanumeric,
        )
    }
}

/// Beneficiary, `{4200}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Beneficiary {
    #[serde(skip)]
    pub(crate) tag: String,
    /// The beneficiary party.
    pub personal: Personal,
}

impl Beneficiary {
    /// Creates an empty segment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Beneficiary {
    fn default() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            personal: Personal::default(),
        }
    }
}

impl WireSegment for Beneficiary {
    const TAG: &'static str = "{4200}";
    const LAYOUT: SegmentLayout = SegmentLayout::new(Self::TAG, PERSONAL_FIELDS);

    fn tag(&self) -> &str {
        &self.tag
    }

    fn parse(&mut self, record: &str) -> Result<(), SegmentError> {
        let mut decoder = RecordDecoder::new(record, &Self::LAYOUT)?;
        self.tag = decoder.tag().to_string();
        self.personal = Personal::read(&mut decoder)?;
        decoder.finish()
    }

    fn validate(&self) -> Result<(), SegmentError> {
        self.personal.check_inclusion()?;
        check_tag(&self.tag, Self::TAG)?;
        self.personal.check_code()?;
        self.personal.check_text()?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut encoder =
            RecordEncoder::new(&self.tag, options, Self::LAYOUT.max_variable_length());
        self.personal.write(&mut encoder);
        encoder.finish()
    }
}

/// Originator, `{5000}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Originator {
    #[serde(skip)]
    pub(crate) tag: String,
    /// The originating party.
    pub personal: Personal,
}

impl Originator {
    /// Creates an empty segment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Originator {
    fn default() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            personal: Personal::default(),
        }
    }
}

impl WireSegment for Originator {
    const TAG: &'static str = "{5000}";
    const LAYOUT: SegmentLayout = SegmentLayout::new(Self::TAG, PERSONAL_FIELDS);

    fn tag(&self) -> &str {
        &self.tag
    }

    fn parse(&mut self, record: &str) -> Result<(), SegmentError> {
        let mut decoder = RecordDecoder::new(record, &Self::LAYOUT)?;
        self.tag = decoder.tag().to_string();
        self.personal = Personal::read(&mut decoder)?;
        decoder.finish()
    }

    fn validate(&self) -> Result<(), SegmentError> {
        self.personal.check_inclusion()?;
        check_tag(&self.tag, Self::TAG)?;
        self.personal.check_code()?;
        self.personal.check_text()?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut encoder =
            RecordEncoder::new(&self.tag, options, Self::LAYOUT.max_variable_length());
        self.personal.write(&mut encoder);
        encoder.finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use fedwire_core::error::Violation;

    pub(crate) fn mock_personal() -> Personal {
        Personal {
            identification_code: "D".to_string(),
            identifier: "1234".to_string(),
            name: "Name".to_string(),
            address: Address {
                address_line_one: "Address One".to_string(),
                address_line_two: "Address Two".to_string(),
                address_line_three: "Address Three".to_string(),
            },
        }
    }

    pub(crate) fn mock_beneficiary() -> Beneficiary {
        let mut ben = Beneficiary::new();
        ben.personal = mock_personal();
        ben
    }

    pub(crate) fn mock_originator() -> Originator {
        let mut org = Originator::new();
        org.personal = mock_personal();
        org
    }

    #[test]
    fn test_mock_parties_validate() {
        assert!(mock_beneficiary().validate().is_ok());
        assert!(mock_originator().validate().is_ok());
        assert!(Beneficiary::new().validate().is_ok());
    }

    #[test]
    fn test_beneficiary_identifier_required_with_code() {
        let mut ben = mock_beneficiary();
        ben.personal.identifier = String::new();
        let err = ben.validate().unwrap_err();
        assert_eq!(err.field(), Some("Identifier"));
        assert_eq!(err.violation(), Some(&Violation::FieldRequired));
    }

    #[test]
    fn test_originator_code_required_with_identifier() {
        let mut org = mock_originator();
        org.personal.identification_code = String::new();
        let err = org.validate().unwrap_err();
        assert_eq!(err.field(), Some("IdentificationCode"));
        assert_eq!(err.violation(), Some(&Violation::FieldRequired));
    }

    #[test]
    fn test_beneficiary_identification_code_invalid() {
        let mut ben = mock_beneficiary();
        ben.personal.identification_code = "Z".to_string();
        assert_eq!(
            ben.validate().unwrap_err().violation(),
            Some(&Violation::IdentificationCode)
        );
    }

    #[test]
    fn test_beneficiary_address_alphanumeric() {
        let mut ben = mock_beneficiary();
        ben.personal.address.address_line_three = "®".to_string();
        let err = ben.validate().unwrap_err();
        assert_eq!(err.field(), Some("AddressLineThree"));
        assert_eq!(err.violation(), Some(&Violation::NonAlphanumeric));
    }

    #[test]
    fn test_beneficiary_variable_round_trip() {
        let ben = mock_beneficiary();
        let record = ben.format(FormatOptions::variable());
        assert_eq!(
            record,
            "{4200}D1234*Name*Address One*Address Two*Address Three*"
        );
        assert_eq!(Beneficiary::from_record(&record).unwrap(), ben);
    }

    #[test]
    fn test_beneficiary_variable_strips_trailing_empty_fields() {
        let mut ben = mock_beneficiary();
        ben.personal.address = Address::default();
        let record = ben.format(FormatOptions::variable());
        assert_eq!(record, "{4200}D1234*Name*");
        assert_eq!(Beneficiary::from_record(&record).unwrap(), ben);
    }

    #[test]
    fn test_originator_fixed_round_trip() {
        let org = mock_originator();
        let record = org.format(FormatOptions::fixed());
        assert_eq!(record.chars().count(), Originator::LAYOUT.fixed_length());
        assert_eq!(Originator::from_record(&record).unwrap(), org);
    }

    #[test]
    fn test_originator_parse_identifier_too_short() {
        let err = Originator::from_record("{5000}D1234").unwrap_err();
        assert_eq!(err.field(), Some("Identifier"));
        assert_eq!(
            err.violation(),
            Some(&Violation::WrongLength {
                expected: 34,
                actual: 4
            })
        );
    }
}
