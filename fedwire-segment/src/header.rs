/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Message header segments.
//!
//! - [`SenderSupplied`] `{1500}`: format version, correlation, environment
//! - [`TypeSubType`] `{1510}`: message type and sub type codes
//! - [`InputMessageAccountabilityData`] `{1520}`: the IMAD identifying a message

use crate::segment::{WireSegment, check, check_tag, require};
use chrono::NaiveDate;
use fedwire_codec::{RecordDecoder, RecordEncoder};
use fedwire_core::codes;
use fedwire_core::error::SegmentError;
use fedwire_core::field::{FieldDef, SegmentLayout};
use fedwire_core::types::FormatOptions;
use fedwire_core::validator::{
    is_alphanumeric, is_date, is_format_version, is_message_duplication_code, is_numeric,
    is_sub_type_code, is_test_production_code, is_type_code,
};
use serde::{Deserialize, Serialize};

const FORMAT_VERSION: FieldDef = FieldDef::fixed("FormatVersion", 2);
const USER_REQUEST_CORRELATION: FieldDef = FieldDef::fixed("UserRequestCorrelation", 8);
const TEST_PRODUCTION_CODE: FieldDef = FieldDef::fixed("TestProductionCode", 1);
const MESSAGE_DUPLICATION_CODE: FieldDef = FieldDef::fixed("MessageDuplicationCode", 1);

const TYPE_CODE: FieldDef = FieldDef::fixed("TypeCode", 2);
const SUB_TYPE_CODE: FieldDef = FieldDef::fixed("SubTypeCode", 2);

const INPUT_CYCLE_DATE: FieldDef = FieldDef::fixed("InputCycleDate", 8);
const INPUT_SOURCE: FieldDef = FieldDef::fixed("InputSource", 8);
const INPUT_SEQUENCE_NUMBER: FieldDef = FieldDef::fixed("InputSequenceNumber", 6);

/// Sender supplied information, `{1500}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SenderSupplied {
    #[serde(skip)]
    pub(crate) tag: String,
    /// Format version; always `30`.
    pub format_version: String,
    /// User request correlation.
    pub user_request_correlation: String,
    /// `T` for test, `P` for production.
    pub test_production_code: String,
    /// Empty for an original message, `P` for a possible duplicate.
    pub message_duplication_code: String,
}

impl SenderSupplied {
    /// Creates an empty segment with the format version preset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for SenderSupplied {
    fn default() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            format_version: codes::FORMAT_VERSION.to_string(),
            user_request_correlation: String::new(),
            test_production_code: String::new(),
            message_duplication_code: String::new(),
        }
    }
}

impl WireSegment for SenderSupplied {
    const TAG: &'static str = "{1500}";
    const LAYOUT: SegmentLayout = SegmentLayout::new(
        Self::TAG,
        &[
            FORMAT_VERSION,
            USER_REQUEST_CORRELATION,
            TEST_PRODUCTION_CODE,
            MESSAGE_DUPLICATION_CODE,
        ],
    );

    fn tag(&self) -> &str {
        &self.tag
    }

    fn parse(&mut self, record: &str) -> Result<(), SegmentError> {
        let mut decoder = RecordDecoder::new(record, &Self::LAYOUT)?;
        self.tag = decoder.tag().to_string();
        self.format_version = decoder.read(&FORMAT_VERSION)?;
        self.user_request_correlation = decoder.read(&USER_REQUEST_CORRELATION)?;
        self.test_production_code = decoder.read(&TEST_PRODUCTION_CODE)?;
        self.message_duplication_code = decoder.read(&MESSAGE_DUPLICATION_CODE)?;
        decoder.finish()
    }

    fn validate(&self) -> Result<(), SegmentError> {
        require(&FORMAT_VERSION, &self.format_version)?;
        require(&USER_REQUEST_CORRELATION, &self.user_request_correlation)?;
        require(&TEST_PRODUCTION_CODE, &self.test_production_code)?;
        check_tag(&self.tag, Self::TAG)?;
        check(&FORMAT_VERSION, &self.format_version, is_format_version)?;
        check(
            &USER_REQUEST_CORRELATION,
            &self.user_request_correlation,
            is_alphanumeric,
        )?;
        check(
            &TEST_PRODUCTION_CODE,
            &self.test_production_code,
            is_test_production_code,
        )?;
        check(
            &MESSAGE_DUPLICATION_CODE,
            &self.message_duplication_code,
            is_message_duplication_code,
        )?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut encoder =
            RecordEncoder::new(&self.tag, options, Self::LAYOUT.max_variable_length());
        encoder
            .put(&FORMAT_VERSION, &self.format_version)
            .put(&USER_REQUEST_CORRELATION, &self.user_request_correlation)
            .put(&TEST_PRODUCTION_CODE, &self.test_production_code)
            .put(&MESSAGE_DUPLICATION_CODE, &self.message_duplication_code);
        encoder.finish()
    }
}

/// Type and sub type, `{1510}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeSubType {
    #[serde(skip)]
    pub(crate) tag: String,
    /// Type code, e.g. `10` funds transfer.
    pub type_code: String,
    /// Sub type code, e.g. `00` basic funds transfer.
    pub sub_type_code: String,
}

impl TypeSubType {
    /// Creates an empty segment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for TypeSubType {
    fn default() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            type_code: String::new(),
            sub_type_code: String::new(),
        }
    }
}

impl WireSegment for TypeSubType {
    const TAG: &'static str = "{1510}";
    const LAYOUT: SegmentLayout = SegmentLayout::new(Self::TAG, &[TYPE_CODE, SUB_TYPE_CODE]);

    fn tag(&self) -> &str {
        &self.tag
    }

    fn parse(&mut self, record: &str) -> Result<(), SegmentError> {
        let mut decoder = RecordDecoder::new(record, &Self::LAYOUT)?;
        self.tag = decoder.tag().to_string();
        self.type_code = decoder.read(&TYPE_CODE)?;
        self.sub_type_code = decoder.read(&SUB_TYPE_CODE)?;
        decoder.finish()
    }

    fn validate(&self) -> Result<(), SegmentError> {
        require(&TYPE_CODE, &self.type_code)?;
        require(&SUB_TYPE_CODE, &self.sub_type_code)?;
        check_tag(&self.tag, Self::TAG)?;
        check(&TYPE_CODE, &self.type_code, is_type_code)?;
        check(&SUB_TYPE_CODE, &self.sub_type_code, is_sub_type_code)?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut encoder =
            RecordEncoder::new(&self.tag, options, Self::LAYOUT.max_variable_length());
        encoder
            .put(&TYPE_CODE, &self.type_code)
            .put(&SUB_TYPE_CODE, &self.sub_type_code);
        encoder.finish()
    }
}

/// Input message accountability data (IMAD), `{1520}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputMessageAccountabilityData {
    #[serde(skip)]
    pub(crate) tag: String,
    /// Input cycle date, `CCYYMMDD`.
    pub input_cycle_date: String,
    /// Input source.
    pub input_source: String,
    /// Input sequence number.
    pub input_sequence_number: String,
}

impl InputMessageAccountabilityData {
    /// Creates an empty segment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the input cycle date, if it is a valid calendar date.
    #[must_use]
    pub fn cycle_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.input_cycle_date, "%Y%m%d").ok()
    }
}

impl Default for InputMessageAccountabilityData {
    fn default() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            input_cycle_date: String::new(),
            input_source: String::new(),
            input_sequence_number: String::new(),
        }
    }
}

impl WireSegment for InputMessageAccountabilityData {
    const TAG: &'static str = "{1520}";
    const LAYOUT: SegmentLayout = SegmentLayout::new(
        Self::TAG,
        &[INPUT_CYCLE_DATE, INPUT_SOURCE, INPUT_SEQUENCE_NUMBER],
    );

    fn tag(&self) -> &str {
        &self.tag
    }

    fn parse(&mut self, record: &str) -> Result<(), SegmentError> {
        let mut decoder = RecordDecoder::new(record, &Self::LAYOUT)?;
        self.tag = decoder.tag().to_string();
        self.input_cycle_date = decoder.read(&INPUT_CYCLE_DATE)?;
        self.input_source = decoder.read(&INPUT_SOURCE)?;
        self.input_sequence_number = decoder.read(&INPUT_SEQUENCE_NUMBER)?;
        decoder.finish()
    }

    fn validate(&self) -> Result<(), SegmentError> {
        require(&INPUT_CYCLE_DATE, &self.input_cycle_date)?;
        require(&INPUT_SOURCE, &self.input_source)?;
        require(&INPUT_SEQUENCE_NUMBER, &self.input_sequence_number)?;
        check_tag(&self.tag, Self::TAG)?;
        check(&INPUT_CYCLE_DATE, &self.input_cycle_date, is_date)?;
        check(&INPUT_SOURCE, &self.input_source, is_alphanumeric)?;
        check(&INPUT_SEQUENCE_NUMBER, &self.input_sequence_number, is_numeric)?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut encoder =
            RecordEncoder::new(&self.tag, options, Self::LAYOUT.max_variable_length());
        encoder
            .put(&INPUT_CYCLE_DATE, &self.input_cycle_date)
            .put(&INPUT_SOURCE, &self.input_source)
            .put(&INPUT_SEQUENCE_NUMBER, &self.input_sequence_number);
        encoder.finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use fedwire_core::error::Violation;

    pub(crate) fn mock_sender_supplied() -> SenderSupplied {
        let mut ss = SenderSupplied::new();
        ss.user_request_correlation = "User Req".to_string();
        ss.test_production_code = "T".to_string();
        ss
    }

    pub(crate) fn mock_type_sub_type() -> TypeSubType {
        let mut tst = TypeSubType::new();
        tst.type_code = "10".to_string();
        tst.sub_type_code = "00".to_string();
        tst
    }

    pub(crate) fn mock_imad() -> InputMessageAccountabilityData {
        let mut imad = InputMessageAccountabilityData::new();
        imad.input_cycle_date = "20240115".to_string();
        imad.input_source = "Source08".to_string();
        imad.input_sequence_number = "000001".to_string();
        imad
    }

    #[test]
    fn test_mock_header_segments_validate() {
        assert!(mock_sender_supplied().validate().is_ok());
        assert!(mock_type_sub_type().validate().is_ok());
        assert!(mock_imad().validate().is_ok());
    }

    #[test]
    fn test_sender_supplied_fixed_round_trip() {
        let ss = mock_sender_supplied();
        let record = ss.format(FormatOptions::fixed());
        assert_eq!(record, "{1500}30User ReqT ");
        assert_eq!(record.chars().count(), SenderSupplied::LAYOUT.fixed_length());

        let parsed = SenderSupplied::from_record(&record).unwrap();
        assert_eq!(parsed, ss);
    }

    #[test]
    fn test_sender_supplied_rejects_delimiter_in_fixed_field() {
        let mut ss = mock_sender_supplied();
        ss.user_request_correlation = "AB*".to_string();
        let err = ss.validate().unwrap_err();
        assert_eq!(err.field(), Some("UserRequestCorrelation"));
        assert_eq!(err.violation(), Some(&Violation::UnexpectedDelimiter));

        let err = SenderSupplied::from_record(&ss.format(FormatOptions::fixed())).unwrap_err();
        assert_eq!(err.violation(), Some(&Violation::UnexpectedDelimiter));
    }

    #[test]
    fn test_sender_supplied_format_version() {
        let mut ss = mock_sender_supplied();
        ss.format_version = "29".to_string();
        let err = ss.validate().unwrap_err();
        assert_eq!(err.field(), Some("FormatVersion"));
        assert_eq!(err.violation(), Some(&Violation::FormatVersion));
    }

    #[test]
    fn test_sender_supplied_required_fields() {
        let mut ss = mock_sender_supplied();
        ss.test_production_code = String::new();
        let err = ss.validate().unwrap_err();
        assert_eq!(err.field(), Some("TestProductionCode"));
        assert_eq!(err.violation(), Some(&Violation::FieldRequired));
    }

    #[test]
    fn test_sender_supplied_duplication_code() {
        let mut ss = mock_sender_supplied();
        ss.message_duplication_code = "X".to_string();
        assert_eq!(
            ss.validate().unwrap_err().violation(),
            Some(&Violation::MessageDuplicationCode)
        );
    }

    #[test]
    fn test_type_sub_type_codes() {
        let mut tst = mock_type_sub_type();
        tst.type_code = "11".to_string();
        assert_eq!(tst.validate().unwrap_err().violation(), Some(&Violation::TypeCode));

        let mut tst = mock_type_sub_type();
        tst.sub_type_code = "99".to_string();
        assert_eq!(
            tst.validate().unwrap_err().violation(),
            Some(&Violation::SubTypeCode)
        );
    }

    #[test]
    fn test_type_sub_type_min_length() {
        assert!(TypeSubType::from_record("{1510}1000").is_ok());
        assert_eq!(
            TypeSubType::from_record("{1510}100").unwrap_err(),
            SegmentError::TagMinLength {
                required: 10,
                actual: 9
            }
        );
    }

    #[test]
    fn test_imad_date_and_sequence() {
        let imad = mock_imad();
        assert_eq!(imad.cycle_date(), NaiveDate::from_ymd_opt(2024, 1, 15));

        let mut imad = mock_imad();
        imad.input_cycle_date = "20241315".to_string();
        assert_eq!(imad.validate().unwrap_err().violation(), Some(&Violation::ValidDate));

        let mut imad = mock_imad();
        imad.input_sequence_number = "00000A".to_string();
        assert_eq!(imad.validate().unwrap_err().violation(), Some(&Violation::NonNumeric));
    }

    #[test]
    fn test_imad_variable_format_is_fixed_width() {
        let imad = mock_imad();
        assert_eq!(
            imad.format(FormatOptions::variable()),
            imad.format(FormatOptions::fixed())
        );
        let parsed = InputMessageAccountabilityData::from_record(
            &imad.format(FormatOptions::variable()),
        )
        .unwrap();
        assert_eq!(parsed, imad);
    }

    #[test]
    fn test_header_tag_error() {
        let mut tst = mock_type_sub_type();
        tst.tag = "{9999}".to_string();
        assert_eq!(
            tst.validate().unwrap_err().violation(),
            Some(&Violation::ValidTagForType)
        );
    }

    #[test]
    fn test_sender_supplied_json_keeps_tag() {
        let json = r#"{"formatVersion":"30","userRequestCorrelation":"User Req","testProductionCode":"T"}"#;
        let ss: SenderSupplied = serde_json::from_str(json).unwrap();
        assert_eq!(ss.tag(), SenderSupplied::TAG);
        assert_eq!(ss, mock_sender_supplied());
    }
}
