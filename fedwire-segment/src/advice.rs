/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Free-text information segments.
//!
//! - [`OriginatorToBeneficiary`] `{6000}`: four lines from originator to beneficiary
//! - [`FIBeneficiaryFIAdvice`] `{6210}`: advice to the beneficiary's institution

use crate::segment::{WireSegment, check, check_tag};
use fedwire_codec::{RecordDecoder, RecordEncoder};
use fedwire_core::error::SegmentError;
use fedwire_core::field::{FieldDef, SegmentLayout};
use fedwire_core::types::FormatOptions;
use fedwire_core::validator::{is_advice_code, is_alphanumeric};
use serde::{Deserialize, Serialize};

const OBI_LINE_ONE: FieldDef = FieldDef::variable("LineOne", 35);
const OBI_LINE_TWO: FieldDef = FieldDef::variable("LineTwo", 35);
const OBI_LINE_THREE: FieldDef = FieldDef::variable("LineThree", 35);
const OBI_LINE_FOUR: FieldDef = FieldDef::variable("LineFour", 35);

const ADVICE_CODE: FieldDef = FieldDef::fixed("AdviceCode", 3);
const ADVICE_LINE_ONE: FieldDef = FieldDef::variable("LineOne", 26);
const ADVICE_LINE_TWO: FieldDef = FieldDef::variable("LineTwo", 33);
const ADVICE_LINE_THREE: FieldDef = FieldDef::variable("LineThree", 33);
const ADVICE_LINE_FOUR: FieldDef = FieldDef::variable("LineFour", 33);
const ADVICE_LINE_FIVE: FieldDef = FieldDef::variable("LineFive", 33);
const ADVICE_LINE_SIX: FieldDef = FieldDef::variable("LineSix", 33);

/// Originator to beneficiary information, `{6000}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OriginatorToBeneficiary {
    #[serde(skip)]
    pub(crate) tag: String,
    /// First line.
    pub line_one: String,
    /// Second line.
    pub line_two: String,
    /// Third line.
    pub line_three: String,
    /// Fourth line.
    pub line_four: String,
}

impl OriginatorToBeneficiary {
    /// Creates an empty segment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for OriginatorToBeneficiary {
    fn default() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            line_one: String::new(),
            line_two: String::new(),
            line_three: String::new(),
            line_four: String::new(),
        }
    }
}

impl WireSegment for OriginatorToBeneficiary {
    const TAG: &'static str = "{6000}";
    const LAYOUT: SegmentLayout = SegmentLayout::new(
        Self::TAG,
        &[OBI_LINE_ONE, OBI_LINE_TWO, OBI_LINE_THREE, OBI_LINE_FOUR],
    );

    fn tag(&self) -> &str {
        &self.tag
    }

    fn parse(&mut self, record: &str) -> Result<(), SegmentError> {
        let mut decoder = RecordDecoder::new(record, &Self::LAYOUT)?;
        self.tag = decoder.tag().to_string();
        self.line_one = decoder.read(&OBI_LINE_ONE)?;
        self.line_two = decoder.read(&OBI_LINE_TWO)?;
        self.line_three = decoder.read(&OBI_LINE_THREE)?;
        self.line_four = decoder.read(&OBI_LINE_FOUR)?;
        decoder.finish()
    }

    fn validate(&self) -> Result<(), SegmentError> {
        check_tag(&self.tag, Self::TAG)?;
        check(&OBI_LINE_ONE, &self.line_one, is_alphanumeric)?;
        check(&OBI_LINE_TWO, &self.line_two, is_alphanumeric)?;
        check(&OBI_LINE_THREE, &self.line_three, is_alphanumeric)?;
        check(&OBI_LINE_FOUR, &self.line_four, is_alphanumeric)?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut encoder =
            RecordEncoder::new(&self.tag, options, Self::LAYOUT.max_variable_length());
        encoder
            .put(&OBI_LINE_ONE, &self.line_one)
            .put(&OBI_LINE_TWO, &self.line_two)
            .put(&OBI_LINE_THREE, &self.line_three)
            .put(&OBI_LINE_FOUR, &self.line_four);
        encoder.finish()
    }
}

/// Advice code and text for a financial institution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Advice {
    /// Advice method, e.g. `LTR` letter.
    pub advice_code: String,
    /// First line, 26 characters.
    pub line_one: String,
    /// Second line.
    pub line_two: String,
    /// Third line.
    pub line_three: String,
    /// Fourth line.
    pub line_four: String,
    /// Fifth line.
    pub line_five: String,
    /// Sixth line.
    pub line_six: String,
}

/// Financial institution to beneficiary's financial institution advice, `{6210}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FIBeneficiaryFIAdvice {
    #[serde(skip)]
    pub(crate) tag: String,
    /// The advice.
    pub advice: Advice,
}

impl FIBeneficiaryFIAdvice {
    /// Creates an empty segment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for FIBeneficiaryFIAdvice {
    fn default() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            advice: Advice::default(),
        }
    }
}

impl WireSegment for FIBeneficiaryFIAdvice {
    const TAG: &'static str = "{6210}";
    const LAYOUT: SegmentLayout = SegmentLayout::new(
        Self::TAG,
        &[
            ADVICE_CODE,
            ADVICE_LINE_ONE,
            ADVICE_LINE_TWO,
            ADVICE_LINE_THREE,
            ADVICE_LINE_FOUR,
            ADVICE_LINE_FIVE,
            ADVICE_LINE_SIX,
        ],
    );

    fn tag(&self) -> &str {
        &self.tag
    }

    fn parse(&mut self, record: &str) -> Result<(), SegmentError> {
        let mut decoder = RecordDecoder::new(record, &Self::LAYOUT)?;
        self.tag = decoder.tag().to_string();
        self.advice = Advice {
            advice_code: decoder.read(&ADVICE_CODE)?,
            line_one: decoder.read(&ADVICE_LINE_ONE)?,
            line_two: decoder.read(&ADVICE_LINE_TWO)?,
            line_three: decoder.read(&ADVICE_LINE_THREE)?,
            line_four: decoder.read(&ADVICE_LINE_FOUR)?,
            line_five: decoder.read(&ADVICE_LINE_FIVE)?,
            line_six: decoder.read(&ADVICE_LINE_SIX)?,
        };
        decoder.finish()
    }

    fn validate(&self) -> Result<(), SegmentError> {
        let advice = &self.advice;
        check_tag(&self.tag, Self::TAG)?;
        check(&ADVICE_CODE, &advice.advice_code, is_advice_code)?;
        check(&ADVICE_LINE_ONE, &advice.line_one, is_alphanumeric)?;
        check(&ADVICE_LINE_TWO, &advice.line_two, is_alphanumeric)?;
        check(&ADVICE_LINE_THREE, &advice.line_three, is_alphanumeric)?;
        check(&ADVICE_LINE_FOUR, &advice.line_four, is_alphanumeric)?;
        check(&ADVICE_LINE_FIVE, &advice.line_five, is_alphanumeric)?;
        check(&ADVICE_LINE_SIX, &advice.line_six, is_alphanumeric)?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let advice = &self.advice;
        let mut encoder =
            RecordEncoder::new(&self.tag, options, Self::LAYOUT.max_variable_length());
        encoder
            .put(&ADVICE_CODE, &advice.advice_code)
            .put(&ADVICE_LINE_ONE, &advice.line_one)
            .put(&ADVICE_LINE_TWO, &advice.line_two)
            .put(&ADVICE_LINE_THREE, &advice.line_three)
            .put(&ADVICE_LINE_FOUR, &advice.line_four)
            .put(&ADVICE_LINE_FIVE, &advice.line_five)
            .put(&ADVICE_LINE_SIX, &advice.line_six);
        encoder.finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use fedwire_core::error::Violation;

    pub(crate) fn mock_originator_to_beneficiary() -> OriginatorToBeneficiary {
        let mut obi = OriginatorToBeneficiary::new();
        obi.line_one = "LineOne".to_string();
        obi.line_two = "LineTwo".to_string();
        obi.line_three = "LineThree".to_string();
        obi.line_four = "LineFour".to_string();
        obi
    }

    pub(crate) fn mock_fi_beneficiary_fi_advice() -> FIBeneficiaryFIAdvice {
        let mut fibfia = FIBeneficiaryFIAdvice::new();
        fibfia.advice = Advice {
            advice_code: "LTR".to_string(),
            line_one: "Line One".to_string(),
            line_two: "Line Two".to_string(),
            line_three: "Line Three".to_string(),
            line_four: "Line Four".to_string(),
            line_five: "Line Five".to_string(),
            line_six: "Line Six".to_string(),
        };
        fibfia
    }

    #[test]
    fn test_mock_advice_segments_validate() {
        assert!(mock_originator_to_beneficiary().validate().is_ok());
        assert!(mock_fi_beneficiary_fi_advice().validate().is_ok());
    }

    #[test]
    fn test_originator_to_beneficiary_keeps_interior_empty_lines() {
        let mut obi = OriginatorToBeneficiary::new();
        obi.line_two = "Only Two".to_string();
        let record = obi.format(FormatOptions::variable());
        assert_eq!(record, "{6000}*Only Two*");
        assert_eq!(OriginatorToBeneficiary::from_record(&record).unwrap(), obi);
    }

    #[test]
    fn test_originator_to_beneficiary_line_max_length() {
        let mut obi = mock_originator_to_beneficiary();
        obi.line_four = "X".repeat(36);
        let err = obi.validate().unwrap_err();
        assert_eq!(err.field(), Some("LineFour"));
        assert_eq!(
            err.violation(),
            Some(&Violation::MaxLength { max: 35, actual: 36 })
        );
    }

    #[test]
    fn test_fi_advice_code_invalid() {
        let mut fibfia = mock_fi_beneficiary_fi_advice();
        fibfia.advice.advice_code = "ZZZ".to_string();
        let err = fibfia.validate().unwrap_err();
        assert_eq!(err.field(), Some("AdviceCode"));
        assert_eq!(err.violation(), Some(&Violation::AdviceCode));
    }

    #[test]
    fn test_fi_advice_line_alphanumeric() {
        let mut fibfia = mock_fi_beneficiary_fi_advice();
        fibfia.advice.line_six = "®".to_string();
        assert_eq!(fibfia.validate().unwrap_err().field(), Some("LineSix"));
    }

    #[test]
    fn test_fi_advice_round_trips() {
        let fibfia = mock_fi_beneficiary_fi_advice();
        let fixed = fibfia.format(FormatOptions::fixed());
        assert_eq!(
            fixed.chars().count(),
            FIBeneficiaryFIAdvice::LAYOUT.fixed_length()
        );
        assert_eq!(FIBeneficiaryFIAdvice::from_record(&fixed).unwrap(), fibfia);

        let variable = fibfia.format(FormatOptions::variable());
        assert!(variable.starts_with("{6210}LTRLine One*Line Two*"));
        assert_eq!(
            FIBeneficiaryFIAdvice::from_record(&variable).unwrap(),
            fibfia
        );
    }

    #[test]
    fn test_fi_advice_json_ignores_tag() {
        let fibfia = mock_fi_beneficiary_fi_advice();
        let json = serde_json::to_string(&fibfia).unwrap();
        assert!(!json.contains("tag"));
        let back: FIBeneficiaryFIAdvice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fibfia);
    }
}
