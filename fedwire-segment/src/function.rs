/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Segments carrying the codes that condition the rest of a message.
//!
//! - [`BusinessFunction`] `{3600}`: business function code
//! - [`LocalInstrument`] `{3610}`: local instrument code for customer transfers

use crate::segment::{WireSegment, check, check_tag, require};
use fedwire_codec::{RecordDecoder, RecordEncoder};
use fedwire_core::error::{FieldError, SegmentError, Violation};
use fedwire_core::field::{FieldDef, SegmentLayout};
use fedwire_core::types::{BusinessFunctionCode, FormatOptions, LocalInstrumentCode};
use fedwire_core::validator::{
    is_alphanumeric, is_business_function_code, is_local_instrument_code,
};
use serde::{Deserialize, Serialize};

const BUSINESS_FUNCTION_CODE: FieldDef = FieldDef::fixed("BusinessFunctionCode", 3);
const TRANSACTION_TYPE_CODE: FieldDef = FieldDef::variable("TransactionTypeCode", 3);

const LOCAL_INSTRUMENT_CODE: FieldDef = FieldDef::fixed("LocalInstrumentCode", 4);
const PROPRIETARY_CODE: FieldDef = FieldDef::variable("ProprietaryCode", 35);

/// Business function code, `{3600}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessFunction {
    #[serde(skip)]
    pub(crate) tag: String,
    /// Business function code, e.g. `CTR`.
    pub business_function_code: String,
    /// Transaction type code.
    pub transaction_type_code: String,
}

impl BusinessFunction {
    /// Creates an empty segment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the parsed business function code, if it is known.
    #[must_use]
    pub fn code(&self) -> Option<BusinessFunctionCode> {
        self.business_function_code.parse().ok()
    }
}

impl Default for BusinessFunction {
    fn default() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            business_function_code: String::new(),
            transaction_type_code: String::new(),
        }
    }
}

impl WireSegment for BusinessFunction {
    const TAG: &'static str = "{3600}";
    const LAYOUT: SegmentLayout =
        SegmentLayout::new(Self::TAG, &[BUSINESS_FUNCTION_CODE, TRANSACTION_TYPE_CODE]);

    fn tag(&self) -> &str {
        &self.tag
    }

    fn parse(&mut self, record: &str) -> Result<(), SegmentError> {
        let mut decoder = RecordDecoder::new(record, &Self::LAYOUT)?;
        self.tag = decoder.tag().to_string();
        self.business_function_code = decoder.read(&BUSINESS_FUNCTION_CODE)?;
        self.transaction_type_code = decoder.read(&TRANSACTION_TYPE_CODE)?;
        decoder.finish()
    }

    fn validate(&self) -> Result<(), SegmentError> {
        require(&BUSINESS_FUNCTION_CODE, &self.business_function_code)?;
        check_tag(&self.tag, Self::TAG)?;
        check(
            &BUSINESS_FUNCTION_CODE,
            &self.business_function_code,
            is_business_function_code,
        )?;
        check(
            &TRANSACTION_TYPE_CODE,
            &self.transaction_type_code,
            is_alphanumeric,
        )?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut encoder =
            RecordEncoder::new(&self.tag, options, Self::LAYOUT.max_variable_length());
        encoder
            .put(&BUSINESS_FUNCTION_CODE, &self.business_function_code)
            .put(&TRANSACTION_TYPE_CODE, &self.transaction_type_code);
        encoder.finish()
    }
}

/// Local instrument, `{3610}`.
///
/// A proprietary code is carried only, and always, with instrument `PROP`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocalInstrument {
    #[serde(skip)]
    pub(crate) tag: String,
    /// Local instrument code, e.g. `COVS`.
    pub local_instrument_code: String,
    /// Proprietary code; only with `PROP`.
    pub proprietary_code: String,
}

impl LocalInstrument {
    /// Creates an empty segment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the parsed local instrument code, if it is known.
    #[must_use]
    pub fn code(&self) -> Option<LocalInstrumentCode> {
        self.local_instrument_code.parse().ok()
    }

    fn is_proprietary(&self) -> bool {
        self.local_instrument_code == LocalInstrumentCode::Proprietary.as_str()
    }
}

impl Default for LocalInstrument {
    fn default() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            local_instrument_code: String::new(),
            proprietary_code: String::new(),
        }
    }
}

impl WireSegment for LocalInstrument {
    const TAG: &'static str = "{3610}";
    const LAYOUT: SegmentLayout =
        SegmentLayout::new(Self::TAG, &[LOCAL_INSTRUMENT_CODE, PROPRIETARY_CODE]);

    fn tag(&self) -> &str {
        &self.tag
    }

    fn parse(&mut self, record: &str) -> Result<(), SegmentError> {
        let mut decoder = RecordDecoder::new(record, &Self::LAYOUT)?;
        self.tag = decoder.tag().to_string();
        self.local_instrument_code = decoder.read(&LOCAL_INSTRUMENT_CODE)?;
        self.proprietary_code = decoder.read(&PROPRIETARY_CODE)?;
        decoder.finish()
    }

    fn validate(&self) -> Result<(), SegmentError> {
        require(&LOCAL_INSTRUMENT_CODE, &self.local_instrument_code)?;
        if self.is_proprietary() {
            require(&PROPRIETARY_CODE, &self.proprietary_code)?;
        }
        check_tag(&self.tag, Self::TAG)?;
        check(
            &LOCAL_INSTRUMENT_CODE,
            &self.local_instrument_code,
            is_local_instrument_code,
        )?;
        check(&PROPRIETARY_CODE, &self.proprietary_code, is_alphanumeric)?;
        if !self.is_proprietary() && !self.proprietary_code.is_empty() {
            return Err(FieldError::with_value(
                PROPRIETARY_CODE.name,
                Violation::InvalidProperty,
                self.proprietary_code.as_str(),
            )
            .into());
        }
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut encoder =
            RecordEncoder::new(&self.tag, options, Self::LAYOUT.max_variable_length());
        encoder
            .put(&LOCAL_INSTRUMENT_CODE, &self.local_instrument_code)
            .put(&PROPRIETARY_CODE, &self.proprietary_code);
        encoder.finish()
    }
}
