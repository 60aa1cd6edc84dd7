/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Drawdown account segments.
//!
//! - [`AccountDebitedDrawdown`] `{4400}`: the account debited, always a DDA
//! - [`AccountCreditedDrawdown`] `{5400}`: the account credited

use crate::party::{IDENTIFICATION_CODE, IDENTIFIER, NAME, PERSONAL_FIELDS, Personal};
use crate::segment::{WireSegment, check, check_tag, require};
use fedwire_codec::{RecordDecoder, RecordEncoder};
use fedwire_core::codes;
use fedwire_core::error::{FieldError, SegmentError, Violation};
use fedwire_core::field::{FieldDef, SegmentLayout};
use fedwire_core::types::FormatOptions;
use fedwire_core::validator::is_numeric;
use serde::{Deserialize, Serialize};

const DRAWDOWN_CREDIT_ACCOUNT_NUMBER: FieldDef =
    FieldDef::fixed("DrawdownCreditAccountNumber", 9);

/// Account debited in a drawdown, `{4400}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountDebitedDrawdown {
    #[serde(skip)]
    pub(crate) tag: String,
    /// The debited party; identification code must be `D`.
    pub personal: Personal,
}

impl AccountDebitedDrawdown {
    /// Creates an empty segment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for AccountDebitedDrawdown {
    fn default() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            personal: Personal::default(),
        }
    }
}

impl WireSegment for AccountDebitedDrawdown {
    const TAG: &'static str = "{4400}";
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
        let personal = &self.personal;
        require(&IDENTIFICATION_CODE, &personal.identification_code)?;
        require(&IDENTIFIER, &personal.identifier)?;
        require(&NAME, &personal.name)?;
        check_tag(&self.tag, Self::TAG)?;
        personal.check_code()?;
        if personal.identification_code != codes::DEMAND_DEPOSIT_ACCOUNT_NUMBER {
            return Err(FieldError::with_value(
                IDENTIFICATION_CODE.name,
                Violation::IdentificationCode,
                personal.identification_code.as_str(),
            )
            .into());
        }
        personal.check_text()?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut encoder =
            RecordEncoder::new(&self.tag, options, Self::LAYOUT.max_variable_length());
        self.personal.write(&mut encoder);
        encoder.finish()
    }
}

/// Account credited in a drawdown, `{5400}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountCreditedDrawdown {
    #[serde(skip)]
    pub(crate) tag: String,
    /// Drawdown credit account number.
    pub drawdown_credit_account_number: String,
}

impl AccountCreditedDrawdown {
    /// Creates an empty segment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for AccountCreditedDrawdown {
    fn default() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            drawdown_credit_account_number: String::new(),
        }
    }
}

impl WireSegment for AccountCreditedDrawdown {
    const TAG: &'static str = "{5400}";
    const LAYOUT: SegmentLayout =
        SegmentLayout::new(Self::TAG, &[DRAWDOWN_CREDIT_ACCOUNT_NUMBER]);

    fn tag(&self) -> &str {
        &self.tag
    }

    fn parse(&mut self, record: &str) -> Result<(), SegmentError> {
        let mut decoder = RecordDecoder::new(record, &Self::LAYOUT)?;
        self.tag = decoder.tag().to_string();
        self.drawdown_credit_account_number = decoder.read(&DRAWDOWN_CREDIT_ACCOUNT_NUMBER)?;
        decoder.finish()
    }

    fn validate(&self) -> Result<(), SegmentError> {
        require(
            &DRAWDOWN_CREDIT_ACCOUNT_NUMBER,
            &self.drawdown_credit_account_number,
        )?;
        check_tag(&self.tag, Self::TAG)?;
        check(
            &DRAWDOWN_CREDIT_ACCOUNT_NUMBER,
            &self.drawdown_credit_account_number,
            is_numeric,
        )?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut encoder =
            RecordEncoder::new(&self.tag, options, Self::LAYOUT.max_variable_length());
        encoder.put(
            &DRAWDOWN_CREDIT_ACCOUNT_NUMBER,
            &self.drawdown_credit_account_number,
        );
        encoder.finish()
    }
}
