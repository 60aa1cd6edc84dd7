/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Core types for Fedwire message operations.
//!
//! This module provides fundamental types used throughout the workspace:
//! - [`FormatOptions`]: Fixed-width vs. variable-length serialization switch
//! - [`BusinessFunctionCode`]: Codes that drive the conditional message schema
//! - [`LocalInstrumentCode`]: Instrument codes refining customer transfers
//! - Wire constants ([`DELIMITER`], [`TAG_LENGTH`])

use crate::error::Violation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reserved character terminating variable-width fields.
pub const DELIMITER: char = '*';

/// [`DELIMITER`] as a byte, for byte-level searches.
pub const DELIMITER_BYTE: u8 = b'*';

/// Length in characters of every segment tag, e.g. `{1500}`.
pub const TAG_LENGTH: usize = 6;

/// Serialization shape for a whole message.
///
/// The same value is threaded through every segment's `format` call, so a
/// message is never rendered with mixed shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    /// `false`: every field space- or zero-padded to its width, no delimiters.
    /// `true`: variable fields at natural length followed by [`DELIMITER`],
    /// trailing delimiter runs collapsed.
    pub variable_length_fields: bool,
}

impl FormatOptions {
    /// Fixed-width, fully padded rendering.
    #[inline]
    #[must_use]
    pub const fn fixed() -> Self {
        Self {
            variable_length_fields: false,
        }
    }

    /// Delimiter-terminated variable-length rendering.
    #[inline]
    #[must_use]
    pub const fn variable() -> Self {
        Self {
            variable_length_fields: true,
        }
    }
}

/// Business function code carried by the `{3600}` segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessFunctionCode {
    /// Bank transfer (BTR).
    BankTransfer,
    /// Check same-day settlement (CKS).
    CheckSameDaySettlement,
    /// Customer transfer plus (CTP).
    CustomerTransferPlus,
    /// Customer transfer (CTR).
    CustomerTransfer,
    /// Customer or corporate drawdown request (DRC).
    CustomerCorporateDrawdownRequest,
    /// Bank-to-bank drawdown request (DRB).
    BankDrawdownRequest,
    /// Drawdown payment (DRW).
    DrawdownPayment,
    /// Deposit to sender's account (DEP).
    DepositSendersAccount,
    /// Fed funds returned (FFR).
    FedFundsReturned,
    /// Fed funds sold (FFS).
    FedFundsSold,
    /// Service message (SVC).
    ServiceMessage,
}

impl BusinessFunctionCode {
    /// All codes, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::BankTransfer,
        Self::CheckSameDaySettlement,
        Self::CustomerTransferPlus,
        Self::CustomerTransfer,
        Self::CustomerCorporateDrawdownRequest,
        Self::BankDrawdownRequest,
        Self::DrawdownPayment,
        Self::DepositSendersAccount,
        Self::FedFundsReturned,
        Self::FedFundsSold,
        Self::ServiceMessage,
    ];

    /// Returns the 3-character wire code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BankTransfer => "BTR",
            Self::CheckSameDaySettlement => "CKS",
            Self::CustomerTransferPlus => "CTP",
            Self::CustomerTransfer => "CTR",
            Self::CustomerCorporateDrawdownRequest => "DRC",
            Self::BankDrawdownRequest => "DRB",
            Self::DrawdownPayment => "DRW",
            Self::DepositSendersAccount => "DEP",
            Self::FedFundsReturned => "FFR",
            Self::FedFundsSold => "FFS",
            Self::ServiceMessage => "SVC",
        }
    }

    /// Returns true for customer transfers (CTR, CTP).
    #[must_use]
    pub const fn is_customer_transfer(self) -> bool {
        matches!(self, Self::CustomerTransfer | Self::CustomerTransferPlus)
    }

    /// Returns true for drawdown requests (DRB, DRC).
    #[must_use]
    pub const fn is_drawdown_request(self) -> bool {
        matches!(
            self,
            Self::BankDrawdownRequest | Self::CustomerCorporateDrawdownRequest
        )
    }

    /// Returns true for any drawdown code (DRB, DRC, DRW).
    #[must_use]
    pub const fn is_drawdown(self) -> bool {
        self.is_drawdown_request() || matches!(self, Self::DrawdownPayment)
    }
}

impl FromStr for BusinessFunctionCode {
    type Err = Violation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or(Violation::BusinessFunctionCode)
    }
}

impl fmt::Display for BusinessFunctionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Local instrument code carried by the `{3610}` segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocalInstrumentCode {
    /// ANSI X12 format (ANSI).
    AnsiX12,
    /// Sequence B cover payment structured (COVS).
    SequenceBCoverPaymentStructured,
    /// General XML format (GXML).
    GeneralXml,
    /// ISO 20022 XML format (IXML).
    Iso20022Xml,
    /// Narrative text (NARR).
    NarrativeText,
    /// Proprietary local instrument code (PROP).
    Proprietary,
    /// Remittance information structured (RMTS).
    RemittanceInformationStructured,
    /// Related remittance information (RRMT).
    RelatedRemittanceInformation,
    /// STP 820 format (S820).
    Stp820,
    /// SWIFT field 70 (SWIF).
    SwiftField70,
    /// UN/EDIFACT format (UEDI).
    UnEdifact,
}

impl LocalInstrumentCode {
    /// All codes, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::AnsiX12,
        Self::SequenceBCoverPaymentStructured,
        Self::GeneralXml,
        Self::Iso20022Xml,
        Self::NarrativeText,
        Self::Proprietary,
        Self::RemittanceInformationStructured,
        Self::RelatedRemittanceInformation,
        Self::Stp820,
        Self::SwiftField70,
        Self::UnEdifact,
    ];

    /// Returns the 4-character wire code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AnsiX12 => "ANSI",
            Self::SequenceBCoverPaymentStructured => "COVS",
            Self::GeneralXml => "GXML",
            Self::Iso20022Xml => "IXML",
            Self::NarrativeText => "NARR",
            Self::Proprietary => "PROP",
            Self::RemittanceInformationStructured => "RMTS",
            Self::RelatedRemittanceInformation => "RRMT",
            Self::Stp820 => "S820",
            Self::SwiftField70 => "SWIF",
            Self::UnEdifact => "UEDI",
        }
    }
}

impl FromStr for LocalInstrumentCode {
    type Err = Violation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or(Violation::LocalInstrumentCode)
    }
}

impl fmt::Display for LocalInstrumentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
