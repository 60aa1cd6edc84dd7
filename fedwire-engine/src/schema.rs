/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Conditional message schema.
//!
//! Which segments a message may or must carry depends on its business function
//! code `{3600}` and local instrument code `{3610}`. [`SchemaContext`] records
//! those codes as segments arrive and answers whether a kind is legal now.
//!
//! A segment whose controlling code has not been read yet is accepted
//! provisionally and checked again when the code arrives, so records may be
//! assembled in any order.

use crate::message::Message;
use fedwire_core::error::SchemaError;
use fedwire_core::types::{BusinessFunctionCode, LocalInstrumentCode};
use fedwire_segment::{Segment, SegmentKind};
use std::collections::BTreeSet;
use tracing::debug;

/// Segments every message must carry.
pub const ALWAYS_REQUIRED: &[SegmentKind] = &[
    SegmentKind::SenderSupplied,
    SegmentKind::TypeSubType,
    SegmentKind::InputMessageAccountabilityData,
    SegmentKind::Amount,
    SegmentKind::SenderDepositoryInstitution,
    SegmentKind::ReceiverDepositoryInstitution,
    SegmentKind::BusinessFunction,
];

/// Segments required by customer transfers (CTR, CTP).
const CUSTOMER_TRANSFER_REQUIRED: &[SegmentKind] =
    &[SegmentKind::Beneficiary, SegmentKind::Originator];

/// Segments required by drawdown requests (DRB, DRC).
const DRAWDOWN_REQUIRED: &[SegmentKind] = &[
    SegmentKind::AccountDebitedDrawdown,
    SegmentKind::AccountCreditedDrawdown,
];

/// Cross-segment state accumulated while a message is assembled.
#[derive(Debug, Clone, Default)]
pub struct SchemaContext {
    seen: BTreeSet<SegmentKind>,
    business_function: Option<BusinessFunctionCode>,
    local_instrument: Option<LocalInstrumentCode>,
}

impl SchemaContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the business function code read so far.
    #[must_use]
    pub const fn business_function(&self) -> Option<BusinessFunctionCode> {
        self.business_function
    }

    /// Returns the local instrument code read so far.
    #[must_use]
    pub const fn local_instrument(&self) -> Option<LocalInstrumentCode> {
        self.local_instrument
    }

    /// Returns true if a segment of `kind` has been accepted.
    #[must_use]
    pub fn has_seen(&self, kind: SegmentKind) -> bool {
        self.seen.contains(&kind)
    }

    /// Records a segment, updating the controlling codes it carries.
    ///
    /// # Errors
    /// Returns [`SchemaError::Duplicate`] for a repeated kind, or
    /// [`SchemaError::NotPermitted`] if the segment, or one accepted earlier,
    /// is illegal under the codes known so far.
    pub fn accept(&mut self, segment: &Segment) -> Result<(), SchemaError> {
        let kind = segment.kind();
        if !self.seen.insert(kind) {
            return Err(SchemaError::Duplicate { tag: kind.tag() });
        }

        match segment {
            Segment::BusinessFunction(bf) => {
                self.business_function = bf.code();
                debug!("Business function code set to {:?}", self.business_function);
                self.recheck()
            }
            Segment::LocalInstrument(li) => {
                self.local_instrument = li.code();
                debug!("Local instrument code set to {:?}", self.local_instrument);
                self.recheck()
            }
            _ => self.check_permitted(kind, true),
        }
    }

    /// Checks whether `kind` is legal under the current codes.
    ///
    /// With `provisional` set, a kind whose controlling code is still unknown
    /// is accepted.
    ///
    /// # Errors
    /// Returns [`SchemaError::NotPermitted`] naming the rule that excludes it.
    pub fn check_permitted(&self, kind: SegmentKind, provisional: bool) -> Result<(), SchemaError> {
        let permitted = match kind {
            SegmentKind::LocalInstrument => self
                .business_function
                .map(|code| code == BusinessFunctionCode::CustomerTransferPlus),
            SegmentKind::AccountDebitedDrawdown | SegmentKind::AccountCreditedDrawdown => {
                self.business_function.map(BusinessFunctionCode::is_drawdown)
            }
            SegmentKind::CurrencyInstructedAmount | SegmentKind::BeneficiaryCustomer => self
                .local_instrument
                .map(|code| code == LocalInstrumentCode::SequenceBCoverPaymentStructured),
            SegmentKind::ActualAmountPaid | SegmentKind::AmountNegotiatedDiscount => self
                .local_instrument
                .map(|code| code == LocalInstrumentCode::RemittanceInformationStructured),
            _ => Some(true),
        };

        match permitted {
            Some(true) => Ok(()),
            None if provisional => Ok(()),
            _ => Err(SchemaError::NotPermitted {
                tag: kind.tag(),
                reason: Self::permission_rule(kind).to_string(),
            }),
        }
    }

    /// Checks that every segment the current codes require has been accepted.
    ///
    /// # Errors
    /// Returns [`SchemaError::Missing`] for the first absent segment.
    pub fn check_complete(&self) -> Result<(), SchemaError> {
        self.require_all(ALWAYS_REQUIRED, || "mandatory in every message".to_string())?;

        let Some(code) = self.business_function else {
            return Ok(());
        };
        let reason = || format!("required for business function code {code}");
        if code.is_customer_transfer() {
            self.require_all(CUSTOMER_TRANSFER_REQUIRED, reason)?;
        }
        if code == BusinessFunctionCode::CustomerTransferPlus {
            self.require_all(&[SegmentKind::LocalInstrument], reason)?;
        }
        if code.is_drawdown_request() {
            self.require_all(DRAWDOWN_REQUIRED, reason)?;
        }
        Ok(())
    }

    /// Resolves provisional acceptances once no more segments will arrive.
    ///
    /// A segment whose controlling code never arrived is not permitted.
    ///
    /// # Errors
    /// Returns [`SchemaError::NotPermitted`] for the first unresolved segment.
    pub fn resolve(&self) -> Result<(), SchemaError> {
        for &kind in &self.seen {
            self.check_permitted(kind, false)?;
        }
        Ok(())
    }

    /// Final check once every segment has been accepted.
    ///
    /// # Errors
    /// Returns the first permission or completeness failure.
    pub fn finish(&self) -> Result<(), SchemaError> {
        self.resolve()?;
        self.check_complete()
    }

    /// Runs the full conditional schema over an assembled message.
    ///
    /// # Errors
    /// Returns the first duplicate, permission, or completeness failure.
    pub fn check_message(message: &Message) -> Result<(), SchemaError> {
        let mut context = Self::new();
        for segment in message {
            context.accept(segment)?;
        }
        context.finish()
    }

    fn recheck(&self) -> Result<(), SchemaError> {
        for &kind in &self.seen {
            self.check_permitted(kind, true)?;
        }
        Ok(())
    }

    fn require_all(
        &self,
        kinds: &[SegmentKind],
        reason: impl Fn() -> String,
    ) -> Result<(), SchemaError> {
        match kinds.iter().find(|kind| !self.seen.contains(kind)) {
            Some(kind) => Err(SchemaError::Missing {
                tag: kind.tag(),
                reason: reason(),
            }),
            None => Ok(()),
        }
    }

    const fn permission_rule(kind: SegmentKind) -> &'static str {
        match kind {
            SegmentKind::LocalInstrument => "requires business function code CTP",
            SegmentKind::AccountDebitedDrawdown | SegmentKind::AccountCreditedDrawdown => {
                "requires a drawdown business function code"
            }
            SegmentKind::CurrencyInstructedAmount | SegmentKind::BeneficiaryCustomer => {
                "requires local instrument code COVS"
            }
            SegmentKind::ActualAmountPaid | SegmentKind::AmountNegotiatedDiscount => {
                "requires local instrument code RMTS"
            }
            _ => "",
        }
    }
}
