/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Fedwire Segment
//!
//! Segment definitions for Fedwire funds-transfer messages.
//!
//! This crate provides:
//! - **Segment contract**: The [`WireSegment`] trait (parse, validate, format)
//! - **Segment catalog**: One struct per tag, grouped by business role
//! - **Registry**: The closed [`Segment`] sum type and tag dispatch via [`parse_segment`]
//!
//! ## Example
//!
//! ```
//! use fedwire_core::FormatOptions;
//! use fedwire_segment::{ActualAmountPaid, WireSegment};
//!
//! let aap = ActualAmountPaid::from_record("{8450}USD1234.56*").unwrap();
//! assert!(aap.validate().is_ok());
//! assert_eq!(aap.format(FormatOptions::variable()), "{8450}USD1234.56*");
//! ```

pub mod advice;
pub mod cover;
pub mod drawdown;
pub mod function;
pub mod header;
pub mod institution;
pub mod party;
pub mod registry;
pub mod remittance;
pub mod segment;

pub use advice::{Advice, FIBeneficiaryFIAdvice, OriginatorToBeneficiary};
pub use cover::{BeneficiaryCustomer, CoverPayment, CurrencyInstructedAmount};
pub use drawdown::{AccountCreditedDrawdown, AccountDebitedDrawdown};
pub use function::{BusinessFunction, LocalInstrument};
pub use header::{InputMessageAccountabilityData, SenderSupplied, TypeSubType};
pub use institution::{
    Amount, ReceiverDepositoryInstitution, SenderDepositoryInstitution, SenderReference,
};
pub use party::{Address, Beneficiary, Originator, Personal};
pub use registry::{Segment, SegmentKind, SegmentVariant, parse_segment};
pub use remittance::{ActualAmountPaid, AmountNegotiatedDiscount, RemittanceAmount};
pub use segment::WireSegment;
