/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Fedwire Core
//!
//! Core types, validators, and error definitions for Fedwire funds-transfer messages.
//!
//! This crate provides the fundamental building blocks used across all Fedwire crates:
//! - **Error types**: Field-attributed error handling with `thiserror`
//! - **Field definitions**: `FieldDef`, `Encoding`, and `SegmentLayout`
//! - **Validators**: Pure predicates over field values (numeric, amount, codes, dates)
//! - **Core types**: `FormatOptions`, `BusinessFunctionCode`, `LocalInstrumentCode`
//!
//! ## Character Counting
//!
//! Every length in this workspace is measured in Unicode code points, never bytes,
//! so multi-byte input is measured consistently by parsing and validation.

pub mod codes;
pub mod error;
pub mod field;
pub mod types;
pub mod validator;

pub use error::{FedwireError, FieldError, Result, SchemaError, SegmentError, Violation};
pub use field::{Encoding, FieldDef, SegmentLayout};
pub use types::{
    BusinessFunctionCode, DELIMITER, DELIMITER_BYTE, FormatOptions, LocalInstrumentCode,
    TAG_LENGTH,
};
