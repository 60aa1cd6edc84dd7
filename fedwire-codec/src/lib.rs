/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Fedwire Codec
//!
//! Field-level encoding and decoding for Fedwire segments.
//!
//! This crate provides the primitives every segment is built from. A segment's
//! parse and format routines are straight-line sequences of these calls over
//! its field definitions.
//!
//! ## Features
//!
//! - **Two wire shapes**: Fixed-width space/zero padding and delimiter-terminated fields
//! - **Code-point aware**: Widths count characters, so multi-byte input never miscounts
//! - **Fast delimiter search**: Uses `memchr` to locate field terminators

pub mod chars;
pub mod decoder;
pub mod encoder;

pub use chars::{char_count, split_at_char};
pub use decoder::{
    RecordDecoder, parse_fixed_string_field, parse_variable_string_field,
    verify_data_with_read_length,
};
pub use encoder::{
    RecordEncoder, alpha_field, format_alpha_field, numeric_string_field, strip_delimiters,
};
