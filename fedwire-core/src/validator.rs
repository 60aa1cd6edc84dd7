/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Field content validators.
//!
//! Every validator is a pure predicate over an already-extracted field value
//! returning the [`Violation`] it detected. Validators never see sibling fields
//! and accept the empty string: presence is checked separately, by
//! [`require`], so an optional field left empty is always valid.

use crate::codes;
use crate::error::Violation;
use crate::types::{BusinessFunctionCode, LocalInstrumentCode};
use chrono::NaiveDate;

/// Result of a single validator.
pub type Check = Result<(), Violation>;

/// Fails with [`Violation::FieldRequired`] if `value` is empty.
///
/// # Errors
/// Returns [`Violation::FieldRequired`] for an empty value.
#[inline]
pub fn require(value: &str) -> Check {
    if value.is_empty() {
        return Err(Violation::FieldRequired);
    }
    Ok(())
}

/// Digits only.
///
/// # Errors
/// Returns [`Violation::NonNumeric`] on any non-digit character.
pub fn is_numeric(value: &str) -> Check {
    if value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(Violation::NonNumeric)
    }
}

/// Printable ASCII (space through tilde). Control and non-ASCII characters
/// are rejected.
///
/// # Errors
/// Returns [`Violation::NonAlphanumeric`] on any character outside the set.
pub fn is_alphanumeric(value: &str) -> Check {
    if value.bytes().all(|b| (0x20..=0x7e).contains(&b)) {
        Ok(())
    } else {
        Err(Violation::NonAlphanumeric)
    }
}

/// An amount: leading digit, then digits with at most one decimal marker.
///
/// Both `,` (the standard's decimal comma) and `.` are accepted as the marker.
///
/// # Errors
/// Returns [`Violation::NonAmount`] if the value is not a well-formed amount.
pub fn is_amount(value: &str) -> Check {
    let bytes = value.as_bytes();
    let Some(first) = bytes.first() else {
        return Ok(());
    };
    if !first.is_ascii_digit() {
        return Err(Violation::NonAmount);
    }
    let mut separators = 0;
    for &b in bytes {
        match b {
            b'0'..=b'9' => {}
            b',' | b'.' => separators += 1,
            _ => return Err(Violation::NonAmount),
        }
    }
    if separators > 1 {
        return Err(Violation::NonAmount);
    }
    Ok(())
}

/// A recognized ISO 4217 currency code.
///
/// # Errors
/// Returns [`Violation::NonCurrencyCode`] if the code is unknown.
pub fn is_currency_code(value: &str) -> Check {
    if value.is_empty() || codes::contains(codes::CURRENCY_CODES, value) {
        Ok(())
    } else {
        Err(Violation::NonCurrencyCode)
    }
}

/// A party identification code.
///
/// # Errors
/// Returns [`Violation::IdentificationCode`] if the code is not permitted.
pub fn is_identification_code(value: &str) -> Check {
    if value.is_empty() || codes::contains(codes::IDENTIFICATION_CODES, value) {
        Ok(())
    } else {
        Err(Violation::IdentificationCode)
    }
}

/// A financial institution advice code.
///
/// # Errors
/// Returns [`Violation::AdviceCode`] if the code is not permitted.
pub fn is_advice_code(value: &str) -> Check {
    if value.is_empty() || codes::contains(codes::ADVICE_CODES, value) {
        Ok(())
    } else {
        Err(Violation::AdviceCode)
    }
}

/// A calendar date in `CCYYMMDD` form.
///
/// # Errors
/// Returns [`Violation::ValidDate`] if the value is not a real date.
pub fn is_date(value: &str) -> Check {
    if value.is_empty() {
        return Ok(());
    }
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Violation::ValidDate);
    }
    NaiveDate::parse_from_str(value, "%Y%m%d")
        .map(|_| ())
        .map_err(|_| Violation::ValidDate)
}

/// A known business function code.
///
/// # Errors
/// Returns [`Violation::BusinessFunctionCode`] if the code is unknown.
pub fn is_business_function_code(value: &str) -> Check {
    if value.is_empty() {
        return Ok(());
    }
    value.parse::<BusinessFunctionCode>().map(|_| ())
}

/// A known local instrument code.
///
/// # Errors
/// Returns [`Violation::LocalInstrumentCode`] if the code is unknown.
pub fn is_local_instrument_code(value: &str) -> Check {
    if value.is_empty() {
        return Ok(());
    }
    value.parse::<LocalInstrumentCode>().map(|_| ())
}

/// A known `{1510}` type code.
///
/// # Errors
/// Returns [`Violation::TypeCode`] if the code is unknown.
pub fn is_type_code(value: &str) -> Check {
    if value.is_empty() || codes::contains(codes::TYPE_CODES, value) {
        Ok(())
    } else {
        Err(Violation::TypeCode)
    }
}

/// A known `{1510}` sub type code.
///
/// # Errors
/// Returns [`Violation::SubTypeCode`] if the code is unknown.
pub fn is_sub_type_code(value: &str) -> Check {
    if value.is_empty() || codes::contains(codes::SUB_TYPE_CODES, value) {
        Ok(())
    } else {
        Err(Violation::SubTypeCode)
    }
}

/// `T` (test) or `P` (production).
///
/// # Errors
/// Returns [`Violation::TestProductionCode`] for any other value.
pub fn is_test_production_code(value: &str) -> Check {
    match value {
        "" | codes::ENVIRONMENT_TEST | codes::ENVIRONMENT_PRODUCTION => Ok(()),
        _ => Err(Violation::TestProductionCode),
    }
}

/// Empty (original) or `P` (possible duplicate).
///
/// # Errors
/// Returns [`Violation::MessageDuplicationCode`] for any other value.
pub fn is_message_duplication_code(value: &str) -> Check {
    match value {
        "" | codes::MESSAGE_DUPLICATION_RESEND => Ok(()),
        _ => Err(Violation::MessageDuplicationCode),
    }
}

/// The supported format version.
///
/// # Errors
/// Returns [`Violation::FormatVersion`] for any other value.
pub fn is_format_version(value: &str) -> Check {
    match value {
        "" | codes::FORMAT_VERSION => Ok(()),
        _ => Err(Violation::FormatVersion),
    }
}
