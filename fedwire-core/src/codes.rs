/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Enumerated code tables consulted by the validators.
//!
//! Tables are sorted so membership can be checked with a binary search.

/// ISO 4217 alphabetic currency codes accepted in currency fields.
pub const CURRENCY_CODES: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN", "BAM", "BBD", "BDT",
    "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BOV", "BRL", "BSD", "BTN", "BWP", "BYN", "BZD",
    "CAD", "CDF", "CHE", "CHF", "CHW", "CLF", "CLP", "CNY", "COP", "COU", "CRC", "CUC", "CUP",
    "CVE", "CZK", "DJF", "DKK", "DOP", "DZD", "EGP", "ERN", "ETB", "EUR", "FJD", "FKP", "GBP",
    "GEL", "GHS", "GIP", "GMD", "GNF", "GTQ", "GYD", "HKD", "HNL", "HTG", "HUF", "IDR", "ILS",
    "INR", "IQD", "IRR", "ISK", "JMD", "JOD", "JPY", "KES", "KGS", "KHR", "KMF", "KPW", "KRW",
    "KWD", "KYD", "KZT", "LAK", "LBP", "LKR", "LRD", "LSL", "LYD", "MAD", "MDL", "MGA", "MKD",
    "MMK", "MNT", "MOP", "MRU", "MUR", "MVR", "MWK", "MXN", "MXV", "MYR", "MZN", "NAD", "NGN",
    "NIO", "NOK", "NPR", "NZD", "OMR", "PAB", "PEN", "PGK", "PHP", "PKR", "PLN", "PYG", "QAR",
    "RON", "RSD", "RUB", "RWF", "SAR", "SBD", "SCR", "SDG", "SEK", "SGD", "SHP", "SLE", "SLL",
    "SOS", "SRD", "SSP", "STN", "SVC", "SYP", "SZL", "THB", "TJS", "TMT", "TND", "TOP", "TRY",
    "TTD", "TWD", "TZS", "UAH", "UGX", "USD", "USN", "UYI", "UYU", "UYW", "UZS", "VED", "VES",
    "VND", "VUV", "WST", "XAF", "XAG", "XAU", "XBA", "XBB", "XBC", "XBD", "XCD", "XDR", "XOF",
    "XPD", "XPF", "XPT", "XSU", "XTS", "XUA", "XXX", "YER", "ZAR", "ZMW", "ZWL",
];

/// Identification codes for party segments.
///
/// `B` BIC, `C` CHIPS participant, `D` DDA account, `F` Fed routing number,
/// `T` SWIFT BIC/BEI and account, `U` CHIPS identifier, `1` passport,
/// `2` tax identification, `3` driver's license, `4` alien registration,
/// `5` corporate identification, `9` other.
pub const IDENTIFICATION_CODES: &[&str] = &[
    "1", "2", "3", "4", "5", "9", "B", "C", "D", "F", "T", "U",
];

/// Identification code required by the account debited in a drawdown.
pub const DEMAND_DEPOSIT_ACCOUNT_NUMBER: &str = "D";

/// Advice method codes for financial institution advice segments.
pub const ADVICE_CODES: &[&str] = &["HLD", "LTR", "PHN", "TLX", "WRE"];

/// Type codes for `{1510}`: funds transfer, foreign transfer, settlement transfer.
pub const TYPE_CODES: &[&str] = &["10", "15", "16"];

/// Sub type codes for `{1510}`.
pub const SUB_TYPE_CODES: &[&str] = &["00", "01", "02", "08", "31", "32", "33", "90"];

/// The only supported `{1500}` format version.
pub const FORMAT_VERSION: &str = "30";

/// Test message indicator.
pub const ENVIRONMENT_TEST: &str = "T";

/// Production message indicator.
pub const ENVIRONMENT_PRODUCTION: &str = "P";

/// Possible-duplicate indicator; an empty duplication code marks an original message.
pub const MESSAGE_DUPLICATION_RESEND: &str = "P";

/// Returns true if `value` is a member of the sorted `table`.
#[inline]
#[must_use]
pub fn contains(table: &[&str], value: &str) -> bool {
    table.binary_search(&value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted(table: &[&str]) {
        assert!(table.windows(2).all(|w| w[0] < w[1]), "{table:?}");
    }

    #[test]
    fn test_tables_are_sorted() {
        assert_sorted(CURRENCY_CODES);
        assert_sorted(IDENTIFICATION_CODES);
        assert_sorted(ADVICE_CODES);
        assert_sorted(TYPE_CODES);
        assert_sorted(SUB_TYPE_CODES);
    }

    #[test]
    fn test_contains() {
        assert!(contains(CURRENCY_CODES, "USD"));
        assert!(contains(CURRENCY_CODES, "EUR"));
        assert!(!contains(CURRENCY_CODES, "XZP"));
        assert!(contains(IDENTIFICATION_CODES, "D"));
        assert!(!contains(IDENTIFICATION_CODES, "Z"));
    }
}
