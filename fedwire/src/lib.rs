/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Fedwire
//!
//! A codec and validator for Fedwire funds-transfer messages.
//!
//! A message is a sequence of records, each opening with a 6-character tag such
//! as `{2000}`. Records are written either fixed-width (space padded) or
//! variable-width (delimiter terminated), and both shapes read into the same
//! data model.
//!
//! ## Features
//!
//! - **Two wire shapes**: One model, selected per write by [`prelude::FormatOptions`]
//! - **Field-attributed errors**: Every failure names its segment, field, and input line
//! - **Conditional schema**: Legal and mandatory segments follow the business function
//!   and local instrument codes
//! - **JSON**: Messages and segments (de)serialize with `serde`
//!
//! ## Quick Start
//!
//! ```
//! use fedwire::prelude::*;
//!
//! let input = "{3320}REF*\n{8450}USD1234.56*\n";
//! let config = ReaderConfig::new().with_enforce_schema(false);
//! let message = Reader::with_config(input.as_bytes(), config).read().unwrap();
//!
//! let paid = message.segment::<ActualAmountPaid>().unwrap();
//! assert_eq!(paid.remittance_amount.amount, "1234.56");
//! assert_eq!(message.format(FormatOptions::variable()), input);
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Errors, validators, field definitions, and code tables
//! - [`codec`]: Field-level parse and format primitives
//! - [`segment`]: Segment catalog and tag registry
//! - [`engine`]: Message, conditional schema, reader, and writer

pub mod core {
    //! Errors, validators, field definitions, and code tables.
    pub use fedwire_core::*;
}

pub mod codec {
    //! Field-level parse and format primitives.
    pub use fedwire_codec::*;
}

pub mod segment {
    //! Segment catalog and tag registry.
    pub use fedwire_segment::*;
}

pub mod engine {
    //! Message, conditional schema, reader, and writer.
    pub use fedwire_engine::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use fedwire_core::{
        BusinessFunctionCode, FedwireError, FieldError, FormatOptions, LocalInstrumentCode,
        Result, SchemaError, SegmentError, Violation,
    };

    // Segments
    pub use fedwire_segment::{
        AccountCreditedDrawdown, AccountDebitedDrawdown, ActualAmountPaid, Advice, Amount,
        AmountNegotiatedDiscount, Beneficiary, BeneficiaryCustomer, BusinessFunction,
        CoverPayment, CurrencyInstructedAmount, FIBeneficiaryFIAdvice,
        InputMessageAccountabilityData, LocalInstrument, Originator, OriginatorToBeneficiary,
        ReceiverDepositoryInstitution, Segment, SegmentKind, SegmentVariant,
        SenderDepositoryInstitution, SenderReference, SenderSupplied, TypeSubType, WireSegment,
        parse_segment,
    };

    // Engine
    pub use fedwire_engine::{
        Message, Reader, ReaderConfig, ReaderConfigBuilder, SchemaContext, Writer, WriterConfig,
        WriterConfigBuilder,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use rust_decimal::Decimal;

    fn header(message: &mut Message, business_function_code: &str) {
        let mut ss = SenderSupplied::new();
        ss.user_request_correlation = "User Req".to_string();
        ss.test_production_code = "T".to_string();
        message.set(ss);

        let mut tst = TypeSubType::new();
        tst.type_code = "10".to_string();
        tst.sub_type_code = "00".to_string();
        message.set(tst);

        let mut imad = InputMessageAccountabilityData::new();
        imad.input_cycle_date = "20240115".to_string();
        imad.input_source = "Source08".to_string();
        imad.input_sequence_number = "000001".to_string();
        message.set(imad);

        let mut amt = Amount::new();
        amt.amount = "000001234567".to_string();
        message.set(amt);

        let mut sdi = SenderDepositoryInstitution::new();
        sdi.sender_aba_number = "121042882".to_string();
        sdi.sender_short_name = "Wells Fargo NA".to_string();
        message.set(sdi);

        let mut rdi = ReceiverDepositoryInstitution::new();
        rdi.receiver_aba_number = "231380104".to_string();
        rdi.receiver_short_name = "Citadel".to_string();
        message.set(rdi);

        let mut bfc = BusinessFunction::new();
        bfc.business_function_code = business_function_code.to_string();
        message.set(bfc);
    }

    fn remittance_transfer() -> Message {
        let mut message = Message::new();
        header(&mut message, "CTP");

        let mut li = LocalInstrument::new();
        li.local_instrument_code = "RMTS".to_string();
        message.set(li);

        let mut ben = Beneficiary::new();
        ben.personal.identification_code = "D".to_string();
        ben.personal.identifier = "1234".to_string();
        ben.personal.name = "Beneficiary".to_string();
        ben.personal.address.address_line_one = "Address One".to_string();
        message.set(ben);

        let mut org = Originator::new();
        org.personal.identification_code = "D".to_string();
        org.personal.identifier = "5678".to_string();
        org.personal.name = "Originator".to_string();
        message.set(org);

        let mut aap = ActualAmountPaid::new();
        aap.remittance_amount.currency_code = "USD".to_string();
        aap.remittance_amount.amount = "1234.56".to_string();
        message.set(aap);

        let mut nd = AmountNegotiatedDiscount::new();
        nd.remittance_amount.currency_code = "USD".to_string();
        nd.remittance_amount.amount = "10,00".to_string();
        message.set(nd);

        message
    }

    fn drawdown_request() -> Message {
        let mut message = Message::new();
        header(&mut message, "DRC");

        let mut debit = AccountDebitedDrawdown::new();
        debit.personal.identification_code = "D".to_string();
        debit.personal.identifier = "123456789".to_string();
        debit.personal.name = "Debit Account".to_string();
        message.set(debit);

        let mut credit = AccountCreditedDrawdown::new();
        credit.drawdown_credit_account_number = "123456789".to_string();
        message.set(credit);

        message
    }

    fn read(input: &str) -> Result<Message> {
        let config = ReaderConfig::new().with_validate_message(true);
        Reader::with_config(input.as_bytes(), config).read()
    }

    fn write(message: &Message, format: FormatOptions) -> String {
        let config = WriterConfig::new().with_format(format);
        let mut writer = Writer::with_config(Vec::new(), config);
        writer.write(message).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_round_trip_fixed() {
        let message = remittance_transfer();
        let wire = write(&message, FormatOptions::fixed());
        assert!(!wire.contains('*'));

        let back = read(&wire).unwrap();
        assert_eq!(back, message);
        assert_eq!(write(&back, FormatOptions::fixed()), wire);
    }

    #[test]
    fn test_round_trip_variable() {
        let message = remittance_transfer();
        let wire = write(&message, FormatOptions::variable());
        assert!(wire.contains("{4200}D1234*Beneficiary*Address One*\n"));
        assert!(wire.contains("{8450}USD1234.56*\n"));

        let back = read(&wire).unwrap();
        assert_eq!(back, message);
        assert_eq!(write(&back, FormatOptions::variable()), wire);
    }

    #[test]
    fn test_fixed_to_variable_conversion() {
        let message = drawdown_request();
        let fixed = write(&message, FormatOptions::fixed());
        let variable = write(&read(&fixed).unwrap(), FormatOptions::variable());
        assert!(variable.len() < fixed.len());
        assert_eq!(read(&variable).unwrap(), message);
    }

    #[test]
    fn test_records_in_any_order() {
        let wire = write(&remittance_transfer(), FormatOptions::variable());
        let reversed: String = wire.lines().rev().map(|line| format!("{line}\n")).collect();
        let back = read(&reversed).unwrap();
        assert_eq!(write(&back, FormatOptions::variable()), wire);
        assert_eq!(
            back.iter().next().map(Segment::kind),
            Some(SegmentKind::AmountNegotiatedDiscount)
        );
    }

    #[test]
    fn test_typed_access() {
        let message = remittance_transfer();
        assert_eq!(
            message.business_function_code(),
            Some(BusinessFunctionCode::CustomerTransferPlus)
        );
        assert_eq!(
            message.local_instrument_code(),
            Some(LocalInstrumentCode::RemittanceInformationStructured)
        );
        assert_eq!(
            message.segment::<Amount>().and_then(Amount::to_decimal),
            Some(Decimal::new(1_234_567, 2))
        );
        assert_eq!(
            message
                .segment::<AmountNegotiatedDiscount>()
                .and_then(|nd| nd.remittance_amount.to_decimal()),
            Some(Decimal::new(1000, 2))
        );
    }

    #[test]
    fn test_missing_segment() {
        let mut message = remittance_transfer();
        message.remove(SegmentKind::InputMessageAccountabilityData);
        let wire = write_unchecked(&message);
        let err = read(&wire).unwrap_err();
        assert_eq!(
            err.schema_error(),
            Some(&SchemaError::Missing {
                tag: "{1520}",
                reason: "mandatory in every message".to_string()
            })
        );
    }

    #[test]
    fn test_not_permitted_segment() {
        let mut message = drawdown_request();
        let mut li = LocalInstrument::new();
        li.local_instrument_code = "RMTS".to_string();
        message.set(li);

        let wire = write_unchecked(&message);
        let err = read(&wire).unwrap_err();
        assert_eq!(err.line(), Some(8));
        assert!(matches!(
            err.schema_error(),
            Some(SchemaError::NotPermitted { tag: "{3610}", .. })
        ));
    }

    #[test]
    fn test_unresolved_segment() {
        let mut message = drawdown_request();
        let mut aap = ActualAmountPaid::new();
        aap.remittance_amount.currency_code = "USD".to_string();
        aap.remittance_amount.amount = "1.00".to_string();
        message.set(aap);

        let err = read(&write_unchecked(&message)).unwrap_err();
        assert_eq!(err.line(), None);
        assert_eq!(
            err.schema_error(),
            Some(&SchemaError::NotPermitted {
                tag: "{8450}",
                reason: "requires local instrument code RMTS".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_segment() {
        let mut message = remittance_transfer();
        let mut extra = SenderReference::new();
        extra.sender_reference = "REF".to_string();
        message.push(extra.clone());
        message.push(extra);

        assert!(matches!(
            message.validate().unwrap_err().schema_error(),
            Some(SchemaError::Duplicate { tag: "{3320}" })
        ));
        let err = read(&write_unchecked(&message)).unwrap_err();
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn test_field_error_carries_line_and_tag() {
        let wire = write(&remittance_transfer(), FormatOptions::variable())
            .replace("{8450}USD1234.56*", "{8450}USD1234.56Z*");
        let err = read(&wire).unwrap_err();
        assert_eq!(err.line(), Some(11));
        assert_eq!(err.violation(), Some(&Violation::NonAmount));
        assert_eq!(
            err.segment_error().and_then(SegmentError::field),
            Some("Amount")
        );
        assert!(err.to_string().starts_with("line 11: {8450} Amount"));
    }

    #[test]
    fn test_unknown_tag() {
        let mut wire = write(&drawdown_request(), FormatOptions::fixed());
        wire.push_str("{9999}UNKNOWN\n");
        let err = read(&wire).unwrap_err();
        assert_eq!(err.line(), Some(10));
        assert!(matches!(
            err.schema_error(),
            Some(SchemaError::UnknownTag(tag)) if tag == "{9999}"
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let message = remittance_transfer();
        let json = message.to_json().unwrap();
        let back = Message::from_json(&json).unwrap();
        assert!(back.validate().is_ok());
        assert_eq!(
            write(&back, FormatOptions::variable()),
            write(&message, FormatOptions::variable())
        );
    }

    fn write_unchecked(message: &Message) -> String {
        let config = WriterConfigBuilder::new()
            .variable_length_fields()
            .validate_before_write(false)
            .build();
        let mut writer = Writer::with_config(Vec::new(), config);
        writer.write(message).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }
}
