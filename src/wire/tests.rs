use super::{
    decode_batch, decode_record, decode_response, encode_batch, encode_record, ResponseError, WireError, RECORD_LENGTH
};

use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::models::{ProcessingMode, Transaction, DEFAULT_CATEGORY, DEFAULT_DATE};

fn create_transaction(id: Option<i64>, amount: &str, category: &str, date: &str) -> Result<Transaction> {
    Ok(Transaction {
        id,
        amount: Some(Decimal::from_str(amount)?),
        category: Some(category.to_string()),
        transaction_date: Some(date.to_string())
    })
}

#[test]
fn test_record_matches_fixed_layout_byte_for_byte() -> Result<()> {
    let transaction = create_transaction(Some(1), "10.50", "FOOD", "2024-01-01")?;
    let record = encode_record(0, &transaction)?;

    let mut expected = vec![0x00, 0x00, 0x00, 0x00, 0x1C];
    expected.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x05, 0x0C]);
    expected.extend_from_slice(b"FOOD                ");
    expected.extend_from_slice(b"2024-01-01                ");

    assert_eq!(record.len(), RECORD_LENGTH);
    assert_eq!(record, expected);

    Ok(())
}

#[test]
fn test_negative_amount_carries_negative_sign_nibble() -> Result<()> {
    let record = encode_record(0, &create_transaction(Some(7), "-2.05", "REFUND", "2024-02-01")?)?;

    assert_eq!(&record[5..13], &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x5D]);

    Ok(())
}

#[test]
fn test_long_text_fields_are_truncated_to_width() -> Result<()> {
    let category = "ENTERTAINMENT-AND-LEISURE";
    let date = "2024-01-01T12:34:56.789012+00:00";
    let record = encode_record(0, &create_transaction(Some(1), "1", category, date)?)?;

    assert_eq!(record.len(), RECORD_LENGTH);
    assert_eq!(&record[13..33], &category.as_bytes()[..20]);
    assert_eq!(&record[33..59], &date.as_bytes()[..26]);

    Ok(())
}

#[test]
fn test_empty_text_fields_are_all_spaces() -> Result<()> {
    let record = encode_record(0, &create_transaction(Some(1), "1", "", "")?)?;

    assert!(record[13..].iter().all(|byte| *byte == b' '));

    Ok(())
}

#[test]
fn test_missing_fields_use_positional_id_and_sentinels() -> Result<()> {
    let records = decode_batch(&encode_batch(&[Transaction::default(), Transaction::default()])?)?;

    assert_eq!(records[0].id, 1);
    assert_eq!(records[1].id, 2);
    assert_eq!(records[1].amount_cents, 0);
    assert_eq!(records[1].category, DEFAULT_CATEGORY);
    assert_eq!(records[1].date, DEFAULT_DATE);

    Ok(())
}

#[test]
fn test_identifier_overflow_is_reported_not_truncated() -> Result<()> {
    let transaction = create_transaction(Some(1_000_000_000), "1", "FOOD", "2024-01-01")?;
    let result = encode_record(3, &transaction);

    assert!(matches!(result, Err(WireError::Field { position: 3, field: "id", .. })));
    assert!(result.err().is_some_and(|error| error.is_overflow()));

    Ok(())
}

#[test]
fn test_amount_overflow_fails_the_whole_batch() -> Result<()> {
    let transactions = vec![
        create_transaction(Some(1), "10.00", "FOOD", "2024-01-01")?,
        create_transaction(Some(2), "10000000000000.00", "HOUSING", "2024-01-01")?
    ];
    let result = encode_batch(&transactions);

    assert!(matches!(result, Err(WireError::Field { position: 1, field: "amount", .. })));

    Ok(())
}

#[test]
fn test_empty_batch_produces_empty_buffer() -> Result<()> {
    assert!(encode_batch(&[])?.is_empty());

    Ok(())
}

#[test]
fn test_batch_preserves_identifiers_and_cents_in_order() -> Result<()> {
    let transactions = vec![
        create_transaction(Some(30), "1.01", "A", "2024-01-01")?,
        create_transaction(Some(10), "-99.99", "B", "2024-01-02")?,
        create_transaction(Some(20), "9999999999999.99", "C", "2024-01-03")?
    ];
    let buffer = encode_batch(&transactions)?;
    let records = decode_batch(&buffer)?;

    assert_eq!(buffer.len(), 3 * RECORD_LENGTH);
    assert_eq!(records.iter().map(|record| record.id).collect::<Vec<_>>(), vec![30, 10, 20]);
    assert_eq!(records.iter().map(|record| record.amount_cents).collect::<Vec<_>>(), vec![101, -9999, 999_999_999_999_999]);
    assert_eq!(records[1].category, "B");

    Ok(())
}

#[test]
fn test_decode_batch_rejects_partial_records() {
    assert!(matches!(decode_batch(&[b' '; RECORD_LENGTH + 1]), Err(WireError::Misaligned(60))));
    assert!(matches!(decode_record(0, &[b' '; 10]), Err(WireError::RecordLength { length: 10, .. })));
}

#[test]
fn test_decode_record_rejects_corrupt_packed_field() {
    let mut record = [b' '; RECORD_LENGTH];
    record[..5].copy_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x1C]);

    assert!(matches!(decode_record(0, &record), Err(WireError::Field { field: "amount", .. })));
}

#[test]
fn test_response_decodes_count_and_cents() -> Result<()> {
    let result = decode_response(b"00000001 000000000001050")?;

    assert_eq!(result.processed_transactions, 1);
    assert_eq!(result.total_amount, Decimal::from_str("10.50")?);
    assert_eq!(result.total_amount.to_string(), "10.50");
    assert_eq!(result.processing_mode, ProcessingMode::LegacyProcessor);

    Ok(())
}

#[test]
fn test_response_accepts_trailing_padding_and_signed_amounts() -> Result<()> {
    let result = decode_response(b"3       ,-1050          \n")?;

    assert_eq!(result.processed_transactions, 3);
    assert_eq!(result.total_amount, Decimal::from_str("-10.50")?);

    Ok(())
}

#[test]
fn test_response_filler_byte_is_ignored() -> Result<()> {
    assert_eq!(decode_response(b"00000002X000000000000200")?.total_amount, Decimal::from_str("2.00")?);

    Ok(())
}

#[test]
fn test_short_response_is_malformed() {
    for length in 0..24 {
        let output = vec![b'0'; length];

        assert_eq!(decode_response(&output), Err(ResponseError::TooShort { expected: 24, received: length }));
    }
}

#[test]
fn test_non_numeric_fields_are_malformed() {
    assert!(matches!(
        decode_response(b"0000000A 000000000001050"),
        Err(ResponseError::InvalidField { field: "count", .. })
    ));
    assert!(matches!(
        decode_response(b"-0000001 000000000001050"),
        Err(ResponseError::InvalidField { field: "count", .. })
    ));
    assert!(matches!(
        decode_response(b"00000001 00000000000X050"),
        Err(ResponseError::InvalidField { field: "amount", .. })
    ));
    assert!(matches!(
        decode_response(&[0xFF; 24]),
        Err(ResponseError::InvalidField { field: "count", .. })
    ));
}
