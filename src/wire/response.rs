use std::ops::Range;
use std::str::{from_utf8, FromStr};

use rust_decimal::Decimal;

use crate::models::{BatchResult, ProcessingMode};
use crate::wire::errors::ResponseError;

pub const RESPONSE_MIN_LENGTH: usize = 24;

const COUNT_FIELD: Range<usize> = 0..8;
//NOTE: Byte 8 is filler between the two fields and is never inspected
const AMOUNT_FIELD: Range<usize> = 9..24;

/// Parses the processor's fixed-width response block into batch totals.
///
/// Bytes `[0, 8)` hold the transaction count and bytes `[9, 24)` the signed total
/// in cents. Anything past byte 24 is ignored.
///
/// # Errors
/// Returns `ResponseError` if fewer than 24 bytes were received or either field
/// is not a number of the expected kind. No partial result is ever produced.
pub fn decode_response(output: &[u8]) -> Result<BatchResult, ResponseError> {
    if output.len() < RESPONSE_MIN_LENGTH {
        return Err(ResponseError::TooShort {
            expected: RESPONSE_MIN_LENGTH,
            received: output.len()
        });
    }

    let count: u64 = parse_field(&output[COUNT_FIELD], "count")?;
    let cents: i64 = parse_field(&output[AMOUNT_FIELD], "amount")?;

    Ok(BatchResult::new(count, Decimal::new(cents, 2), ProcessingMode::LegacyProcessor))
}

fn parse_field<T: FromStr>(bytes: &[u8], field: &'static str) -> Result<T, ResponseError> {
    let invalid = || ResponseError::InvalidField {
        field,
        raw: String::from_utf8_lossy(bytes).to_string()
    };

    let text = from_utf8(bytes).map_err(|_| invalid())?;

    text.trim_end().parse().map_err(|_| invalid())
}
