use crate::types::errors::PackedDecimalError;
use std::iter::once;

const SIGN_POSITIVE: u8 = 0x0C;
const SIGN_NEGATIVE: u8 = 0x0D;

/// Number of decimal digits a packed field of `width` bytes can hold.
///
/// Every byte carries two nibbles and the last nibble is reserved for the sign.
pub fn digit_capacity(width: usize) -> usize {
    (width * 2).saturating_sub(1)
}

/// Packs a signed integer into `width` bytes of COMP-3 packed decimal.
///
/// Digits are stored most significant first, two per byte, with the sign flag
/// in the low nibble of the final byte (`0xC` for non-negative, `0xD` for negative).
/// For example `12345` in three bytes becomes `[0x12, 0x34, 0x5C]`.
///
/// # Errors
/// Returns `PackedDecimalError::Overflow` if the magnitude has more digits than
/// the field can hold. Values are never silently truncated.
pub fn encode_packed(value: i64, width: usize) -> Result<Vec<u8>, PackedDecimalError> {
    let capacity = digit_capacity(width);
    let digits = value.unsigned_abs().to_string();

    if digits.len() > capacity {
        return Err(PackedDecimalError::Overflow { value, width, capacity });
    }

    let sign = if value < 0 { SIGN_NEGATIVE } else { SIGN_POSITIVE };
    let padded = format!("{digits:0>capacity$}");

    let nibbles: Vec<u8> = padded.bytes()
        .map(|digit| digit - b'0')
        .chain(once(sign))
        .collect();

    Ok(nibbles.chunks_exact(2).map(|pair| (pair[0] << 4) | pair[1]).collect())
}

/// Unpacks a COMP-3 field produced by [`encode_packed`].
///
/// # Errors
/// Returns `PackedDecimalError::MalformedData` if the field is empty, the sign
/// nibble is neither `0xC` nor `0xD`, a digit nibble exceeds 9, or the value
/// does not fit in an `i64`.
pub fn decode_packed(bytes: &[u8]) -> Result<i64, PackedDecimalError> {
    let Some((&last, body)) = bytes.split_last() else {
        return Err(PackedDecimalError::MalformedData("Field is empty".to_string()));
    };

    let is_negative = match last & 0x0F {
        SIGN_POSITIVE => false,
        SIGN_NEGATIVE => true,
        other => {
            return Err(PackedDecimalError::MalformedData(format!("Invalid sign nibble 0x{other:X}")))
        }
    };

    let digits = body.iter()
        .flat_map(|byte| [byte >> 4, byte & 0x0F])
        .chain(once(last >> 4));

    let mut magnitude: u64 = 0;

    for digit in digits {
        if digit > 9 {
            return Err(PackedDecimalError::MalformedData(format!("Invalid digit nibble 0x{digit:X}")));
        }

        magnitude = magnitude.checked_mul(10)
            .and_then(|value| value.checked_add(u64::from(digit)))
            .ok_or_else(|| PackedDecimalError::MalformedData("Value exceeds the 64-bit range".to_string()))?;
    }

    let signed = if is_negative { -i128::from(magnitude) } else { i128::from(magnitude) };

    i64::try_from(signed)
        .map_err(|_| PackedDecimalError::MalformedData("Value exceeds the 64-bit range".to_string()))
}
