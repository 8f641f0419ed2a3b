use crate::models::Transaction;
use crate::types::{decode_packed, encode_packed, Cents, TransactionId};
use crate::wire::errors::WireError;

pub const ID_WIDTH: usize = 5;
pub const AMOUNT_WIDTH: usize = 8;
pub const CATEGORY_WIDTH: usize = 20;
pub const DATE_WIDTH: usize = 26;
pub const RECORD_LENGTH: usize = ID_WIDTH + AMOUNT_WIDTH + CATEGORY_WIDTH + DATE_WIDTH;

const AMOUNT_OFFSET: usize = ID_WIDTH;
const CATEGORY_OFFSET: usize = AMOUNT_OFFSET + AMOUNT_WIDTH;
const DATE_OFFSET: usize = CATEGORY_OFFSET + CATEGORY_WIDTH;

/// A processor record read back into its typed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRecord {
    pub id: TransactionId,
    pub amount_cents: Cents,
    pub category: String,
    pub date: String
}

/// Builds the fixed-width record for the transaction at `position` (0-based).
///
/// Layout, 59 bytes in total:
/// - identifier, 5 byte packed decimal (`S9(9)`)
/// - amount in cents, 8 byte packed decimal (`S9(13)V99`)
/// - category, 20 bytes of text, space padded or truncated
/// - date, 26 bytes of text, space padded or truncated
///
/// # Errors
/// Returns a `WireError` if the identifier or amount overflows its packed field.
pub fn encode_record(position: usize, transaction: &Transaction) -> Result<Vec<u8>, WireError> {
    let mut record = Vec::with_capacity(RECORD_LENGTH);

    let id = transaction.id_or_position(position);
    let packed_id = encode_packed(id, ID_WIDTH)
        .map_err(|source| WireError::field(position, "id", source))?;
    record.extend_from_slice(&packed_id);

    let cents = transaction.amount_in_cents()
        .ok_or(WireError::AmountOutOfRange { position })?;
    let packed_amount = encode_packed(cents, AMOUNT_WIDTH)
        .map_err(|source| WireError::field(position, "amount", source))?;
    record.extend_from_slice(&packed_amount);

    push_text(&mut record, transaction.category_or_default(), CATEGORY_WIDTH);
    push_text(&mut record, transaction.date_or_default(), DATE_WIDTH);

    Ok(record)
}

/// Concatenates the records of every transaction in input order.
///
/// Fails as a whole on the first record that cannot be encoded.
pub fn encode_batch(transactions: &[Transaction]) -> Result<Vec<u8>, WireError> {
    let mut buffer = Vec::with_capacity(transactions.len() * RECORD_LENGTH);

    for (position, transaction) in transactions.iter().enumerate() {
        buffer.extend_from_slice(&encode_record(position, transaction)?);
    }

    Ok(buffer)
}

pub fn decode_record(position: usize, record: &[u8]) -> Result<DecodedRecord, WireError> {
    if record.len() != RECORD_LENGTH {
        return Err(WireError::RecordLength { position, length: record.len() });
    }

    let id = decode_packed(&record[..AMOUNT_OFFSET])
        .map_err(|source| WireError::field(position, "id", source))?;
    let amount_cents = decode_packed(&record[AMOUNT_OFFSET..CATEGORY_OFFSET])
        .map_err(|source| WireError::field(position, "amount", source))?;

    Ok(DecodedRecord {
        id,
        amount_cents,
        category: read_text(&record[CATEGORY_OFFSET..DATE_OFFSET]),
        date: read_text(&record[DATE_OFFSET..])
    })
}

/// Splits a record buffer back into records. The buffer carries no delimiters,
/// so its length must be an exact multiple of [`RECORD_LENGTH`].
pub fn decode_batch(buffer: &[u8]) -> Result<Vec<DecodedRecord>, WireError> {
    if buffer.len() % RECORD_LENGTH != 0 {
        return Err(WireError::Misaligned(buffer.len()));
    }

    buffer.chunks_exact(RECORD_LENGTH)
        .enumerate()
        .map(|(position, record)| decode_record(position, record))
        .collect()
}

fn push_text(record: &mut Vec<u8>, value: &str, width: usize) {
    let bytes = value.as_bytes();
    let kept = &bytes[..bytes.len().min(width)];

    record.extend_from_slice(kept);
    record.resize(record.len() + (width - kept.len()), b' ');
}

fn read_text(field: &[u8]) -> String {
    String::from_utf8_lossy(field).trim_end_matches(' ').to_string()
}
