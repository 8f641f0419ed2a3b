mod errors;
mod record;
mod response;
#[cfg(test)]
mod tests;

pub use errors::{ResponseError, WireError};
pub use record::{
    decode_batch, decode_record, encode_batch, encode_record, DecodedRecord, AMOUNT_WIDTH, CATEGORY_WIDTH, DATE_WIDTH,
    ID_WIDTH, RECORD_LENGTH
};
pub use response::{decode_response, RESPONSE_MIN_LENGTH};
