mod errors;
mod packed;

pub use errors::PackedDecimalError;
pub use packed::{decode_packed, digit_capacity, encode_packed};

pub type TransactionId = i64;
pub type Cents = i64;
