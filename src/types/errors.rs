use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackedDecimalError {
    #[error("Packed decimal error: {value} needs more than {capacity} digits for a {width} byte field")]
    Overflow {
        value: i64,
        width: usize,
        capacity: usize
    },
    #[error("Packed decimal error: {0}")]
    MalformedData(String)
}
