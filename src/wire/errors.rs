use thiserror::Error;

use crate::types::PackedDecimalError;

/// Errors raised while converting transactions to and from processor records.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("Record [{position}] field [{field}]: {source}")]
    Field {
        position: usize,
        field: &'static str,
        #[source]
        source: PackedDecimalError
    },
    #[error("Record [{position}] amount does not fit in 64-bit cents")]
    AmountOutOfRange {
        position: usize
    },
    #[error("Record [{position}] is {length} bytes long")]
    RecordLength {
        position: usize,
        length: usize
    },
    #[error("Record buffer of {0} bytes is not a whole number of records")]
    Misaligned(usize)
}

impl WireError {
    pub fn field(position: usize, field: &'static str, source: PackedDecimalError) -> Self {
        Self::Field { position, field, source }
    }

    /// Whether the error came from a value too large for its packed field.
    pub fn is_overflow(&self) -> bool {
        matches!(
            self,
            Self::AmountOutOfRange { .. } | Self::Field { source: PackedDecimalError::Overflow { .. }, .. }
        )
    }
}

/// The processor's output did not match the fixed response layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResponseError {
    #[error("Malformed processor output: expected at least {expected} bytes, received {received}")]
    TooShort {
        expected: usize,
        received: usize
    },
    #[error("Malformed processor output: {field} field [{raw}] is not a valid number")]
    InvalidField {
        field: &'static str,
        raw: String
    }
}
