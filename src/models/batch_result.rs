use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::ProcessingMode;

const CURRENCY_SCALE: u32 = 2;

/// Aggregate totals for one batch.
///
/// `total_amount` is serialized as a decimal string so that cents survive the
/// transport boundary exactly. It always carries at least two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub processed_transactions: u64,
    pub total_amount: Decimal,
    pub processing_mode: ProcessingMode
}

impl BatchResult {
    pub fn new(processed_transactions: u64, mut total_amount: Decimal, processing_mode: ProcessingMode) -> Self {
        if total_amount.scale() < CURRENCY_SCALE {
            total_amount.rescale(CURRENCY_SCALE);
        }

        Self {
            processed_transactions,
            total_amount,
            processing_mode
        }
    }
}

/// Response body for a request that could not be processed at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, details: Option<String>) -> Self {
        Self {
            error: error.into(),
            details
        }
    }
}
