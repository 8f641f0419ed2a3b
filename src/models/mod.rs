mod batch_result;
mod transaction;

use serde::Serialize;

pub use batch_result::{BatchResult, ErrorResponse};
pub use transaction::{BatchRequest, Transaction, DEFAULT_CATEGORY, DEFAULT_DATE};

/// Which path produced a [`BatchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProcessingMode {
    #[serde(rename = "legacy-processor")]
    LegacyProcessor,
    #[serde(rename = "fallback")]
    Fallback
}
