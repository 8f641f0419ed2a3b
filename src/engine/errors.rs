use std::io;

use thiserror::Error;

use crate::models::ErrorResponse;
use crate::processor::{ProcessorError, ProcessorOutput};
use crate::wire::{ResponseError, WireError};

/// Why a batch left the processor path. Every reason ends in fallback aggregation,
/// none of them reach the caller.
#[derive(Debug, Error)]
pub enum FallbackReason {
    #[error("Processor is not available")]
    Unavailable,
    #[error("Batch could not be marshalled: {0}")]
    Marshal(#[from] WireError),
    #[error("Processor could not be invoked: {0}")]
    Invoke(#[from] ProcessorError),
    #[error("Processor exited with status {exit_code:?}: {stderr}")]
    NonZeroExit {
        exit_code: Option<i32>,
        stderr: String,
        raw_output: String
    },
    #[error("Processor response was rejected: {0}")]
    Decode(#[from] ResponseError)
}

impl FallbackReason {
    pub fn non_zero_exit(output: &ProcessorOutput) -> Self {
        Self::NonZeroExit {
            exit_code: output.exit_code,
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            raw_output: String::from_utf8_lossy(&output.stdout).trim_end().to_string()
        }
    }
}

/// The inbound batch could not be read. This is the only error a caller sees.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to open input [{path}]: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error
    },
    #[error("Invalid JSON request: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid CSV request: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid amount [{value}] in CSV row [{row}]")]
    Amount {
        row: usize,
        value: String
    }
}

impl From<&InputError> for ErrorResponse {
    fn from(error: &InputError) -> Self {
        let summary = match error {
            InputError::Open { .. } => "Failed to read transactions.",
            InputError::Json(_) => "Invalid JSON request.",
            InputError::Csv(_) | InputError::Amount { .. } => "Invalid CSV format."
        };

        ErrorResponse::new(summary, Some(error.to_string()))
    }
}
