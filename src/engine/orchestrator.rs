use tracing::{debug, info, warn};

use crate::engine::errors::FallbackReason;
use crate::engine::fallback::aggregate;
use crate::models::{BatchResult, Transaction};
use crate::processor::{Processor, ProcessorOutput};
use crate::wire::{decode_response, encode_batch};

/// One step of a batch run.
///
/// `CheckAvailability -> Marshal -> Invoke -> Decode -> Done` is the processor path.
/// Any failure along it moves to `Fallback`, which always ends in `Done`.
#[derive(Debug)]
pub(crate) enum BatchState {
    CheckAvailability,
    Marshal,
    Invoke(Vec<u8>),
    Decode(ProcessorOutput),
    Fallback(FallbackReason),
    Done(BatchResult)
}

/// Drives a batch through the external processor, degrading to in-process
/// aggregation whenever the processor path fails.
pub struct BatchOrchestrator<P: Processor> {
    processor: P
}

impl<P: Processor> BatchOrchestrator<P> {
    pub fn new(processor: P) -> Self {
        Self {
            processor
        }
    }

    pub fn processor(&self) -> &P {
        &self.processor
    }

    /// Processes one batch. Each state is visited at most once and nothing is retried.
    pub async fn process(&self, transactions: &[Transaction]) -> BatchResult {
        let mut state = BatchState::CheckAvailability;

        loop {
            state = match state {
                BatchState::Done(result) => return result,
                state => self.step(state, transactions).await
            };
        }
    }

    pub(crate) async fn step(&self, state: BatchState, transactions: &[Transaction]) -> BatchState {
        match state {
            BatchState::CheckAvailability => {
                if self.processor.is_available() {
                    BatchState::Marshal
                } else {
                    BatchState::Fallback(FallbackReason::Unavailable)
                }
            },
            BatchState::Marshal => match encode_batch(transactions) {
                Ok(buffer) => {
                    debug!("Marshalled {} transactions into {} bytes", transactions.len(), buffer.len());
                    BatchState::Invoke(buffer)
                },
                Err(error) => {
                    if error.is_overflow() {
                        warn!("A record overflowed its packed field, the whole batch skips the processor");
                    }

                    BatchState::Fallback(error.into())
                }
            },
            BatchState::Invoke(buffer) => match self.processor.invoke(&buffer).await {
                Ok(output) if output.succeeded() => BatchState::Decode(output),
                Ok(output) => BatchState::Fallback(FallbackReason::non_zero_exit(&output)),
                Err(error) => BatchState::Fallback(error.into())
            },
            BatchState::Decode(output) => match decode_response(&output.stdout) {
                Ok(result) => {
                    if result.processed_transactions != transactions.len() as u64 {
                        warn!(
                            "Processor reported {} transactions for a batch of {}",
                            result.processed_transactions,
                            transactions.len()
                        );
                    }

                    info!("Batch processed by the legacy processor");
                    BatchState::Done(result)
                },
                Err(error) => BatchState::Fallback(error.into())
            },
            BatchState::Fallback(reason) => {
                warn!("Falling back to in-process aggregation: {reason}");

                if let FallbackReason::NonZeroExit { raw_output, .. } = &reason {
                    debug!("Processor output before failure: [{raw_output}]");
                }

                BatchState::Done(aggregate(transactions))
            },
            BatchState::Done(result) => BatchState::Done(result)
        }
    }
}
