mod errors;
mod fallback;
mod input;
mod orchestrator;

pub use errors::{FallbackReason, InputError};
pub use fallback::aggregate;
pub use input::{read_csv, read_json, read_transactions};
pub use orchestrator::BatchOrchestrator;
