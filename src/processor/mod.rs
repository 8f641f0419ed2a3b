mod availability;
mod bridge;
mod errors;

use std::future::Future;

pub use availability::exists_and_executable;
pub use bridge::ExternalProcessor;
pub use errors::ProcessorError;

/// Everything the processor produced during one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessorOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// `None` when the child was terminated by a signal.
    pub exit_code: Option<i32>
}

impl ProcessorOutput {
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// A spawn-and-pipe capability: feed a record buffer to the processor and
/// collect whatever it writes back.
///
/// Implementations perform exactly one attempt per call. A non-zero exit status
/// is reported through [`ProcessorOutput::exit_code`], not as an error.
pub trait Processor: Send + Sync {
    fn is_available(&self) -> bool;

    fn invoke(&self, input: &[u8]) -> impl Future<Output = Result<ProcessorOutput, ProcessorError>> + Send;
}
