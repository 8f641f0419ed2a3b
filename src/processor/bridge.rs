use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::join;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::processor::availability::exists_and_executable;
use crate::processor::errors::ProcessorError;
use crate::processor::{Processor, ProcessorOutput};

/// The external processor executable, invoked without arguments.
#[derive(Debug, Clone)]
pub struct ExternalProcessor {
    path: PathBuf
}

impl ExternalProcessor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into()
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Spawns the processor, pipes `input` to it and collects its output.
    ///
    /// Input is written while stdout and stderr are drained, so neither side can
    /// stall on a full pipe regardless of how much either writes. The child is
    /// killed if this future is dropped before it finishes.
    ///
    /// # Errors
    /// Returns `ProcessorError::Spawn` if the executable could not be launched and
    /// `ProcessorError::Io` if its streams or exit status could not be read.
    pub async fn run(&self, input: &[u8]) -> Result<ProcessorOutput, ProcessorError> {
        debug!("Spawning processor [{}] with {} input bytes", self.path().display(), input.len());

        let mut child = Command::new(self.path())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ProcessorError::Spawn {
                path: self.path().display().to_string(),
                source
            })?;

        let mut stdin = child.stdin.take().ok_or(ProcessorError::StdinUnavailable)?;

        let feed = async move {
            let written = stdin.write_all(input).await;
            //NOTE: Dropping the handle closes the pipe, which is the child's end-of-input signal
            drop(stdin);
            written
        };

        let (written, output) = join!(feed, child.wait_with_output());
        let output = output?;

        match written {
            Ok(()) => {},
            Err(error) if error.kind() == ErrorKind::BrokenPipe => {
                warn!("Processor [{}] closed its input before reading the whole batch", self.path().display());
            },
            Err(error) => return Err(ProcessorError::Io(error))
        }

        debug!(
            "Processor [{}] exited with {:?}, {} stdout bytes, {} stderr bytes",
            self.path().display(),
            output.status.code(),
            output.stdout.len(),
            output.stderr.len()
        );

        Ok(ProcessorOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            exit_code: output.status.code()
        })
    }
}

impl Processor for ExternalProcessor {
    fn is_available(&self) -> bool {
        exists_and_executable(self.path())
    }

    async fn invoke(&self, input: &[u8]) -> Result<ProcessorOutput, ProcessorError> {
        self.run(input).await
    }
}
