use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("Failed to spawn processor [{path}]: {source}")]
    Spawn {
        path: String,
        #[source]
        source: io::Error
    },
    #[error("Processor input stream was not captured")]
    StdinUnavailable,
    #[error("Processor I/O failed: {0}")]
    Io(#[from] io::Error)
}
