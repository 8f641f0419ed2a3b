
use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::level_filters::LevelFilter;

pub const DEFAULT_PROCESSOR_PATH: &str = "./transaction_processor";
pub const PROCESSOR_PATH_VARIABLE: &str = "TRANSACTION_PROCESSOR_PATH";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing input file argument")]
    MissingInput
}

/// Runtime settings for one invocation of the bridge.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input_path: PathBuf,
    pub log_level: LevelFilter,
    pub processor_path: PathBuf
}

impl Config {
    /// Reads settings from the process arguments and environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_args(env::args().skip(1), env::var(PROCESSOR_PATH_VARIABLE).ok())
    }

    /// Builds settings from positional arguments (program name already removed):
    /// `[input] [log_level:optional]`.
    pub fn from_args<I>(args: I, processor_path: Option<String>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let input_path = args.next().ok_or(ConfigError::MissingInput)?;
        let log_level = args.next()
            .map(|level| parse_log_level(&level))
            .unwrap_or(LevelFilter::ERROR);

        let processor_path = processor_path
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROCESSOR_PATH.to_string());

        Ok(Self {
            input_path: PathBuf::from(input_path),
            log_level,
            processor_path: relative_to_working_directory(PathBuf::from(processor_path))
        })
    }
}

//NOTE: A bare name would be looked up on PATH when spawned but in the working directory
//      by the availability check, so it is anchored to the working directory for both
fn relative_to_working_directory(path: PathBuf) -> PathBuf {
    if path.parent().is_some_and(|parent| parent.as_os_str().is_empty()) {
        Path::new(".").join(path)
    } else {
        path
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
