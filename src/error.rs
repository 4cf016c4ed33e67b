//! Error types.
//!
//! Errors are grouped by the layer that raises them: configuration,
//! the parameter store pipeline, and the output sinks.

use thiserror::Error;

/// Top-level error returned by every fallible operation in the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Configuration errors. These are fatal and raised before the pipeline runs.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no prefix was specified with the option: `{0}`")]
    MissingPrefix(&'static str),

    #[error("prefix must not be empty")]
    EmptyPrefix,

    #[error("invalid batch size {value}: must be between 1 and {max}")]
    InvalidBatchSize { value: usize, max: usize },

    #[error("invalid concurrency {0}: must be at least 1")]
    InvalidConcurrency(usize),

    #[error("invalid value for {var}: {value:?} is not a number")]
    InvalidNumber { var: &'static str, value: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Parameter store and pipeline errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A listing or fetch call against the store failed.
    #[error("parameter store unavailable ({operation}): {message}")]
    Unavailable {
        operation: &'static str,
        message: String,
    },

    /// One batch failed; the whole retrieval fails with it.
    #[error("batch {index} failed: {source}")]
    BatchFailed {
        index: usize,
        #[source]
        source: Box<StoreError>,
    },

    #[error("retrieval cancelled")]
    Cancelled,

    #[error("retrieval timed out after {0:?}")]
    TimedOut(std::time::Duration),

    #[error("fetch task failed: {0}")]
    TaskFailed(String),

    #[error("failed to read store file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse store file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl StoreError {
    /// Shorthand for an [`StoreError::Unavailable`] built from any displayable error.
    pub fn unavailable(operation: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Unavailable {
            operation,
            message: err.to_string(),
        }
    }
}

/// Errors from the env file writer and the exec runner.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("no command specified")]
    NoCommand,

    #[error("command not found: {0}")]
    CommandNotFound(String),

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Environment variable names that cannot be exported.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("environment variable name cannot be empty")]
    EmptyKey,

    #[error("invalid environment variable name '{key}': {reason}")]
    InvalidKey { key: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
