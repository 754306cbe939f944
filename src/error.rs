//! Error types.
//!
//! Errors are grouped by pipeline stage and wrapped by [`Error`]. Every error
//! is fatal to the invocation; `main` maps it to an exit code with
//! [`Error::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

use crate::core::format::Format;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Serialization(#[from] SerializationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// | code | meaning                              |
    /// |------|--------------------------------------|
    /// | 1    | I/O failure writing the payload      |
    /// | 2    | bad configuration or format          |
    /// | 3    | secret could not be retrieved        |
    /// | 4    | secret is not a flat string object  |
    /// | 5    | payload could not be rendered        |
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Io(_) => 1,
            Error::Config(_) | Error::Format(_) => 2,
            Error::Retrieval(_) => 3,
            Error::Parse(_) => 4,
            Error::Serialization(_) => 5,
        }
    }
}

/// Failures talking to the secret store.
#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("error retrieving the secret from {secret}: {reason}")]
    Request { secret: String, reason: String },

    #[error("secret {secret} has no string value (binary secrets are not supported)")]
    NotAString { secret: String },

    #[error("failed to read secret from {}: {source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start async runtime: {0}")]
    Runtime(String),

    #[error("{0} support is not compiled in (rebuild with the `aws` feature)")]
    BackendUnavailable(&'static str),
}

/// The retrieved text is not a flat JSON object of strings.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("there was an error reading the collected secret: {0}")]
    Json(#[source] serde_json::Error),
}

/// Requested output format is not recognized.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("the format {0:?} is not supported (supported: {list})", list = Format::names())]
    Unsupported(String),
}

/// Failure rendering a mapping in a supported format.
#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("failed to render json: {0}")]
    Json(#[source] serde_json::Error),

    #[error("failed to render yaml: {0}")]
    Yaml(#[source] serde_yaml::Error),

    #[error("key {key:?} is not a valid variable name for {format} output")]
    InvalidKey { key: String, format: &'static str },

    #[error("rendered dotenv text could not be read back: {0}")]
    Dotenv(#[source] dotenvy::Error),

    #[error("value of {key} did not survive the dotenv round trip")]
    RoundTrip { key: String },
}

/// Configuration file problems.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[source] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
