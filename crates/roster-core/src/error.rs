use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the roster analytics crates.
#[derive(Error, Debug)]
pub enum RosterError {
    /// The process-wide catalog was constructed a second time.
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),

    /// A query received input too degenerate to produce a meaningful result.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An image lookup missed either its context or its key.
    #[error("Image could not be found: {context}/{key}")]
    NotFound { context: String, key: String },

    /// A list assumed to be non-empty was empty.
    #[error("Missing data: {0}")]
    MissingData(String),

    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the roster crates.
pub type Result<T> = std::result::Result<T, RosterError>;
