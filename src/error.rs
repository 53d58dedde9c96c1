// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorkflowError>;

#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingInput(Vec<String>),

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: String,
        min: u32,
        max: u32,
    },

    #[error("Invalid {field}: {message}")]
    InvalidInput { field: String, message: String },

    #[error("Unsupported file type for {path}: accepted extensions are {accepted}")]
    UnsupportedFile { path: PathBuf, accepted: String },

    #[error("Unknown contract type: {0}")]
    UnknownContractType(String),

    #[error("Unknown change id: {0}")]
    UnknownChange(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl WorkflowError {
    pub fn missing<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingInput(fields.into_iter().map(Into::into).collect())
    }

    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput(_))
    }
}

impl From<serde_json::Error> for WorkflowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
