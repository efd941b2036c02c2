//! Error types for the tokenizer library

use thiserror::Error;

/// Result type alias for tokenizer operations
pub type Result<T> = std::result::Result<T, TokenizerError>;

/// Main error type for the tokenizer library
///
/// Counting operations are total and never produce an error; this type only
/// covers configuration loading and ingestion of host payloads.
#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Message decode error: {0}")]
    MessageDecode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for TokenizerError {
    fn from(err: config::ConfigError) -> Self {
        TokenizerError::Config(err.to_string())
    }
}
