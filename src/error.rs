//! Error types for vocabvoice

use std::io;
use thiserror::Error;

/// Main error type for vocabvoice
#[derive(Error, Debug)]
pub enum VocabError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("Audio playback error: {0}")]
    Audio(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("INI parse error: {0}")]
    IniParse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown pronunciation mode: {0}")]
    UnknownMode(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for vocabvoice operations
pub type Result<T> = std::result::Result<T, VocabError>;

impl From<String> for VocabError {
    fn from(s: String) -> Self {
        VocabError::Other(s)
    }
}

impl From<&str> for VocabError {
    fn from(s: &str) -> Self {
        VocabError::Other(s.to_string())
    }
}
