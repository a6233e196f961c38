//! Error types
//!
//! Only the edges of the crate are fallible: building words and word lists,
//! talking to a durable store, and reading configuration. Game operations
//! themselves never fail; they degrade to no-ops.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,

    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Word must contain only ASCII letters: {0:?}")]
    InvalidCharacters(String),
}

/// Errors raised while building a dictionary
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Answer list is empty")]
    NoAnswers,

    #[error("Answer '{word}' has {actual} letters but the list uses {expected}")]
    MixedLengths {
        word: String,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by a durable key-value store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StorageError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
