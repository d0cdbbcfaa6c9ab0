//! Error types shared across the client
//!
//! None of these are fatal: the session engine turns service errors into
//! user-visible messages and falls back to a default profile on store errors.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failure talking to the puzzle service
///
/// Distinct from an incorrect guess: a `ServiceError` never consumes a mistake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Transport failure or non-success HTTP status
    #[error("puzzle service unavailable: {0}")]
    Unavailable(String),

    /// No response within the configured limit
    #[error("puzzle service timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Response arrived but does not describe a valid puzzle or check result
    #[error("invalid response from puzzle service: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Unavailable(err.to_string())
        }
    }
}

/// Failure reading or writing the persisted profile
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("profile I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data exists but cannot be parsed
    #[error("stored profile is corrupt: {0}")]
    Corrupt(serde_json::Error),

    #[error("could not serialize profile: {0}")]
    Serialize(serde_json::Error),

    /// In-memory store configured to reject writes
    #[error("profile store rejected the write")]
    Rejected,
}

/// Failure loading a puzzle definition
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("could not read puzzle file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("puzzle must have 4 groups, got {0}")]
    WrongGroupCount(usize),

    #[error("word '{0}' appears more than once")]
    DuplicateWord(String),

    #[error("puzzle words must not be empty")]
    EmptyWord,
}
