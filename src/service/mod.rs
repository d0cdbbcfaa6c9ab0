//! Puzzle service clients
//!
//! The session engine talks to the puzzle service through the
//! [`PuzzleService`] trait. Two implementations exist: an HTTP client for the
//! real service and an in-process service backed by a known set of groups.

mod fixed;
mod http;

pub use fixed::FixedPuzzleService;
pub use http::HttpPuzzleService;

use crate::core::{GROUP_SIZE, PUZZLE_SIZE, SolvedGroup};
use crate::error::ServiceError;
use async_trait::async_trait;
use rustc_hash::FxHashSet;

/// Today's puzzle: 16 distinct words, no group labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPuzzle {
    words: Vec<String>,
}

impl DailyPuzzle {
    /// Validate a word list received from the service
    ///
    /// # Errors
    /// Returns `ServiceError::InvalidResponse` unless there are exactly 16
    /// distinct, non-empty words.
    pub fn new(words: Vec<String>) -> Result<Self, ServiceError> {
        if words.len() != PUZZLE_SIZE {
            return Err(ServiceError::InvalidResponse(format!(
                "expected {PUZZLE_SIZE} words, got {}",
                words.len()
            )));
        }

        if words.iter().any(|w| w.trim().is_empty()) {
            return Err(ServiceError::InvalidResponse("empty word".to_string()));
        }

        let distinct: FxHashSet<&str> = words.iter().map(String::as_str).collect();
        if distinct.len() != words.len() {
            return Err(ServiceError::InvalidResponse(
                "duplicate words in puzzle".to_string(),
            ));
        }

        Ok(Self { words })
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

/// Service verdict on a submitted group of four words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupCheck {
    Correct(SolvedGroup),
    Incorrect,
}

/// Remote source of the daily puzzle and guess validation
#[async_trait]
pub trait PuzzleService: Send + Sync {
    /// Fetch today's word set
    async fn fetch_today(&self) -> Result<DailyPuzzle, ServiceError>;

    /// Check whether four words form one of today's groups
    async fn check_group(&self, selection: &[String; GROUP_SIZE])
    -> Result<GroupCheck, ServiceError>;
}

/// Enum wrapper for the available services
///
/// Allows runtime selection of the service while maintaining static dispatch.
pub enum PuzzleSource {
    /// Remote puzzle service over HTTP
    Http(HttpPuzzleService),
    /// In-process puzzle (offline play)
    Fixed(FixedPuzzleService),
}

#[async_trait]
impl PuzzleService for PuzzleSource {
    async fn fetch_today(&self) -> Result<DailyPuzzle, ServiceError> {
        match self {
            Self::Http(s) => s.fetch_today().await,
            Self::Fixed(s) => s.fetch_today().await,
        }
    }

    async fn check_group(
        &self,
        selection: &[String; GROUP_SIZE],
    ) -> Result<GroupCheck, ServiceError> {
        match self {
            Self::Http(s) => s.check_group(selection).await,
            Self::Fixed(s) => s.check_group(selection).await,
        }
    }
}
