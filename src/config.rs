//! Client configuration
//!
//! Resolved from CLI flags and environment in `main`, then used to build the
//! puzzle service, the profile store, and the session engine.

use crate::error::PuzzleError;
use crate::puzzles::{loader, sample_groups};
use crate::service::{FixedPuzzleService, HttpPuzzleService, PuzzleSource};
use crate::session::SessionEngine;
use crate::store::JsonFileStore;
use std::path::PathBuf;
use std::time::Duration;

/// Puzzle service used when no URL is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Seconds to wait for the puzzle service before giving up
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Application directory name under the platform data directory
pub const APP_DIR: &str = "gridconnect";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the puzzle service
    pub api_url: String,
    /// Play the embedded sample puzzle instead of calling the service
    pub offline: bool,
    /// Play a puzzle from this file instead of calling the service
    pub puzzle_file: Option<PathBuf>,
    /// Location of the persisted profile
    pub profile_path: PathBuf,
    /// Service call timeout in seconds; 0 waits forever
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            offline: false,
            puzzle_file: None,
            profile_path: default_data_dir().join("profile.json"),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }

    /// Build the configured puzzle service
    ///
    /// # Errors
    ///
    /// Returns an error if a puzzle file is configured but cannot be loaded.
    pub fn build_service(&self) -> Result<PuzzleSource, PuzzleError> {
        if let Some(path) = &self.puzzle_file {
            let groups = loader::load_from_file(path)?;
            return Ok(PuzzleSource::Fixed(FixedPuzzleService::new(groups)?));
        }

        if self.offline {
            return Ok(PuzzleSource::Fixed(FixedPuzzleService::new(sample_groups())?));
        }

        Ok(PuzzleSource::Http(HttpPuzzleService::new(&self.api_url)))
    }

    #[must_use]
    pub fn build_store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.profile_path)
    }

    /// Build a session engine wired to the configured service and store
    ///
    /// # Errors
    ///
    /// Returns an error if the puzzle service cannot be built.
    pub fn build_engine(&self) -> Result<SessionEngine<PuzzleSource, JsonFileStore>, PuzzleError> {
        Ok(SessionEngine::new(self.build_service()?, self.build_store())
            .with_timeout(self.request_timeout()))
    }
}

/// Platform data directory for GridConnect files
///
/// Falls back to the working directory when the platform has none.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}
