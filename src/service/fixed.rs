//! In-process puzzle service backed by a known set of groups

use super::{DailyPuzzle, GroupCheck, PuzzleService};
use crate::core::{GROUP_SIZE, SolvedGroup};
use crate::error::{PuzzleError, ServiceError};
use crate::puzzles::validate_groups;
use async_trait::async_trait;

/// Serves a single puzzle and validates guesses against its groups
///
/// Used for offline play and as a collaborator in tests.
#[derive(Debug, Clone)]
pub struct FixedPuzzleService {
    groups: Vec<SolvedGroup>,
}

impl FixedPuzzleService {
    /// Create a service for the given groups
    ///
    /// # Errors
    /// Returns `PuzzleError` unless there are exactly four groups whose
    /// sixteen words are distinct and non-empty.
    pub fn new(groups: Vec<SolvedGroup>) -> Result<Self, PuzzleError> {
        validate_groups(&groups)?;
        Ok(Self { groups })
    }

    #[must_use]
    pub fn groups(&self) -> &[SolvedGroup] {
        &self.groups
    }
}

#[async_trait]
impl PuzzleService for FixedPuzzleService {
    async fn fetch_today(&self) -> Result<DailyPuzzle, ServiceError> {
        let words = self
            .groups
            .iter()
            .flat_map(|g| g.words().iter().cloned())
            .collect();
        DailyPuzzle::new(words)
    }

    async fn check_group(
        &self,
        selection: &[String; GROUP_SIZE],
    ) -> Result<GroupCheck, ServiceError> {
        Ok(self
            .groups
            .iter()
            .find(|g| g.matches(selection))
            .map_or(GroupCheck::Incorrect, |g| GroupCheck::Correct(g.clone())))
    }
}
