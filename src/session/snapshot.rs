//! Read-only view of a session for presentation

use super::SessionStatus;
use crate::core::{GROUP_SIZE, SolvedGroup};

/// Everything a front end needs to draw the current session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub status: SessionStatus,
    /// A service call is outstanding
    pub busy: bool,
    /// Unsolved words in display order
    pub words: Vec<String>,
    /// Selected words in pick order
    pub selection: Vec<String>,
    /// Solved groups in solve order
    pub solved: Vec<SolvedGroup>,
    pub mistakes_remaining: u8,
    pub message: String,
    /// Set by an incorrect guess, cleared by the next intent
    pub shake: bool,
    pub score: u32,
    pub streak: u32,
}

impl Snapshot {
    #[must_use]
    pub fn is_selected(&self, word: &str) -> bool {
        self.selection.iter().any(|w| w == word)
    }

    /// Submit is meaningful only with four words selected in a live session
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.status == SessionStatus::InProgress && !self.busy && self.selection.len() == GROUP_SIZE
    }
}
