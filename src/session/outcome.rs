//! Results of player intents
//!
//! Intents never fail. An intent issued in a state that forbids it comes back
//! as `Ignored` and leaves the session untouched.

use crate::core::SolvedGroup;
use crate::core::scoring::WinSummary;
use crate::error::ServiceError;

/// Result of `start_session`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// Puzzle loaded, session is in progress
    Started,
    /// A session is already loading or in progress
    Ignored,
    /// Puzzle could not be fetched; session is back to not started
    Failed(ServiceError),
}

/// Result of `select_word`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected,
    Deselected,
    /// Four words already selected; nothing changed
    Full,
    Ignored,
}

/// Result of `submit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A group was found and more remain
    Correct(SolvedGroup),
    /// Not a group; one mistake spent. Presentation shakes the grid.
    Incorrect { mistakes_remaining: u8 },
    /// Last group found
    Won {
        summary: WinSummary,
        /// Whether the updated profile reached the store
        saved: bool,
    },
    /// Last mistake spent
    Lost,
    /// Service could not be reached; nothing changed
    Failed(ServiceError),
    Ignored,
}

impl SubmitOutcome {
    /// Whether presentation should play the incorrect-guess feedback
    #[must_use]
    pub const fn is_incorrect_guess(&self) -> bool {
        matches!(self, Self::Incorrect { .. } | Self::Lost)
    }
}
