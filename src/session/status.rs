//! Session lifecycle states

use std::fmt;

/// Where a session is in its lifecycle
///
/// ```text
/// NotStarted -> Loading -> InProgress -> Won | Lost
///     ^            |                       |
///     +------------+-----------------------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionStatus {
    #[default]
    NotStarted,
    /// Waiting for today's puzzle
    Loading,
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NotStarted => "NotStarted",
            Self::Loading => "Loading",
            Self::InProgress => "InProgress",
            Self::Won => "Won",
            Self::Lost => "Lost",
        }
    }

    /// Won or Lost
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Whether a new session may be started from this state
    #[must_use]
    pub const fn can_start(self) -> bool {
        matches!(self, Self::NotStarted | Self::Won | Self::Lost)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_won_and_lost_are_terminal() {
        assert!(SessionStatus::Won.is_terminal());
        assert!(SessionStatus::Lost.is_terminal());
        assert!(!SessionStatus::NotStarted.is_terminal());
        assert!(!SessionStatus::Loading.is_terminal());
        assert!(!SessionStatus::InProgress.is_terminal());
    }

    #[test]
    fn start_allowed_from_initial_and_terminal() {
        assert!(SessionStatus::NotStarted.can_start());
        assert!(SessionStatus::Won.can_start());
        assert!(SessionStatus::Lost.can_start());
        assert!(!SessionStatus::Loading.can_start());
        assert!(!SessionStatus::InProgress.can_start());
    }

    #[test]
    fn default_is_not_started() {
        assert_eq!(SessionStatus::default(), SessionStatus::NotStarted);
        assert_eq!(SessionStatus::default().to_string(), "NotStarted");
    }
}
