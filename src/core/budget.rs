//! Mistake budget for a single session

/// Remaining incorrect guesses before the session is lost
///
/// Starts at 4, only ever decreases, and never goes below 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MistakeBudget(u8);

impl MistakeBudget {
    /// Mistakes allowed at the start of every session
    pub const STARTING: u8 = 4;

    #[must_use]
    pub const fn new() -> Self {
        Self(Self::STARTING)
    }

    #[inline]
    #[must_use]
    pub const fn remaining(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        self.0 == 0
    }

    /// Spend one mistake and return how many remain
    pub fn consume(&mut self) -> u8 {
        self.0 = self.0.saturating_sub(1);
        self.0
    }
}

impl Default for MistakeBudget {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_four() {
        let budget = MistakeBudget::new();
        assert_eq!(budget.remaining(), 4);
        assert!(!budget.is_exhausted());
    }

    #[test]
    fn consume_decrements_by_one() {
        let mut budget = MistakeBudget::new();
        assert_eq!(budget.consume(), 3);
        assert_eq!(budget.consume(), 2);
        assert_eq!(budget.remaining(), 2);
    }

    #[test]
    fn floor_is_zero() {
        let mut budget = MistakeBudget::new();
        for _ in 0..6 {
            budget.consume();
        }
        assert_eq!(budget.remaining(), 0);
        assert!(budget.is_exhausted());
    }
}
