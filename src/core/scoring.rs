//! Win scoring and streak continuity
//!
//! Points for a win are a flat base plus a bonus that depends on how many
//! mistakes were left when the last group was found. Streaks continue only
//! across consecutive calendar days.

use super::{MistakeBudget, Profile};
use chrono::NaiveDate;

/// Points awarded for every win
pub const BASE_POINTS: u32 = 10;

/// Bonus for the mistakes still available at the moment of the win
///
/// # Examples
/// ```
/// use gridconnect::core::scoring::mistake_bonus;
///
/// assert_eq!(mistake_bonus(4), 20);
/// assert_eq!(mistake_bonus(1), 5);
/// ```
#[must_use]
pub const fn mistake_bonus(remaining: u8) -> u32 {
    match remaining {
        4.. => 20,
        3 => 15,
        2 => 10,
        1 => 5,
        0 => 0,
    }
}

/// Total points earned by a win with `remaining` mistakes left
#[must_use]
pub const fn points_for_win(remaining: u8) -> u32 {
    BASE_POINTS + mistake_bonus(remaining)
}

/// Streak after a win on `today`
///
/// - Already won today: unchanged
/// - Last win was yesterday: +1
/// - Anything else (never played, a gap, or a date in the future): reset to 1
#[must_use]
pub fn next_streak(current: u32, last_played: Option<NaiveDate>, today: NaiveDate) -> u32 {
    match last_played {
        Some(last) if last == today => current,
        Some(last) if today.pred_opt() == Some(last) => current.saturating_add(1),
        _ => 1,
    }
}

/// Outcome of finalizing a win
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinSummary {
    /// Points earned by this win
    pub points: u32,
    /// Profile to persist
    pub profile: Profile,
}

/// Apply a win to `profile`, producing the points earned and the new profile
#[must_use]
pub fn finalize_win(profile: &Profile, budget: MistakeBudget, today: NaiveDate) -> WinSummary {
    let points = points_for_win(budget.remaining());

    WinSummary {
        points,
        profile: Profile {
            score: profile.score.saturating_add(points),
            streak: next_streak(profile.streak, profile.last_played_date, today),
            last_played_date: Some(today),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn budget_with(remaining: u8) -> MistakeBudget {
        let mut budget = MistakeBudget::new();
        for _ in remaining..MistakeBudget::STARTING {
            budget.consume();
        }
        budget
    }

    #[test]
    fn bonus_step_function() {
        assert_eq!(mistake_bonus(4), 20);
        assert_eq!(mistake_bonus(3), 15);
        assert_eq!(mistake_bonus(2), 10);
        assert_eq!(mistake_bonus(1), 5);
        assert_eq!(mistake_bonus(0), 0);
    }

    #[test]
    fn points_examples() {
        assert_eq!(points_for_win(4), 30);
        assert_eq!(points_for_win(3), 25);
        assert_eq!(points_for_win(2), 20);
        assert_eq!(points_for_win(1), 15);
    }

    #[test]
    fn streak_continues_from_yesterday() {
        let streak = next_streak(5, Some(date(2024, 6, 1)), date(2024, 6, 2));
        assert_eq!(streak, 6);
    }

    #[test]
    fn streak_resets_after_gap() {
        let streak = next_streak(5, Some(date(2024, 5, 30)), date(2024, 6, 2));
        assert_eq!(streak, 1);
    }

    #[test]
    fn streak_starts_when_never_played() {
        assert_eq!(next_streak(0, None, date(2024, 6, 2)), 1);
    }

    #[test]
    fn streak_unchanged_on_same_day() {
        assert_eq!(next_streak(7, Some(date(2024, 6, 2)), date(2024, 6, 2)), 7);
    }

    #[test]
    fn streak_resets_on_future_date() {
        assert_eq!(next_streak(7, Some(date(2024, 6, 3)), date(2024, 6, 2)), 1);
    }

    #[test]
    fn streak_crosses_month_and_year() {
        assert_eq!(next_streak(2, Some(date(2024, 5, 31)), date(2024, 6, 1)), 3);
        assert_eq!(next_streak(9, Some(date(2023, 12, 31)), date(2024, 1, 1)), 10);
        assert_eq!(next_streak(4, Some(date(2024, 2, 29)), date(2024, 3, 1)), 5);
    }

    #[test]
    fn finalize_adds_points_and_stamps_today() {
        let profile = Profile {
            score: 100,
            streak: 5,
            last_played_date: Some(date(2024, 6, 1)),
        };
        let summary = finalize_win(&profile, budget_with(3), date(2024, 6, 2));

        assert_eq!(summary.points, 25);
        assert_eq!(summary.profile.score, 125);
        assert_eq!(summary.profile.streak, 6);
        assert_eq!(summary.profile.last_played_date, Some(date(2024, 6, 2)));
    }

    #[test]
    fn finalize_from_default_profile() {
        let summary = finalize_win(&Profile::default(), budget_with(4), date(2024, 6, 2));
        assert_eq!(summary.points, 30);
        assert_eq!(summary.profile.score, 30);
        assert_eq!(summary.profile.streak, 1);
    }
}
