//! Formatting utilities for terminal output

use crate::core::MistakeBudget;
use chrono::NaiveDate;

/// Format remaining mistakes as dots, filled for each one still available
#[must_use]
pub fn mistake_dots(remaining: u8) -> String {
    let total = usize::from(MistakeBudget::STARTING);
    let filled = usize::from(remaining).min(total);

    format!("{}{}", "●".repeat(filled), "○".repeat(total - filled))
}

/// Human-readable last played date
#[must_use]
pub fn last_played(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| "never".to_string(), |d| d.format("%a %b %-d %Y").to_string())
}
