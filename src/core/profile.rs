//! Persisted player profile

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Cross-session player state: total score, win streak, and last winning day
///
/// Missing fields deserialize to their defaults, so a partially written
/// profile from an older client still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub score: u32,
    pub streak: u32,
    pub last_played_date: Option<NaiveDate>,
}
