//! A solved group of four words

use super::selection::GROUP_SIZE;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A correctly identified group: its theme label and four member words
///
/// Immutable once created. Word order is display order only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedGroup {
    name: String,
    words: [String; GROUP_SIZE],
}

impl SolvedGroup {
    pub fn new(name: impl Into<String>, words: [String; GROUP_SIZE]) -> Self {
        Self {
            name: name.into(),
            words,
        }
    }

    /// Theme label, e.g. "FISH"
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn words(&self) -> &[String; GROUP_SIZE] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Whether `candidate` holds exactly this group's words, in any order
    #[must_use]
    pub fn matches(&self, candidate: &[String]) -> bool {
        let ours: FxHashSet<&str> = self.words.iter().map(String::as_str).collect();
        let theirs: FxHashSet<&str> = candidate.iter().map(String::as_str).collect();
        candidate.len() == GROUP_SIZE && ours == theirs
    }
}

impl fmt::Display for SolvedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.words.join(", "))
    }
}
