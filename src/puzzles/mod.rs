//! Puzzle definitions for offline play
//!
//! Provides the sample puzzle compiled into the binary and the rules every
//! puzzle must satisfy.

mod embedded;
pub mod loader;

pub use embedded::SAMPLE_GROUPS;

use crate::core::{GROUP_COUNT, SolvedGroup};
use crate::error::PuzzleError;
use rustc_hash::FxHashSet;

/// The embedded sample puzzle as groups
#[must_use]
pub fn sample_groups() -> Vec<SolvedGroup> {
    loader::groups_from_slice(SAMPLE_GROUPS)
}

/// Check puzzle-level rules: four groups, sixteen distinct non-empty words
///
/// # Errors
///
/// Returns the first rule violated.
pub fn validate_groups(groups: &[SolvedGroup]) -> Result<(), PuzzleError> {
    if groups.len() != GROUP_COUNT {
        return Err(PuzzleError::WrongGroupCount(groups.len()));
    }

    let mut seen = FxHashSet::default();
    for word in groups.iter().flat_map(|g| g.words().iter()) {
        if word.is_empty() {
            return Err(PuzzleError::EmptyWord);
        }
        if !seen.insert(word.as_str()) {
            return Err(PuzzleError::DuplicateWord(word.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_four_groups() {
        assert_eq!(SAMPLE_GROUPS.len(), GROUP_COUNT);
    }

    #[test]
    fn sample_is_valid() {
        assert!(validate_groups(&sample_groups()).is_ok());
    }

    #[test]
    fn sample_words_are_uppercase() {
        for (name, words) in SAMPLE_GROUPS {
            for word in words {
                assert!(
                    word.chars().all(|c| c.is_ascii_uppercase()),
                    "Word '{word}' in group '{name}' is not uppercase"
                );
            }
        }
    }

    #[test]
    fn duplicate_word_is_rejected() {
        let mut groups = sample_groups();
        let stolen = groups[0].words()[0].clone();
        let second = groups[1].words().clone();
        let name = groups[1].name().to_string();
        groups[1] = SolvedGroup::new(
            name,
            [stolen.clone(), second[1].clone(), second[2].clone(), second[3].clone()],
        );

        assert!(matches!(
            validate_groups(&groups),
            Err(PuzzleError::DuplicateWord(w)) if w == stolen
        ));
    }

    #[test]
    fn empty_word_is_rejected() {
        let mut groups = sample_groups();
        let words = groups[2].words().clone();
        groups[2] = SolvedGroup::new(
            "BLANK",
            [String::new(), words[1].clone(), words[2].clone(), words[3].clone()],
        );
        assert!(matches!(validate_groups(&groups), Err(PuzzleError::EmptyWord)));
    }
}
