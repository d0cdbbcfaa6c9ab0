//! Puzzle file loading utilities
//!
//! Puzzle files hold one group per line in the form
//! `NAME: WORD, WORD, WORD, WORD`. Blank lines and `#` comments are skipped.

use super::validate_groups;
use crate::core::{GROUP_SIZE, SolvedGroup};
use crate::error::PuzzleError;
use std::fs;
use std::path::Path;

/// Load and validate a puzzle from a file
///
/// # Errors
///
/// Returns `PuzzleError::Io` if the file cannot be read, or a parse or
/// validation error if its contents are not a valid four-group puzzle.
///
/// # Examples
/// ```no_run
/// use gridconnect::puzzles::loader::load_from_file;
///
/// let groups = load_from_file("data/sample_puzzle.txt").unwrap();
/// println!("Loaded {} groups", groups.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<SolvedGroup>, PuzzleError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let groups = parse_puzzle(&content)?;
    validate_groups(&groups)?;
    Ok(groups)
}

/// Parse puzzle text into groups without checking puzzle-level rules
///
/// # Errors
///
/// Returns `PuzzleError::Malformed` for a line without a `:` separator, an
/// empty name, or a word count other than four.
pub fn parse_puzzle(content: &str) -> Result<Vec<SolvedGroup>, PuzzleError> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| parse_line(line_no, line))
        .collect()
}

fn parse_line(line_no: usize, line: &str) -> Result<SolvedGroup, PuzzleError> {
    let malformed = |reason: &str| PuzzleError::Malformed {
        line: line_no,
        reason: reason.to_string(),
    };

    // Names may contain ':' themselves; words never do
    let (name, words) = line
        .rsplit_once(':')
        .ok_or_else(|| malformed("expected 'NAME: WORD, WORD, WORD, WORD'"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(malformed("group name is empty"));
    }

    let words: Vec<String> = words.split(',').map(|w| w.trim().to_string()).collect();
    let words: [String; GROUP_SIZE] = words
        .try_into()
        .map_err(|w: Vec<String>| malformed(&format!("expected 4 words, got {}", w.len())))?;

    Ok(SolvedGroup::new(name, words))
}

/// Convert embedded groups to `SolvedGroup` values
///
/// # Examples
/// ```
/// use gridconnect::puzzles::loader::groups_from_slice;
/// use gridconnect::puzzles::SAMPLE_GROUPS;
///
/// let groups = groups_from_slice(SAMPLE_GROUPS);
/// assert_eq!(groups.len(), SAMPLE_GROUPS.len());
/// ```
#[must_use]
pub fn groups_from_slice(slice: &[(&str, [&str; GROUP_SIZE])]) -> Vec<SolvedGroup> {
    slice
        .iter()
        .map(|(name, words)| SolvedGroup::new(*name, words.map(String::from)))
        .collect()
}
