//! Core domain types for GridConnect
//!
//! This module contains the puzzle domain types with no I/O.
//! All types here are pure, testable, and enforce their own invariants.

mod budget;
mod group;
mod profile;
pub mod scoring;
mod selection;

pub use budget::MistakeBudget;
pub use group::SolvedGroup;
pub use profile::Profile;
pub use selection::{GROUP_SIZE, Selection, Toggle};

/// Number of groups in a daily puzzle
pub const GROUP_COUNT: usize = 4;

/// Number of words in a daily puzzle
pub const PUZZLE_SIZE: usize = GROUP_COUNT * GROUP_SIZE;
