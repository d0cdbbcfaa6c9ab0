//! Puzzle session state machine
//!
//! [`SessionEngine`] drives one attempt at the daily puzzle: loading, word
//! selection, guess submission, and win/loss finalization.

pub mod clock;
mod engine;
mod outcome;
mod shuffle;
mod snapshot;
mod status;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{
    CORRECT_MESSAGE, FETCH_ERROR_MESSAGE, INCORRECT_MESSAGE, LOADING_MESSAGE, LOSS_MESSAGE,
    START_MESSAGE, SUBMIT_ERROR_MESSAGE, SessionEngine,
};
pub use outcome::{SelectOutcome, StartOutcome, SubmitOutcome};
pub use shuffle::shuffle_words;
pub use snapshot::Snapshot;
pub use status::SessionStatus;
