//! Puzzle session engine
//!
//! Owns the in-memory state of one puzzle attempt and applies player intents
//! to it. The only suspension points are the two puzzle service calls; while
//! one is outstanding the engine is busy and rejects further intents.

use super::clock::{Clock, SystemClock};
use super::shuffle::shuffle_words;
use super::{SelectOutcome, SessionStatus, Snapshot, StartOutcome, SubmitOutcome};
use crate::core::scoring;
use crate::core::{GROUP_COUNT, MistakeBudget, Profile, Selection, SolvedGroup, Toggle};
use crate::error::ServiceError;
use crate::service::{GroupCheck, PuzzleService};
use crate::store::{ProfileStore, load_or_default};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error, info, warn};

pub const LOADING_MESSAGE: &str = "Loading...";
pub const START_MESSAGE: &str = "Find four words that share something in common.";
pub const CORRECT_MESSAGE: &str = "Correct! One group down.";
pub const INCORRECT_MESSAGE: &str = "Not a group. Try again.";
pub const LOSS_MESSAGE: &str = "Game Over! Better luck tomorrow.";
pub const FETCH_ERROR_MESSAGE: &str = "Error connecting to the server!";
pub const SUBMIT_ERROR_MESSAGE: &str = "Error submitting guess. Check the server.";

/// State machine for a single puzzle attempt
///
/// The persisted profile is read once when the engine is created and written
/// once per win.
pub struct SessionEngine<P, S> {
    service: P,
    store: S,
    clock: Box<dyn Clock>,
    rng: StdRng,
    timeout: Option<Duration>,
    profile: Profile,
    status: SessionStatus,
    busy: bool,
    words: Vec<String>,
    solved: Vec<SolvedGroup>,
    selection: Selection,
    budget: MistakeBudget,
    message: String,
    shake: bool,
}

impl<P: PuzzleService, S: ProfileStore> SessionEngine<P, S> {
    /// Create an engine and load the player's profile from `store`
    pub fn new(service: P, store: S) -> Self {
        let profile = load_or_default(&store);
        debug!(
            "Loaded profile: score={} streak={}",
            profile.score, profile.streak
        );

        Self {
            service,
            store,
            clock: Box::new(SystemClock),
            rng: StdRng::from_os_rng(),
            timeout: None,
            profile,
            status: SessionStatus::NotStarted,
            busy: false,
            words: Vec::new(),
            solved: Vec::new(),
            selection: Selection::new(),
            budget: MistakeBudget::new(),
            message: String::new(),
            shake: false,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Give up on service calls that take longer than `timeout`
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a seeded shuffle for reproducible word order
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Fetch today's puzzle and begin a fresh attempt
    ///
    /// Ignored while a session is loading or in progress; an attempt in
    /// progress is never discarded by a second start.
    pub async fn start_session(&mut self) -> StartOutcome {
        if !self.status.can_start() {
            debug!("Ignoring start_session while {}", self.status);
            return StartOutcome::Ignored;
        }

        self.reset_attempt();
        self.status = SessionStatus::Loading;
        self.message = LOADING_MESSAGE.to_string();

        let result = {
            let _pending = PendingCall::new(&mut self.busy, &mut self.status, &mut self.message);
            bounded(self.timeout, self.service.fetch_today()).await
        };

        match result {
            Ok(puzzle) => {
                self.words = puzzle.into_words();
                shuffle_words(&mut self.words, &mut self.rng);
                self.status = SessionStatus::InProgress;
                self.message = START_MESSAGE.to_string();
                info!("Session started with {} words", self.words.len());
                StartOutcome::Started
            }
            Err(e) => {
                warn!("Could not fetch today's puzzle: {}", e);
                self.reset_attempt();
                self.status = SessionStatus::NotStarted;
                self.message = FETCH_ERROR_MESSAGE.to_string();
                StartOutcome::Failed(e)
            }
        }
    }

    /// Toggle an active word in the selection
    pub fn select_word(&mut self, word: &str) -> SelectOutcome {
        if !self.accepting_intents() {
            debug!("Ignoring select_word while {}", self.status);
            return SelectOutcome::Ignored;
        }

        if !self.words.iter().any(|w| w == word) {
            debug!("Ignoring select_word for inactive word '{}'", word);
            return SelectOutcome::Ignored;
        }

        self.shake = false;
        match self.selection.toggle(word) {
            Toggle::Added => SelectOutcome::Selected,
            Toggle::Removed => SelectOutcome::Deselected,
            Toggle::Full => SelectOutcome::Full,
        }
    }

    /// Clear the selection; returns whether the intent applied
    pub fn deselect_all(&mut self) -> bool {
        if !self.accepting_intents() {
            debug!("Ignoring deselect_all while {}", self.status);
            return false;
        }

        self.shake = false;
        self.selection.clear();
        true
    }

    /// Re-randomize the display order of active words; returns whether the intent applied
    pub fn shuffle(&mut self) -> bool {
        if !self.accepting_intents() {
            debug!("Ignoring shuffle while {}", self.status);
            return false;
        }

        self.shake = false;
        shuffle_words(&mut self.words, &mut self.rng);
        true
    }

    /// Submit the four selected words to the puzzle service
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.accepting_intents() {
            debug!("Ignoring submit while {}", self.status);
            return SubmitOutcome::Ignored;
        }

        let Some(guess) = self.selection.as_group() else {
            debug!("Ignoring submit with {} words selected", self.selection.len());
            return SubmitOutcome::Ignored;
        };

        self.shake = false;
        let result = {
            let _pending = PendingCall::new(&mut self.busy, &mut self.status, &mut self.message);
            bounded(self.timeout, self.service.check_group(&guess)).await
        };

        match result {
            Ok(GroupCheck::Correct(group)) if group.matches(&guess) => self.accept_group(group),
            Ok(GroupCheck::Correct(group)) => self.service_failure(ServiceError::InvalidResponse(
                format!("group '{}' does not match the selection", group.name()),
            )),
            Ok(GroupCheck::Incorrect) => self.reject_guess(),
            Err(e) => self.service_failure(e),
        }
    }

    /// Abandon the current attempt and go back to the idle state
    ///
    /// The persisted profile is untouched.
    pub fn return_home(&mut self) {
        debug!("Returning home from {}", self.status);
        self.reset_attempt();
        self.status = SessionStatus::NotStarted;
        self.busy = false;
        self.message.clear();
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.status,
            busy: self.busy,
            words: self.words.clone(),
            selection: self.selection.words().to_vec(),
            solved: self.solved.clone(),
            mistakes_remaining: self.budget.remaining(),
            message: self.message.clone(),
            shake: self.shake,
            score: self.profile.score,
            streak: self.profile.streak,
        }
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Profile as last loaded or successfully saved
    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Unsolved words in display order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn solved_groups(&self) -> &[SolvedGroup] {
        &self.solved
    }

    #[must_use]
    pub const fn mistakes_remaining(&self) -> u8 {
        self.budget.remaining()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn accepting_intents(&self) -> bool {
        self.status == SessionStatus::InProgress && !self.busy
    }

    fn reset_attempt(&mut self) {
        self.words.clear();
        self.solved.clear();
        self.selection.clear();
        self.budget = MistakeBudget::new();
        self.shake = false;
    }

    fn accept_group(&mut self, group: SolvedGroup) -> SubmitOutcome {
        debug!("Solved group '{}'", group.name());
        self.words.retain(|w| !group.contains(w));
        self.selection.clear();
        self.solved.push(group.clone());

        if self.solved.len() == GROUP_COUNT {
            return self.finalize_win();
        }

        self.message = CORRECT_MESSAGE.to_string();
        SubmitOutcome::Correct(group)
    }

    fn reject_guess(&mut self) -> SubmitOutcome {
        let remaining = self.budget.consume();
        self.shake = true;
        debug!("Incorrect guess, {} mistakes remaining", remaining);

        if self.budget.is_exhausted() {
            self.status = SessionStatus::Lost;
            self.message = LOSS_MESSAGE.to_string();
            info!("Session lost with {} groups solved", self.solved.len());
            return SubmitOutcome::Lost;
        }

        self.message = INCORRECT_MESSAGE.to_string();
        SubmitOutcome::Incorrect {
            mistakes_remaining: remaining,
        }
    }

    fn service_failure(&mut self, e: ServiceError) -> SubmitOutcome {
        warn!("Could not check selection: {}", e);
        self.message = SUBMIT_ERROR_MESSAGE.to_string();
        SubmitOutcome::Failed(e)
    }

    fn finalize_win(&mut self) -> SubmitOutcome {
        let today = self.clock.today();
        let summary = scoring::finalize_win(&self.profile, self.budget, today);

        let saved = match self.store.save(&summary.profile) {
            Ok(()) => {
                self.profile = summary.profile.clone();
                true
            }
            Err(e) => {
                error!("Could not save profile after win: {}", e);
                false
            }
        };

        info!(
            "Session won: +{} points, score={} streak={} saved={}",
            summary.points, summary.profile.score, summary.profile.streak, saved
        );

        self.status = SessionStatus::Won;
        self.message = if saved {
            format!("You win! +{} points!", summary.points)
        } else {
            format!(
                "You win! +{} points! (progress could not be saved)",
                summary.points
            )
        };

        SubmitOutcome::Won { summary, saved }
    }
}

/// Await a service call, giving up after `limit` if one is set
/// Busy marker for one outstanding service call
///
/// Dropping it clears the flag even when the caller abandons the call
/// mid-flight. An abandoned load falls back to `NotStarted`.
struct PendingCall<'a> {
    busy: &'a mut bool,
    status: &'a mut SessionStatus,
    message: &'a mut String,
}

impl<'a> PendingCall<'a> {
    fn new(busy: &'a mut bool, status: &'a mut SessionStatus, message: &'a mut String) -> Self {
        *busy = true;
        Self {
            busy,
            status,
            message,
        }
    }
}

impl Drop for PendingCall<'_> {
    fn drop(&mut self) {
        *self.busy = false;
        if *self.status == SessionStatus::Loading {
            *self.status = SessionStatus::NotStarted;
            self.message.clear();
        }
    }
}

async fn bounded<T, F>(limit: Option<Duration>, call: F) -> Result<T, ServiceError>
where
    F: Future<Output = Result<T, ServiceError>>,
{
    match limit {
        Some(limit) => tokio::time::timeout(limit, call)
            .await
            .map_err(|_| ServiceError::Timeout(limit))?,
        None => call.await,
    }
}
