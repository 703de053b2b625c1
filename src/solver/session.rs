//! Game session
//!
//! A session owns the candidate set for one game and walks it from the
//! opening guess to a win or a contradiction.

use super::SolverConfig;
use crate::core::{Code, Feedback, FeedbackError, all_codes};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

/// Result of submitting feedback for the current guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The current guess was the secret
    Won { attempts: usize },

    /// No code is consistent with the feedback received
    Contradiction,

    /// The solver has a new guess
    NextGuess { guess: Code, attempts: usize },
}

/// Result of the first phase of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The session reached a terminal outcome
    Finished(Outcome),

    /// Candidates were filtered; call [`Session::complete_guess`] next
    Thinking { remaining: usize },
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for feedback on the current guess
    Guessing,

    /// Feedback applied, next guess not chosen yet
    Thinking,

    /// The last guess was the secret
    Won,

    /// No code fits the feedback; restart to play again
    Contradiction,
}

/// Errors returned by session operations
///
/// None of these change the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// Feedback values failed validation
    InvalidFeedbackRange(FeedbackError),

    /// The session already ended; restart it first
    Finished,

    /// Feedback was applied but the next guess was not completed
    GuessPending,

    /// `complete_guess` was called without applied feedback
    NoPendingGuess,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFeedbackRange(e) => write!(f, "Invalid feedback: {e}"),
            Self::Finished => write!(f, "Session has ended, restart to play again"),
            Self::GuessPending => write!(f, "Next guess is still being computed"),
            Self::NoPendingGuess => write!(f, "No feedback is waiting for a next guess"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidFeedbackRange(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FeedbackError> for SessionError {
    fn from(e: FeedbackError) -> Self {
        Self::InvalidFeedbackRange(e)
    }
}

/// One game against a secret held by the user
pub struct Session {
    config: SolverConfig,
    rng: StdRng,
    current_guess: Code,
    attempts: usize,
    candidates: Vec<Code>,
    history: Vec<(Code, Feedback)>,
    state: SessionState,
}

impl Session {
    /// Create a session and start its first game
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::solver::{Session, SolverConfig};
    ///
    /// let session = Session::new(SolverConfig::default());
    /// assert_eq!(session.current_guess().to_string(), "0123");
    /// assert_eq!(session.attempts(), 1);
    /// assert_eq!(session.remaining(), 5040);
    /// ```
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        let mut session = Self {
            rng: Self::make_rng(config.seed),
            current_guess: config.opening,
            attempts: 1,
            candidates: Vec::with_capacity(all_codes().len()),
            history: Vec::new(),
            state: SessionState::Guessing,
            config,
        };
        session.start();
        session
    }

    fn make_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reset to the full code space and return the opening guess
    pub fn start(&mut self) -> Code {
        self.rng = Self::make_rng(self.config.seed);
        self.candidates.clear();
        self.candidates.extend_from_slice(all_codes());
        self.history.clear();
        self.current_guess = self.config.opening;
        self.attempts = 1;
        self.state = SessionState::Guessing;

        tracing::debug!(guess = %self.current_guess, "session started");
        self.current_guess
    }

    /// Start over, forgetting everything about the previous game
    pub fn restart(&mut self) -> Code {
        self.start()
    }

    /// Submit feedback for the current guess and compute the next one
    ///
    /// Runs both phases in one call.
    ///
    /// # Errors
    /// See [`Session::apply_feedback`].
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::solver::{Outcome, Session, SolverConfig};
    ///
    /// let mut session = Session::new(SolverConfig::default().with_seed(1));
    /// assert_eq!(session.submit(4, 4), Ok(Outcome::Won { attempts: 1 }));
    /// ```
    pub fn submit(&mut self, digits: i64, positions: i64) -> Result<Outcome, SessionError> {
        match self.apply_feedback(digits, positions)? {
            Progress::Finished(outcome) => Ok(outcome),
            Progress::Thinking { .. } => self.complete_guess(),
        }
    }

    /// First phase: validate feedback, detect a win, filter candidates
    ///
    /// Leaves the session in [`SessionState::Thinking`] unless the game ended.
    ///
    /// # Errors
    /// - `InvalidFeedbackRange` if the values are outside 0-4 or positions
    ///   exceed digits
    /// - `Finished` if the game is over
    /// - `GuessPending` if the previous feedback was never completed
    pub fn apply_feedback(&mut self, digits: i64, positions: i64) -> Result<Progress, SessionError> {
        match self.state {
            SessionState::Guessing => {}
            SessionState::Thinking => return Err(SessionError::GuessPending),
            SessionState::Won | SessionState::Contradiction => {
                return Err(SessionError::Finished);
            }
        }

        let feedback = Feedback::new(digits, positions)?;
        self.history.push((self.current_guess, feedback));

        if feedback.is_win() {
            self.state = SessionState::Won;
            tracing::info!(secret = %self.current_guess, attempts = self.attempts, "code found");
            return Ok(Progress::Finished(Outcome::Won {
                attempts: self.attempts,
            }));
        }

        let before = self.candidates.len();
        let guess = self.current_guess;
        self.candidates
            .retain(|candidate| Feedback::calculate(&guess, candidate) == feedback);

        tracing::debug!(
            %guess,
            %feedback,
            before,
            after = self.candidates.len(),
            "filtered candidates"
        );

        if self.candidates.is_empty() {
            self.state = SessionState::Contradiction;
            tracing::info!(attempts = self.attempts, "no code fits the feedback");
            return Ok(Progress::Finished(Outcome::Contradiction));
        }

        self.state = SessionState::Thinking;
        Ok(Progress::Thinking {
            remaining: self.candidates.len(),
        })
    }

    /// Second phase: choose the next guess
    ///
    /// # Errors
    /// Returns `NoPendingGuess` unless [`Session::apply_feedback`] just
    /// returned [`Progress::Thinking`].
    pub fn complete_guess(&mut self) -> Result<Outcome, SessionError> {
        if self.state != SessionState::Thinking {
            return Err(SessionError::NoPendingGuess);
        }

        let guess = self
            .config
            .selector
            .select_guess(&self.candidates, &mut self.rng)
            .ok_or(SessionError::NoPendingGuess)?;

        self.current_guess = guess;
        self.attempts += 1;
        self.state = SessionState::Guessing;

        Ok(Outcome::NextGuess {
            guess,
            attempts: self.attempts,
        })
    }

    /// The guess waiting for feedback (or the winning guess)
    #[must_use]
    pub const fn current_guess(&self) -> Code {
        self.current_guess
    }

    /// Guesses produced so far, including the current one
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Codes still consistent with every feedback
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// Number of codes still consistent with every feedback
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    /// Guesses played with the feedback each received
    #[must_use]
    pub fn history(&self) -> &[(Code, Feedback)] {
        &self.history
    }

    /// Where the session is in its lifecycle
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// True once the game is won or contradicted
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, SessionState::Won | SessionState::Contradiction)
    }
}
