//! # Wordle Solver
//!
//! A Wordle assistant. At each round it suggests the most likely remaining
//! candidate word, then narrows the candidate set from the color feedback the
//! real game produced for that guess.
//!
//! The [`Lexicon`] is a fixed word-to-weight catalog loaded once; a [`Solver`]
//! owns one session's shrinking candidate set and drives it to a terminal
//! state, either [`SessionState::Solved`] or [`SessionState::Exhausted`].

use thiserror::Error;

pub mod feedback;
pub mod lexicon;
pub mod solver;

pub use feedback::{Feedback, FeedbackPattern};
pub use lexicon::{CandidateSet, Lexicon, Weight};
pub use solver::{SessionState, Solver, SolverStatus};

/// Minimum word length a lexicon entry (and a session) may have.
pub const MIN_WORD_LENGTH: usize = 2;

/// Errors raised while loading a lexicon source. All of these abort the load.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A key contains anything other than ASCII lowercase letters, or is
    /// shorter than [`MIN_WORD_LENGTH`].
    #[error("\"{0}\" is not a valid lexicon word (expected at least two lowercase ASCII letters)")]
    InvalidWord(String),

    /// A weight is negative, NaN, or infinite.
    #[error("word \"{word}\" has invalid weight {weight} (expected a non-negative finite number)")]
    InvalidWeight { word: String, weight: f64 },

    #[error("could not parse lexicon source")]
    Json(#[from] serde_json::Error),

    #[error("could not read lexicon source")]
    Io(#[from] std::io::Error),
}

/// Errors raised by malformed per-round input. The solver state is untouched
/// whenever one of these is returned, so the caller can re-prompt and retry
/// the same round.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("feedback must be {expected} letters long, got {actual}")]
    FeedbackLength { expected: usize, actual: usize },

    #[error("'{0}' is not a feedback color (expected b, y, or g)")]
    InvalidSymbol(char),

    #[error("guess \"{guess}\" does not match the session word length {expected}")]
    GuessLength { guess: String, expected: usize },

    #[error("guess \"{0}\" must be lowercase ASCII letters")]
    GuessNotLowercase(String),
}

/// Errors raised by [`Solver`] operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolverError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A guess was requested with zero candidates left. Callers that check
    /// for [`SessionState::Exhausted`] first never see this.
    #[error("no candidate words remain")]
    NoCandidates,

    /// The session already reached a terminal state; no further rounds run.
    #[error("session already ended as {0}")]
    Finished(SessionState),
}
