//! Per-session solving engine.
//!
//! A [`Solver`] owns the candidate set for one game session. Each round it
//! proposes the highest-weight candidate, the caller plays that word in the
//! real game, and the game's color row comes back through
//! [`submit_feedback`](Solver::submit_feedback), which narrows the set.
//! Filtering is exact: every feedback code is a necessary condition on the
//! solution, so the true word is never dropped. Only the guess ranking is
//! heuristic (by weight).

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::feedback::{Feedback, FeedbackPattern};
use crate::lexicon::{CandidateSet, Lexicon};
use crate::{SolverError, ValidationError};

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    /// More rounds to play.
    InProgress,
    /// An all-green row came back; the last guess was the solution.
    Solved,
    /// No candidate is consistent with the feedback received. Almost always
    /// means a color row was entered wrong, not that the solver failed.
    Exhausted,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionState::InProgress)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionState::InProgress => "in progress",
            SessionState::Solved => "solved",
            SessionState::Exhausted => "exhausted",
        };
        f.write_str(s)
    }
}

/// Snapshot returned after every round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolverStatus {
    /// For [`SessionState::Solved`], the number of attempts used; otherwise
    /// the number of the round about to be played.
    pub attempt: usize,
    /// Candidates still consistent with all feedback so far.
    pub remaining: usize,
    pub state: SessionState,
}

/// One session's solving state: the shrinking candidate set, the fixed word
/// length, the attempt counter, and the terminal flag.
#[derive(Debug, Clone)]
pub struct Solver {
    candidates: CandidateSet,
    word_length: usize,
    attempt: usize,
    state: SessionState,
}

impl Solver {
    /// Start a session over all lexicon words of the given length. Starting
    /// with zero candidates (length not in the lexicon) is immediately
    /// [`SessionState::Exhausted`].
    pub fn new(lexicon: &Lexicon, word_length: usize) -> Self {
        Self::with_candidates(lexicon.filter_by_length(word_length), word_length)
    }

    /// Start a session from an explicit candidate set. Words in the set are
    /// assumed to all have `word_length` letters.
    pub fn with_candidates(candidates: CandidateSet, word_length: usize) -> Self {
        let state = if candidates.is_empty() {
            SessionState::Exhausted
        } else {
            SessionState::InProgress
        };
        Self {
            candidates,
            word_length,
            attempt: 1,
            state,
        }
    }

    /// The candidate with the maximum weight; ties go to the lexicographically
    /// smallest word, so the suggestion is deterministic. Does not mutate the
    /// candidate set.
    pub fn propose_guess(&self) -> Result<&str, SolverError> {
        if self.state == SessionState::Solved {
            return Err(SolverError::Finished(self.state));
        }
        // BTreeMap iterates in ascending word order, so keeping only strictly
        // heavier words leaves the lexicographically smallest of equal weights.
        self.candidates
            .iter()
            .fold(None::<(&str, f64)>, |best, (word, &weight)| match best {
                Some((_, best_weight)) if weight <= best_weight => best,
                _ => Some((word.as_str(), weight)),
            })
            .map(|(word, _)| word)
            .ok_or(SolverError::NoCandidates)
    }

    /// Apply one round of feedback for `guess` and narrow the candidate set.
    ///
    /// Validation runs before anything is touched: a [`ValidationError`]
    /// leaves the candidate set and the attempt counter exactly as they were,
    /// so the caller re-prompts and replays the same round. An all-green row
    /// ends the session as [`SessionState::Solved`] without filtering; a
    /// narrowing that empties the set ends it as [`SessionState::Exhausted`].
    pub fn submit_feedback(
        &mut self,
        guess: &str,
        pattern: &FeedbackPattern,
    ) -> Result<SolverStatus, SolverError> {
        if self.state.is_terminal() {
            return Err(SolverError::Finished(self.state));
        }
        self.validate_round(guess, pattern)?;

        if pattern.is_all_correct() {
            self.state = SessionState::Solved;
            return Ok(self.status());
        }

        self.narrow(guess.as_bytes(), pattern);

        if self.candidates.is_empty() {
            self.state = SessionState::Exhausted;
        } else {
            self.attempt += 1;
        }
        Ok(self.status())
    }

    fn validate_round(&self, guess: &str, pattern: &FeedbackPattern) -> Result<(), ValidationError> {
        if pattern.len() != self.word_length {
            return Err(ValidationError::FeedbackLength {
                expected: self.word_length,
                actual: pattern.len(),
            });
        }
        if guess.len() != self.word_length {
            return Err(ValidationError::GuessLength {
                guess: guess.to_string(),
                expected: self.word_length,
            });
        }
        if !guess.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(ValidationError::GuessNotLowercase(guess.to_string()));
        }
        Ok(())
    }

    /// The five narrowing passes. Each is an independent necessary condition
    /// on the solution, so the order only matters for clarity; together they
    /// are one conjunctive filter applied atomically after validation.
    fn narrow(&mut self, guess: &[u8], pattern: &FeedbackPattern) {
        let mut correct: Vec<(usize, u8)> = Vec::new();
        let mut exclude: Vec<(usize, u8)> = Vec::new();
        let mut include: Vec<(usize, u8)> = Vec::new();
        for (idx, &code) in pattern.codes().iter().enumerate() {
            match code {
                Feedback::Correct => correct.push((idx, guess[idx])),
                Feedback::Absent => exclude.push((idx, guess[idx])),
                Feedback::Present => include.push((idx, guess[idx])),
            }
        }

        // A letter marked Absent in one slot may still be Correct in another
        // (repeated letters). Only letters never marked Correct anywhere are
        // banned from the whole word.
        let hard_excluded: BTreeSet<u8> = exclude
            .iter()
            .map(|&(_, letter)| letter)
            .filter(|letter| !correct.iter().any(|&(_, c)| c == *letter))
            .collect();

        // Words containing a hard-excluded letter anywhere.
        self.candidates
            .retain(|word, _| !word.bytes().any(|b| hard_excluded.contains(&b)));

        // Words with an excluded letter in its excluded position. Needed in
        // addition to the global pass to cover repeated-letter guesses.
        self.candidates
            .retain(|word, _| !exclude.iter().any(|&(idx, l)| word.as_bytes()[idx] == l));

        // Words missing a confirmed letter at its confirmed position.
        self.candidates
            .retain(|word, _| correct.iter().all(|&(idx, l)| word.as_bytes()[idx] == l));

        // Words not containing every yellow letter somewhere.
        self.candidates
            .retain(|word, _| include.iter().all(|&(_, l)| word.bytes().any(|b| b == l)));

        // Words with a yellow letter still sitting in the position where it
        // was already ruled out.
        self.candidates
            .retain(|word, _| !include.iter().any(|&(idx, l)| word.as_bytes()[idx] == l));
    }

    /// Current snapshot without advancing anything.
    pub fn status(&self) -> SolverStatus {
        SolverStatus {
            attempt: self.attempt,
            remaining: self.candidates.len(),
            state: self.state,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The round number about to be played (1-based); after a solve, the
    /// number of attempts it took.
    pub fn attempt(&self) -> usize {
        self.attempt
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// The words still in play, with their weights, in lexicographic order.
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }
}
