//! Per-letter feedback codes and whole-row feedback patterns.
//!
//! The real game reports each guess as a row of colors. This module parses
//! that row into a [`FeedbackPattern`] the solver can consume.

use std::fmt;

use crate::ValidationError;

/// The feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Correct,
    /// Letter in the word but wrong position (yellow)
    Present,
    /// Letter not in the word (black/gray)
    Absent,
}

impl Feedback {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray), case-insensitive
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Correct),
            'y' | '1' => Some(Feedback::Present),
            'b' | 'x' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }
}

/// A complete feedback row for one guess, one code per letter position.
///
/// Unlike classic 5-letter Wordle the session word length is configurable, so
/// the row is an ordered sequence rather than a fixed-size array.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackPattern {
    codes: Vec<Feedback>,
}

impl FeedbackPattern {
    /// Build a pattern from individual feedback codes.
    pub fn new(codes: Vec<Feedback>) -> Self {
        Self { codes }
    }

    /// Parse a row like "bgbyb" or "BGBYB". Rejects any character outside
    /// the feedback alphabet and rejects an empty row; the length check
    /// against the session word length happens in the solver, which knows it.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::FeedbackLength {
                expected: crate::MIN_WORD_LENGTH,
                actual: 0,
            });
        }
        let codes = s
            .chars()
            .map(|c| Feedback::from_char(c).ok_or(ValidationError::InvalidSymbol(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { codes })
    }

    /// Number of letter positions in the row.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The per-position codes, in guess order.
    pub fn codes(&self) -> &[Feedback] {
        &self.codes
    }

    /// A winning row: every position is [`Feedback::Correct`].
    pub fn is_all_correct(&self) -> bool {
        !self.codes.is_empty() && self.codes.iter().all(|&c| c == Feedback::Correct)
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for code in &self.codes {
            write!(f, "{}", code.to_char())?;
        }
        Ok(())
    }
}
