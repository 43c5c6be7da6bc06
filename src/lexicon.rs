//! The word catalog: an immutable mapping from word to popularity weight.
//!
//! Loaded once from a JSON object of word→weight and shared read-only by any
//! number of sessions. Each session starts from the slice of the lexicon
//! whose words have the session's length.

use std::collections::BTreeMap;
use std::io;

use crate::{FormatError, MIN_WORD_LENGTH};

/// Selection priority of a word. Higher is guessed first.
pub type Weight = f64;

/// The words still consistent with all feedback a session has received.
/// Same key/value semantics as the lexicon; owned by one [`Solver`] and only
/// ever shrinks.
///
/// [`Solver`]: crate::Solver
pub type CandidateSet = BTreeMap<String, Weight>;

/// Immutable word→weight catalog.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: BTreeMap<String, Weight>,
}

fn check_entry(word: &str, weight: Weight) -> Result<(), FormatError> {
    if word.len() < MIN_WORD_LENGTH || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(FormatError::InvalidWord(word.to_string()));
    }
    if !weight.is_finite() || weight < 0.0 {
        return Err(FormatError::InvalidWeight {
            word: word.to_string(),
            weight,
        });
    }
    Ok(())
}

impl Lexicon {
    /// Parse a JSON object of word→weight, e.g. `{"crane": 10.0, "slate": 8}`.
    ///
    /// Fails on any key that is not purely lowercase ASCII letters of length
    /// at least two, and on any negative or non-finite weight. JSON object
    /// keys are unique per parser; if a source repeats a key, the last value
    /// wins.
    pub fn from_json_str(source: &str) -> Result<Self, FormatError> {
        let entries: BTreeMap<String, Weight> = serde_json::from_str(source)?;
        Self::from_entries(entries)
    }

    /// Like [`from_json_str`](Self::from_json_str), reading from any
    /// [`io::Read`] source such as an open file.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, FormatError> {
        let entries: BTreeMap<String, Weight> = serde_json::from_reader(reader)?;
        Self::from_entries(entries)
    }

    /// Build a lexicon from in-memory entries, applying the same validation
    /// as the JSON loaders. On duplicate words the last weight wins.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, FormatError>
    where
        I: IntoIterator<Item = (S, Weight)>,
        S: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (word, weight) in entries {
            let word = word.into();
            check_entry(&word, weight)?;
            map.insert(word, weight);
        }
        Ok(Self { entries: map })
    }

    /// All entries whose word has exactly `length` letters. The result may be
    /// empty; a session started from an empty set is immediately exhausted.
    pub fn filter_by_length(&self, length: usize) -> CandidateSet {
        self.entries
            .iter()
            .filter(|(word, _)| word.len() == length)
            .map(|(word, &weight)| (word.clone(), weight))
            .collect()
    }

    /// Length of the longest word in the catalog, or zero if it is empty.
    /// The inclusive upper bound for a session's word length.
    pub fn max_word_length(&self) -> usize {
        self.entries.keys().map(|word| word.len()).max().unwrap_or(0)
    }

    pub fn get(&self, word: &str) -> Option<Weight> {
        self.entries.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in lexicographic word order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Weight)> {
        self.entries.iter().map(|(word, &weight)| (word.as_str(), weight))
    }
}
