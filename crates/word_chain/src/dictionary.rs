//! Read-only word lists.
//!
//! A [`Dictionary`] is built once and never mutated afterwards. Sessions
//! share it through an `Arc`, so any number of readers see the same set.

use std::collections::HashSet;
use tracing::{debug, instrument};

/// Membership test used by the engine.
///
/// Callers lowercase the word before asking.
pub trait Lexicon {
    /// Returns true if the word is known.
    fn contains(&self, word: &str) -> bool;

    /// Number of known words.
    fn len(&self) -> usize;

    /// Returns true if no words are known.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Immutable set of lowercase words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Builds a dictionary from any sequence of words.
    ///
    /// Entries are trimmed and lowercased; blank entries are skipped.
    #[instrument(skip(words))]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        debug!(count = words.len(), "Dictionary built");
        Self { words }
    }

    /// Builds a dictionary from newline-separated text, one word per line.
    #[instrument(skip(text), fields(bytes = text.len()))]
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Iterates the words in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Lexicon for Dictionary {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
