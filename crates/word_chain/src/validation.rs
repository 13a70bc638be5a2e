//! Word validation rules.
//!
//! Each rule is a named check. [`LegalWord`] runs them in a fixed order:
//! the two structural checks first, then the chain and dictionary lookups,
//! so the same bad input always produces the same rejection.

use crate::dictionary::Lexicon;
use crate::error::ChainError;
use crate::round::RoundState;
use tracing::instrument;

/// Trims and lowercases raw player input.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Counts positions where two words differ.
///
/// Returns `None` when the words have different lengths.
pub fn hamming_distance(a: &str, b: &str) -> Option<usize> {
    if a.chars().count() != b.chars().count() {
        return None;
    }
    Some(a.chars().zip(b.chars()).filter(|(x, y)| x != y).count())
}

/// Returns true if the words differ in exactly one position.
pub fn is_one_letter_apart(a: &str, b: &str) -> bool {
    hamming_distance(a, b) == Some(1)
}

// ─────────────────────────────────────────────────────────────
//  Individual rules
// ─────────────────────────────────────────────────────────────

/// Rule: candidate has as many letters as the current word.
pub struct LengthMatches;

impl LengthMatches {
    /// Fails with [`ChainError::LengthMismatch`] on a length difference.
    #[instrument(skip(round))]
    pub fn check(candidate: &str, round: &RoundState) -> Result<(), ChainError> {
        let expected = round.current_word().chars().count();
        let actual = candidate.chars().count();
        if expected != actual {
            Err(ChainError::LengthMismatch { expected, actual })
        } else {
            Ok(())
        }
    }
}

/// Rule: candidate changes exactly one letter of the current word.
pub struct SingleLetterChange;

impl SingleLetterChange {
    /// Fails with [`ChainError::TooManyOrNoChanges`] unless one letter differs.
    #[instrument(skip(round))]
    pub fn check(candidate: &str, round: &RoundState) -> Result<(), ChainError> {
        let current = round.current_word();
        match hamming_distance(current, candidate) {
            Some(1) => Ok(()),
            Some(changes) => Err(ChainError::TooManyOrNoChanges { changes }),
            None => Err(ChainError::LengthMismatch {
                expected: current.chars().count(),
                actual: candidate.chars().count(),
            }),
        }
    }
}

/// Rule: candidate is not already in the chain.
pub struct NotYetUsed;

impl NotYetUsed {
    /// Fails with [`ChainError::AlreadyUsed`] if the word is in the chain.
    #[instrument(skip(round))]
    pub fn check(candidate: &str, round: &RoundState) -> Result<(), ChainError> {
        if round.has_used(candidate) {
            Err(ChainError::AlreadyUsed(candidate.to_string()))
        } else {
            Ok(())
        }
    }
}

/// Rule: candidate is a dictionary word.
pub struct InDictionary;

impl InDictionary {
    /// Fails with [`ChainError::NotAWord`] if the lexicon lacks the word.
    #[instrument(skip(lexicon))]
    pub fn check<L: Lexicon + ?Sized>(candidate: &str, lexicon: &L) -> Result<(), ChainError> {
        if lexicon.contains(candidate) {
            Ok(())
        } else {
            Err(ChainError::NotAWord(candidate.to_string()))
        }
    }
}

/// Composite rule: a word may extend the chain if every rule passes.
pub struct LegalWord;

impl LegalWord {
    /// Validates an already-normalized candidate against the round.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule's rejection.
    #[instrument(skip(round, lexicon), fields(current = %round.current_word()))]
    pub fn check<L: Lexicon + ?Sized>(
        candidate: &str,
        round: &RoundState,
        lexicon: &L,
    ) -> Result<(), ChainError> {
        LengthMatches::check(candidate, round)?;
        SingleLetterChange::check(candidate, round)?;
        NotYetUsed::check(candidate, round)?;
        InDictionary::check(candidate, lexicon)?;
        Ok(())
    }
}
