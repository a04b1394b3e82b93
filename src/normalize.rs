//! Dictionary entry screening
//!
//! Decides which raw dictionary entries qualify as solver candidates. Raw
//! word lists are full-language dumps, so entries are screened for length,
//! diacritics, casing artifacts (acronyms, capitalized proper nouns) and
//! letters outside the working alphabet.

use deunicode::deunicode;
use rustc_hash::FxHashSet;

/// Letters excluded from the default working alphabet
///
/// Portuguese vocabulary has no native words with 'w' or 'y'.
pub const DEFAULT_EXCLUDED_LETTERS: &[char] = &['w', 'y'];

/// Candidate predicate over raw dictionary entries
///
/// The excluded-letter set is configurable so the screening can be
/// retargeted to other languages.
#[derive(Debug, Clone)]
pub struct Normalizer {
    excluded: FxHashSet<char>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_LETTERS.iter().copied())
    }
}

impl Normalizer {
    /// Create a normalizer with a custom excluded-letter set
    pub fn new(excluded: impl IntoIterator<Item = char>) -> Self {
        Self {
            excluded: excluded.into_iter().collect(),
        }
    }

    /// Check whether a raw dictionary entry qualifies as a candidate
    ///
    /// An entry qualifies iff all of:
    /// - exactly 5 code points long,
    /// - carries no diacritics (its transliterated form equals itself),
    /// - is not entirely uppercase (acronym screen),
    /// - equals its own lowercase form (capitalized proper-noun screen),
    /// - contains no excluded letter.
    ///
    /// Pure predicate, no side effects.
    ///
    /// # Examples
    /// ```
    /// use termo_solver::normalize::Normalizer;
    ///
    /// let normalizer = Normalizer::default();
    /// assert!(normalizer.is_candidate("mundo"));
    /// assert!(!normalizer.is_candidate("avião"));  // diacritics
    /// assert!(!normalizer.is_candidate("Porto"));  // capitalized
    /// assert!(!normalizer.is_candidate("yacht"));  // excluded letter
    /// ```
    #[must_use]
    pub fn is_candidate(&self, raw: &str) -> bool {
        if raw.chars().count() != 5 {
            return false;
        }

        if deunicode(raw) != raw {
            return false;
        }

        // Acronym screen. Vacuous when callers lowercase before screening,
        // kept so the predicate is correct on raw dictionary text too.
        if !raw.is_empty() && raw == raw.to_uppercase() {
            return false;
        }

        if raw != raw.to_lowercase() {
            return false;
        }

        !raw.chars()
            .any(|c| self.excluded.contains(&c.to_ascii_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_five_letter_word() {
        let normalizer = Normalizer::default();
        assert!(normalizer.is_candidate("mundo"));
        assert!(normalizer.is_candidate("porta"));
        assert!(normalizer.is_candidate("radar"));
    }

    #[test]
    fn rejects_wrong_length() {
        let normalizer = Normalizer::default();
        assert!(!normalizer.is_candidate("lua"));
        assert!(!normalizer.is_candidate("palavra"));
        assert!(!normalizer.is_candidate(""));
    }

    #[test]
    fn length_is_code_points_not_bytes() {
        let normalizer = Normalizer::default();
        // 5 code points, 7 bytes; must fail on diacritics, not length
        assert!(!normalizer.is_candidate("ações"));
        // 4 code points with one accented letter
        assert!(!normalizer.is_candidate("maçã"));
    }

    #[test]
    fn rejects_diacritics() {
        let normalizer = Normalizer::default();
        assert!(!normalizer.is_candidate("avião"));
        assert!(!normalizer.is_candidate("túnel"));
        assert!(normalizer.is_candidate("comeu"));
    }

    #[test]
    fn rejects_acronyms() {
        let normalizer = Normalizer::default();
        assert!(!normalizer.is_candidate("UNESP"));
        assert!(!normalizer.is_candidate("CPFMG"));
    }

    #[test]
    fn rejects_capitalized_proper_nouns() {
        let normalizer = Normalizer::default();
        assert!(!normalizer.is_candidate("Porto"));
        assert!(!normalizer.is_candidate("Bahia"));
    }

    #[test]
    fn rejects_excluded_letters() {
        let normalizer = Normalizer::default();
        assert!(!normalizer.is_candidate("yacht"));
        assert!(!normalizer.is_candidate("shows"));
        assert!(!normalizer.is_candidate("kiwis"));
    }

    #[test]
    fn custom_excluded_letters() {
        let normalizer = Normalizer::new(['k', 'q']);
        assert!(!normalizer.is_candidate("kayak"));
        assert!(!normalizer.is_candidate("quota"));
        // 'w'/'y' no longer excluded under the custom alphabet
        assert!(normalizer.is_candidate("yacht"));
    }

    #[test]
    fn empty_exclusion_set() {
        let normalizer = Normalizer::new([]);
        assert!(normalizer.is_candidate("yacht"));
        assert!(normalizer.is_candidate("mundo"));
    }
}
