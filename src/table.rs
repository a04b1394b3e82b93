//! Candidate table
//!
//! The in-memory collection of screened dictionary words, each annotated
//! with vowel/consonant presence bitsets and diversity counts. Built once at
//! startup; every filter stage derives a new table and leaves its input
//! untouched.

use crate::core::Word;
use crate::normalize::Normalizer;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Vowel alphabet, bit order of `vowel_presence`
pub const VOWELS: &[u8; 5] = b"aeiou";

/// Consonant alphabet, bit order of `consonant_presence`
pub const CONSONANTS: &[u8; 19] = b"bcdfghjklmnpqrstvxz";

/// A candidate word annotated with letter-diversity bookkeeping
///
/// Invariant: `vowel_diversity == vowel_presence.count_ones()` and
/// `consonant_diversity == consonant_presence.count_ones()`, enforced by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    word: Word,
    vowel_presence: u8,
    consonant_presence: u32,
    vowel_diversity: u8,
    consonant_diversity: u8,
}

impl CandidateRecord {
    /// Annotate a word with its presence bitsets and diversity counts
    #[must_use]
    pub fn new(word: Word) -> Self {
        let mut vowel_presence = 0u8;
        for (bit, &vowel) in VOWELS.iter().enumerate() {
            if word.has_letter(vowel) {
                vowel_presence |= 1 << bit;
            }
        }

        let mut consonant_presence = 0u32;
        for (bit, &consonant) in CONSONANTS.iter().enumerate() {
            if word.has_letter(consonant) {
                consonant_presence |= 1 << bit;
            }
        }

        Self {
            word,
            vowel_presence,
            consonant_presence,
            vowel_diversity: vowel_presence.count_ones() as u8,
            consonant_diversity: consonant_presence.count_ones() as u8,
        }
    }

    /// The candidate word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Bitset over [`VOWELS`]: bit i set iff the i-th vowel occurs
    #[inline]
    #[must_use]
    pub const fn vowel_presence(&self) -> u8 {
        self.vowel_presence
    }

    /// Bitset over [`CONSONANTS`]: bit i set iff the i-th consonant occurs
    #[inline]
    #[must_use]
    pub const fn consonant_presence(&self) -> u32 {
        self.consonant_presence
    }

    /// Number of distinct vowels in the word
    #[inline]
    #[must_use]
    pub const fn vowel_diversity(&self) -> u8 {
        self.vowel_diversity
    }

    /// Number of distinct consonants in the word
    #[inline]
    #[must_use]
    pub const fn consonant_diversity(&self) -> u8 {
        self.consonant_diversity
    }
}

/// Set of candidate records, keyed by word
///
/// Records keep input order; callers must not rely on it - the ranker
/// imposes the only guaranteed ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateTable {
    records: Vec<CandidateRecord>,
}

impl CandidateTable {
    /// Build a table from raw dictionary entries
    ///
    /// Entries failing the normalizer screen are skipped; survivors are
    /// lowercased and deduplicated, first occurrence wins. Deterministic for
    /// a given input sequence.
    ///
    /// # Examples
    /// ```
    /// use termo_solver::normalize::Normalizer;
    /// use termo_solver::table::CandidateTable;
    ///
    /// let raw = ["MUNDO", "mundo", "avião", "lua"];
    /// let table = CandidateTable::build(raw, &Normalizer::default());
    /// assert_eq!(table.len(), 1);
    /// ```
    #[must_use]
    pub fn build<I, S>(raw_words: I, normalizer: &Normalizer) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut records = Vec::new();

        for raw in raw_words {
            let lowered = raw.as_ref().to_lowercase();
            if !normalizer.is_candidate(&lowered) {
                continue;
            }
            if !seen.insert(lowered.clone()) {
                continue;
            }
            // Normalizer guarantees 5 ASCII lowercase letters
            if let Ok(word) = Word::new(lowered) {
                records.push(CandidateRecord::new(word));
            }
        }

        Self { records }
    }

    /// Build a table from already-validated words, skipping the screen
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let records = words
            .into_iter()
            .filter(|w| seen.insert(w.text().to_string()))
            .map(CandidateRecord::new)
            .collect();
        Self { records }
    }

    /// Derive a new table keeping only records satisfying the predicate
    ///
    /// The input table is untouched; record order is preserved.
    #[must_use]
    pub fn retain_where<P>(&self, predicate: P) -> Self
    where
        P: Fn(&CandidateRecord) -> bool + Sync,
    {
        let records = self
            .records
            .par_iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect();
        Self { records }
    }

    /// Number of candidates in the table
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the table has no candidates left
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records
    pub fn iter(&self) -> impl Iterator<Item = &CandidateRecord> {
        self.records.iter()
    }

    /// The records as a slice
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[CandidateRecord] {
        &self.records
    }

    /// Check whether a word is present in the table
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.records.iter().any(|r| r.word().text() == word)
    }
}

impl FromIterator<CandidateRecord> for CandidateTable {
    fn from_iter<I: IntoIterator<Item = CandidateRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
