//! Word list sources
//!
//! The embedded seed list and the dictionary file loader.

mod embedded;
pub mod loader;

pub use embedded::{SEED_WORDS, SEED_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::Normalizer;
    use crate::table::CandidateTable;

    #[test]
    fn seed_count_matches_const() {
        assert_eq!(SEED_WORDS.len(), SEED_WORDS_COUNT);
        assert_eq!(SEED_WORDS_COUNT, 37);
    }

    #[test]
    fn seed_words_are_five_uppercase_letters() {
        for &word in SEED_WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn seed_words_all_pass_screening() {
        // Every seed word must survive the builder; the seed list is the
        // fallback when file loading is unavailable
        let table = CandidateTable::build(SEED_WORDS.iter().copied(), &Normalizer::default());
        assert_eq!(table.len(), SEED_WORDS_COUNT);
    }

    #[test]
    fn seed_words_have_no_duplicates() {
        let unique: std::collections::HashSet<_> = SEED_WORDS.iter().collect();
        assert_eq!(unique.len(), SEED_WORDS.len());
    }
}
