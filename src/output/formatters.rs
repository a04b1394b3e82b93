//! Formatting utilities for terminal output

use crate::table::CandidateRecord;

/// Create a filled/empty bar string
#[must_use]
pub fn create_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width) / max
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a record's diversity scores as "v3 c2" plus a bar
///
/// The bar spans the combined diversity over its maximum (5 distinct
/// letters in a 5-letter word).
#[must_use]
pub fn diversity_summary(record: &CandidateRecord, width: usize) -> String {
    let total = usize::from(record.vowel_diversity()) + usize::from(record.consonant_diversity());
    format!(
        "v{} c{} [{}]",
        record.vowel_diversity(),
        record.consonant_diversity(),
        create_bar(total, 5, width)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn bar_empty() {
        assert_eq!(create_bar(0, 5, 10), "░░░░░░░░░░");
    }

    #[test]
    fn bar_full() {
        assert_eq!(create_bar(5, 5, 10), "██████████");
    }

    #[test]
    fn bar_partial() {
        assert_eq!(create_bar(2, 4, 10), "█████░░░░░");
    }

    #[test]
    fn bar_zero_max() {
        assert_eq!(create_bar(3, 0, 4), "░░░░");
    }

    #[test]
    fn diversity_summary_counts() {
        let record = CandidateRecord::new(Word::new("ideia").unwrap());
        let summary = diversity_summary(&record, 5);
        assert!(summary.starts_with("v3 c1"));
    }
}
