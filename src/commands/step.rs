//! One-shot step command
//!
//! Applies a single guess round to a table and packages the outcome for
//! display.

use crate::core::Marks;
use crate::solver::{SolverStep, StepError};
use crate::table::{CandidateRecord, CandidateTable};

/// Outcome of one guess round
pub struct StepOutcome {
    pub guess: String,
    pub marks: Marks,
    pub candidates_before: usize,
    pub ranked: Vec<CandidateRecord>,
}

/// Apply one guess round against the given table
///
/// # Errors
///
/// Returns `StepError` when the guess or the marks string is malformed. An
/// empty surviving set is not an error.
pub fn run_step(
    table: &CandidateTable,
    solver: &SolverStep,
    guess: &str,
    marks: &str,
) -> Result<StepOutcome, StepError> {
    let parsed_marks = Marks::parse(marks)?;
    let ranked = solver.step(table, guess, marks)?;

    Ok(StepOutcome {
        guess: guess.to_lowercase(),
        marks: parsed_marks,
        candidates_before: table.len(),
        ranked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::Normalizer;
    use crate::wordlists::SEED_WORDS;

    fn seed_table() -> CandidateTable {
        CandidateTable::build(SEED_WORDS.iter().copied(), &Normalizer::default())
    }

    #[test]
    fn run_step_narrows_seed_list() {
        let table = seed_table();
        let outcome = run_step(&table, &SolverStep::default(), "mundo", "ggggg").unwrap();

        assert_eq!(outcome.candidates_before, 37);
        assert_eq!(outcome.ranked.len(), 1);
        assert_eq!(outcome.ranked[0].word().text(), "mundo");
    }

    #[test]
    fn run_step_ranked_output_is_ordered() {
        let table = seed_table();
        // 'a' present somewhere, not at position 0
        let outcome = run_step(&table, &SolverStep::default(), "azzzz", "y----").unwrap();

        assert!(!outcome.ranked.is_empty());
        for pair in outcome.ranked.windows(2) {
            let a = (pair[0].vowel_diversity(), pair[0].consonant_diversity());
            let b = (pair[1].vowel_diversity(), pair[1].consonant_diversity());
            assert!(a >= b);
        }
    }

    #[test]
    fn run_step_rejects_malformed_marks() {
        let table = seed_table();
        let result = run_step(&table, &SolverStep::default(), "mundo", "gg!gg");
        assert!(result.is_err());
    }

    #[test]
    fn run_step_empty_survivors_is_ok() {
        let table = seed_table();
        // No seed word is zzzzz, so an all-green claim leaves nothing
        let outcome = run_step(&table, &SolverStep::default(), "zzzzz", "ggggg").unwrap();
        assert!(outcome.ranked.is_empty());
    }
}
