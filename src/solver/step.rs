//! Solver step orchestrator
//!
//! The single externally consumed operation: given a candidate table, one
//! guess and its feedback, return the narrowed table ranked by letter
//! diversity.

use crate::core::{Marks, MarksError, Word, WordError};
use crate::filter::{AbsentPolicy, FeedbackFilter};
use crate::rank::rank;
use crate::table::{CandidateRecord, CandidateTable};
use std::fmt;

/// Error type for a solver step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    /// Guess word failed validation
    InvalidGuess(WordError),
    /// Feedback vector failed validation
    InvalidMarks(MarksError),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(e) => write!(f, "Invalid guess: {e}"),
            Self::InvalidMarks(e) => write!(f, "Invalid feedback: {e}"),
        }
    }
}

impl std::error::Error for StepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(e) => Some(e),
            Self::InvalidMarks(e) => Some(e),
        }
    }
}

impl From<WordError> for StepError {
    fn from(e: WordError) -> Self {
        Self::InvalidGuess(e)
    }
}

impl From<MarksError> for StepError {
    fn from(e: MarksError) -> Self {
        Self::InvalidMarks(e)
    }
}

/// One-round solver
///
/// Holds the filter configuration; every call filters from the table it is
/// given and never keeps state between rounds. Composing multiple rounds is
/// the caller's job: thread each narrowed table into the next call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolverStep {
    filter: FeedbackFilter,
}

impl SolverStep {
    /// Create a solver step with the given absent-stage policy
    #[must_use]
    pub const fn new(policy: AbsentPolicy) -> Self {
        Self {
            filter: FeedbackFilter::new(policy),
        }
    }

    /// Apply one guess round and rank the survivors
    ///
    /// An empty result is a valid outcome: no known candidate is consistent
    /// with the feedback.
    ///
    /// # Examples
    /// ```
    /// use termo_solver::normalize::Normalizer;
    /// use termo_solver::solver::SolverStep;
    /// use termo_solver::table::CandidateTable;
    ///
    /// let table = CandidateTable::build(["mundo", "olhar", "radar"], &Normalizer::default());
    /// let ranked = SolverStep::default().step(&table, "mundo", "ggggg").unwrap();
    /// assert_eq!(ranked[0].word().text(), "mundo");
    /// ```
    ///
    /// # Errors
    /// Returns `StepError::InvalidGuess` / `StepError::InvalidMarks` when
    /// the guess or the feedback vector is not exactly five symbols from the
    /// expected alphabets.
    pub fn step(
        &self,
        base: &CandidateTable,
        guess: &str,
        marks: &str,
    ) -> Result<Vec<CandidateRecord>, StepError> {
        let guess = Word::new(guess)?;
        let marks = Marks::parse(marks)?;
        Ok(self.step_typed(base, &guess, &marks))
    }

    /// Apply one guess round with pre-validated inputs
    #[must_use]
    pub fn step_typed(
        &self,
        base: &CandidateTable,
        guess: &Word,
        marks: &Marks,
    ) -> Vec<CandidateRecord> {
        let narrowed = self.filter.apply(base, guess, marks);
        rank(&narrowed)
    }

    /// Apply one guess round, returning the narrowed (unranked) table
    ///
    /// Used by multi-round callers that keep filtering before they rank.
    #[must_use]
    pub fn narrow(&self, base: &CandidateTable, guess: &Word, marks: &Marks) -> CandidateTable {
        self.filter.apply(base, guess, marks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::Normalizer;

    fn table(words: &[&str]) -> CandidateTable {
        CandidateTable::build(words.iter().copied(), &Normalizer::default())
    }

    #[test]
    fn step_all_green_returns_exact_word() {
        let base = table(&["mundo", "olhar", "radar"]);
        let ranked = SolverStep::default().step(&base, "MUNDO", "ggggg").unwrap();

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].word().text(), "mundo");
    }

    #[test]
    fn step_result_is_ranked() {
        let base = table(&["radar", "ideia", "porta", "mundo"]);
        let ranked = SolverStep::default().step(&base, "zzzzz", "-----").unwrap();

        for pair in ranked.windows(2) {
            let a = (pair[0].vowel_diversity(), pair[0].consonant_diversity());
            let b = (pair[1].vowel_diversity(), pair[1].consonant_diversity());
            assert!(a >= b);
        }
    }

    #[test]
    fn step_empty_table_returns_empty_not_error() {
        let base = table(&[]);
        let ranked = SolverStep::default().step(&base, "mundo", "gy--g").unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn step_no_survivors_returns_empty_not_error() {
        let base = table(&["mundo"]);
        // claim all of OLHAR is absent; mundo contains 'o'
        let ranked = SolverStep::default().step(&base, "olhar", "-----").unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn step_rejects_short_guess() {
        let base = table(&["mundo"]);
        let result = SolverStep::default().step(&base, "lua", "ggggg");
        assert!(matches!(
            result,
            Err(StepError::InvalidGuess(WordError::InvalidLength(3)))
        ));
    }

    #[test]
    fn step_rejects_bad_marks_length() {
        let base = table(&["mundo"]);
        let result = SolverStep::default().step(&base, "mundo", "gg");
        assert!(matches!(
            result,
            Err(StepError::InvalidMarks(MarksError::InvalidLength(2)))
        ));
    }

    #[test]
    fn step_rejects_marks_outside_alphabet() {
        let base = table(&["mundo"]);
        let result = SolverStep::default().step(&base, "mundo", "ggxgg");
        assert!(matches!(
            result,
            Err(StepError::InvalidMarks(MarksError::InvalidSymbol('x')))
        ));
    }

    #[test]
    fn step_does_not_mutate_base_table() {
        let base = table(&["mundo", "olhar", "radar"]);
        let solver = SolverStep::default();

        let _ = solver.step(&base, "mundo", "ggggg").unwrap();
        assert_eq!(base.len(), 3);

        // Same call against the same base is reproducible
        let a = solver.step(&base, "olhar", "-g---").unwrap();
        let b = solver.step(&base, "olhar", "-g---").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn narrow_threads_across_rounds() {
        let base = table(&["mundo", "mudar", "mural", "porta"]);
        let solver = SolverStep::default();

        // Round 1: 'm' correct at position 0
        let round1 = solver.narrow(
            &base,
            &Word::new("mzzzz").unwrap(),
            &Marks::parse("g----").unwrap(),
        );
        assert_eq!(round1.len(), 3);

        // Round 2: 'u' correct at position 1, 'l' present but not at slot 2
        let round2 = solver.narrow(
            &round1,
            &Word::new("zulzz").unwrap(),
            &Marks::parse("-gy--").unwrap(),
        );
        let words: Vec<_> = round2.iter().map(|r| r.word().text()).collect();
        assert_eq!(words, ["mural"]);
    }
}
