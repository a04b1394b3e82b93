//! Feedback filter pipeline
//!
//! Applies one guess round to a candidate table. Three stages run in order,
//! each a pure table-to-table narrowing:
//!
//! 1. green stage - positional template from Correct marks
//! 2. absent stage - removal of candidates containing eliminated letters
//! 3. present stage - containment plus disallowed-placement check for
//!    Present marks
//!
//! The absent stage has two selectable policies, see [`AbsentPolicy`].

use crate::core::{FeedbackMark, Marks, Word};
use crate::table::CandidateTable;
use rustc_hash::FxHashSet;

/// How the absent stage treats eliminated letters
///
/// Historically the absent filter only ran when the literal letter 'g'
/// happened to be among the absent-marked letters - a stray-variable
/// artifact, not a design choice. `Legacy` reproduces that behavior
/// bit-for-bit so old results stay comparable; `Strict` is the corrected
/// semantics and the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbsentPolicy {
    /// Every Absent mark is significant; letters also marked Correct or
    /// Present elsewhere in the guess are spared
    #[default]
    Strict,
    /// Historical parity: the stage runs only when 'g' is among the
    /// absent-marked letters, and spares nothing
    Legacy,
}

/// One-round feedback filter
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedbackFilter {
    policy: AbsentPolicy,
}

impl FeedbackFilter {
    /// Create a filter with the given absent-stage policy
    #[must_use]
    pub const fn new(policy: AbsentPolicy) -> Self {
        Self { policy }
    }

    /// The active absent-stage policy
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> AbsentPolicy {
        self.policy
    }

    /// Apply one guess round, producing the narrowed table
    ///
    /// The input table is never mutated. The result may be empty; that is a
    /// valid outcome, not an error.
    ///
    /// # Examples
    /// ```
    /// use termo_solver::core::{Marks, Word};
    /// use termo_solver::filter::FeedbackFilter;
    /// use termo_solver::normalize::Normalizer;
    /// use termo_solver::table::CandidateTable;
    ///
    /// let table = CandidateTable::build(["mundo", "olhar", "radar"], &Normalizer::default());
    /// let guess = Word::new("mundo").unwrap();
    /// let marks = Marks::parse("ggggg").unwrap();
    ///
    /// let narrowed = FeedbackFilter::default().apply(&table, &guess, &marks);
    /// assert_eq!(narrowed.len(), 1);
    /// ```
    #[must_use]
    pub fn apply(&self, table: &CandidateTable, guess: &Word, marks: &Marks) -> CandidateTable {
        let after_green = stage_green(table, guess, marks);
        let after_absent = stage_absent(&after_green, guess, marks, self.policy);
        stage_present(&after_absent, guess, marks)
    }
}

/// Positional template: `Some(letter)` constrains a slot, `None` is a wildcard
fn template_for(guess: &Word, marks: &Marks, wanted: FeedbackMark) -> [Option<u8>; 5] {
    let mut template = [None; 5];
    for (i, mark) in marks.iter() {
        if mark == wanted {
            template[i] = Some(guess.char_at(i));
        }
    }
    template
}

/// Check a word against a template at every constrained slot
fn matches_template(word: &Word, template: &[Option<u8>; 5]) -> bool {
    template
        .iter()
        .enumerate()
        .all(|(i, slot)| slot.is_none_or(|letter| word.char_at(i) == letter))
}

/// Keep candidates whose letters match every Correct-marked position
///
/// Duplicate letters marked Correct at two positions need no special
/// casing: the template constrains each slot independently.
fn stage_green(table: &CandidateTable, guess: &Word, marks: &Marks) -> CandidateTable {
    let template = template_for(guess, marks, FeedbackMark::Correct);
    table.retain_where(|record| matches_template(record.word(), &template))
}

/// Remove candidates containing eliminated letters
fn stage_absent(
    table: &CandidateTable,
    guess: &Word,
    marks: &Marks,
    policy: AbsentPolicy,
) -> CandidateTable {
    let absent: FxHashSet<u8> = marks
        .iter()
        .filter(|&(_, mark)| mark == FeedbackMark::Absent)
        .map(|(i, _)| guess.char_at(i))
        .collect();

    let eliminated: FxHashSet<u8> = match policy {
        AbsentPolicy::Legacy => {
            // Legacy quirk: without a literal 'g' among the absent
            // letters the stage does not run at all
            if !absent.contains(&b'g') {
                return table.clone();
            }
            absent
        }
        AbsentPolicy::Strict => {
            // A letter marked Correct or Present elsewhere in the guess is
            // known to be in the word; only pure-absent letters eliminate
            let kept: FxHashSet<u8> = marks
                .iter()
                .filter(|&(_, mark)| mark != FeedbackMark::Absent)
                .map(|(i, _)| guess.char_at(i))
                .collect();
            absent.difference(&kept).copied().collect()
        }
    };

    if eliminated.is_empty() {
        return table.clone();
    }

    table.retain_where(|record| !eliminated.iter().any(|&letter| record.word().has_letter(letter)))
}

/// Enforce Present marks: containment everywhere, placement nowhere
///
/// Skipped entirely when no mark is Present. Candidates must contain every
/// Present-marked letter, and must not place a Present-marked letter at the
/// very slot it was guessed - that placement would have been marked Correct.
fn stage_present(table: &CandidateTable, guess: &Word, marks: &Marks) -> CandidateTable {
    if !marks.has_present() {
        return table.clone();
    }

    let present_letters: FxHashSet<u8> = marks
        .iter()
        .filter(|&(_, mark)| mark == FeedbackMark::Present)
        .map(|(i, _)| guess.char_at(i))
        .collect();

    let contained = table.retain_where(|record| {
        present_letters
            .iter()
            .all(|&letter| record.word().has_letter(letter))
    });

    let placement = template_for(guess, marks, FeedbackMark::Present);
    contained.retain_where(|record| !matches_template(record.word(), &placement))
}
