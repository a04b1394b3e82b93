//! Candidate ranking
//!
//! Orders a filtered table by descending letter diversity: primary key
//! distinct-vowel count, secondary key distinct-consonant count. The sort is
//! stable, so ties keep table order and the output is deterministic.

use crate::table::{CandidateRecord, CandidateTable};
use std::cmp::Reverse;

/// Rank a table by descending `(vowel_diversity, consonant_diversity)`
///
/// # Examples
/// ```
/// use termo_solver::normalize::Normalizer;
/// use termo_solver::rank::rank;
/// use termo_solver::table::CandidateTable;
///
/// let table = CandidateTable::build(["radar", "ideia"], &Normalizer::default());
/// let ranked = rank(&table);
/// assert_eq!(ranked[0].word().text(), "ideia");
/// ```
#[must_use]
pub fn rank(table: &CandidateTable) -> Vec<CandidateRecord> {
    let mut records: Vec<CandidateRecord> = table.iter().cloned().collect();
    records.sort_by_key(|r| Reverse((r.vowel_diversity(), r.consonant_diversity())));
    records
}
