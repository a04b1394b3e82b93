//! Core domain types
//!
//! Words and per-round feedback marks.

mod feedback;
mod word;

pub use feedback::{FeedbackMark, Marks, MarksError};
pub use word::{Word, WordError};
