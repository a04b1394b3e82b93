//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_solved, print_step_result};
