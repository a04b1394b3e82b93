//! Solver orchestration
//!
//! One guess round in, ranked candidate list out.

mod step;

pub use step::{SolverStep, StepError};
