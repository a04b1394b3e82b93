//! Termo Solver
//!
//! A candidate-narrowing assistant for Portuguese five-letter word games
//! (Termo / Wordle-style). Feed it each guess and the per-letter feedback
//! the game returned; it filters the dictionary and ranks the survivors by
//! letter diversity.
//!
//! # Quick Start
//!
//! ```rust
//! use termo_solver::normalize::Normalizer;
//! use termo_solver::solver::SolverStep;
//! use termo_solver::table::CandidateTable;
//! use termo_solver::wordlists::SEED_WORDS;
//!
//! let table = CandidateTable::build(SEED_WORDS.iter().copied(), &Normalizer::default());
//!
//! // 'm' green at position 0, everything else black
//! let ranked = SolverStep::default().step(&table, "mzzzz", "g----").unwrap();
//! assert!(ranked.iter().all(|r| r.word().text().starts_with('m')));
//! ```

// Core domain types
pub mod core;

// Dictionary entry screening
pub mod normalize;

// Candidate table and letter bookkeeping
pub mod table;

// Feedback filter pipeline
pub mod filter;

// Diversity ranking
pub mod rank;

// Step orchestration
pub mod solver;

// Word list sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
