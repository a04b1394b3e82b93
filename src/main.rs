//! Termo Solver - CLI
//!
//! Candidate-narrowing assistant for Portuguese five-letter word games.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use termo_solver::{
    commands::{run_play, run_step},
    filter::AbsentPolicy,
    normalize::Normalizer,
    output::print_step_result,
    solver::SolverStep,
    table::CandidateTable,
    wordlists::{SEED_WORDS, loader::load_tokens},
};

#[derive(Parser)]
#[command(
    name = "termo-solver",
    about = "Narrows and ranks candidates for Portuguese five-letter word games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'seed' (embedded 37-word list) or a path to a UTF-8 text file
    #[arg(short = 'w', long, global = true, default_value = "seed")]
    wordlist: String,

    /// Absent-letter policy: strict (corrected) or legacy (historical parity)
    #[arg(short = 'a', long, global = true, value_enum, default_value = "strict")]
    absent_policy: PolicyArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Every absent mark eliminates its letter
    Strict,
    /// Absent filter only runs when 'g' is among the absent letters
    Legacy,
}

impl From<PolicyArg> for AbsentPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Strict => Self::Strict,
            PolicyArg::Legacy => Self::Legacy,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive multi-round session (default)
    Play,

    /// Apply a single guess round and print the ranked survivors
    Step {
        /// The word you guessed
        guess: String,

        /// Feedback string, e.g. "gy--g" or "🟩🟨⬛⬛🟩"
        marks: String,
    },
}

/// Build the base candidate table from the -w flag
fn load_table(wordlist_mode: &str) -> Result<CandidateTable> {
    let normalizer = Normalizer::default();

    let table = match wordlist_mode {
        "seed" => CandidateTable::build(SEED_WORDS.iter().copied(), &normalizer),
        path => {
            let tokens = load_tokens(path)
                .with_context(|| format!("Failed to read wordlist file: {path}"))?;
            CandidateTable::build(tokens, &normalizer)
        }
    };

    anyhow::ensure!(
        !table.is_empty(),
        "Wordlist '{wordlist_mode}' produced no valid candidates"
    );

    Ok(table)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let table = load_table(&cli.wordlist)?;
    let solver = SolverStep::new(cli.absent_policy.into());

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&table, &solver).map_err(|e| anyhow::anyhow!(e)),
        Commands::Step { guess, marks } => {
            let outcome = run_step(&table, &solver, &guess, &marks)?;
            print_step_result(
                &outcome.guess,
                &outcome.marks,
                outcome.candidates_before,
                &outcome.ranked,
            );
            Ok(())
        }
    }
}
