//! Display functions for command results

use super::formatters::diversity_summary;
use crate::core::Marks;
use crate::table::CandidateRecord;
use colored::Colorize;

/// How many ranked candidates to print before truncating
const MAX_ROWS: usize = 20;

/// Print the outcome of one guess round
pub fn print_step_result(guess: &str, marks: &Marks, before: usize, ranked: &[CandidateRecord]) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Guess: {} {}",
        guess.to_uppercase().bright_yellow().bold(),
        marks.to_emoji()
    );
    println!("Candidates: {} → {}", before, ranked.len());
    println!("{}", "─".repeat(60).cyan());

    if ranked.is_empty() {
        println!(
            "\n{}",
            "No candidates match this feedback.".red().bold()
        );
        println!("Check the marks, or retry from the seed list.");
        return;
    }

    println!();
    for (i, record) in ranked.iter().take(MAX_ROWS).enumerate() {
        println!(
            "  {:>2}. {}  {}",
            (i + 1).to_string().bright_black(),
            record.word().text().to_uppercase().bright_white().bold(),
            diversity_summary(record, 10).bright_black()
        );
    }

    if ranked.len() > MAX_ROWS {
        println!(
            "  {} more not shown",
            (ranked.len() - MAX_ROWS).to_string().bright_black()
        );
    }
}

/// Print the solved banner for the interactive session
pub fn print_solved(word: &str, rounds: usize) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        format!(
            "  Solved: {} in {} {}",
            word.to_uppercase(),
            rounds,
            if rounds == 1 { "round" } else { "rounds" }
        )
        .bright_green()
        .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
}
