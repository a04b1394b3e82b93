//! Interactive session
//!
//! Text-based multi-round loop: enter your guess and the feedback the game
//! gave you, get back the ranked surviving candidates. The narrowed table is
//! threaded from round to round; `undo` pops back one round.

use crate::core::{Marks, Word};
use crate::output::{print_solved, print_step_result};
use crate::rank::rank;
use crate::solver::SolverStep;
use crate::table::CandidateTable;
use std::io::{self, Write as _};

/// Run the interactive session over stdin/stdout
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_play(base: &CandidateTable, solver: &SolverStep) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Termo Solver - Interactive Session                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter each guess you played and the feedback the game returned:");
    println!("  - G/g/🟩 for green (correct position)");
    println!("  - Y/y/🟨 for yellow (in the word, wrong position)");
    println!("  - -/_/⬛ for black (not in the word)\n");
    println!("Commands: 'quit' to exit, 'new' to restart, 'undo' to undo a round\n");
    println!("Starting with {} candidates\n", base.len());

    // Stack of tables, one entry per completed round; top is current
    let mut tables: Vec<CandidateTable> = vec![base.clone()];
    let mut round = 1;

    loop {
        let current = tables.last().cloned().unwrap_or_else(|| base.clone());

        if current.is_empty() {
            println!("\nNo candidates remain. The feedback may be inconsistent.");
            println!("Type 'undo' to go back a round, or 'new' to restart.\n");
        }

        let guess = match read_input(&format!("Round {round} guess"))? {
            Input::Command(Command::Quit) => return Ok(()),
            Input::Command(Command::New) => {
                tables.truncate(1);
                round = 1;
                println!("\nRestarted with {} candidates\n", base.len());
                continue;
            }
            Input::Command(Command::Undo) => {
                if tables.len() > 1 {
                    tables.pop();
                    round -= 1;
                    println!("Back to round {round}\n");
                } else {
                    println!("Nothing to undo\n");
                }
                continue;
            }
            Input::Text(text) => match Word::new(text) {
                Ok(word) => word,
                Err(e) => {
                    println!("Invalid guess: {e}\n");
                    continue;
                }
            },
        };

        let marks = match read_input("Feedback (G/Y/-)")? {
            Input::Command(Command::Quit) => return Ok(()),
            Input::Command(Command::New) => {
                tables.truncate(1);
                round = 1;
                println!("\nRestarted with {} candidates\n", base.len());
                continue;
            }
            Input::Command(Command::Undo) => continue,
            Input::Text(text) => match Marks::parse(&text) {
                Ok(marks) => marks,
                Err(e) => {
                    println!("Invalid feedback: {e}\n");
                    continue;
                }
            },
        };

        if marks.is_perfect() {
            print_solved(guess.text(), round);
            return Ok(());
        }

        let narrowed = solver.narrow(&current, &guess, &marks);
        let ranked = rank(&narrowed);
        print_step_result(guess.text(), &marks, current.len(), &ranked);
        println!();

        tables.push(narrowed);
        round += 1;
    }
}

enum Command {
    Quit,
    New,
    Undo,
}

enum Input {
    Command(Command),
    Text(String),
}

/// Read one trimmed line, mapping session keywords to commands
fn read_input(prompt: &str) -> Result<Input, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .map_err(|e| e.to_string())?;

    // EOF ends the session
    if bytes == 0 {
        return Ok(Input::Command(Command::Quit));
    }

    let trimmed = line.trim().to_string();
    Ok(match trimmed.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Input::Command(Command::Quit),
        "new" | "n" => Input::Command(Command::New),
        "undo" | "u" => Input::Command(Command::Undo),
        _ => Input::Text(trimmed),
    })
}
