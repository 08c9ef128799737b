//! Simple interactive CLI mode
//!
//! Line-based play loop without TUI: each entered line is one guess,
//! appended to the accumulated input and re-evaluated as a whole.

use crate::core::is_winning_row;
use crate::game::{Game, Phase, PlayInput, WordProvider};
use crate::output::tile_line;
use std::io::{self, Write};

/// Run the simple play loop until the game ends or the player quits
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<P: WordProvider>(game: &Game<P>) -> Result<(), String> {
    let config = game.config();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      rabble - guess the word                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word. You have {} attempts.",
        config.word_length, config.max_attempts
    );
    println!("Type 'quit' to give up.\n");

    let mut text = String::new();

    loop {
        let attempt = text.len() / config.word_length + 1;
        print!("Guess {attempt}/{}: ", config.max_attempts);
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        io::stdin()
            .read_line(&mut line)
            .map_err(|e| e.to_string())?;
        let line = line.trim().to_lowercase();

        if line == "quit" {
            println!(
                "\nThe word was {}.",
                game.solution().text().to_uppercase()
            );
            return Ok(());
        }

        if line.is_empty() || !line.chars().all(|c| c.is_ascii_lowercase()) {
            println!("Letters only, please.");
            continue;
        }

        if line.len() != config.word_length {
            println!("Guesses must be {} letters.", config.word_length);
            continue;
        }

        let candidate = format!("{text}{line}");
        match game.evaluate(PlayInput::Submit(&candidate)) {
            Phase::Rejected(reason) => {
                // Input stays as it was; the next line starts clean
                println!("{reason}");
            }
            Phase::NotStarted => {}
            Phase::InProgress(rows) => {
                text = candidate;
                print_board(&text, &rows, config.word_length);

                if rows.last().is_some_and(|row| is_winning_row(row)) {
                    println!("\n🎉 Got it in {}!", rows.len());
                    return Ok(());
                }
            }
            Phase::Finished(rows) => {
                text = candidate;
                print_board(&text, &rows, config.word_length);

                if rows.last().is_some_and(|row| is_winning_row(row)) {
                    println!("\n🎉 Got it in {}!", rows.len());
                } else {
                    println!(
                        "\nOut of attempts. The word was {}.",
                        game.solution().text().to_uppercase()
                    );
                }
                return Ok(());
            }
        }
    }
}

fn print_board(text: &str, rows: &[crate::core::ScoreRow], word_length: usize) {
    println!();
    for (i, row) in rows.iter().enumerate() {
        let letters: String = text
            .chars()
            .skip(i * word_length)
            .take(word_length)
            .collect();
        println!("  {}", tile_line(&letters, row));
    }
}
