//! Display functions for command results

use super::formatters::{row_to_emoji, tile_line};
use crate::commands::ScoreReport;
use colored::Colorize;

/// Print the transcript of a scored batch of guesses
pub fn print_score_report(report: &ScoreReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solution: {}",
        report.solution.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, guess) in report.guesses.iter().enumerate() {
        println!(
            "\nGuess {}: {}  {}",
            i + 1,
            tile_line(&guess.text, &guess.row),
            row_to_emoji(&guess.row)
        );
    }

    println!();
    if report.solved {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", report.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved in {} guesses", report.guesses.len())
                .red()
                .bold()
        );
    }
}
