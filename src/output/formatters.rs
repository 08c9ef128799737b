//! Formatting utilities for terminal output

use crate::core::Verdict;
use colored::Colorize;

/// Format a score row as an emoji string
///
/// `Empty` renders as a white square: not yet scored.
#[must_use]
pub fn row_to_emoji(row: &[Verdict]) -> String {
    row.iter()
        .map(|&verdict| match verdict {
            Verdict::Correct => '🟩',
            Verdict::Present => '🟨',
            Verdict::Absent => '⬛',
            Verdict::Empty => '⬜',
        })
        .collect()
}

/// Format a guess as colored letter tiles, one per verdict
///
/// Positions past the end of `letters` (lenient blanks) render as dots.
#[must_use]
pub fn tile_line(letters: &str, row: &[Verdict]) -> String {
    let chars: Vec<char> = letters.chars().collect();

    row.iter()
        .enumerate()
        .map(|(i, &verdict)| {
            let letter = chars
                .get(i)
                .map_or("·".to_string(), |c| c.to_ascii_uppercase().to_string());
            let tile = format!(" {letter} ");
            match verdict {
                Verdict::Correct => tile.black().on_green().bold().to_string(),
                Verdict::Present => tile.black().on_yellow().bold().to_string(),
                Verdict::Absent => tile.white().on_bright_black().to_string(),
                Verdict::Empty => tile.dimmed().to_string(),
            }
        })
        .collect()
}
