//! rabble - CLI
//!
//! Terminal word-guessing game with TUI and plain-text play modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rabble::{
    commands::{run_simple, score_guesses},
    core::Word,
    game::{FixedWordProvider, Game, GameConfig, RandomWordProvider, WordProvider},
    output::print_score_report,
    wordlists::{WORDS, loader::{load_from_file, words_from_slice}},
};

#[derive(Parser)]
#[command(
    name = "rabble",
    about = "Terminal word-guessing game with duplicate-aware letter scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Maximum number of guesses
    #[arg(short = 'a', long, global = true, default_value_t = 6)]
    attempts: usize,

    /// Number of letters per word
    #[arg(short = 'l', long, global = true, default_value_t = 5)]
    length: usize,

    /// Path to a custom word list (one word per line)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Play against a fixed secret word instead of a random pick
    #[arg(long, global = true)]
    secret: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain-text play mode without TUI
    Simple,

    /// Score guesses against a known solution and exit
    Score {
        /// The solution word
        solution: String,

        /// Guesses to score, in order
        guesses: Vec<String>,
    },
}

/// Load the secret-word pool for the configured word length
fn load_pool(wordlist: Option<&str>, word_length: usize) -> Result<Vec<Word>> {
    let pool = match wordlist {
        Some(path) => load_from_file(path, word_length)
            .with_context(|| format!("Failed to read word list {path}"))?,
        None => words_from_slice(WORDS, word_length),
    };
    Ok(pool)
}

/// Validate the --secret flag against the configured word length
fn parse_secret(secret: Option<&str>, word_length: usize) -> Result<Option<Word>> {
    let Some(text) = secret else {
        return Ok(None);
    };
    let word = Word::new(text).map_err(|e| anyhow::anyhow!(e))?;
    if word.len() != word_length {
        bail!(
            "Secret word must be {word_length} letters, got {}",
            word.len()
        );
    }
    Ok(Some(word))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Score { solution, guesses } => {
            let report = score_guesses(&solution, &guesses).map_err(|e| anyhow::anyhow!(e))?;
            print_score_report(&report);
            Ok(())
        }
        Commands::Play => {
            let config = GameConfig::new(cli.attempts, cli.length);
            let pool = load_pool(cli.wordlist.as_deref(), cli.length)?;
            let forced = parse_secret(cli.secret.as_deref(), cli.length)?;

            let app = rabble::interactive::App::new(config, pool, forced)
                .map_err(|e| anyhow::anyhow!(e))?;
            rabble::interactive::run_tui(app)
        }
        Commands::Simple => {
            let config = GameConfig::new(cli.attempts, cli.length);
            let pool = load_pool(cli.wordlist.as_deref(), cli.length)?;
            let forced = parse_secret(cli.secret.as_deref(), cli.length)?;

            let secret = match forced {
                Some(word) => word,
                None => RandomWordProvider::choose(&pool)
                    .map(|provider| provider.get())
                    .with_context(|| {
                        format!("No words of length {} in the word list", cli.length)
                    })?,
            };

            let game = Game::new(FixedWordProvider::new(secret), config);
            run_simple(&game).map_err(|e| anyhow::anyhow!(e))
        }
    }
}
