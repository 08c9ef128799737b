//! TUI application state and logic

use crate::core::{Word, is_winning_row};
use crate::game::{
    FixedWordProvider, Game, GameConfig, Phase, PlayInput, RandomWordProvider, WordProvider,
};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub config: GameConfig,
    game: Game<FixedWordProvider>,
    pool: Vec<Word>,
    forced: Option<Word>,
    /// All accepted and pending letters, in typing order
    pub input: String,
    /// Length of the input prefix accepted by the last successful submit
    pub committed: usize,
    pub phase: Phase,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by attempt count; index 0 unused
    pub guess_distribution: Vec<usize>,
}

impl App {
    /// Create the app with a fresh game session
    ///
    /// The secret is `forced` when given, otherwise a random pick from
    /// `pool`.
    ///
    /// # Errors
    /// Fails when no forced secret is given and the pool is empty.
    pub fn new(config: GameConfig, pool: Vec<Word>, forced: Option<Word>) -> Result<Self, String> {
        let secret = pick_secret(&pool, forced.as_ref())?;
        let game = Game::new(FixedWordProvider::new(secret), config);
        let phase = game.evaluate(PlayInput::Typing(""));

        let mut app = Self {
            config,
            game,
            pool,
            forced,
            input: String::new(),
            committed: 0,
            phase,
            messages: Vec::new(),
            stats: Statistics {
                guess_distribution: vec![0; config.max_attempts + 1],
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.add_message(
            &format!(
                "Guess the {}-letter word in {} tries. Type letters, Enter submits.",
                config.word_length, config.max_attempts
            ),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Letters typed into the current, not yet submitted row
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.input.len() - self.committed
    }

    /// Number of rows already accepted
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.committed / self.config.word_length
    }

    /// The secret, for end-of-game display
    #[must_use]
    pub fn solution(&self) -> Word {
        self.game.solution()
    }

    pub fn push_letter(&mut self, c: char) {
        if self.input_mode != InputMode::Guessing {
            return;
        }
        if self.pending_len() >= self.config.word_length {
            self.add_message("Row full — press Enter to submit", MessageStyle::Error);
            return;
        }
        self.input.push(c.to_ascii_lowercase());
        self.phase = self.game.evaluate(PlayInput::Typing(&self.input));
    }

    pub fn backspace(&mut self) {
        // Committed rows are final; only the pending tail is editable
        if self.input.len() > self.committed {
            self.input.pop();
            self.phase = self.game.evaluate(PlayInput::Typing(&self.input));
        }
    }

    pub fn submit(&mut self) {
        if self.input_mode != InputMode::Guessing {
            return;
        }
        if self.pending_len() != self.config.word_length {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        }

        let phase = self.game.evaluate(PlayInput::Submit(&self.input));
        match &phase {
            Phase::Rejected(reason) => {
                // Keep the previous renderable phase; the rejection is
                // transient and only worth a message
                let text = reason.to_string();
                self.add_message(&text, MessageStyle::Error);
                return;
            }
            Phase::InProgress(rows) => {
                self.committed = self.input.len();
                if rows.last().is_some_and(|row| is_winning_row(row)) {
                    self.win(rows.len());
                } else {
                    let left = self.config.max_attempts - rows.len();
                    self.add_message(
                        &format!("{left} attempts left"),
                        MessageStyle::Info,
                    );
                }
            }
            Phase::Finished(rows) => {
                self.committed = self.input.len();
                if rows.last().is_some_and(|row| is_winning_row(row)) {
                    self.win(rows.len());
                } else {
                    self.lose();
                }
            }
            Phase::NotStarted => {}
        }
        self.phase = phase;
    }

    fn win(&mut self, attempts: usize) {
        self.stats.total_games += 1;
        self.stats.games_won += 1;
        if let Some(slot) = self.stats.guess_distribution.get_mut(attempts) {
            *slot += 1;
        }

        self.input_mode = InputMode::GameOver;

        let celebration = match attempts {
            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
            3 => "✨ SPLENDID! Three guesses! ✨",
            4 => "👏 GREAT JOB! Four guesses! 👏",
            5 => "🎉 NICE WORK! Five guesses! 🎉",
            6 => "😅 PHEW! Got it in six! 😅",
            _ => "🎊 SOLVED! 🎊",
        };

        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    fn lose(&mut self) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;
        let solution = self.solution().text().to_uppercase();
        self.add_message(
            &format!("Out of attempts! The word was {solution}."),
            MessageStyle::Error,
        );
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        match pick_secret(&self.pool, self.forced.as_ref()) {
            Ok(secret) => {
                self.game = Game::new(FixedWordProvider::new(secret), self.config);
                self.input.clear();
                self.committed = 0;
                self.phase = self.game.evaluate(PlayInput::Typing(""));
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(text) => self.add_message(&text, MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

fn pick_secret(pool: &[Word], forced: Option<&Word>) -> Result<Word, String> {
    if let Some(word) = forced {
        return Ok(word.clone());
    }
    RandomWordProvider::choose(pool)
        .map(|provider| provider.get())
        .ok_or_else(|| "Word pool is empty".to_string())
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // Game over; ignore other keys
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                        app.push_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.backspace();
                    }
                    KeyCode::Enter => {
                        app.submit();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(secret: &str) -> App {
        App::new(
            GameConfig::new(2, 3),
            Vec::new(),
            Some(Word::new(secret).unwrap()),
        )
        .unwrap()
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.push_letter(c);
        }
    }

    #[test]
    fn typing_updates_phase_per_keystroke() {
        let mut app = app("sam");
        type_word(&mut app, "sa");

        assert_eq!(app.pending_len(), 2);
        assert_eq!(app.phase.rows().len(), 1);
        assert_eq!(app.phase.rows()[0].len(), 3);
    }

    #[test]
    fn push_past_row_length_is_blocked() {
        let mut app = app("sam");
        type_word(&mut app, "samx");

        assert_eq!(app.input, "sam");
        assert_eq!(app.pending_len(), 3);
    }

    #[test]
    fn backspace_stops_at_committed_rows() {
        let mut app = app("sam");
        type_word(&mut app, "sat");
        app.submit();
        assert_eq!(app.committed, 3);

        app.backspace();
        assert_eq!(app.input, "sat"); // committed row is final
    }

    #[test]
    fn winning_guess_ends_the_session() {
        let mut app = app("sam");
        type_word(&mut app, "sam");
        app.submit();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
    }

    #[test]
    fn exhausting_attempts_loses() {
        let mut app = app("sam");
        type_word(&mut app, "tas");
        app.submit();
        type_word(&mut app, "tas");
        app.submit();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn short_submit_is_refused_without_state_change() {
        let mut app = app("sam");
        type_word(&mut app, "sa");
        app.submit();

        assert_eq!(app.committed, 0);
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn new_game_resets_board_but_keeps_stats() {
        let mut app = app("sam");
        type_word(&mut app, "sam");
        app.submit();
        app.new_game();

        assert_eq!(app.input, "");
        assert_eq!(app.committed, 0);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.stats.games_won, 1);
    }
}
