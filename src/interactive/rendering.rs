//! TUI rendering with ratatui
//!
//! Lays out the guess grid and the surrounding panels.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Verdict;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - grid plus stats sidebar
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(34)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_stats(f, app, main_chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("RABBLE — guess the word")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, area);
}

fn tile_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Verdict::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Verdict::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        Verdict::Empty => Style::default().fg(Color::DarkGray),
    }
}

/// The max_attempts × word_length tile grid
///
/// Letters come from the typed input; tile states come from the phase. Any
/// cell the phase has no verdict for renders as `Empty`.
fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let word_length = app.config.word_length;
    let rows = app.phase.rows();
    let letters: Vec<char> = app.input.chars().collect();

    let mut lines: Vec<Line> = vec![Line::default()];
    for row_idx in 0..app.config.max_attempts {
        let mut spans = Vec::with_capacity(word_length * 2);
        for col_idx in 0..word_length {
            let verdict = rows
                .get(row_idx)
                .and_then(|row| row.get(col_idx))
                .copied()
                .unwrap_or(Verdict::Empty);
            let letter = letters
                .get(row_idx * word_length + col_idx)
                .map_or('·', |c| c.to_ascii_uppercase());

            spans.push(Span::styled(format!(" {letter} "), tile_style(verdict)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::default());
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Board "),
    );
    f.render_widget(grid, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let win_rate = if stats.total_games > 0 {
        100.0 * stats.games_won as f64 / stats.total_games as f64
    } else {
        0.0
    };

    let mut lines = vec![
        Line::from(format!("Played:   {}", stats.total_games)),
        Line::from(format!("Won:      {}", stats.games_won)),
        Line::from(format!("Win rate: {win_rate:.0}%")),
        Line::default(),
        Line::from(Span::styled(
            "Guess distribution",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let max_count = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (attempts, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let width = if max_count > 0 { count * 20 / max_count } else { 0 };
        lines.push(Line::from(vec![
            Span::raw(format!("{attempts}: ")),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Stats "),
    );
    f.render_widget(panel, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|message| {
            let style = match message.style {
                MessageStyle::Info => Style::default().fg(Color::Gray),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(Span::styled(message.text.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Messages "),
    );
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let hint = match app.input_mode {
        InputMode::Guessing => format!(
            "Attempt {}/{} — type letters, Enter submits, Backspace edits, Esc quits",
            app.attempts_used() + 1,
            app.config.max_attempts
        ),
        InputMode::GameOver => "'n' new game  •  'q' quit".to_string(),
    };

    let status = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
