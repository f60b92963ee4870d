//! TUI rendering with ratatui
//!
//! Board, constraint panel and running statistics for watch mode.

use super::app::{App, GameState, MessageStyle};
use crate::core::{Constraints, Verdict};
use crate::solver::GUESS_BUDGET;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "🎯 WORDLE AUTOPLAYER - Watching the {} strategy",
        app.strategy.name
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3)])
        .split(area);

    render_board(f, app, chunks[0]);
    render_narrowing(f, app, chunks[1]);
}

fn tile_style(verdict: Verdict) -> Style {
    let bg = match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    };
    Style::default()
        .bg(bg)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app
        .history()
        .iter()
        .map(|record| {
            let mut spans = vec![Span::raw(format!("{:>2} ", record.attempt))];
            spans.extend(
                record
                    .word
                    .chars()
                    .iter()
                    .zip(record.feedback.verdicts())
                    .map(|(&letter, &verdict)| {
                        Span::styled(
                            format!(" {} ", char::from(letter.to_ascii_uppercase())),
                            tile_style(verdict),
                        )
                    }),
            );
            let detail = record.candidates.map_or_else(
                || format!("  {}", record.stage),
                |n| format!("  {} of {n}", record.stage),
            );
            spans.push(Span::styled(detail, Style::default().fg(Color::DarkGray)));
            Line::from(spans)
        })
        .collect();

    // Empty rows up to the budget
    for attempt in app.history().len() + 1..=GUESS_BUDGET {
        lines.push(Line::from(format!("{attempt:>2}  ·  ·  ·  ·  · ")));
    }

    let title = match app.state {
        GameState::Playing if app.paused => " Board (paused) ".to_string(),
        GameState::Playing => " Board ".to_string(),
        GameState::Won | GameState::Stuck => {
            format!(" Board | secret {} ", app.session.secret().text().to_uppercase())
        }
    };

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_narrowing(f: &mut Frame, app: &App, area: Rect) {
    let total = app.words.len().max(1);
    let remaining = app.candidate_count();
    let eliminated = total.saturating_sub(remaining);
    let progress_pct = u16::try_from(eliminated * 100 / total).unwrap_or(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{remaining} of {total} candidates remain"));

    f.render_widget(gauge, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Constraints
            Constraint::Min(4),    // Candidates
            Constraint::Min(6),    // Messages
        ])
        .split(area);

    render_constraints(f, app.session.constraints(), chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_constraints(f: &mut Frame, constraints: &Constraints, area: Rect) {
    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));

    let mut lines = vec![
        Line::from(vec![
            label("Fixed:   "),
            Span::styled(
                constraints.fixed_pattern().to_uppercase(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label("Present: "),
            Span::styled(
                Constraints::letters(constraints.present()).to_uppercase(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            label("Absent:  "),
            Span::raw(Constraints::letters(constraints.absent()).to_uppercase()),
        ]),
    ];

    for (i, excluded) in constraints.exclusions().iter().enumerate() {
        if !excluded.is_empty() {
            lines.push(Line::from(vec![
                label("Not at "),
                Span::raw(format!("{}: ", i + 1)),
                Span::raw(Constraints::letters(excluded).to_uppercase()),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Constraints ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.session.candidates();

    let content = if candidates.is_empty() {
        vec![Line::from("No candidates remaining")]
    } else if candidates.len() <= 12 {
        candidates
            .chunks(4)
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|w| format!("{:<7}", w.text().to_uppercase()))
                        .collect::<String>(),
                )
            })
            .collect()
    } else {
        vec![Line::from(format!("{} candidates remaining", candidates.len()))]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let mode_text = match app.state {
        GameState::Playing if app.paused => "Paused",
        GameState::Playing => "Playing",
        GameState::Won => "Solved",
        GameState::Stuck => "Stuck",
    };
    let mode = Paragraph::new(format!("Mode: {mode_text}")).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats = &app.stats;
    let stats_text = format!(
        "Games: {} | Won: {} | Avg: {:.2}",
        stats.games_played,
        stats.games_won,
        stats.average_guesses()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let distribution: String = app
        .stats
        .guess_distribution
        .iter()
        .map(|(guesses, count)| format!("{guesses}:{count} "))
        .collect();
    let distribution = Paragraph::new(distribution).alignment(Alignment::Center);
    f.render_widget(distribution, chunks[2]);

    let help = Paragraph::new("space: Pause | s: Step | n: New | q: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
