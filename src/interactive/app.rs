//! TUI application state and logic
//!
//! Watch mode: the solver plays game after game against random secrets from
//! the word list while the board and its accumulated knowledge are drawn live.

use crate::core::Word;
use crate::solver::{GUESS_BUDGET, GuessRecord, Session, SolveConfig, SolveError, StrategyConfig};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::BTreeMap;
use std::io;
use std::time::{Duration, Instant};

/// Delay between automatic guesses
pub const TICK_RATE: Duration = Duration::from_millis(600);

/// Application state
pub struct App<'w> {
    pub words: &'w WordList,
    pub strategy: StrategyConfig,
    pub session: Session<'w, StdRng>,
    pub state: GameState,
    pub paused: bool,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Stuck,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Running totals across watched games
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub games_stuck: usize,
    pub total_guesses: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.games_won == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.games_won as f64
        }
    }
}

impl<'w> App<'w> {
    /// Start watching with a game already set up
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::EmptyWordList`] if `words` is empty.
    pub fn new(words: &'w WordList, strategy: StrategyConfig, seed: u64) -> Result<Self, SolveError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let session = Self::fresh_session(words, &strategy, &mut rng)?;

        let mut app = Self {
            words,
            strategy,
            session,
            state: GameState::Playing,
            paused: false,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rng,
        };
        app.add_message(
            &format!("Watching the {} solver play.", app.strategy.name),
            MessageStyle::Info,
        );
        Ok(app)
    }

    fn fresh_session(
        words: &'w WordList,
        strategy: &StrategyConfig,
        rng: &mut StdRng,
    ) -> Result<Session<'w, StdRng>, SolveError> {
        let secret: Word = words
            .as_slice()
            .choose(rng)
            .cloned()
            .ok_or(SolveError::EmptyWordList)?;
        let session_rng = StdRng::seed_from_u64(rng.random());
        Session::new(words, secret, strategy.clone(), session_rng, SolveConfig::default())
    }

    /// Abandon the current game and start another with a new secret
    pub fn new_game(&mut self) {
        match Self::fresh_session(self.words, &self.strategy, &mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.state = GameState::Playing;
                self.add_message("New game started.", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Timer tick: advance unless paused
    pub fn tick(&mut self) {
        if !self.paused {
            self.advance();
        }
    }

    /// Play one guess, or start the next game if this one is over
    pub fn advance(&mut self) {
        match self.state {
            GameState::Playing => self.play_guess(),
            GameState::Won | GameState::Stuck => self.new_game(),
        }
    }

    fn play_guess(&mut self) {
        match self.session.step().cloned() {
            Ok(record) if record.feedback.is_solved() => self.record_win(&record),
            Ok(record) => {
                let remaining = self.candidate_count();
                self.add_message(
                    &format!(
                        "{} ({}): {remaining} candidates left",
                        record.word.text().to_uppercase(),
                        record.stage
                    ),
                    MessageStyle::Info,
                );
            }
            Err(e) => {
                self.state = GameState::Stuck;
                self.stats.games_played += 1;
                self.stats.games_stuck += 1;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn record_win(&mut self, record: &GuessRecord) {
        let guesses = record.attempt;
        self.state = GameState::Won;
        self.stats.games_played += 1;
        self.stats.games_won += 1;
        self.stats.total_guesses += guesses;
        *self.stats.guess_distribution.entry(guesses).or_insert(0) += 1;
        info!("watched {} solved in {guesses}", record.word);

        let celebration = match guesses {
            1 => "🎯 HOLE IN ONE!",
            2 => "🔥 Two guesses!",
            3 => "✨ Three guesses!",
            4 => "👏 Four guesses!",
            5 => "🎉 Five guesses!",
            6 => "😅 Phew, six!",
            _ => "🐢 Solved, over budget.",
        };
        let style = if guesses > GUESS_BUDGET {
            MessageStyle::Error
        } else {
            MessageStyle::Success
        };
        self.add_message(
            &format!("{} {celebration}", record.word.text().to_uppercase()),
            style,
        );
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        let text = if self.paused { "Paused." } else { "Resumed." };
        self.add_message(text, MessageStyle::Info);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => self.toggle_pause(),
            KeyCode::Char('s') => self.advance(),
            KeyCode::Char('n') => self.new_game(),
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.session.candidates().len()
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        self.session.history()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if last_tick.elapsed() >= TICK_RATE {
            app.tick();
            last_tick = Instant::now();
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

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn play_out(app: &mut App) {
        for _ in 0..30 {
            if app.state != GameState::Playing {
                return;
            }
            app.advance();
        }
    }

    #[test]
    fn starts_with_secret_from_list() {
        let words = WordList::from_text("crane slate irate");
        let app = App::new(&words, StrategyConfig::enhanced(), 3).unwrap();
        assert!(words.contains(app.session.secret()));
        assert_eq!(app.state, GameState::Playing);
        assert!(app.history().is_empty());
    }

    #[test]
    fn empty_list_is_rejected() {
        let words = WordList::from_text("");
        assert!(matches!(
            App::new(&words, StrategyConfig::enhanced(), 3),
            Err(SolveError::EmptyWordList)
        ));
    }

    #[test]
    fn game_plays_to_a_win() {
        let words = WordList::from_text("crane slate irate crate grate");
        let mut app = App::new(&words, StrategyConfig::enhanced(), 8).unwrap();
        play_out(&mut app);

        assert_eq!(app.state, GameState::Won);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution.values().sum::<usize>(), 1);
        assert!(app.history().last().unwrap().feedback.is_solved());
    }

    #[test]
    fn advancing_after_a_win_starts_next_game() {
        let words = WordList::from_text("crane slate irate crate grate");
        let mut app = App::new(&words, StrategyConfig::enhanced(), 8).unwrap();
        play_out(&mut app);

        app.advance();
        assert_eq!(app.state, GameState::Playing);
        assert!(app.history().is_empty());
        assert_eq!(app.stats.games_played, 1);
    }

    #[test]
    fn paused_ticks_do_nothing() {
        let words = WordList::from_text("crane slate irate");
        let mut app = App::new(&words, StrategyConfig::enhanced(), 1).unwrap();

        app.handle_key(key(KeyCode::Char(' ')));
        assert!(app.paused);
        app.tick();
        assert!(app.history().is_empty());

        // Single step still works while paused
        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.history().len(), 1);

        app.handle_key(key(KeyCode::Char(' ')));
        assert!(!app.paused);
    }

    #[test]
    fn quit_keys() {
        let words = WordList::from_text("crane");
        let mut app = App::new(&words, StrategyConfig::enhanced(), 1).unwrap();
        app.handle_key(key(KeyCode::Char('x')));
        assert!(!app.should_quit);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let words = WordList::from_text("crane");
        let mut app = App::new(&words, StrategyConfig::enhanced(), 1).unwrap();
        for i in 0..20 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 8);
        assert_eq!(app.messages.last().unwrap().text, "19");
    }
}
