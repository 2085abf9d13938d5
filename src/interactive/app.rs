//! TUI application state and logic

use crate::core::{GameConfig, GameError, GuessOutcome, Round, RoundState};
use crate::solver::scoring::{LetterMetrics, calculate_metrics};
use crate::solver::{Solver, StrategyType};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a> {
    pub config: &'a GameConfig,
    pub solver: Solver<'a, StrategyType>,
    pub round: Round,
    pub rng: StdRng,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub hint: Option<LetterMetrics>,
    pub reveal: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
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

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
}

impl Statistics {
    fn record(&mut self, state: RoundState) {
        match state {
            RoundState::Won => {
                self.total_games += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
            }
            RoundState::Lost => {
                self.total_games += 1;
                self.current_streak = 0;
            }
            RoundState::InProgress => {}
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// Create the app and start its first round
    ///
    /// # Errors
    ///
    /// Returns an error if no round can be started from `config`.
    pub fn new(
        config: &'a GameConfig,
        strategy: StrategyType,
        mut rng: StdRng,
        reveal: bool,
    ) -> Result<Self, GameError> {
        let round = Round::start(config, &mut rng)?;

        let mut app = Self {
            config,
            solver: Solver::new(strategy, config.word_list()),
            round,
            rng,
            messages: Vec::new(),
            stats: Statistics::default(),
            input_mode: InputMode::Guessing,
            hint: None,
            reveal,
            should_quit: false,
        };
        app.announce_round();
        Ok(app)
    }

    fn announce_round(&mut self) {
        self.add_message(
            &format!(
                "New word with {} letters. Type a letter to guess, TAB for a hint.",
                self.round.secret().len()
            ),
            MessageStyle::Info,
        );
        if self.reveal {
            let text = format!("Pssst, the solution is {}.", self.round.secret());
            self.add_message(&text, MessageStyle::Info);
        }
    }

    /// Submit a letter to the current round
    pub fn guess(&mut self, letter: char) {
        match self.round.submit_guess(letter) {
            Ok(outcome) => {
                self.hint = None;
                let (text, style) = match &outcome {
                    GuessOutcome::Hit { letter, positions } => (
                        format!(
                            "'{}' is in the word ({}×)",
                            letter.to_ascii_uppercase(),
                            positions.len()
                        ),
                        MessageStyle::Success,
                    ),
                    GuessOutcome::Miss { letter, lives_left } => (
                        format!(
                            "'{}' is not in the word. {lives_left} lives left.",
                            letter.to_ascii_uppercase()
                        ),
                        MessageStyle::Error,
                    ),
                    GuessOutcome::AlreadyGuessed { letter } => (
                        format!("Already tried '{}'", letter.to_ascii_uppercase()),
                        MessageStyle::Info,
                    ),
                };
                self.add_message(&text, style);
                self.finish_if_over();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_if_over(&mut self) {
        if !self.round.is_terminal() {
            return;
        }

        let state = self.round.state();
        self.stats.record(state);
        self.input_mode = InputMode::RoundOver;

        let word = self.round.secret().text().to_uppercase();
        match state {
            RoundState::Won => {
                let celebration = match self.round.misses().len() {
                    0 => format!("🏆 FLAWLESS! {word} without a single miss!"),
                    1 | 2 => format!("🎉 SPLENDID! You found {word}!"),
                    _ => format!("😅 PHEW! {word} with a neck to spare!"),
                };
                self.add_message(&celebration, MessageStyle::Success);
            }
            RoundState::Lost => {
                self.add_message(&format!("💀 Hanged! The word was {word}."), MessageStyle::Error);
            }
            RoundState::InProgress => {}
        }
        self.add_message("Press 'n' for a new word or 'q' to quit.", MessageStyle::Info);
    }

    /// Start a fresh round on a new random word
    pub fn new_round(&mut self) {
        match Round::start(self.config, &mut self.rng) {
            Ok(round) => {
                self.round = round;
                self.hint = None;
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.announce_round();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Ask the solver for the next letter
    pub fn show_hint(&mut self) {
        let Some(letter) = self.solver.next_letter(&self.round) else {
            self.add_message("No hint available", MessageStyle::Error);
            return;
        };

        let candidates = self.solver.candidates(&self.round);
        let metrics = calculate_metrics(letter, &candidates);
        debug!(%letter, candidates = candidates.len(), "hint");

        self.add_message(
            &format!(
                "Hint: try '{}' ({:.0}% chance of a hit, at worst {} of {} words left)",
                letter.to_ascii_uppercase(),
                metrics.hit_probability * 100.0,
                metrics.max_partition,
                candidates.len()
            ),
            MessageStyle::Info,
        );
        self.hint = Some(metrics);
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

    #[must_use]
    pub fn get_candidates_count(&self) -> usize {
        self.solver.count_candidates(&self.round)
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_round(),
                _ => {
                    // Round is over, ignore other keys
                }
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.show_hint(),
                KeyCode::Char(c) => self.guess(c),
                _ => {}
            },
        }
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
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
    use crate::art::LifeArt;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn config(words: &[&str], lives: u32) -> GameConfig {
        GameConfig::new(words_from_slice(words), LifeArt::default(), lives).unwrap()
    }

    fn app(config: &GameConfig) -> App<'_> {
        App::new(
            config,
            StrategyType::from_name("frequency"),
            StdRng::seed_from_u64(3),
            false,
        )
        .unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn letters_are_guesses() {
        let config = config(&["cat"], 6);
        let mut app = app(&config);

        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('z'));

        assert_eq!(app.round.display(), &['c', '_', '_']);
        assert_eq!(app.round.lives(), 5);
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn winning_switches_to_round_over() {
        let config = config(&["cat"], 6);
        let mut app = app(&config);

        for c in ['c', 'A', 't'] {
            press(&mut app, KeyCode::Char(c));
        }

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.current_streak, 1);
        assert!(app.messages.iter().any(|m| m.text.contains("FLAWLESS")));
    }

    #[test]
    fn losing_resets_streak() {
        let config = config(&["ox"], 1);
        let mut app = app(&config);
        app.stats.current_streak = 3;

        press(&mut app, KeyCode::Char('q'));

        assert_eq!(app.round.state(), RoundState::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.current_streak, 0);
        assert!(!app.should_quit);
    }

    #[test]
    fn round_over_keys() {
        let config = config(&["ox"], 1);
        let mut app = app(&config);
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.input_mode, InputMode::RoundOver);

        // Letters do nothing once the round is over
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.round.state(), RoundState::Lost);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.round.lives(), 1);
        assert!(app.round.guessed().is_empty());

        press(&mut app, KeyCode::Char('z'));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn invalid_key_reports_error() {
        let config = config(&["cat"], 6);
        let mut app = app(&config);

        press(&mut app, KeyCode::Char('7'));

        assert_eq!(app.round.lives(), 6);
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn hint_suggests_untried_letter() {
        let config = config(&["cat", "cot"], 6);
        let mut app = app(&config);

        press(&mut app, KeyCode::Tab);

        let hint = app.hint.unwrap();
        assert!(!app.round.was_tried(hint.letter));
        assert!(hint.frequency > 0);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let config = config(&["cat"], 6);
        let mut app = app(&config);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = self::app(&config);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(app.round.guessed().is_empty());
    }

    #[test]
    fn reveal_announces_word() {
        let config = config(&["yak"], 6);
        let app = App::new(
            &config,
            StrategyType::from_name("entropy"),
            StdRng::seed_from_u64(0),
            true,
        )
        .unwrap();

        assert!(app.messages.iter().any(|m| m.text.contains("yak")));
    }

    #[test]
    fn statistics_win_rate() {
        let mut stats = Statistics::default();
        assert!(stats.win_rate().abs() < f64::EPSILON);
        stats.record(RoundState::Won);
        stats.record(RoundState::Lost);
        stats.record(RoundState::Won);
        assert_eq!(stats.best_streak, 1);
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }
}
