//! TUI rendering with ratatui
//!
//! Gallows, word and letter board for the Hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::PLACEHOLDER;
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
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Gallows
            Constraint::Percentage(65), // Word and letters
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_board(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN - Guess the word before the drop")
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

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let color = match app.round.lives() {
        0 => Color::Red,
        1 | 2 => Color::Yellow,
        _ => Color::White,
    };

    let art = app
        .config
        .life_art()
        .stage_for(app.round.lives(), app.round.initial_lives());
    let lines: Vec<Line> = art.lines().map(|l| Line::from(l.to_string())).collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Word
            Constraint::Length(4), // Letters
            Constraint::Length(3), // Lives
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_letters(f, app, chunks[1]);
    render_lives(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let lost = app.round.state() == crate::core::RoundState::Lost;

    // On a loss, show the missing letters dimmed
    let spans: Vec<Span> = app
        .round
        .display()
        .iter()
        .zip(app.round.secret().letters())
        .flat_map(|(&shown, &actual)| {
            let span = if shown != PLACEHOLDER {
                Span::styled(
                    shown.to_ascii_uppercase().to_string(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else if lost {
                Span::styled(
                    actual.to_ascii_uppercase().to_string(),
                    Style::default().fg(Color::DarkGray),
                )
            } else {
                Span::raw(PLACEHOLDER.to_string())
            };
            [span, Span::raw(" ")]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Word ({} letters) ", app.round.display().len()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let secret = app.round.secret();
    let hinted = app.hint.map(|h| h.letter);

    let spans: Vec<Span> = ('a'..='z')
        .map(|c| {
            let style = if !app.round.was_tried(c) {
                if hinted == Some(c) {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(Color::White)
                }
            } else if secret.has_letter(c) {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::CROSSED_OUT)
            };
            Span::styled(format!("{} ", c.to_ascii_uppercase()), style)
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Letters ")
                .borders(Borders::ALL),
        );
    f.render_widget(paragraph, area);
}

fn render_lives(f: &mut Frame, app: &App, area: Rect) {
    let lives = app.round.lives();
    let max = app.round.initial_lives();
    let percent = (f64::from(lives) / f64::from(max) * 100.0).min(100.0) as u16;

    let color = if lives.saturating_mul(3) <= max {
        Color::Red
    } else {
        Color::Green
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Lives ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{lives}/{max} lives | {} misses", app.round.misses().len()));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " Round over | Press 'n' for a new word or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type a letter | TAB for a hint | ESC to quit ",
            app.round
                .guessed()
                .last()
                .map(|c| format!("Last guess: {}", c.to_ascii_uppercase()))
                .unwrap_or_default(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Guessing => "Mode: Guessing",
        InputMode::RoundOver => "Mode: Round over",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let streak_text = format!(
        "Streak: {} (best {})",
        app.stats.current_streak, app.stats.best_streak
    );
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let candidates_text = format!("Candidates: {}", app.get_candidates_count());
    let candidates = Paragraph::new(candidates_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(candidates, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::art::LifeArt;
    use crate::core::{GameConfig, GameError, MAX_LIVES};
    use crate::solver::StrategyType;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    fn app(config: &GameConfig) -> App<'_> {
        App::new(
            config,
            StrategyType::from_name("frequency"),
            StdRng::seed_from_u64(5),
            false,
        )
        .unwrap()
    }

    #[test]
    fn renders_fresh_round() {
        let config = GameConfig::new(words_from_slice(&["koala"]), LifeArt::default(), 6).unwrap();
        let app = app(&config);

        let text = screen(&app);

        assert!(text.contains("HANGMAN"));
        assert!(text.contains("Word (5 letters)"));
        assert!(text.contains("6/6 lives"));
        assert!(text.contains("Mode: Guessing"));
    }

    #[test]
    fn renders_revealed_letters() {
        let config = GameConfig::new(words_from_slice(&["koala"]), LifeArt::default(), 6).unwrap();
        let mut app = app(&config);
        app.guess('a');
        app.guess('z');

        let text = screen(&app);

        assert!(text.contains("_ _ A _ A"));
        assert!(text.contains("5/6 lives | 1 misses"));
    }

    #[test]
    fn renders_round_over() {
        let config = GameConfig::new(words_from_slice(&["ox"]), LifeArt::default(), 1).unwrap();
        let mut app = app(&config);
        app.guess('e');

        let text = screen(&app);

        assert!(text.contains("Round over"));
        assert!(text.contains("O X"));
    }

    #[test]
    fn renders_most_lives_allowed() {
        let config = GameConfig::new(
            words_from_slice(&["koala"]),
            LifeArt::default(),
            MAX_LIVES,
        )
        .unwrap();
        let mut app = app(&config);
        app.guess('z');

        let text = screen(&app);

        assert!(text.contains(&format!("{}/{MAX_LIVES} lives", MAX_LIVES - 1)));
    }

    #[test]
    fn huge_life_counts_never_reach_the_screen() {
        let result = GameConfig::new(
            words_from_slice(&["koala"]),
            LifeArt::default(),
            2_000_000_000,
        );
        assert_eq!(
            result.err(),
            Some(GameError::TooManyLives(2_000_000_000))
        );
    }
}
