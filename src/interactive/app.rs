//! TUI application state and logic

use crate::commands::simple::rejection_message;
use crate::core::WORD_LENGTH;
use crate::game::{Game, GameConfig};
use crate::wordlists::Catalog;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub game: Game<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub should_quit: bool,
    config: GameConfig,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    /// The game is decided or was given up; waiting for new game or quit
    GameOver,
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

/// Results across games played in this session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Won games indexed by number of guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record_win(&mut self, guesses: usize) {
        self.total_games += 1;
        self.games_won += 1;
        if self.guess_distribution.len() <= guesses {
            self.guess_distribution.resize(guesses + 1, 0);
        }
        self.guess_distribution[guesses] += 1;
    }

    fn record_loss(&mut self) {
        self.total_games += 1;
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
    #[must_use]
    pub fn new(catalog: &'a Catalog, config: GameConfig, mut rng: StdRng) -> Self {
        let game = Game::new(catalog, config, &mut rng);

        let mut app = Self {
            game,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            input_mode: InputMode::Guessing,
            should_quit: false,
            config,
            rng,
        };
        app.add_message(
            &format!(
                "Guess the {WORD_LENGTH}-letter word in {} tries.",
                config.max_attempts
            ),
            MessageStyle::Info,
        );
        if config.hard_mode.is_enabled() {
            app.add_message(
                "Hard mode: revealed hints must be used in every guess.",
                MessageStyle::Info,
            );
        }
        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl_c =
            key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);

        match self.input_mode {
            InputMode::Guessing => match key.code {
                _ if ctrl_c => self.give_up(),
                KeyCode::Esc => self.give_up(),
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < WORD_LENGTH {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            InputMode::GameOver => match key.code {
                _ if ctrl_c => self.should_quit = true,
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
        }
    }

    /// Submit the typed guess to the game
    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.clone();

        match self.game.submit(&guess) {
            Ok(Some(_)) => {
                self.input_buffer.clear();
                if self.game.is_won() {
                    let attempts = self.game.attempts().len();
                    self.stats.record_win(attempts);
                    let tries = if attempts == 1 { "try" } else { "tries" };
                    self.finish(
                        &format!("Congrats! You solved it in {attempts} {tries}!"),
                        MessageStyle::Success,
                    );
                } else if self.game.is_over() {
                    self.stats.record_loss();
                    self.finish(
                        &format!(
                            "Better luck next time! The correct solution was: {}",
                            self.game.solution()
                        ),
                        MessageStyle::Error,
                    );
                }
            }
            Ok(None) => self.input_mode = InputMode::GameOver,
            Err(e) => self.add_message(&rejection_message(&e, &guess), MessageStyle::Error),
        }
    }

    /// Abandon the current game and reveal the solution
    pub fn give_up(&mut self) {
        info!("game interrupted after {} attempts", self.game.attempts().len());
        self.stats.record_loss();
        self.finish(
            &format!("You lost! The correct answer was: {}", self.game.solution()),
            MessageStyle::Error,
        );
    }

    pub fn new_game(&mut self) {
        self.game = Game::new(self.game.catalog(), self.config, &mut self.rng);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
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

    fn finish(&mut self, text: &str, style: MessageStyle) {
        self.input_buffer.clear();
        self.input_mode = InputMode::GameOver;
        self.add_message(text, style);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }
}

/// Run the TUI application
///
/// Returns the app once the player quits so the caller can report on the
/// last game.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App<'_>) -> Result<App<'_>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<'a, B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App<'a>,
) -> Result<App<'a>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}
