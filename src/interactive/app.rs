//! TUI application state and logic

use crate::core::{Code, Feedback};
use crate::game::{Board, GameStatus, SecretHolder, Settings};
use crate::solver::{AutomatedGuesser, StrategyType};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub settings: Settings,
    pub strategy: StrategyType,
    pub holder: SecretHolder,
    pub board: Board,
    /// Follows the player's guesses to offer hints; `None` above the
    /// automated guesser's limits
    pub advisor: Option<AutomatedGuesser<StrategyType>>,
    pub hint: Option<Code>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Sum of turns over won games
    pub winning_turns: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    /// Create the app and deal the first secret
    #[must_use]
    pub fn new(settings: Settings, strategy: StrategyType, mut rng: StdRng) -> Self {
        let holder = SecretHolder::generate(&mut rng, settings.alphabet(), settings.num_pegs());

        let mut app = Self {
            settings,
            strategy,
            holder,
            board: Board::new(settings.num_pegs(), settings.num_guesses()),
            advisor: None,
            hint: None,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            rng,
        };
        app.reset_advisor();
        app.add_message(
            &format!(
                "I've picked a secret of {} pegs. Type your guess and press Enter.",
                settings.num_pegs()
            ),
            MessageStyle::Info,
        );
        app
    }

    fn reset_advisor(&mut self) {
        self.hint = None;
        self.advisor = if self.settings.fits_automated_guesser() {
            AutomatedGuesser::new(
                self.strategy,
                self.settings.alphabet(),
                self.settings.num_pegs(),
                self.settings.num_guesses(),
            )
            .ok()
        } else {
            None
        };
    }

    /// Number of codes still consistent with the board, if tracked
    #[must_use]
    pub fn candidates_count(&self) -> Option<usize> {
        self.advisor.as_ref().map(|a| a.candidates().len())
    }

    /// Parse and play the guess in `input`
    pub fn handle_guess(&mut self, input: &str) {
        let guess = match Code::parse(input, self.settings.alphabet(), self.settings.num_pegs()) {
            Ok(guess) => guess,
            Err(e) => {
                self.add_message(&format!("Invalid guess: {e}"), MessageStyle::Error);
                return;
            }
        };

        let feedback = match self.holder.score(&guess) {
            Ok(feedback) => feedback,
            Err(e) => {
                self.add_message(&format!("Invalid guess: {e}"), MessageStyle::Error);
                return;
            }
        };
        let status = match self.board.record(guess.clone(), feedback) {
            Ok(status) => status,
            Err(e) => {
                error!("could not record {guess}: {e}");
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.follow(&guess, feedback);
        self.input_buffer.clear();
        self.hint = None;

        match status {
            GameStatus::InProgress => {
                let left = self.board.remaining();
                let text = match self.candidates_count() {
                    Some(count) => format!("{left} guesses left, {count} codes still possible"),
                    None => format!("{left} guesses left"),
                };
                self.add_message(&text, MessageStyle::Info);
            }
            GameStatus::BreakerWins => {
                let turns = self.board.turns().len();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.stats.winning_turns += turns;
                self.input_mode = InputMode::GameOver;
                info!("player broke {guess} in {turns} turns");
                self.add_message(
                    &format!("🎉 You broke the code in {turns} guesses!"),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::MakerWins => {
                self.stats.total_games += 1;
                self.input_mode = InputMode::GameOver;
                info!("player ran out of guesses; secret was {}", self.holder.reveal());
                self.add_message(
                    &format!("Out of guesses! The secret was {}", self.holder.reveal()),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    /// Narrow the advisor's candidates with the player's turn
    fn follow(&mut self, guess: &Code, feedback: Feedback) {
        let Some(advisor) = self.advisor.as_mut() else {
            return;
        };
        if advisor.state().is_terminal() {
            return;
        }
        if let Err(e) = advisor.filter(guess, feedback) {
            error!("hint tracking stopped: {e}");
            self.advisor = None;
        }
    }

    /// Ask the advisor for a guess consistent with the board so far
    pub fn show_hint(&mut self) {
        let suggestion = self
            .advisor
            .as_ref()
            .map(|advisor| advisor.suggest().map(Option::<&Code>::cloned));
        let suggestion = match suggestion {
            None => {
                self.add_message(
                    "Hints need at most 6 pegs and 7 colours",
                    MessageStyle::Error,
                );
                return;
            }
            Some(Err(e)) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
            Some(Ok(suggestion)) => suggestion,
        };

        match suggestion {
            Some(code) => {
                self.add_message(&format!("Hint: try {code}"), MessageStyle::Success);
                self.hint = Some(code);
            }
            None => self.add_message("No hint available", MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        if self.input_mode == InputMode::Guessing && !self.board.turns().is_empty() {
            // Abandoned games count as lost
            self.stats.total_games += 1;
        }
        self.holder = SecretHolder::generate(
            &mut self.rng,
            self.settings.alphabet(),
            self.settings.num_pegs(),
        );
        self.board = Board::new(self.settings.num_pegs(), self.settings.num_guesses());
        self.reset_advisor();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started! A new secret is set.", MessageStyle::Info);
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

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('h') => self.show_hint(),
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < self.settings.num_pegs() {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    let input = self.input_buffer.clone();
                    self.handle_guess(&input);
                }
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
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
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
    use crate::core::Alphabet;
    use rand::SeedableRng;

    fn app_with_secret(secret: &str) -> App {
        let mut app = App::new(
            Settings::default(),
            StrategyType::default(),
            StdRng::seed_from_u64(1),
        );
        app.holder = SecretHolder::new(Code::parse(secret, Alphabet::CLASSIC, 4).unwrap());
        app
    }

    fn type_keys(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    }

    #[test]
    fn typed_guess_is_recorded() {
        let mut app = app_with_secret("RGBY");
        type_keys(&mut app, "rrgb");

        assert_eq!(app.board.turns().len(), 1);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn invalid_guess_keeps_board_unchanged() {
        let mut app = app_with_secret("RGBY");
        type_keys(&mut app, "rgv");

        assert!(app.board.turns().is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn winning_updates_stats() {
        let mut app = app_with_secret("RGBY");
        type_keys(&mut app, "rgby");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.winning_turns, 1);

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.board.turns().is_empty());
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn hint_is_consistent_with_board() {
        let mut app = app_with_secret("GGBB");
        type_keys(&mut app, "rgby");
        app.show_hint();

        let hint = app.hint.clone().unwrap();
        let turn = &app.board.turns()[0];
        assert_eq!(
            Feedback::score(&hint, &turn.guess).unwrap(),
            turn.feedback
        );
        assert!(app.candidates_count().unwrap() < 1296);
    }

    #[test]
    fn no_advisor_above_limits() {
        let settings = Settings::new(8, 8, 12).unwrap();
        let mut app = App::new(settings, StrategyType::default(), StdRng::seed_from_u64(1));
        assert!(app.advisor.is_none());
        app.show_hint();
        assert!(app.hint.is_none());
    }

    #[test]
    fn quit_keys() {
        let mut app = app_with_secret("RGBY");
        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_quit);

        let mut app = app_with_secret("RGBY");
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
