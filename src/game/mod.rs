//! Game flow: secret holder, board, settings and the automated game loop

mod automated;
mod board;
mod secret;
mod settings;

pub use automated::{AutomatedGame, GameError, GuessStep, play_automated};
pub use board::{Board, BoardError, GameStatus, Turn};
pub use secret::SecretHolder;
pub use settings::{COLOURS_RANGE, GUESSES_RANGE, PEGS_RANGE, Settings, SettingsError};
