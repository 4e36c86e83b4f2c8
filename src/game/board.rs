//! Game board: the ordered record of turns
//!
//! The board decides when a game is over: either the last feedback was all
//! exact matches, or the turn budget has been used up.

use crate::core::{Code, Feedback};
use thiserror::Error;

/// One guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub feedback: Feedback,
}

/// Where a game stands after a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The code was broken
    BreakerWins,
    /// The turn budget ran out
    MakerWins,
}

impl GameStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("the game is already finished")]
    GameFinished,
    #[error("guess has {actual} pegs, the board holds {expected}")]
    WrongLength { expected: usize, actual: usize },
}

/// Append-only turn history for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    num_pegs: usize,
    num_guesses: usize,
    turns: Vec<Turn>,
    status: GameStatus,
}

impl Board {
    #[must_use]
    pub fn new(num_pegs: usize, num_guesses: usize) -> Self {
        Self {
            num_pegs,
            num_guesses,
            turns: Vec::with_capacity(num_guesses),
            status: GameStatus::InProgress,
        }
    }

    /// Record a turn and return the resulting status
    ///
    /// # Errors
    /// - `BoardError::GameFinished` if the game already ended
    /// - `BoardError::WrongLength` if the guess has the wrong peg count
    pub fn record(&mut self, guess: Code, feedback: Feedback) -> Result<GameStatus, BoardError> {
        if self.status.is_finished() {
            return Err(BoardError::GameFinished);
        }
        if guess.len() != self.num_pegs {
            return Err(BoardError::WrongLength {
                expected: self.num_pegs,
                actual: guess.len(),
            });
        }

        self.turns.push(Turn { guess, feedback });

        self.status = if feedback.is_solved(self.num_pegs) {
            GameStatus::BreakerWins
        } else if self.turns.len() == self.num_guesses {
            GameStatus::MakerWins
        } else {
            GameStatus::InProgress
        };

        Ok(self.status)
    }

    #[inline]
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    #[inline]
    #[must_use]
    pub const fn num_pegs(&self) -> usize {
        self.num_pegs
    }

    #[inline]
    #[must_use]
    pub const fn num_guesses(&self) -> usize {
        self.num_guesses
    }

    /// Turns left before the code maker wins
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.num_guesses.saturating_sub(self.turns.len())
    }
}
