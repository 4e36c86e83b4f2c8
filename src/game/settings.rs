//! Game settings
//!
//! Peg count, colour count and turn budget, with the ranges the game accepts.

use crate::core::{Alphabet, MAX_COLOURS, MAX_PEGS, MIN_COLOURS, MIN_PEGS};
use crate::solver::{GUESSER_MAX_COLOURS, GUESSER_MAX_PEGS};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Accepted peg counts
pub const PEGS_RANGE: RangeInclusive<usize> = MIN_PEGS..=MAX_PEGS;

/// Accepted colour counts
pub const COLOURS_RANGE: RangeInclusive<u8> = MIN_COLOURS..=MAX_COLOURS;

/// Accepted turn budgets
pub const GUESSES_RANGE: RangeInclusive<usize> = 3..=30;

/// A setting outside its accepted range
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("number of pegs must be between 2 and 12, got {0}")]
    Pegs(usize),
    #[error("number of colours must be between 2 and 8, got {0}")]
    Colours(u8),
    #[error("number of guesses must be between 3 and 30, got {0}")]
    Guesses(usize),
}

/// Validated game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    num_pegs: usize,
    alphabet: Alphabet,
    num_guesses: usize,
}

impl Settings {
    /// Validate and build settings
    ///
    /// # Errors
    /// Returns the first `SettingsError` found, checking pegs, colours, then guesses.
    pub fn new(num_pegs: usize, num_colours: u8, num_guesses: usize) -> Result<Self, SettingsError> {
        if !PEGS_RANGE.contains(&num_pegs) {
            return Err(SettingsError::Pegs(num_pegs));
        }
        let alphabet = Alphabet::new(num_colours).map_err(|_| SettingsError::Colours(num_colours))?;
        if !GUESSES_RANGE.contains(&num_guesses) {
            return Err(SettingsError::Guesses(num_guesses));
        }

        Ok(Self {
            num_pegs,
            alphabet,
            num_guesses,
        })
    }

    #[inline]
    #[must_use]
    pub const fn num_pegs(&self) -> usize {
        self.num_pegs
    }

    #[inline]
    #[must_use]
    pub const fn num_colours(&self) -> u8 {
        self.alphabet.size()
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    #[inline]
    #[must_use]
    pub const fn num_guesses(&self) -> usize {
        self.num_guesses
    }

    /// True if the automated guesser can play with these settings unchanged
    #[must_use]
    pub const fn fits_automated_guesser(&self) -> bool {
        self.num_pegs <= GUESSER_MAX_PEGS && self.alphabet.size() <= GUESSER_MAX_COLOURS
    }

    /// Copy of these settings capped at 6 pegs and 7 colours
    ///
    /// The turn budget is kept as is.
    #[must_use]
    pub fn for_automated_guesser(&self) -> Self {
        Self {
            num_pegs: self.num_pegs.min(GUESSER_MAX_PEGS),
            alphabet: self.alphabet.capped(GUESSER_MAX_COLOURS),
            num_guesses: self.num_guesses,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            num_pegs: 4,
            alphabet: Alphabet::CLASSIC,
            num_guesses: 12,
        }
    }
}
