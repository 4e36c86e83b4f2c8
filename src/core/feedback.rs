//! Feedback scoring
//!
//! Feedback is the pair of key-peg counts returned for a guess:
//! - exact (black): same colour in the same position
//! - colour (white): colour present in the secret but elsewhere, counted
//!   only among positions that were not exact matches

use super::{Code, Colour};
use std::fmt;
use thiserror::Error;

/// Key-peg symbol for an exact match
pub const EXACT_SYMBOL: char = 'B';

/// Key-peg symbol for a colour-only match
pub const COLOUR_SYMBOL: char = 'W';

/// Error raised when a guess cannot be scored against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("guess has {guess} pegs but the secret has {secret}")]
    LengthMismatch { secret: usize, guess: usize },
}

/// Feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    exact: u8,
    colour: u8,
}

impl Feedback {
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, colour: u8) -> Self {
        Self { exact, colour }
    }

    /// Feedback for a fully correct guess of `num_pegs` pegs
    #[inline]
    #[must_use]
    pub const fn solved(num_pegs: usize) -> Self {
        Self::new(num_pegs as u8, 0)
    }

    /// Number of exact matches (black pegs)
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of colour-only matches (white pegs)
    #[inline]
    #[must_use]
    pub const fn colour(self) -> u8 {
        self.colour
    }

    #[inline]
    #[must_use]
    pub const fn is_solved(self, num_pegs: usize) -> bool {
        self.exact as usize == num_pegs
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Count exact matches position by position; those positions are consumed
    /// 2. Count colours among the unconsumed positions of each side
    /// 3. Colour matches are the sum over colours of the smaller of the two counts
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` if the codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Alphabet, Code, Feedback};
    ///
    /// let alphabet = Alphabet::new(6).unwrap();
    /// let secret = Code::parse("RGBY", alphabet, 4).unwrap();
    /// let guess = Code::parse("RRGB", alphabet, 4).unwrap();
    ///
    /// let feedback = Feedback::score(&secret, &guess).unwrap();
    /// assert_eq!(feedback, Feedback::new(1, 2));
    /// ```
    pub fn score(secret: &Code, guess: &Code) -> Result<Self, ScoreError> {
        if secret.len() != guess.len() {
            return Err(ScoreError::LengthMismatch {
                secret: secret.len(),
                guess: guess.len(),
            });
        }

        let mut exact = 0u8;
        let mut secret_left = [0u8; Colour::ALL.len()];
        let mut guess_left = [0u8; Colour::ALL.len()];

        for (&s, &g) in secret.pegs().iter().zip(guess.pegs()) {
            if s == g {
                exact += 1;
            } else {
                secret_left[s.index()] += 1;
                guess_left[g.index()] += 1;
            }
        }

        let colour = secret_left
            .iter()
            .zip(&guess_left)
            .map(|(&s, &g)| s.min(g))
            .sum();

        Ok(Self { exact, colour })
    }

    /// Render as key pegs padded to `num_pegs`, e.g. `BWWX`
    #[must_use]
    pub fn to_pegs(self, num_pegs: usize) -> String {
        let exact = usize::from(self.exact);
        let colour = usize::from(self.colour);
        let mut pegs = String::with_capacity(num_pegs);
        pegs.extend(std::iter::repeat_n(EXACT_SYMBOL, exact));
        pegs.extend(std::iter::repeat_n(COLOUR_SYMBOL, colour));
        pegs.extend(std::iter::repeat_n(
            super::UNSET_SYMBOL,
            num_pegs.saturating_sub(exact + colour),
        ));
        pegs
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B {}W", self.exact, self.colour)
    }
}
