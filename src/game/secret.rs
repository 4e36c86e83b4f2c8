//! The code maker's secret

use crate::core::{Alphabet, Code, Feedback, ScoreError};
use rand::Rng;

/// Owns the secret code for one game
///
/// The secret never changes after construction. Guessers only ever see it
/// through [`SecretHolder::score`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretHolder {
    secret: Code,
}

impl SecretHolder {
    /// Hold a chosen secret
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self { secret }
    }

    /// Draw a random secret using the caller's generator
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, alphabet: Alphabet, num_pegs: usize) -> Self {
        Self::new(Code::random(rng, alphabet, num_pegs))
    }

    /// Score a guess against the secret
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` for a guess of the wrong length.
    pub fn score(&self, guess: &Code) -> Result<Feedback, ScoreError> {
        Feedback::score(&self.secret, guess)
    }

    #[inline]
    #[must_use]
    pub fn num_pegs(&self) -> usize {
        self.secret.len()
    }

    /// The secret itself, for end-of-game display
    #[must_use]
    pub const fn reveal(&self) -> &Code {
        &self.secret
    }
}
