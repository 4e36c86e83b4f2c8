//! Code representation
//!
//! A Code is an ordered, immutable sequence of colour pegs. Guesses and the
//! secret are both codes.

use super::colour::{Alphabet, Colour, ColourError};
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Fewest pegs a code may have
pub const MIN_PEGS: usize = 2;

/// Most pegs a code may have
pub const MAX_PEGS: usize = 12;

/// An ordered sequence of colour pegs
///
/// `Ord` compares position 0 first, which matches the candidate enumeration
/// order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    pegs: Vec<Colour>,
}

/// Error type for text that does not describe a valid code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("code must be exactly {expected} pegs, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("invalid colour at position {position}: {source}")]
    InvalidColour {
        position: usize,
        #[source]
        source: ColourError,
    },
}

impl Code {
    /// Create a code from pegs
    #[must_use]
    pub const fn new(pegs: Vec<Colour>) -> Self {
        Self { pegs }
    }

    /// Parse a code such as `"RGBY"` for an alphabet and peg count
    ///
    /// Letters are case-insensitive and whitespace is ignored.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - The number of letters is not `num_pegs`
    /// - Any letter is not a colour of `alphabet`
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Alphabet, Code, Colour};
    ///
    /// let alphabet = Alphabet::new(6).unwrap();
    /// let code = Code::parse("rg by", alphabet, 4).unwrap();
    /// assert_eq!(code.pegs(), &[Colour::Red, Colour::Green, Colour::Blue, Colour::Yellow]);
    ///
    /// assert!(Code::parse("RGB", alphabet, 4).is_err());
    /// assert!(Code::parse("RGBV", alphabet, 4).is_err());
    /// ```
    pub fn parse(text: &str, alphabet: Alphabet, num_pegs: usize) -> Result<Self, CodeError> {
        let letters: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();

        if letters.len() != num_pegs {
            return Err(CodeError::InvalidLength {
                expected: num_pegs,
                actual: letters.len(),
            });
        }

        let pegs = letters
            .into_iter()
            .enumerate()
            .map(|(position, letter)| {
                alphabet
                    .parse(letter)
                    .map_err(|source| CodeError::InvalidColour { position, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { pegs })
    }

    /// Draw a uniformly random code from `alphabet`
    pub fn random<R: Rng + ?Sized>(rng: &mut R, alphabet: Alphabet, num_pegs: usize) -> Self {
        let colours = alphabet.colours();
        let pegs = (0..num_pegs)
            .map(|_| colours[rng.random_range(0..colours.len())])
            .collect();
        Self { pegs }
    }

    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[Colour] {
        &self.pegs
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    /// True if every peg is a colour of `alphabet`
    #[must_use]
    pub fn fits(&self, alphabet: Alphabet) -> bool {
        self.pegs.iter().all(|&c| alphabet.contains(c))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in &self.pegs {
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}
