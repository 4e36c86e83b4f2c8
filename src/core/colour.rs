//! Code peg colours and the playable alphabet
//!
//! A game is played over the first `size` colours of a fixed, ordered palette.
//! The palette order is also the enumeration order used by the solver.

use std::fmt;
use thiserror::Error;

/// Display symbol for a peg slot that has not been filled yet.
///
/// Not a [`Colour`]: an unset slot can be drawn on the board but never
/// appears in a guess or a secret.
pub const UNSET_SYMBOL: char = 'X';

/// Largest alphabet the game supports
pub const MAX_COLOURS: u8 = 8;

/// Smallest alphabet the game supports
pub const MIN_COLOURS: u8 = 2;

/// A code peg colour
///
/// Ordinals run from 1 (`Red`) to 8 (`Violet`). Variant order defines `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Colour {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Indigo,
    Violet,
}

/// Error for text that does not name a colour of the current alphabet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColourError {
    #[error("'{0}' is not a colour letter")]
    UnknownLetter(char),
    #[error("colour '{letter}' is not available with {alphabet_size} colours")]
    OutsideAlphabet { letter: char, alphabet_size: u8 },
    #[error("alphabet size must be between 2 and 8, got {0}")]
    InvalidAlphabetSize(u8),
}

impl Colour {
    /// Every colour, in palette order
    pub const ALL: [Self; MAX_COLOURS as usize] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Orange,
        Self::Purple,
        Self::Indigo,
        Self::Violet,
    ];

    /// Zero-based position in the palette
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// One-based ordinal (1..=8)
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8 + 1
    }

    /// Colour at a zero-based palette index
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Single-letter symbol used for input and board display
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::Orange => 'O',
            Self::Purple => 'P',
            Self::Indigo => 'I',
            Self::Violet => 'V',
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
            Self::Orange => "Orange",
            Self::Purple => "Purple",
            Self::Indigo => "Indigo",
            Self::Violet => "Violet",
        }
    }

    /// Parse a single letter into a colour of an alphabet of `alphabet_size`
    ///
    /// Letters are case-insensitive.
    ///
    /// # Errors
    /// Returns `ColourError` if the letter names no colour, or names a colour
    /// beyond the alphabet.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Colour;
    ///
    /// assert_eq!(Colour::from_letter('g', 6), Ok(Colour::Green));
    /// assert!(Colour::from_letter('V', 6).is_err());
    /// ```
    pub fn from_letter(letter: char, alphabet_size: u8) -> Result<Self, ColourError> {
        let upper = letter.to_ascii_uppercase();
        let colour = Self::ALL
            .into_iter()
            .find(|c| c.letter() == upper)
            .ok_or(ColourError::UnknownLetter(letter))?;

        if colour.ordinal() > alphabet_size {
            return Err(ColourError::OutsideAlphabet {
                letter: upper,
                alphabet_size,
            });
        }

        Ok(colour)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The playable colours of a game: the first `size` colours of the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    size: u8,
}

impl Alphabet {
    /// The six colours of the classic game
    pub const CLASSIC: Self = Self { size: 6 };

    /// Create an alphabet of `size` colours
    ///
    /// # Errors
    /// Returns `ColourError::InvalidAlphabetSize` outside `2..=8`.
    pub const fn new(size: u8) -> Result<Self, ColourError> {
        if size < MIN_COLOURS || size > MAX_COLOURS {
            return Err(ColourError::InvalidAlphabetSize(size));
        }
        Ok(Self { size })
    }

    #[inline]
    #[must_use]
    pub const fn size(self) -> u8 {
        self.size
    }

    /// Colours of this alphabet in palette order
    #[must_use]
    pub fn colours(self) -> &'static [Colour] {
        &Colour::ALL[..usize::from(self.size)]
    }

    /// This alphabet limited to at most `max` colours (never below 2)
    #[must_use]
    pub fn capped(self, max: u8) -> Self {
        Self {
            size: self.size.min(max.max(MIN_COLOURS)),
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, colour: Colour) -> bool {
        colour.ordinal() <= self.size
    }

    /// Parse a letter against this alphabet
    ///
    /// # Errors
    /// See [`Colour::from_letter`].
    pub fn parse(self, letter: char) -> Result<Colour, ColourError> {
        Colour::from_letter(letter, self.size)
    }

    /// Human-readable legend, e.g. `R = Red, G = Green`
    #[must_use]
    pub fn legend(self) -> String {
        self.colours()
            .iter()
            .map(|c| format!("{} = {}", c.letter(), c.name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
