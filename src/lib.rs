//! Mastermind
//!
//! A code-breaking game: a secret holder scores guesses with exact and
//! colour-only matches, and an automated guesser narrows the set of codes
//! consistent with every feedback until it finds the secret.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind::core::{Alphabet, Code, Feedback};
//!
//! let alphabet = Alphabet::new(6).unwrap();
//! let secret = Code::parse("RGBY", alphabet, 4).unwrap();
//! let guess = Code::parse("RRGB", alphabet, 4).unwrap();
//!
//! let feedback = Feedback::score(&secret, &guess).unwrap();
//! println!("{feedback}"); // 1B 2W
//! ```

// Colours, codes and scoring
pub mod core;

// Candidate enumeration and guessing
pub mod solver;

// Secret holder, board and settings
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
