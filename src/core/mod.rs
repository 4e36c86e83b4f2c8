//! Core domain types for Mastermind
//!
//! Colours, codes and the feedback scoring rule. Everything here is pure and
//! independent of game flow.

mod code;
mod colour;
mod feedback;

pub use code::{Code, CodeError, MAX_PEGS, MIN_PEGS};
pub use colour::{Alphabet, Colour, ColourError, MAX_COLOURS, MIN_COLOURS, UNSET_SYMBOL};
pub use feedback::{COLOUR_SYMBOL, EXACT_SYMBOL, Feedback, ScoreError};
