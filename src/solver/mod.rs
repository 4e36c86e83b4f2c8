//! Code-breaking algorithms
//!
//! Candidate enumeration, guess selection strategies and the automated guesser.

mod guesser;
pub mod minimax;
mod space;
pub mod strategy;

pub use guesser::{
    AutomatedGuesser, GUESSER_MAX_COLOURS, GUESSER_MAX_PEGS, GuesserError, GuesserState,
};
pub use space::{CandidateSpace, Codes};
pub use strategy::{FirstCandidate, MinimaxStrategy, Strategy, StrategyType};
