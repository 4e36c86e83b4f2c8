//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations. Every strategy
//! picks from the remaining candidates, so each guess could be the secret.

use super::minimax;
use crate::core::{Code, ScoreError};

/// A strategy for selecting the next guess from the remaining candidates
pub trait Strategy {
    /// Select a guess from `candidates`, which are in enumeration order
    ///
    /// Returns `None` if `candidates` is empty.
    ///
    /// # Errors
    /// Returns `ScoreError` if the strategy scores codes of different lengths.
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Result<Option<&'a Code>, ScoreError>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// First remaining candidate (default)
    First(FirstCandidate),
    /// Worst-case minimization over the remaining candidates
    Minimax(MinimaxStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Result<Option<&'a Code>, ScoreError> {
        match self {
            Self::First(s) => s.select_guess(candidates),
            Self::Minimax(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "first", "minimax". Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "first" | "simple" => Some(Self::First(FirstCandidate)),
            "minimax" => Some(Self::Minimax(MinimaxStrategy::default())),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::First(_) => "first",
            Self::Minimax(_) => "minimax",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::First(FirstCandidate)
    }
}

/// Baseline strategy: the smallest remaining candidate in enumeration order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstCandidate;

impl Strategy for FirstCandidate {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Result<Option<&'a Code>, ScoreError> {
        Ok(candidates.first())
    }
}

/// Minimax strategy restricted to consistent candidates
///
/// Scoring every candidate against every other is quadratic, so above
/// `max_pool` candidates this falls back to [`FirstCandidate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxStrategy {
    /// Largest candidate set evaluated with minimax
    pub max_pool: usize,
}

impl MinimaxStrategy {
    #[must_use]
    pub const fn new(max_pool: usize) -> Self {
        Self { max_pool }
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        // Covers the full 6-colour, 4-peg space
        Self::new(1296)
    }
}

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Result<Option<&'a Code>, ScoreError> {
        if candidates.len() > self.max_pool {
            return FirstCandidate.select_guess(candidates);
        }

        Ok(minimax::select_best_guess(candidates, candidates)?.map(|(best, _)| best))
    }
}
