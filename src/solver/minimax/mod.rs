//! Minimax guess evaluation
//!
//! Scores a guess by the largest group of candidates that would remain after
//! any single feedback, and picks the guess that keeps that group smallest.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, group_by_feedback};
pub use selector::select_best_guess;
