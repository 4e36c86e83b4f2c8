//! Minimax-based guess selection
//!
//! Selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::{Code, ScoreError};
use rayon::prelude::*;

/// Select the guess from `guess_pool` with the lowest worst-case remainder
///
/// Ties go to the earliest guess in `guess_pool`. Returns the guess and its
/// worst case, or `None` if the pool is empty.
///
/// # Errors
/// Returns `ScoreError` if a guess and a candidate differ in length.
pub fn select_best_guess<'a>(
    guess_pool: &'a [Code],
    candidates: &[Code],
) -> Result<Option<(&'a Code, usize)>, ScoreError> {
    let scored = guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| {
            calculate_max_remaining(guess, candidates).map(|max_remaining| (max_remaining, index))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(scored
        .into_iter()
        .min()
        .map(|(max_remaining, index)| (&guess_pool[index], max_remaining)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    fn codes(texts: &[&str]) -> Vec<Code> {
        let alphabet = Alphabet::new(6).unwrap();
        texts
            .iter()
            .map(|t| Code::parse(t, alphabet, t.len()).unwrap())
            .collect()
    }

    #[test]
    fn selects_lowest_max_remaining() {
        let guesses = codes(&["PPPP", "RGBY"]);
        let candidates = codes(&["RGBY", "GRBY", "RGYB", "YBGR"]);

        let (best, max_remaining) = select_best_guess(&guesses, &candidates)
            .unwrap()
            .unwrap();

        // PPPP scores (0,0) against all four
        assert_eq!(best.to_string(), "RGBY");
        assert!(max_remaining < 4);
    }

    #[test]
    fn ties_go_to_earliest() {
        let guesses = codes(&["PPPP", "OOOO"]);
        let candidates = codes(&["RRRR"]);

        let (best, max_remaining) = select_best_guess(&guesses, &candidates)
            .unwrap()
            .unwrap();
        assert_eq!(best.to_string(), "PPPP");
        assert_eq!(max_remaining, 1);
    }

    #[test]
    fn deterministic_across_runs() {
        let pool = codes(&["RRGG", "RGBY", "BBYY", "RRRG", "GBYR"]);
        let first = select_best_guess(&pool, &pool).unwrap();
        let second = select_best_guess(&pool, &pool).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = codes(&["RGBY"]);
        assert_eq!(select_best_guess(&[], &candidates).unwrap(), None);
    }
}
