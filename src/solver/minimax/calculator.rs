//! Worst-case partition calculation
//!
//! Given a guess and the remaining candidates, computes how many candidates
//! would survive the least informative feedback.

use crate::core::{Code, Feedback, ScoreError};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// For each feedback the guess could receive, count the candidates that would
/// produce it; the largest count is the worst case.
///
/// # Errors
/// Returns `ScoreError` if a candidate differs in length from the guess.
///
/// # Examples
/// ```
/// use mastermind::core::{Alphabet, Code};
/// use mastermind::solver::minimax::calculate_max_remaining;
///
/// let alphabet = Alphabet::new(6).unwrap();
/// let guess = Code::parse("RRGG", alphabet, 4).unwrap();
/// let candidates = vec![
///     Code::parse("RRGG", alphabet, 4).unwrap(),
///     Code::parse("BBYY", alphabet, 4).unwrap(),
/// ];
///
/// assert_eq!(calculate_max_remaining(&guess, &candidates).unwrap(), 1);
/// ```
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code]) -> Result<usize, ScoreError> {
    if candidates.is_empty() {
        return Ok(0);
    }

    let groups = group_by_feedback(guess, candidates)?;
    Ok(groups.values().max().copied().unwrap_or(0))
}

/// Group candidates by the feedback `guess` would receive if each were the secret
///
/// # Errors
/// Returns `ScoreError` if a candidate differs in length from the guess.
pub fn group_by_feedback(
    guess: &Code,
    candidates: &[Code],
) -> Result<FxHashMap<Feedback, usize>, ScoreError> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = Feedback::score(candidate, guess)?;
        *counts.entry(feedback).or_insert(0) += 1;
    }

    Ok(counts)
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
    fn max_remaining_perfect_split() {
        let candidates = codes(&["RRGG", "BBYY"]);
        let max = calculate_max_remaining(&candidates[0], &candidates).unwrap();
        assert_eq!(max, 1);
    }

    #[test]
    fn max_remaining_all_same_feedback() {
        let guess = &codes(&["PPPP"])[0];
        let candidates = codes(&["RRRR", "GGGG", "BBBB"]);
        let max = calculate_max_remaining(guess, &candidates).unwrap();
        assert_eq!(max, 3);
    }

    #[test]
    fn max_remaining_empty_candidates() {
        let guess = &codes(&["RGBY"])[0];
        assert_eq!(calculate_max_remaining(guess, &[]).unwrap(), 0);
    }

    #[test]
    fn groups_sum_to_candidate_count() {
        let guess = &codes(&["RRGB"])[0];
        let candidates = codes(&["RGBY", "RRGB", "YYYY", "GBRR", "RGGB"]);
        let groups = group_by_feedback(guess, &candidates).unwrap();

        assert_eq!(groups.values().sum::<usize>(), candidates.len());
        assert_eq!(groups.get(&Feedback::new(4, 0)), Some(&1));
        assert_eq!(groups.get(&Feedback::new(0, 0)), Some(&1));
    }

    #[test]
    fn length_mismatch_propagates() {
        let guess = &codes(&["RGB"])[0];
        let candidates = codes(&["RGBY"]);
        assert!(calculate_max_remaining(guess, &candidates).is_err());
    }
}
