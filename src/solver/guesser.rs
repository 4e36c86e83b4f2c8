//! Automated code breaker
//!
//! Keeps the set of codes consistent with every feedback received so far and
//! guesses from it. Filtering only ever removes codes, so the secret stays in
//! the set as long as every feedback came from the same scoring rule.

use super::space::CandidateSpace;
use super::strategy::Strategy;
use crate::core::{Alphabet, Code, Feedback, ScoreError};
use log::{debug, error};
use thiserror::Error;

/// Most pegs the automated guesser accepts
pub const GUESSER_MAX_PEGS: usize = 6;

/// Most colours the automated guesser accepts
pub const GUESSER_MAX_COLOURS: u8 = 7;

/// Lifecycle of an automated guesser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuesserState {
    /// Full candidate space, no guess made yet
    Initialized,
    /// A guess was emitted and its feedback is pending
    AwaitingScore,
    /// Feedback was applied and the next guess can be selected
    Filtering,
    /// The last feedback was all exact matches
    Solved,
    /// The turn budget ran out without solving
    Exhausted,
}

impl GuesserState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// Errors from the automated guesser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuesserError {
    #[error(
        "automated guesser supports at most 6 pegs and 7 colours, got {pegs} pegs and {colours} colours"
    )]
    LimitsExceeded { pegs: usize, colours: u8 },
    /// No candidate agrees with the feedback history. The scorer used for
    /// feedback and the scorer used for filtering disagree.
    #[error("no candidate is consistent with the feedback received (after {turns} turns)")]
    InconsistentFeedback { turns: usize },
    #[error("the game is already over ({0:?})")]
    GameOver(GuesserState),
    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// Automated code breaker
///
/// Coordinates guess selection with a given strategy and narrows its
/// candidates after each feedback.
#[derive(Debug, Clone)]
pub struct AutomatedGuesser<S: Strategy> {
    strategy: S,
    num_pegs: usize,
    max_turns: usize,
    candidates: Vec<Code>,
    turns_taken: usize,
    state: GuesserState,
}

impl<S: Strategy> AutomatedGuesser<S> {
    /// Create a guesser over every code of `num_pegs` pegs from `alphabet`
    ///
    /// # Errors
    /// Returns `GuesserError::LimitsExceeded` above 6 pegs or 7 colours.
    pub fn new(
        strategy: S,
        alphabet: Alphabet,
        num_pegs: usize,
        max_turns: usize,
    ) -> Result<Self, GuesserError> {
        if num_pegs > GUESSER_MAX_PEGS || alphabet.size() > GUESSER_MAX_COLOURS {
            return Err(GuesserError::LimitsExceeded {
                pegs: num_pegs,
                colours: alphabet.size(),
            });
        }

        let candidates: Vec<Code> = CandidateSpace::new(alphabet, num_pegs).iter().collect();
        debug!(
            "guesser initialized with {} candidates ({} pegs, {} colours)",
            candidates.len(),
            num_pegs,
            alphabet.size()
        );

        Ok(Self {
            strategy,
            num_pegs,
            max_turns,
            candidates,
            turns_taken: 0,
            state: GuesserState::Initialized,
        })
    }

    /// Codes still consistent with all feedback, in enumeration order
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub const fn turns_taken(&self) -> usize {
        self.turns_taken
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GuesserState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn num_pegs(&self) -> usize {
        self.num_pegs
    }

    #[inline]
    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// True iff `feedback` reports every peg as an exact match
    #[inline]
    #[must_use]
    pub const fn is_solved(&self, feedback: Feedback) -> bool {
        feedback.is_solved(self.num_pegs)
    }

    /// Select the next guess and count it as a turn
    ///
    /// # Errors
    /// - `GuesserError::GameOver` once solved or exhausted
    /// - `GuesserError::InconsistentFeedback` if no candidate remains
    pub fn select_guess(&mut self) -> Result<Code, GuesserError> {
        if self.state.is_terminal() {
            return Err(GuesserError::GameOver(self.state));
        }

        let guess = self
            .strategy
            .select_guess(&self.candidates)?
            .cloned()
            .ok_or(GuesserError::InconsistentFeedback {
                turns: self.turns_taken,
            })?;

        self.turns_taken += 1;
        self.state = GuesserState::AwaitingScore;
        debug!(
            "turn {}: guessing {} from {} candidates",
            self.turns_taken,
            guess,
            self.candidates.len()
        );
        Ok(guess)
    }

    /// The guess the strategy would make next, without taking a turn
    ///
    /// Used for hints when another player is guessing and this guesser only
    /// follows along through [`filter`](Self::filter).
    ///
    /// # Errors
    /// Returns `GuesserError::Score` if the strategy fails to score candidates.
    pub fn suggest(&self) -> Result<Option<&Code>, GuesserError> {
        if self.state.is_terminal() {
            return Ok(None);
        }
        Ok(self.strategy.select_guess(&self.candidates)?)
    }

    /// Keep only candidates that would have produced `feedback` for `guess`
    ///
    /// Filtering is cumulative: earlier removals are never undone, so the
    /// remaining candidates agree with every feedback seen so far.
    ///
    /// # Errors
    /// - `GuesserError::GameOver` once solved or exhausted
    /// - `GuesserError::Score` if `guess` has the wrong length
    /// - `GuesserError::InconsistentFeedback` if no candidate survives
    pub fn filter(&mut self, guess: &Code, feedback: Feedback) -> Result<(), GuesserError> {
        if self.state.is_terminal() {
            return Err(GuesserError::GameOver(self.state));
        }
        if guess.len() != self.num_pegs {
            return Err(ScoreError::LengthMismatch {
                secret: self.num_pegs,
                guess: guess.len(),
            }
            .into());
        }

        let before = self.candidates.len();
        // Lengths were checked above, so scoring cannot fail
        self.candidates
            .retain(|candidate| Feedback::score(candidate, guess).is_ok_and(|fb| fb == feedback));
        debug!(
            "feedback {} for {}: {} -> {} candidates",
            feedback,
            guess,
            before,
            self.candidates.len()
        );

        if self.candidates.is_empty() {
            error!(
                "candidate set emptied after {} turns; feedback is inconsistent",
                self.turns_taken
            );
            return Err(GuesserError::InconsistentFeedback {
                turns: self.turns_taken,
            });
        }

        self.state = if self.is_solved(feedback) {
            GuesserState::Solved
        } else if self.turns_taken >= self.max_turns {
            GuesserState::Exhausted
        } else {
            GuesserState::Filtering
        };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::{FirstCandidate, MinimaxStrategy};

    fn alphabet(size: u8) -> Alphabet {
        Alphabet::new(size).unwrap()
    }

    fn code(text: &str) -> Code {
        Code::parse(text, alphabet(8), text.len()).unwrap()
    }

    /// Play a full game and check the secret survives every filter
    fn play<S: Strategy>(guesser: &mut AutomatedGuesser<S>, secret: &Code) -> GuesserState {
        while !guesser.state().is_terminal() {
            let guess = guesser.select_guess().unwrap();
            let feedback = Feedback::score(secret, &guess).unwrap();
            guesser.filter(&guess, feedback).unwrap();
            assert!(
                guesser.candidates().contains(secret),
                "secret {secret} dropped after guessing {guess}"
            );
        }
        guesser.state()
    }

    #[test]
    fn starts_with_full_space() {
        let guesser = AutomatedGuesser::new(FirstCandidate, alphabet(6), 4, 10).unwrap();
        assert_eq!(guesser.candidates().len(), 1296);
        assert_eq!(guesser.state(), GuesserState::Initialized);
        assert_eq!(guesser.turns_taken(), 0);
    }

    #[test]
    fn rejects_settings_above_caps() {
        assert!(matches!(
            AutomatedGuesser::new(FirstCandidate, alphabet(8), 4, 10),
            Err(GuesserError::LimitsExceeded { colours: 8, .. })
        ));
        assert!(matches!(
            AutomatedGuesser::new(FirstCandidate, alphabet(6), 7, 10),
            Err(GuesserError::LimitsExceeded { pegs: 7, .. })
        ));
        assert!(AutomatedGuesser::new(FirstCandidate, alphabet(7), 6, 10).is_ok());
    }

    #[test]
    fn first_guess_is_smallest_code() {
        let mut guesser = AutomatedGuesser::new(FirstCandidate, alphabet(6), 4, 10).unwrap();
        let guess = guesser.select_guess().unwrap();
        assert_eq!(guess.to_string(), "RRRR");
        assert_eq!(guesser.state(), GuesserState::AwaitingScore);
        assert_eq!(guesser.turns_taken(), 1);
    }

    #[test]
    fn filter_keeps_only_consistent_codes() {
        let mut guesser = AutomatedGuesser::new(FirstCandidate, alphabet(6), 4, 10).unwrap();
        let secret = code("RGBY");
        let guess = guesser.select_guess().unwrap();
        let feedback = Feedback::score(&secret, &guess).unwrap();

        guesser.filter(&guess, feedback).unwrap();

        assert_eq!(guesser.state(), GuesserState::Filtering);
        assert!(guesser.candidates().len() < 1296);
        for candidate in guesser.candidates() {
            assert_eq!(Feedback::score(candidate, &guess).unwrap(), feedback);
        }
    }

    #[test]
    fn candidate_count_never_grows() {
        let mut guesser = AutomatedGuesser::new(FirstCandidate, alphabet(6), 4, 20).unwrap();
        let secret = code("YOPR");
        let mut previous = guesser.candidates().len();

        while !guesser.state().is_terminal() {
            let guess = guesser.select_guess().unwrap();
            let feedback = Feedback::score(&secret, &guess).unwrap();
            guesser.filter(&guess, feedback).unwrap();
            assert!(guesser.candidates().len() <= previous);
            previous = guesser.candidates().len();
        }
    }

    #[test]
    fn solves_classic_game() {
        let mut guesser = AutomatedGuesser::new(FirstCandidate, alphabet(6), 4, 10).unwrap();
        let secret = code("RGBY");
        assert_eq!(play(&mut guesser, &secret), GuesserState::Solved);
        assert!(guesser.turns_taken() <= 10);
        assert_eq!(guesser.candidates(), &[secret]);
    }

    #[test]
    fn solves_every_small_secret() {
        let space = CandidateSpace::new(alphabet(3), 3);
        for secret in &space {
            let mut guesser = AutomatedGuesser::new(FirstCandidate, alphabet(3), 3, 27).unwrap();
            assert_eq!(play(&mut guesser, &secret), GuesserState::Solved);
        }
    }

    #[test]
    fn minimax_solves_classic_game() {
        let mut guesser =
            AutomatedGuesser::new(MinimaxStrategy::default(), alphabet(6), 4, 10).unwrap();
        let secret = code("OPYB");
        assert_eq!(play(&mut guesser, &secret), GuesserState::Solved);
        assert!(guesser.turns_taken() <= 6);
    }

    #[test]
    fn exhausts_turn_budget() {
        let mut guesser = AutomatedGuesser::new(FirstCandidate, alphabet(6), 4, 1).unwrap();
        let secret = code("PPPP");
        assert_eq!(play(&mut guesser, &secret), GuesserState::Exhausted);
        assert_eq!(guesser.turns_taken(), 1);
        assert!(matches!(
            guesser.select_guess(),
            Err(GuesserError::GameOver(GuesserState::Exhausted))
        ));
    }

    #[test]
    fn solved_on_last_turn_is_solved() {
        let mut guesser = AutomatedGuesser::new(FirstCandidate, alphabet(6), 4, 1).unwrap();
        let secret = code("RRRR");
        assert_eq!(play(&mut guesser, &secret), GuesserState::Solved);
    }

    #[test]
    fn inconsistent_feedback_is_an_error() {
        let mut guesser = AutomatedGuesser::new(FirstCandidate, alphabet(6), 4, 10).unwrap();
        let guess = guesser.select_guess().unwrap();

        // RRRR cannot score three exact and one colour match
        let result = guesser.filter(&guess, Feedback::new(3, 1));
        assert_eq!(
            result,
            Err(GuesserError::InconsistentFeedback { turns: 1 })
        );
    }

    #[test]
    fn filter_rejects_wrong_length_guess() {
        let mut guesser = AutomatedGuesser::new(FirstCandidate, alphabet(6), 4, 10).unwrap();
        let result = guesser.filter(&code("RGB"), Feedback::default());
        assert!(matches!(result, Err(GuesserError::Score(_))));
        assert_eq!(guesser.candidates().len(), 1296);
    }

    #[test]
    fn suggest_does_not_take_a_turn() {
        let mut guesser = AutomatedGuesser::new(FirstCandidate, alphabet(6), 4, 10).unwrap();
        assert_eq!(guesser.suggest().unwrap(), Some(&code("RRRR")));
        assert_eq!(guesser.turns_taken(), 0);

        // Follow a guess made elsewhere
        let secret = code("GGBB");
        let guess = code("RGBY");
        guesser
            .filter(&guess, Feedback::score(&secret, &guess).unwrap())
            .unwrap();
        let hint = guesser.suggest().unwrap().unwrap();
        assert_eq!(
            Feedback::score(hint, &guess).unwrap(),
            Feedback::score(&secret, &guess).unwrap()
        );
        assert_eq!(guesser.state(), GuesserState::Filtering);
    }

    #[test]
    fn is_solved_checks_exact_count() {
        let guesser = AutomatedGuesser::new(FirstCandidate, alphabet(6), 4, 10).unwrap();
        assert!(guesser.is_solved(Feedback::new(4, 0)));
        assert!(!guesser.is_solved(Feedback::new(3, 0)));
        assert!(!guesser.is_solved(Feedback::new(0, 4)));
    }
}
