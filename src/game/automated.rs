//! Automated code breaking against a secret holder
//!
//! Runs the turn loop: guess, score, filter, record, until the board reports
//! the game finished.

use super::{Board, BoardError, GameStatus, SecretHolder, Settings};
use crate::core::{Code, Feedback, ScoreError};
use crate::solver::{AutomatedGuesser, GuesserError, GuesserState, Strategy};
use log::info;
use thiserror::Error;

/// Errors that abort an automated game
///
/// None of these is a normal outcome: an exhausted turn budget is reported
/// through [`GameStatus::MakerWins`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Guesser(#[from] GuesserError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// A single guess step in an automated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of an automated game
#[derive(Debug, Clone)]
pub struct AutomatedGame {
    pub board: Board,
    pub steps: Vec<GuessStep>,
    pub final_state: GuesserState,
}

impl AutomatedGame {
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.board.status()
    }

    #[must_use]
    pub const fn solved(&self) -> bool {
        matches!(self.board.status(), GameStatus::BreakerWins)
    }

    #[must_use]
    pub fn turns(&self) -> usize {
        self.steps.len()
    }
}

/// Play one game with the automated guesser against `holder`
///
/// `settings` must already fit the automated guesser; see
/// [`Settings::for_automated_guesser`].
///
/// # Errors
/// Returns `GameError` if the settings exceed the guesser's caps, if the
/// secret's length differs from the settings, or if the feedback history
/// becomes inconsistent.
pub fn play_automated<S: Strategy>(
    holder: &SecretHolder,
    strategy: S,
    settings: &Settings,
) -> Result<AutomatedGame, GameError> {
    let mut guesser = AutomatedGuesser::new(
        strategy,
        settings.alphabet(),
        settings.num_pegs(),
        settings.num_guesses(),
    )?;
    let mut board = Board::new(settings.num_pegs(), settings.num_guesses());
    let mut steps = Vec::new();

    while !board.is_finished() {
        let candidates_before = guesser.candidates().len();
        let guess = guesser.select_guess()?;
        let feedback = holder.score(&guess)?;
        guesser.filter(&guess, feedback)?;

        steps.push(GuessStep {
            guess: guess.clone(),
            feedback,
            candidates_before,
            candidates_after: guesser.candidates().len(),
        });
        board.record(guess, feedback)?;
    }

    info!(
        "automated game over after {} turns: {:?}",
        steps.len(),
        board.status()
    );

    Ok(AutomatedGame {
        board,
        steps,
        final_state: guesser.state(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use crate::solver::{FirstCandidate, MinimaxStrategy};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn holder(text: &str) -> SecretHolder {
        SecretHolder::new(Code::parse(text, Alphabet::CLASSIC, text.len()).unwrap())
    }

    #[test]
    fn solves_and_records_every_turn() {
        let game = play_automated(&holder("RGBY"), FirstCandidate, &Settings::default()).unwrap();

        assert!(game.solved());
        assert_eq!(game.final_state, GuesserState::Solved);
        assert_eq!(game.board.turns().len(), game.steps.len());
        assert_eq!(game.steps.last().unwrap().guess.to_string(), "RGBY");
        for step in &game.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn random_secrets_solved_within_ten_turns() {
        let settings = Settings::new(4, 6, 30).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..25 {
            let secret = SecretHolder::generate(&mut rng, settings.alphabet(), 4);
            let game = play_automated(&secret, FirstCandidate, &settings).unwrap();
            assert!(game.solved());
            assert!(game.turns() <= 10, "{} took {} turns", secret.reveal(), game.turns());
        }
    }

    #[test]
    fn tight_budget_ends_in_maker_win() {
        let settings = Settings::new(4, 6, 3).unwrap();
        let game = play_automated(&holder("PPPP"), FirstCandidate, &settings).unwrap();

        assert_eq!(game.status(), GameStatus::MakerWins);
        assert_eq!(game.final_state, GuesserState::Exhausted);
        assert_eq!(game.turns(), 3);
    }

    #[test]
    fn minimax_plays_full_game() {
        let game = play_automated(
            &holder("YYOB"),
            MinimaxStrategy::default(),
            &Settings::default(),
        )
        .unwrap();
        assert!(game.solved());
    }

    #[test]
    fn oversized_settings_are_rejected() {
        let settings = Settings::new(7, 6, 12).unwrap();
        let secret = holder("RGBYOPR");
        assert!(matches!(
            play_automated(&secret, FirstCandidate, &settings),
            Err(GameError::Guesser(GuesserError::LimitsExceeded { .. }))
        ));

        let capped = settings.for_automated_guesser();
        assert!(matches!(
            play_automated(&secret, FirstCandidate, &capped),
            Err(GameError::Score(_))
        ));
    }
}
