//! Code solving command
//!
//! Runs the automated guesser against a specific secret and returns the
//! solution path.

use crate::core::Code;
use crate::game::{AutomatedGame, SecretHolder, Settings, play_automated};
use crate::solver::Strategy;
use anyhow::{Context, Result};

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub settings: Settings,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String, settings: Settings) -> Self {
        Self { secret, settings }
    }
}

/// Solve a specific secret with the given strategy
///
/// Settings are capped to what the automated guesser supports, and the
/// secret is parsed against the capped settings.
///
/// # Errors
///
/// Returns an error if:
/// - The secret does not parse for the (capped) settings
/// - The game aborts on inconsistent feedback
pub fn solve_code<S: Strategy>(config: &SolveConfig, strategy: S) -> Result<AutomatedGame> {
    let settings = config.settings.for_automated_guesser();
    let secret = Code::parse(&config.secret, settings.alphabet(), settings.num_pegs())
        .with_context(|| {
            format!(
                "invalid secret '{}' for {} pegs and {} colours",
                config.secret,
                settings.num_pegs(),
                settings.num_colours()
            )
        })?;

    let game = play_automated(&SecretHolder::new(secret), strategy, &settings)?;
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;
    use crate::solver::{FirstCandidate, MinimaxStrategy};

    #[test]
    fn solve_code_succeeds() {
        let config = SolveConfig::new("RGBY".to_string(), Settings::default());
        let game = solve_code(&config, FirstCandidate).unwrap();

        assert!(game.solved());
        assert_eq!(game.steps.last().unwrap().guess.to_string(), "RGBY");
    }

    #[test]
    fn solve_records_history() {
        let config = SolveConfig::new("ooyp".to_string(), Settings::default());
        let game = solve_code(&config, FirstCandidate).unwrap();

        assert!(!game.steps.is_empty());
        for step in &game.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        assert_eq!(game.steps.last().unwrap().candidates_after, 1);
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let config = SolveConfig::new("RGBV".to_string(), Settings::default());
        assert!(solve_code(&config, FirstCandidate).is_err());

        let config = SolveConfig::new("RGB".to_string(), Settings::default());
        assert!(solve_code(&config, FirstCandidate).is_err());
    }

    #[test]
    fn solve_respects_turn_budget() {
        let settings = Settings::new(4, 6, 3).unwrap();
        let config = SolveConfig::new("PPPP".to_string(), settings);
        let game = solve_code(&config, FirstCandidate).unwrap();

        assert_eq!(game.status(), GameStatus::MakerWins);
        assert_eq!(game.steps.len(), 3);
    }

    #[test]
    fn solve_with_capped_settings() {
        // 8 colours are capped to 7, so Indigo is still available
        let settings = Settings::new(4, 8, 12).unwrap();
        let config = SolveConfig::new("IIRG".to_string(), settings);
        assert!(solve_code(&config, MinimaxStrategy::default()).unwrap().solved());

        let config = SolveConfig::new("VRRG".to_string(), settings);
        assert!(solve_code(&config, FirstCandidate).is_err());
    }
}
