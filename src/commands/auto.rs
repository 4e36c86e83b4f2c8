//! Automated play command
//!
//! The computer plays both sides: a random secret is generated and the
//! automated guesser breaks it, printing the board after every turn.

use crate::game::{AutomatedGame, Board, SecretHolder, Settings, play_automated};
use crate::output::display::{print_board, print_outcome};
use crate::output::formatters::colour_code;
use crate::solver::{GUESSER_MAX_COLOURS, GUESSER_MAX_PEGS, Strategy};
use anyhow::Result;
use colored::Colorize;
use log::warn;
use rand::Rng;

/// Play one computer-vs-computer game and print it turn by turn
///
/// Settings beyond the automated guesser's limits are capped, with a notice.
///
/// # Errors
///
/// Returns an error if the game aborts on inconsistent feedback.
pub fn run_auto<S: Strategy, R: Rng + ?Sized>(
    settings: &Settings,
    strategy: S,
    rng: &mut R,
) -> Result<AutomatedGame> {
    let capped = settings.for_automated_guesser();
    if capped != *settings {
        warn!("settings capped for the automated guesser: {capped:?}");
        println!(
            "{}",
            format!(
                "Note: the computer plays with at most {} pegs and {} colours; using {} pegs and {} colours.",
                GUESSER_MAX_PEGS,
                GUESSER_MAX_COLOURS,
                capped.num_pegs(),
                capped.num_colours()
            )
            .yellow()
        );
    }

    let holder = SecretHolder::generate(rng, capped.alphabet(), capped.num_pegs());
    let game = play_automated(&holder, strategy, &capped)?;

    let mut board = Board::new(capped.num_pegs(), capped.num_guesses());
    for step in &game.steps {
        board.record(step.guess.clone(), step.feedback)?;
        println!(
            "\nComputer guessed {} ({} candidates left)",
            colour_code(&step.guess),
            step.candidates_after
        );
        print_board(&board, board.is_finished().then(|| holder.reveal()));
    }
    print_outcome(game.status(), game.turns());

    Ok(game)
}
