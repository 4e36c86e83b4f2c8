//! Simple interactive CLI mode
//!
//! Text-based human-vs-computer game without TUI: the computer holds the
//! secret and the player types guesses.

use crate::core::Code;
use crate::game::{Board, SecretHolder, Settings};
use crate::output::display::{print_board, print_outcome};
use anyhow::Result;
use colored::Colorize;
use log::info;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Mastermind - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "I've picked a secret of {} pegs from {} colours. You have {} guesses.",
        settings.num_pegs(),
        settings.num_colours(),
        settings.num_guesses()
    );
    println!("After each guess the board shows B for a right colour in the right place");
    println!("and W for a right colour in the wrong place.\n");
    println!("Commands: 'quit' to exit\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let holder = SecretHolder::generate(rng, settings.alphabet(), settings.num_pegs());
        let Some(board) = play_human_game(&holder, settings, &mut input)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        info!("human game over after {} turns: {:?}", board.turns().len(), board.status());

        match prompt(&mut input, "Play again? (yes/no)")?.as_deref() {
            Some("yes" | "y") => println!("\n🔄 New game started!\n"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Play one game reading guesses from `input`
///
/// Invalid guesses are reported and asked for again. Returns `None` if the
/// player quits or the input ends before the game is over.
///
/// # Errors
///
/// Returns an error if reading `input` fails.
pub fn play_human_game<B: BufRead>(
    holder: &SecretHolder,
    settings: &Settings,
    input: &mut B,
) -> Result<Option<Board>> {
    let mut board = Board::new(settings.num_pegs(), settings.num_guesses());
    print_board(&board, None);

    let status = loop {
        let guess = loop {
            println!(
                "\nPlease enter your guess at the {}-peg code:",
                settings.num_pegs()
            );
            println!("{}", settings.alphabet().legend().bright_black());

            let Some(line) = prompt(input, "Guess")? else {
                return Ok(None);
            };
            if matches!(line.as_str(), "quit" | "q" | "exit") {
                return Ok(None);
            }

            match Code::parse(&line, settings.alphabet(), settings.num_pegs()) {
                Ok(code) => break code,
                Err(e) => println!("{} {e}", "❌ Invalid guess:".red()),
            }
        };

        let feedback = holder.score(&guess)?;
        let status = board.record(guess, feedback)?;
        print_board(&board, status.is_finished().then(|| holder.reveal()));

        if status.is_finished() {
            break status;
        }
        println!("{} guesses left", board.remaining());
    };

    print_outcome(status, board.turns().len());
    Ok(Some(board))
}

/// Prompt and read one trimmed, lowercased line; `None` at end of input
fn prompt<B: BufRead>(input: &mut B, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use crate::game::GameStatus;
    use std::io::Cursor;

    fn holder(text: &str) -> SecretHolder {
        SecretHolder::new(Code::parse(text, Alphabet::CLASSIC, 4).unwrap())
    }

    #[test]
    fn correct_guess_wins() {
        let mut input = Cursor::new("rrrr\nrgby\n");
        let board = play_human_game(&holder("RGBY"), &Settings::default(), &mut input)
            .unwrap()
            .unwrap();

        assert_eq!(board.status(), GameStatus::BreakerWins);
        assert_eq!(board.turns().len(), 2);
    }

    #[test]
    fn invalid_guesses_are_skipped() {
        let mut input = Cursor::new("rgb\nrgbv\nxxxx\nrgby\n");
        let board = play_human_game(&holder("RGBY"), &Settings::default(), &mut input)
            .unwrap()
            .unwrap();

        assert_eq!(board.turns().len(), 1);
        assert_eq!(board.status(), GameStatus::BreakerWins);
    }

    #[test]
    fn budget_exhaustion_ends_game() {
        let settings = Settings::new(4, 6, 3).unwrap();
        let mut input = Cursor::new("rrrr\ngggg\nbbbb\nyyyy\n");
        let board = play_human_game(&holder("PPPP"), &settings, &mut input)
            .unwrap()
            .unwrap();

        assert_eq!(board.status(), GameStatus::MakerWins);
        assert_eq!(board.turns().len(), 3);
    }

    #[test]
    fn quit_and_end_of_input_return_none() {
        let mut input = Cursor::new("rrrr\nquit\n");
        assert!(
            play_human_game(&holder("RGBY"), &Settings::default(), &mut input)
                .unwrap()
                .is_none()
        );

        let mut input = Cursor::new("rrrr\n");
        assert!(
            play_human_game(&holder("RGBY"), &Settings::default(), &mut input)
                .unwrap()
                .is_none()
        );
    }
}
