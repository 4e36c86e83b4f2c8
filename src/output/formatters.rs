//! Formatting utilities for terminal output

use crate::core::{Code, Colour, UNSET_SYMBOL};
use crate::game::Board;
use colored::{ColoredString, Colorize};

/// Width of the board's horizontal rules
const BOARD_WIDTH: usize = 20;

/// Colour a single peg letter with its own colour
#[must_use]
pub fn colour_peg(colour: Colour) -> ColoredString {
    let letter = colour.letter().to_string();
    match colour {
        Colour::Red => letter.red(),
        Colour::Green => letter.green(),
        Colour::Blue => letter.blue(),
        Colour::Yellow => letter.yellow(),
        Colour::Orange => letter.truecolor(255, 165, 0),
        Colour::Purple => letter.magenta(),
        Colour::Indigo => letter.truecolor(75, 0, 130),
        Colour::Violet => letter.bright_magenta(),
    }
    .bold()
}

/// A code with every peg coloured
#[must_use]
pub fn colour_code(code: &Code) -> String {
    code.pegs().iter().map(|&c| colour_peg(c).to_string()).collect()
}

/// Render the board as plain ASCII rows
///
/// One row per allowed guess: guess pegs, `|`, key pegs, then the turn number
/// for rows already played. Unplayed rows are filled with the unset symbol.
/// The last row shows the secret if `reveal` is given, `*` otherwise.
#[must_use]
pub fn render_board(board: &Board, reveal: Option<&Code>) -> Vec<String> {
    let pegs = board.num_pegs();
    let unset: String = std::iter::repeat_n(UNSET_SYMBOL, pegs).collect();
    let mut lines = Vec::with_capacity(board.num_guesses() + 4);

    lines.push("#".repeat(BOARD_WIDTH));
    for row in 0..board.num_guesses() {
        let line = match board.turns().get(row) {
            Some(turn) => format!(
                "# {}|{} {}",
                turn.guess,
                turn.feedback.to_pegs(pegs),
                row + 1
            ),
            None => format!("# {unset}|{unset}"),
        };
        lines.push(line);
    }
    lines.push(format!("# {}", "-".repeat(BOARD_WIDTH - 2)));

    let secret_row = reveal.map_or_else(|| "*".repeat(pegs), ToString::to_string);
    lines.push(format!("# {secret_row}"));
    lines.push("#".repeat(BOARD_WIDTH));
    lines
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
