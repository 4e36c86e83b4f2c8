//! Display functions for command results

use super::formatters::{colour_code, create_progress_bar, render_board};
use crate::commands::BenchmarkResult;
use crate::core::Code;
use crate::game::{AutomatedGame, Board, GameStatus};
use colored::Colorize;

/// Print the board, revealing the secret row if `reveal` is given
pub fn print_board(board: &Board, reveal: Option<&Code>) {
    for line in render_board(board, reveal) {
        println!("{line}");
    }
}

/// Print who won and after how many turns
pub fn print_outcome(status: GameStatus, turns: usize) {
    println!();
    match status {
        GameStatus::BreakerWins => println!(
            "{}",
            format!("✅ Code broken in {turns} guesses!").green().bold()
        ),
        GameStatus::MakerWins => println!(
            "{}",
            format!("❌ Code not broken after {turns} guesses").red().bold()
        ),
        GameStatus::InProgress => {}
    }
}

/// Print the result of solving a code
pub fn print_solve_result(game: &AutomatedGame, secret: &str, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", secret.to_uppercase().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    let num_pegs = game.board.num_pegs();
    for (i, step) in game.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colour_code(&step.guess),
            step.feedback.to_pegs(num_pegs)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                println!(
                    "  Reduction:  {:.1}x",
                    step.candidates_before as f64 / step.candidates_after as f64
                );
            }
        }
    }

    print_outcome(game.status(), game.turns());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.exhausted > 0 {
        println!(
            "   Out of guesses:   {}",
            format!("{}", result.exhausted).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_turns)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_turns).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_turns).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&turns, &count) in &result.distribution {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {turns:2}: {} {count:6} ({pct:5.1}%)", bar.green());
    }
}
