//! Mastermind - CLI
//!
//! Play Mastermind against the computer in a TUI or plain terminal, or watch
//! the automated guesser break codes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::debug;
use mastermind::{
    commands::{
        SolveConfig, all_secrets, random_secrets, run_auto, run_benchmark, run_simple, solve_code,
    },
    game::Settings,
    output::{print_benchmark_result, print_solve_result},
    solver::StrategyType,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game with an automated guesser",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of pegs in a code (2-12)
    #[arg(short, long, global = true, default_value = "4")]
    pegs: usize,

    /// Number of colours in play (2-8)
    #[arg(short, long, global = true, default_value = "6")]
    colours: u8,

    /// Number of guesses allowed (3-30)
    #[arg(short, long, global = true, default_value = "12")]
    guesses: usize,

    /// Guess selection: first (default) or minimax
    #[arg(short, long, global = true, default_value = "first")]
    strategy: String,

    /// Seed for the random number generator
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (break the computer's code without TUI)
    Simple,

    /// Watch the computer break a random code
    Auto,

    /// Solve a specific secret code
    Solve {
        /// The secret to solve, e.g. RGBY
        code: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the automated guesser
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Test every possible secret instead
        #[arg(short, long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = Settings::new(cli.pegs, cli.colours, cli.guesses)
        .context("invalid game settings")?;
    let Some(strategy) = StrategyType::from_name(&cli.strategy) else {
        bail!(
            "unknown strategy '{}' (expected 'first' or 'minimax')",
            cli.strategy
        );
    };
    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    debug!("settings: {settings:?}, strategy: {}", strategy.name());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(settings, strategy, rng),
        Commands::Simple => run_simple(&settings, &mut rng),
        Commands::Auto => run_auto(&settings, strategy, &mut rng).map(|_| ()),
        Commands::Solve { code, verbose } => run_solve_command(settings, strategy, &code, verbose),
        Commands::Benchmark { count, all } => {
            run_benchmark_command(&settings, strategy, count, all, &mut rng)
        }
    }
}

fn run_solve_command(
    settings: Settings,
    strategy: StrategyType,
    code: &str,
    verbose: bool,
) -> Result<()> {
    let config = SolveConfig::new(code.to_string(), settings);
    let game = solve_code(&config, strategy)?;

    print_solve_result(&game, code, verbose);
    Ok(())
}

fn run_benchmark_command(
    settings: &Settings,
    strategy: StrategyType,
    count: usize,
    all: bool,
    rng: &mut StdRng,
) -> Result<()> {
    let settings = settings.for_automated_guesser();
    let secrets = if all {
        all_secrets(&settings)
    } else {
        random_secrets(rng, &settings, count)
    };

    println!(
        "Running benchmark on {} secrets ({} pegs, {} colours, {} strategy)...",
        secrets.len(),
        settings.num_pegs(),
        settings.num_colours(),
        strategy.name()
    );

    let result = run_benchmark(&strategy, &settings, &secrets, true)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(settings: Settings, strategy: StrategyType, rng: StdRng) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(settings, strategy, rng);
    run_tui(app)
}
