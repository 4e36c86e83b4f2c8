//! Benchmark command
//!
//! Tests automated guesser performance across many secrets.

use crate::core::Code;
use crate::game::{SecretHolder, Settings, play_automated};
use crate::solver::{CandidateSpace, Strategy};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::Rng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub exhausted: usize,
    pub total_turns: usize,
    /// Mean turns over solved games
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    /// Turns taken -> number of solved games
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// `count` random secrets for `settings`
pub fn random_secrets<R: Rng + ?Sized>(rng: &mut R, settings: &Settings, count: usize) -> Vec<Code> {
    (0..count)
        .map(|_| Code::random(rng, settings.alphabet(), settings.num_pegs()))
        .collect()
}

/// Every possible secret for `settings`, in enumeration order
#[must_use]
pub fn all_secrets(settings: &Settings) -> Vec<Code> {
    CandidateSpace::new(settings.alphabet(), settings.num_pegs())
        .iter()
        .collect()
}

/// Run the automated guesser against each secret in parallel
///
/// `settings` must already fit the automated guesser.
///
/// # Errors
///
/// Returns an error if any game aborts (settings over the caps, secrets of
/// the wrong length, or inconsistent feedback).
pub fn run_benchmark<S: Strategy + Clone + Sync>(
    strategy: &S,
    settings: &Settings,
    secrets: &[Code],
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {eta}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes = secrets
        .par_iter()
        .map(|secret| {
            let game = play_automated(&SecretHolder::new(secret.clone()), strategy.clone(), settings);
            pb.inc(1);
            game.map(|g| (g.solved(), g.turns()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut total_turns = 0;
    let mut solved_turns = 0;
    let mut exhausted = 0;

    for &(solved, turns) in &outcomes {
        total_turns += turns;
        if solved {
            solved_turns += turns;
            *distribution.entry(turns).or_insert(0) += 1;
        } else {
            exhausted += 1;
        }
    }

    let total_games = outcomes.len();
    let solved = total_games - exhausted;
    let average_turns = if solved > 0 {
        solved_turns as f64 / solved as f64
    } else {
        0.0
    };

    info!(
        "benchmark: {solved}/{total_games} solved, {average_turns:.3} average turns in {:.2}s",
        duration.as_secs_f64()
    );

    Ok(BenchmarkResult {
        total_games,
        solved,
        exhausted,
        total_turns,
        average_turns,
        min_turns: distribution.keys().next().copied().unwrap_or(0),
        max_turns: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
