//! Random-vs-random series runner.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `cargo run --release --bin self_play -- --games 50 --max-plies 400 --seed 7`

use std::num::ParseIntError;

use pawnshop_chess::engines::engine_random::RandomEngine;
use pawnshop_chess::engines::engine_trait::Engine;
use pawnshop_chess::utils::game_harness::{play_engine_series, GameOutcome, HarnessConfig};
use pawnshop_chess::utils::logging::init_tracing;

fn main() -> Result<(), String> {
    init_tracing();

    let config = parse_args(std::env::args().skip(1))?;
    let make = |seed| Box::new(RandomEngine::with_seed(seed)) as Box<dyn Engine>;

    let reports = play_engine_series(make, make, &config).map_err(|e| e.to_string())?;

    let stalled = reports
        .iter()
        .filter(|r| matches!(r.outcome, GameOutcome::Stalled { .. }))
        .count();
    let total_plies: u64 = reports.iter().map(|r| u64::from(r.plies)).sum();
    let captures: usize = reports.iter().map(|r| r.captures).sum();
    let promotions: usize = reports.iter().map(|r| r.promotions).sum();

    println!(
        "games {} | stalled {} | capped {} | avg plies {:.1} | captures {} | promotions {}",
        reports.len(),
        stalled,
        reports.len() - stalled,
        total_plies as f64 / reports.len().max(1) as f64,
        captures,
        promotions
    );
    Ok(())
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<HarnessConfig, String> {
    let mut config = HarnessConfig::default();

    while let Some(arg) = args.next() {
        let value = args.next().ok_or_else(|| format!("{arg} needs a value"))?;
        let invalid = |_: ParseIntError| format!("Invalid value for {arg}: {value}");
        match arg.as_str() {
            "--games" => config.games = value.parse().map_err(invalid)?,
            "--max-plies" => config.max_plies = value.parse().map_err(invalid)?,
            "--seed" => config.base_seed = value.parse().map_err(invalid)?,
            other => return Err(format!("Unknown argument: {other}")),
        }
    }

    Ok(config)
}
