//! Roulette betting-strategy simulator.
//!
//! Entry point. Loads configuration, initialises structured logging, reads a
//! strategy from a file or the terminal, then runs the simulation and prints
//! the resulting bankroll.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, info, warn};

use roulette_sim::cli::{self, Args, RunSettings};
use roulette_sim::config::AppConfig;
use roulette_sim::engine::Simulator;
use roulette_sim::strategy::parse_strategy;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let args = Args::parse();
    let cfg = AppConfig::load_or_default(&args.config)?;
    init_logging(&cfg);

    let settings = RunSettings::resolve(&args, &cfg);
    debug!(?settings, config = %args.config, "Settings resolved");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    // -- Strategy --------------------------------------------------------

    let text = match &args.strategy {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read strategy file: {path}"))?,
        None => {
            println!(
                "Enter your roulette strategy (type '{}' on a new line when finished):",
                settings.sentinel
            );
            cli::collect_strategy(&mut input, &settings.sentinel)?
        }
    };

    let strategy = match parse_strategy(&text) {
        Ok(s) => s,
        Err(e) => {
            println!("Error parsing strategy: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    for bet in strategy.unrecognized_bets() {
        warn!(kind = %bet.kind, "Unrecognized bet type, it will never be placed");
    }

    // -- Game count ------------------------------------------------------

    let games = match settings.games {
        Some(n) => n,
        None => {
            print!("Enter the number of games to simulate: ");
            io::stdout().flush().context("Failed to flush stdout")?;
            match cli::read_game_count(&mut input) {
                Ok(n) => n,
                Err(e) => {
                    println!("Invalid number of games: {e}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    };

    // -- Simulate --------------------------------------------------------

    info!(
        games,
        bets = strategy.bets.len(),
        bankroll = %strategy.initial_bankroll,
        seed = ?settings.seed,
        "Starting simulation"
    );

    let report = match settings.seed {
        Some(seed) => Simulator::seeded(seed).run(&strategy, games),
        None => Simulator::from_entropy().run(&strategy, games),
    };

    if settings.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialise report")?;
        println!("{json}");
    } else {
        println!("{report}");
    }

    info!(
        final_bankroll = %report.final_bankroll,
        profit_loss = %report.profit_loss,
        "Simulation finished"
    );

    Ok(ExitCode::SUCCESS)
}

/// Initialise the `tracing` subscriber. Logs go to stderr.
fn init_logging(cfg: &AppConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.logging.filter));

    let json_logging = cfg.logging.json || std::env::var("ROULETTE_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(io::stderr)
            .init();
    }
}
