//! Command-line arguments and terminal input.
//!
//! The readers here work over any [`BufRead`] so the interactive flow can be
//! driven from tests with an in-memory cursor.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::BufRead;

use crate::config::{AppConfig, DEFAULT_CONFIG_FILE};
use crate::strategy::parse_game_count;

/// Roulette betting-strategy simulator.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Read the strategy from this file instead of the terminal
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Number of games to simulate (prompted for when omitted)
    #[arg(short, long)]
    pub games: Option<u64>,

    /// Seed the wheel for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Settings after command-line flags are layered over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub games: Option<u64>,
    pub seed: Option<u64>,
    pub sentinel: String,
    pub json: bool,
}

impl RunSettings {
    /// Flags win over config values.
    pub fn resolve(args: &Args, config: &AppConfig) -> Self {
        Self {
            games: args.games.or(config.simulation.games),
            seed: args.seed.or(config.simulation.seed),
            sentinel: config.simulation.sentinel.clone(),
            json: args.json,
        }
    }
}

/// Read strategy lines until a line exactly equal to `sentinel` or EOF.
///
/// Lines are joined with `\n`, each one terminated. The sentinel itself is
/// not included.
pub fn collect_strategy<R: BufRead>(reader: &mut R, sentinel: &str) -> Result<String> {
    let mut text = String::new();
    let mut line = String::new();
    loop {
        line.clear();
        let n = reader
            .read_line(&mut line)
            .context("Failed to read strategy input")?;
        if n == 0 {
            break;
        }
        let content = line.strip_suffix('\n').unwrap_or(&line);
        let content = content.strip_suffix('\r').unwrap_or(content);
        if content == sentinel {
            break;
        }
        text.push_str(content);
        text.push('\n');
    }
    Ok(text)
}

/// Read one line and parse it as a game count. EOF reads as an empty line.
pub fn read_game_count<R: BufRead>(reader: &mut R) -> Result<u64> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read game count")?;
    Ok(parse_game_count(&line)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
