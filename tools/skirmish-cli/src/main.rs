//! skirmish: headless battle runner.
//!
//! Usage:
//!   skirmish --preset formation --seed 7
//!   skirmish --preset custom --width 60 --height 40 --per-team 12 --history battle.json

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use thiserror::Error;

use skirmish_core::constants::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_CUSTOM_UNITS_PER_TEAM,
    DEFAULT_STAGNATION_THRESHOLD, DEFAULT_UNITS_PER_TEAM,
};
use skirmish_core::state::BattleSnapshot;
use skirmish_core::types::{BoardSize, TeamCounts};
use skirmish_sim::run::{RunConfig, RunOutcome};
use skirmish_sim::scenario::BattlePreset;
use skirmish_sim::{SimConfig, SimError, SimulationEngine};

/// Run a two-team grid battle to completion and report the result
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Run a Blue vs Red grid battle and report the outcome")]
struct Args {
    /// Battle setup
    #[arg(long, value_enum, default_value_t = PresetArg::Random)]
    preset: PresetArg,

    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: u32,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: u32,

    /// Units per team for the random and custom presets
    #[arg(long)]
    per_team: Option<usize>,

    /// Stop after this many ticks
    #[arg(long)]
    max_iterations: Option<u64>,

    /// Ticks of unchanged team counts that end the battle
    #[arg(long, default_value_t = DEFAULT_STAGNATION_THRESHOLD)]
    stagnation_threshold: usize,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Write the per-tick snapshot history as JSON to this path
    #[arg(long)]
    history: Option<PathBuf>,

    /// Enable per-tick debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PresetArg {
    /// Mixed units scattered over the board
    Random,
    /// Barbarian front lines screening archer back lines
    Formation,
    /// Many barbarians against a few archers
    Asymmetric,
    /// Random battle on a caller-sized board
    Custom,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("failed to write history to {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Summary printed to stdout when the battle ends.
#[derive(Serialize)]
struct BattleReport {
    seed: u64,
    board: BoardSize,
    initial: TeamCounts,
    #[serde(flatten)]
    outcome: RunOutcome,
    reason_label: String,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        tracing::error!("{e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), CliError> {
    let seed = args.seed.unwrap_or(SimConfig::default().seed);
    let board = BoardSize {
        width: args.width,
        height: args.height,
    };
    let config = SimConfig {
        seed,
        board,
        record_history: args.history.is_some(),
    };

    let mut engine = SimulationEngine::from_preset(config, preset_for(args))?;
    let initial = engine.team_counts();
    tracing::info!(
        seed,
        blue = initial.blue,
        red = initial.red,
        "Starting battle"
    );

    let outcome = engine.run(&RunConfig {
        max_iterations: args.max_iterations,
        stagnation_threshold: args.stagnation_threshold,
    })?;

    if let Some(path) = &args.history {
        write_history(path, engine.history())?;
        tracing::info!(
            path = %path.display(),
            frames = engine.history().len(),
            "history written"
        );
    }

    let report = BattleReport {
        seed,
        board,
        initial,
        outcome,
        reason_label: outcome.reason.to_string(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn preset_for(args: &Args) -> BattlePreset {
    match args.preset {
        PresetArg::Random => BattlePreset::Random {
            per_team: args.per_team.unwrap_or(DEFAULT_UNITS_PER_TEAM),
        },
        PresetArg::Custom => BattlePreset::Random {
            per_team: args.per_team.unwrap_or(DEFAULT_CUSTOM_UNITS_PER_TEAM),
        },
        PresetArg::Formation => BattlePreset::Formation,
        PresetArg::Asymmetric => BattlePreset::Asymmetric,
    }
}

fn write_history(path: &Path, frames: &[BattleSnapshot]) -> Result<(), CliError> {
    let file = File::create(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    encode_history(BufWriter::new(file), path, frames)
}

/// Stream `frames` as JSON. Failures of the underlying writer surface as `CliError::Io`.
fn encode_history(
    mut writer: impl Write,
    path: &Path,
    frames: &[BattleSnapshot],
) -> Result<(), CliError> {
    let io_err = |source: io::Error| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    serde_json::to_writer(&mut writer, frames).map_err(|e| {
        if e.is_io() {
            io_err(e.into())
        } else {
            CliError::Json(e)
        }
    })?;
    writer.flush().map_err(io_err)
}
