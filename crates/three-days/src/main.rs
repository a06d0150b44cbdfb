//! Three Days to Rescue
//!
//! Main entry point: parses flags, sets up logging, plays one run and appends
//! it to the run log.

mod config;
mod console;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use tdr_core::{GameLoop, GameRng, Interface, RunOptions, play};
use tdr_save::{JsonlRecorder, recent_records};

use crate::console::ConsoleInterface;

/// Survive three days until the rescue team arrives
#[derive(Parser, Debug)]
#[command(name = "three-days")]
#[command(author, version, about = "Three Days to Rescue - ration your water and food", long_about = None)]
pub struct Args {
    /// Seed for a reproducible run (skips the seed prompt)
    #[arg(short = 's', long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Run log to append to
    #[arg(short = 'l', long)]
    log: Option<PathBuf>,

    /// Days to survive (1-4)
    #[arg(short = 'd', long)]
    days: Option<u32>,

    /// Options file (`OPTIONS=` lines)
    #[arg(short = 'c', long, env = config::OPTIONS_ENV)]
    config: Option<PathBuf>,

    /// Hide the status line before decisions
    #[arg(long)]
    no_status: bool,

    /// Skip the opening text
    #[arg(long)]
    no_intro: bool,

    /// Show the last N recorded runs and exit
    #[arg(long, value_name = "N", num_args = 0..=1, default_missing_value = "10")]
    history: Option<usize>,

    /// Verbose diagnostics on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

const SEED_PROMPT: &str =
    "(Optional) Enter a random seed to reproduce a run (or press Enter for random): ";

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("three-days: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<ExitCode> {
    let options = config::load(args)?;

    if let Some(count) = args.history {
        display_history(&options, count)?;
        return Ok(ExitCode::SUCCESS);
    }

    let stdin = io::stdin();
    let mut ui = ConsoleInterface::new(stdin.lock(), io::stdout()).show_status(options.status);

    if options.intro {
        print_intro(&mut ui, &options);
    }

    let seed = match options.seed {
        Some(seed) => Some(seed),
        None => ui.read_seed(SEED_PROMPT),
    };
    let rng = match seed {
        Some(seed) => GameRng::from_player_seed(seed),
        None => GameRng::from_entropy(),
    };
    debug!(?seed, rng_seed = rng.seed(), "seed chosen");

    let game = GameLoop::with_days(rng, options.days)?;
    let mut recorder = JsonlRecorder::new(&options.logfile);
    let report = play(game, seed, &mut ui, &mut recorder)
        .with_context(|| format!("appending to {}", options.logfile.display()))?;

    ui.message(&format!("\n(Log appended to {})", options.logfile.display()));

    if report.hangup {
        warn!("input closed before the run finished");
        return Ok(ExitCode::FAILURE);
    }
    info!(ending = ?report.record.ending(), "run complete");
    Ok(ExitCode::SUCCESS)
}

fn print_intro<I: Interface>(ui: &mut I, options: &RunOptions) {
    ui.message("\u{2014} Three Days to Rescue \u{2014}");
    ui.message(&format!(
        "You are Winston, trapped in Valkyrie. Survive {} days. Each day requires at least 1/3 water and 1/3 food.",
        options.days
    ));
    ui.message("Initial supplies: 1 bottle of water (3/3), 1 can of food (3/3).");
}

fn display_history(options: &RunOptions, count: usize) -> Result<()> {
    let (records, skipped) = recent_records(&options.logfile, count)
        .with_context(|| format!("reading {}", options.logfile.display()))?;

    let mut out = io::stdout().lock();
    if records.is_empty() {
        writeln!(out, "No runs recorded in {}.", options.logfile.display())?;
    }
    for record in &records {
        writeln!(out, "{}", record.summary())?;
    }
    for line in skipped {
        writeln!(out, "(line {line} of {} is corrupted)", options.logfile.display())?;
    }
    Ok(())
}
