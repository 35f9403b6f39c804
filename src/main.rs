mod cli;

use chrono::Utc;
use clap::Parser;
use repo_insight::error::{EngineError, Result};
use repo_insight::report::{self, ComparisonFormat, OutputFormat};
use repo_insight::types::config::ScoringConfig;
use repo_insight::{compare, config, engine, RepositorySnapshot};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_SNAPSHOT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_snapshot(path: &Path) -> Result<RepositorySnapshot> {
    if !path.exists() {
        return Err(EngineError::PathNotFound(path.display().to_string()));
    }
    let raw = std::fs::read_to_string(path)?;
    RepositorySnapshot::from_json(&raw).map_err(|e| match e {
        EngineError::InvalidSnapshot(message) => {
            EngineError::InvalidSnapshot(format!("{}: {message}", path.display()))
        }
        other => other,
    })
}

fn load_scoring(explicit: Option<&Path>) -> Result<ScoringConfig> {
    let cwd = std::env::current_dir()?;
    config::load_config(explicit, &cwd)
}

fn run(cli: cli::Cli) -> Result<i32> {
    match cli.command {
        cli::Commands::Score(cmd) => {
            let scoring = load_scoring(cmd.scoring.config.as_deref())?;
            let as_of = cmd.scoring.as_of.unwrap_or_else(Utc::now);
            let snapshot = read_snapshot(&cmd.snapshot)?;
            debug!(path = %cmd.snapshot.display(), %as_of, "scoring snapshot");

            let engine_report = engine::evaluate(&snapshot, &scoring, as_of)?;
            let format = match cmd.format {
                cli::ScoreFormat::Json => OutputFormat::Json,
                cli::ScoreFormat::Md => OutputFormat::Md,
                cli::ScoreFormat::Badges => OutputFormat::Badges,
                cli::ScoreFormat::Svg => OutputFormat::Svg,
            };
            let rendered = report::render(&engine_report, format, as_of)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Compare(cmd) => {
            let scoring = load_scoring(cmd.scoring.config.as_deref())?;
            let as_of = cmd.scoring.as_of.unwrap_or_else(Utc::now);
            let first = read_snapshot(&cmd.first)?;
            let second = read_snapshot(&cmd.second)?;

            let result = compare::compare_snapshots(&first, &second, &scoring, as_of)?;
            info!(
                winner = ?result.comparison.winner,
                delta = result.comparison.overall_delta,
                "comparison finished"
            );
            let format = match cmd.format {
                cli::CompareFormat::Json => ComparisonFormat::Json,
                cli::CompareFormat::Md => ComparisonFormat::Md,
            };
            println!("{}", report::render_comparison(&result, format)?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e @ EngineError::InvalidSnapshot(_)) => {
            eprintln!("error: {e}");
            std::process::exit(exit_code::INVALID_SNAPSHOT);
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
