use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "repo-insight",
    version,
    about = "Score repository snapshots and award quality badges"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one snapshot
    Score(ScoreCommand),
    /// Score two snapshots and compare them
    Compare(CompareCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Snapshot JSON file
    pub snapshot: PathBuf,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ScoreFormat,
    #[command(flatten)]
    pub scoring: ScoringArgs,
}

#[derive(Args)]
pub struct CompareCommand {
    pub first: PathBuf,
    pub second: PathBuf,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: CompareFormat,
    #[command(flatten)]
    pub scoring: ScoringArgs,
}

#[derive(Args)]
pub struct ScoringArgs {
    /// Reference time for recency and badge timestamps (RFC 3339)
    #[arg(long, value_parser = parse_as_of)]
    pub as_of: Option<DateTime<Utc>>,
    /// Scoring config file; replaces ./repo-insight.toml
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ScoreFormat {
    Json,
    Md,
    Badges,
    Svg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CompareFormat {
    Json,
    Md,
}

fn parse_as_of(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}
