//! Side-by-side scoring of two repositories.

use crate::analyze;
use crate::engine;
use crate::error::Result;
use crate::scan::Facts;
use crate::types::config::ScoringConfig;
use crate::types::report::EngineReport;
use crate::types::scoring::{Dimension, DimensionScores};
use crate::types::snapshot::RepositorySnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::panic;
use std::thread;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    First,
    Second,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionDelta {
    pub dimension: Dimension,
    pub first: u8,
    pub second: u8,
    /// `first - second`.
    pub delta: i16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// `first.overall - second.overall`.
    pub overall_delta: i16,
    pub winner: Winner,
    pub per_dimension_deltas: Vec<DimensionDelta>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotComparison {
    pub comparison: Comparison,
    pub first: EngineReport,
    pub second: EngineReport,
    /// Strengths of the winning side.
    pub strengths: Vec<String>,
    /// Weaknesses of the losing side.
    pub weaknesses: Vec<String>,
}

/// The higher overall wins; a tie goes to `first`.
pub fn compare_scores(first: &DimensionScores, second: &DimensionScores) -> Comparison {
    let per_dimension_deltas = Dimension::ALL
        .iter()
        .map(|dimension| {
            let (a, b) = (first.get(*dimension), second.get(*dimension));
            DimensionDelta {
                dimension: *dimension,
                first: a,
                second: b,
                delta: i16::from(a) - i16::from(b),
            }
        })
        .collect();
    let overall_delta = i16::from(first.overall) - i16::from(second.overall);
    let winner = if overall_delta >= 0 {
        Winner::First
    } else {
        Winner::Second
    };

    Comparison {
        overall_delta,
        winner,
        per_dimension_deltas,
    }
}

pub fn compare(
    first: &Facts,
    second: &Facts,
    config: &ScoringConfig,
    as_of: DateTime<Utc>,
) -> Comparison {
    let (a, b) = both(
        || analyze::score(first, config, as_of),
        || analyze::score(second, config, as_of),
    );
    compare_scores(&a, &b)
}

/// Evaluates both snapshots on separate threads, then compares them.
pub fn compare_snapshots(
    first: &RepositorySnapshot,
    second: &RepositorySnapshot,
    config: &ScoringConfig,
    as_of: DateTime<Utc>,
) -> Result<SnapshotComparison> {
    let (first_report, second_report) = both(
        || engine::evaluate(first, config, as_of),
        || engine::evaluate(second, config, as_of),
    );
    let (first_report, second_report) = (first_report?, second_report?);

    let comparison = compare_scores(&first_report.scores, &second_report.scores);
    debug!(
        overall_delta = comparison.overall_delta,
        winner = ?comparison.winner,
        "repositories compared"
    );

    let (winner, loser) = match comparison.winner {
        Winner::First => (&first_report, &second_report),
        Winner::Second => (&second_report, &first_report),
    };
    let strengths = winner.insights.strengths.clone();
    let weaknesses = loser.insights.weaknesses.clone();

    Ok(SnapshotComparison {
        comparison,
        first: first_report,
        second: second_report,
        strengths,
        weaknesses,
    })
}

/// Runs the two closures concurrently and waits for both.
fn both<A, B, FA, FB>(left: FA, right: FB) -> (A, B)
where
    A: Send,
    B: Send,
    FA: FnOnce() -> A + Send,
    FB: FnOnce() -> B + Send,
{
    thread::scope(|scope| {
        let handle = scope.spawn(right);
        let a = left();
        let b = handle
            .join()
            .unwrap_or_else(|payload| panic::resume_unwind(payload));
        (a, b)
    })
}
