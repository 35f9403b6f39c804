use crate::types::snapshot::{ItemState, PullRequest};
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PullRequestFacts {
    pub total: usize,
    pub merged: usize,
    pub open: usize,
    pub merged_ratio: f64,
    pub avg_review_time_days: f64,
    pub avg_comments: f64,
    pub avg_size: f64,
}

pub fn analyze_pull_requests(pulls: &[PullRequest]) -> PullRequestFacts {
    if pulls.is_empty() {
        return PullRequestFacts::default();
    }

    let total = pulls.len();
    let merged = pulls.iter().filter(|pull| pull.merged_at.is_some()).count();
    let open = pulls
        .iter()
        .filter(|pull| pull.state == ItemState::Open)
        .count();

    let review_times: Vec<f64> = pulls
        .iter()
        .filter_map(|pull| match (pull.created_at, pull.merged_at) {
            (Some(created), Some(merged)) => {
                Some((merged - created).num_seconds() as f64 / SECONDS_PER_DAY)
            }
            _ => None,
        })
        .collect();

    PullRequestFacts {
        total,
        merged,
        open,
        merged_ratio: merged as f64 / total.max(1) as f64,
        avg_review_time_days: mean(&review_times),
        avg_comments: pulls.iter().map(|pull| pull.comments as f64).sum::<f64>() / total as f64,
        avg_size: pulls.iter().map(pull_size).sum::<f64>() / total as f64,
    }
}

/// Half the churned lines plus ten per touched file. Summed in `f64`, so
/// counts near `u64::MAX` stay finite.
pub fn pull_size(pull: &PullRequest) -> f64 {
    let count = |value: Option<u64>| value.unwrap_or(0) as f64;
    (count(pull.additions) + count(pull.deletions)) * 0.5 + count(pull.changed_files) * 10.0
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
