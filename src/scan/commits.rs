use crate::types::config::CommitMessageRules;
use crate::types::snapshot::Commit;
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitFacts {
    pub total: usize,
    pub frequency_per_day: f64,
    pub consistency: f64,
    pub message_quality: f64,
    /// Distinct author names in first-seen order.
    pub authors: Vec<String>,
    pub distinct_authors: usize,
    pub primary_author: Option<String>,
    /// Commit dates, ascending.
    pub timeline: Vec<NaiveDate>,
}

pub fn analyze_commits(commits: &[Commit], rules: &CommitMessageRules) -> CommitFacts {
    if commits.is_empty() {
        return CommitFacts::default();
    }

    let mut timestamps: Vec<DateTime<Utc>> =
        commits.iter().filter_map(|commit| commit.timestamp).collect();
    timestamps.sort();

    let span_days = match (timestamps.first(), timestamps.last()) {
        (Some(first), Some(last)) => (*last - *first).num_milliseconds() as f64 / MILLIS_PER_DAY,
        _ => 0.0,
    };
    let frequency_per_day = commits.len() as f64 / span_days.max(1.0);

    let message_quality = commits
        .iter()
        .map(|commit| f64::from(message_score(&commit.message, rules)))
        .sum::<f64>()
        / commits.len() as f64;

    let (authors, primary_author) = tally_authors(commits);

    CommitFacts {
        total: commits.len(),
        frequency_per_day,
        consistency: consistency(&timestamps),
        message_quality,
        distinct_authors: authors.len(),
        authors,
        primary_author,
        timeline: timestamps.iter().map(|ts| ts.date_naive()).collect(),
    }
}

/// Score of a single commit message, capped at 100.
pub fn message_score(message: &str, rules: &CommitMessageRules) -> u32 {
    let length = message.chars().count();
    let mut score = 0;
    if length > rules.short_length {
        score += rules.short_bonus;
    }
    if length > rules.long_length {
        score += rules.long_bonus;
    }
    if reference_pattern().is_match(message) {
        score += rules.reference_bonus;
    }
    if is_conventional(message, &rules.conventional_types) {
        score += rules.conventional_bonus;
    }
    score.min(100)
}

fn reference_pattern() -> &'static Regex {
    static REFERENCE: OnceLock<Regex> = OnceLock::new();
    REFERENCE.get_or_init(|| {
        Regex::new(r"#\d+|(?i:fix|feat)").expect("reference pattern should compile")
    })
}

/// `type:` prefix with an exact, case-sensitive type; scopes do not match.
fn is_conventional(message: &str, types: &[String]) -> bool {
    message
        .split_once(':')
        .map(|(prefix, _)| types.iter().any(|kind| kind == prefix))
        .unwrap_or(false)
}

/// 100 minus the coefficient of variation of inter-commit gaps, in percent.
fn consistency(sorted: &[DateTime<Utc>]) -> f64 {
    let intervals: Vec<f64> = sorted
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_milliseconds() as f64)
        .collect();
    if intervals.len() < 2 {
        return 100.0;
    }

    let mean = intervals.iter().sum::<f64>() / intervals.len() as f64;
    if mean <= 0.0 {
        return 100.0;
    }
    let variance = intervals
        .iter()
        .map(|interval| (interval - mean).powi(2))
        .sum::<f64>()
        / intervals.len() as f64;

    (100.0 - variance.sqrt() / mean * 100.0).clamp(0.0, 100.0)
}

fn tally_authors(commits: &[Commit]) -> (Vec<String>, Option<String>) {
    let mut order = Vec::<String>::new();
    let mut counts = HashMap::<&str, usize>::new();
    for commit in commits {
        let count = counts.entry(commit.author.as_str()).or_insert(0);
        if *count == 0 {
            order.push(commit.author.clone());
        }
        *count += 1;
    }

    // Strictly greater keeps the earliest author on ties.
    let mut primary: Option<(&String, usize)> = None;
    for author in &order {
        let count = counts.get(author.as_str()).copied().unwrap_or(0);
        if primary.map(|(_, best)| count > best).unwrap_or(true) {
            primary = Some((author, count));
        }
    }
    let primary_author = primary.map(|(author, _)| author.clone());

    (order, primary_author)
}
