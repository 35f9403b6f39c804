use crate::scan::Facts;
use crate::types::config::MaintainabilityRules;
use crate::types::scoring::{clamp_score, Score};
use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Recency relative to `as_of`; the issue-response and dependency-health
/// parts are fixed placeholders.
pub fn maintainability_score(
    facts: &Facts,
    rules: &MaintainabilityRules,
    as_of: DateTime<Utc>,
) -> Score {
    let mut score = rules.base;

    if let Some(updated_at) = facts.attributes.updated_at {
        // Fractional days: half a day past the stale limit is already stale.
        let days = (as_of - updated_at).num_milliseconds() as f64 / MILLIS_PER_DAY;
        if days < rules.fresh_days as f64 {
            score += rules.fresh_bonus;
        } else if days < rules.recent_days as f64 {
            score += rules.recent_bonus;
        } else if days > rules.stale_days as f64 {
            score -= rules.stale_penalty;
        }
    }

    score += rules.issue_response_placeholder;
    score += rules.dependency_health_placeholder;
    clamp_score(score)
}
