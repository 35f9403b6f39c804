use crate::scan::Facts;
use crate::types::config::CollaborationRules;
use crate::types::scoring::{clamp_score, Score};

pub fn collaboration_score(facts: &Facts, rules: &CollaborationRules) -> Score {
    let mut score = 0.0;

    let authors = facts.commits.distinct_authors;
    if authors > 1 {
        score += rules.multiple_authors_bonus;
    }
    if authors > rules.team_authors_above {
        score += rules.team_authors_bonus;
    }

    let pulls = &facts.pull_requests;
    if pulls.total > 0 {
        score += rules.pull_requests_bonus;
    }
    if pulls.merged_ratio > rules.merged_ratio_above {
        score += rules.merged_ratio_bonus;
    }
    if pulls.avg_comments > 0.0 {
        score += rules.review_comments_bonus;
    }

    if facts.attributes.open_issues > 0 {
        score += rules.open_issues_bonus;
    }

    clamp_score(score)
}
