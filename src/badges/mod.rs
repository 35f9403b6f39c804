//! Badge rule tables and badge identity.
//!
//! The three tables run independently. Their output is put into one
//! canonical order before hashing, so badge ids depend only on which badges
//! were earned and never on evaluation order.

pub mod achievement;
pub mod skill;
pub mod special;

pub use achievement::overall_badge;

use crate::error::Result;
use crate::scan::Facts;
use crate::types::config::BadgeRules;
use crate::types::report::{Badge, BadgeLevel, BadgeSpec};
use crate::types::scoring::DimensionScores;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::cmp::Ordering;
use tracing::debug;

const HASH_LEN: usize = 8;

pub fn generate_badges(
    scores: &DimensionScores,
    facts: &Facts,
    rules: &BadgeRules,
    earned_at: DateTime<Utc>,
) -> Result<Vec<Badge>> {
    let mut specs = Vec::new();
    specs.extend(achievement::achievement_badge(scores.overall, &rules.achievement));
    specs.extend(skill::skill_badges(scores, rules));
    specs.extend(special::special_badges(facts, &rules.special));
    canonical_sort(&mut specs);

    let hash = badge_set_hash(&specs)?;
    debug!(count = specs.len(), hash = %hash, "badges generated");

    Ok(specs
        .into_iter()
        .map(|spec| Badge {
            id: format!("{}-{}-{hash}", spec.category, spec.level.as_str()),
            name: spec.name,
            level: spec.level,
            category: spec.category,
            icon: spec.icon,
            description: spec.description,
            threshold: spec.threshold,
            earned_at,
        })
        .collect())
}

/// Achievement first, then skill, then special; inside a group by
/// category, level and name.
pub fn canonical_sort(specs: &mut [BadgeSpec]) {
    specs.sort_by(compare_specs);
}

fn compare_specs(left: &BadgeSpec, right: &BadgeSpec) -> Ordering {
    group_rank(left)
        .cmp(&group_rank(right))
        .then_with(|| left.category.cmp(&right.category))
        .then_with(|| left.level.cmp(&right.level))
        .then_with(|| left.name.cmp(&right.name))
}

fn group_rank(spec: &BadgeSpec) -> u8 {
    if spec.category == achievement::CATEGORY {
        0
    } else if spec.level == BadgeLevel::Special {
        2
    } else {
        1
    }
}

/// First eight hex chars of SHA-256 over the compact JSON of the sorted set.
pub fn badge_set_hash(specs: &[BadgeSpec]) -> Result<String> {
    let bytes = serde_json::to_vec(specs)?;
    let digest = Sha256::digest(&bytes);
    let mut hex = format!("{digest:x}");
    hex.truncate(HASH_LEN);
    Ok(hex)
}
