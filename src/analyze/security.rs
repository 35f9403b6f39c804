use crate::scan::Facts;
use crate::types::config::SecurityRules;
use crate::types::scoring::{clamp_score, Score};

/// Placeholder: no scanning happens, so every repository gets the base.
pub fn security_score(_facts: &Facts, rules: &SecurityRules) -> Score {
    clamp_score(rules.base)
}
