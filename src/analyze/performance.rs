use crate::scan::Facts;
use crate::types::config::PerformanceRules;
use crate::types::scoring::{clamp_score, Score};

/// Size and language-mix heuristic; nothing is measured at runtime.
pub fn performance_score(facts: &Facts, rules: &PerformanceRules) -> Score {
    let mut score = rules.base;

    if facts.attributes.size > 0 && facts.attributes.size < rules.small_size_below {
        score += rules.small_size_bonus;
    }
    if facts.structure.total_files > 0 && facts.structure.total_files < rules.few_files_below {
        score += rules.few_files_bonus;
    }

    let has_any = |names: &[String]| names.iter().any(|name| facts.has_language(name));
    if has_any(&rules.compiled_languages) {
        score += rules.compiled_bonus;
    }
    if has_any(&rules.interpreted_languages) && !has_any(&rules.native_counterparts) {
        score -= rules.interpreted_penalty;
    }

    clamp_score(score)
}
