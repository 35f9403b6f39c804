use crate::scan::Facts;
use crate::types::config::CodeQualityRules;
use crate::types::scoring::{clamp_score, Score};

pub fn code_quality_score(facts: &Facts, rules: &CodeQualityRules) -> Score {
    let mut score = rules.base;

    let languages = facts.language_count();
    if languages == 1 {
        score += rules.single_language_bonus;
    } else if (2..=rules.balanced_language_max).contains(&languages) {
        score += rules.balanced_language_bonus;
    } else if languages > rules.fragmented_language_above {
        score -= rules.fragmented_penalty;
    }

    score += f64::from(facts.structure.organization_score) * rules.organization_factor;
    score += facts.commits.message_quality * rules.message_quality_factor;

    if facts.pull_requests.merged_ratio > rules.merged_ratio_above {
        score += rules.merged_ratio_bonus;
    }
    if facts.pull_requests.avg_comments > rules.review_comments_above {
        score += rules.review_comments_bonus;
    }

    clamp_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_languages(names: &[&str]) -> Facts {
        let mut facts = Facts::default();
        for name in names {
            facts.languages.insert(name.to_string(), 1_000);
        }
        facts
    }

    #[test]
    fn language_mix_adjusts_base() {
        let rules = CodeQualityRules::default();
        assert_eq!(code_quality_score(&Facts::default(), &rules), 50.0);
        assert_eq!(code_quality_score(&with_languages(&["Rust"]), &rules), 60.0);
        assert_eq!(
            code_quality_score(&with_languages(&["Rust", "Shell", "Nix"]), &rules),
            65.0
        );
        assert_eq!(
            code_quality_score(&with_languages(&["A", "B", "C", "D"]), &rules),
            50.0
        );
        assert_eq!(
            code_quality_score(&with_languages(&["A", "B", "C", "D", "E", "F"]), &rules),
            40.0
        );
    }

    #[test]
    fn structure_messages_and_reviews_contribute() {
        let mut facts = with_languages(&["Rust"]);
        facts.structure.organization_score = 100;
        facts.commits.message_quality = 100.0;
        facts.pull_requests.merged_ratio = 0.8;
        facts.pull_requests.avg_comments = 2.0;
        // 50 + 10 + 30 + 20 + 10 + 5, clamped.
        assert_eq!(code_quality_score(&facts, &CodeQualityRules::default()), 100.0);
    }
}
