use crate::scan::Facts;
use crate::types::config::SpecialThresholds;
use crate::types::report::{BadgeLevel, BadgeSpec};

/// Fact-based badges, in table order.
pub fn special_badges(facts: &Facts, rules: &SpecialThresholds) -> Vec<BadgeSpec> {
    let mut badges = Vec::new();
    let special = |name: &str, category: &str, icon: &str, description: &str, threshold: f64| {
        BadgeSpec::new(name, BadgeLevel::Special, category, icon, description, threshold)
    };

    if facts.commits.frequency_per_day > rules.commit_frequency_above {
        badges.push(special(
            "Active Contributor",
            "activity",
            "🔥",
            "High commit frequency",
            rules.commit_frequency_above,
        ));
    }
    if facts.commits.total > rules.total_commits_above {
        badges.push(special(
            "Commit Master",
            "activity",
            "💪",
            "Over 100 commits",
            rules.total_commits_above as f64,
        ));
    }
    if facts
        .external
        .code_smells
        .is_some_and(|smells| smells <= rules.max_code_smells)
    {
        badges.push(special(
            "Clean Code",
            "quality",
            "✨",
            "No code smells detected",
            f64::from(rules.max_code_smells),
        ));
    }
    if facts
        .external
        .test_coverage
        .is_some_and(|coverage| coverage >= rules.test_coverage_min)
    {
        badges.push(special(
            "Test Coverage King",
            "testing",
            "👑",
            "90%+ test coverage",
            rules.test_coverage_min,
        ));
    }
    if facts.structure.total_files > rules.total_files_above {
        badges.push(special(
            "Project Scale",
            "structure",
            "🏗️",
            "Large project structure",
            rules.total_files_above as f64,
        ));
    }
    if facts.language_count() >= rules.language_count_min {
        badges.push(special(
            "Polyglot Developer",
            "skills",
            "🌐",
            "Multiple programming languages",
            rules.language_count_min as f64,
        ));
    }

    badges
}
