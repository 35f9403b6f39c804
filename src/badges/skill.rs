use crate::types::config::{BadgeRules, SkillThresholds};
use crate::types::report::{BadgeLevel, BadgeSpec};
use crate::types::scoring::{Dimension, DimensionScores};

struct SkillTrack {
    dimension: Dimension,
    category: &'static str,
    gold: (&'static str, &'static str, &'static str),
    silver: (&'static str, &'static str, &'static str),
}

const TRACKS: [SkillTrack; 5] = [
    SkillTrack {
        dimension: Dimension::CodeQuality,
        category: "code-quality",
        gold: ("Code Quality Master", "💎", "Exceptional code quality standards"),
        silver: ("Code Quality Pro", "⚡", "Strong code quality practices"),
    },
    SkillTrack {
        dimension: Dimension::Documentation,
        category: "documentation",
        gold: ("Documentation Guru", "📚", "Comprehensive and clear documentation"),
        silver: ("Documentation Expert", "📝", "Good documentation practices"),
    },
    SkillTrack {
        dimension: Dimension::Testing,
        category: "testing",
        gold: ("Testing Champion", "🧪", "Comprehensive test coverage"),
        silver: ("Testing Advocate", "✅", "Good testing practices"),
    },
    SkillTrack {
        dimension: Dimension::CiCd,
        category: "ci-cd",
        gold: ("DevOps Expert", "🚀", "Advanced CI/CD implementation"),
        silver: ("Automation Pro", "⚙️", "Good automation practices"),
    },
    SkillTrack {
        dimension: Dimension::Collaboration,
        category: "collaboration",
        gold: ("Team Leader", "👥", "Excellent collaboration skills"),
        silver: ("Team Player", "🤝", "Good collaboration practices"),
    },
];

fn thresholds(rules: &BadgeRules, dimension: Dimension) -> Option<&SkillThresholds> {
    match dimension {
        Dimension::CodeQuality => Some(&rules.code_quality),
        Dimension::Documentation => Some(&rules.documentation),
        Dimension::Testing => Some(&rules.testing),
        Dimension::CiCd => Some(&rules.ci_cd),
        Dimension::Collaboration => Some(&rules.collaboration),
        _ => None,
    }
}

/// Gold and silver are checked independently, so a dimension above the
/// gold threshold earns both.
pub fn skill_badges(scores: &DimensionScores, rules: &BadgeRules) -> Vec<BadgeSpec> {
    let mut badges = Vec::new();
    for track in &TRACKS {
        let Some(limits) = thresholds(rules, track.dimension) else {
            continue;
        };
        let value = scores.get(track.dimension);
        for (level, threshold, (name, icon, description)) in [
            (BadgeLevel::Gold, limits.gold, track.gold),
            (BadgeLevel::Silver, limits.silver, track.silver),
        ] {
            if value >= threshold {
                badges.push(BadgeSpec::new(
                    name,
                    level,
                    track.category,
                    icon,
                    description,
                    f64::from(threshold),
                ));
            }
        }
    }
    badges
}
