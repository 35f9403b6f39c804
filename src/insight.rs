//! Rule-based narrative used when no generated narrative is available.

use crate::types::config::InsightRules;
use crate::types::report::{InsightBundle, Priority, Roadmap, RoadmapTask, RoadmapWeek};
use crate::types::scoring::{Dimension, DimensionScores};

const STRENGTHS: [(Dimension, &str); 4] = [
    (Dimension::CodeQuality, "Strong code quality and structure"),
    (Dimension::Documentation, "Comprehensive documentation"),
    (Dimension::Testing, "Good testing practices"),
    (Dimension::Collaboration, "Effective team collaboration"),
];

const WEAKNESSES: [(Dimension, &str); 3] = [
    (Dimension::CodeQuality, "Code quality needs improvement"),
    (Dimension::Documentation, "Documentation is lacking"),
    (Dimension::Testing, "Testing coverage is insufficient"),
];

const CI_CD_WEAKNESS: &str = "CI/CD pipeline could be improved";

const TESTING_RECOMMENDATIONS: [&str; 2] = [
    "Add unit tests for critical functions",
    "Set up test coverage reporting",
];
const DOCUMENTATION_RECOMMENDATIONS: [&str; 2] = [
    "Improve README with usage examples",
    "Add code comments for complex logic",
];
const CI_CD_RECOMMENDATIONS: [&str; 2] = [
    "Set up GitHub Actions for CI",
    "Add automated deployment",
];

const POSITIVE_SUMMARY: &str =
    "This is a well-maintained repository with strong development practices. Keep up the good work!";
const NEUTRAL_SUMMARY: &str =
    "Good foundation with several areas of strength. Focus on the recommendations to reach the next level.";
const CORRECTIVE_SUMMARY: &str = "This repository has potential but needs significant improvements in key areas. Start with the high-priority recommendations.";

pub fn compose_insights(scores: &DimensionScores, rules: &InsightRules) -> InsightBundle {
    let strengths = STRENGTHS
        .iter()
        .filter(|(dimension, _)| scores.get(*dimension) >= rules.strength_min)
        .map(|(_, text)| text.to_string())
        .collect();

    let mut weaknesses: Vec<String> = WEAKNESSES
        .iter()
        .filter(|(dimension, _)| scores.get(*dimension) < rules.weakness_below)
        .map(|(_, text)| text.to_string())
        .collect();
    if scores.ci_cd < rules.ci_cd_weakness_below {
        weaknesses.push(CI_CD_WEAKNESS.to_string());
    }

    let mut recommendations = Vec::new();
    for (value, below, texts) in [
        (
            scores.testing,
            rules.testing_recommendation_below,
            TESTING_RECOMMENDATIONS,
        ),
        (
            scores.documentation,
            rules.documentation_recommendation_below,
            DOCUMENTATION_RECOMMENDATIONS,
        ),
        (
            scores.ci_cd,
            rules.ci_cd_recommendation_below,
            CI_CD_RECOMMENDATIONS,
        ),
    ] {
        if value < below {
            recommendations.extend(texts.iter().map(|text| text.to_string()));
        }
    }

    let (summary, priority) = if scores.overall >= rules.positive_summary_min {
        (POSITIVE_SUMMARY, Priority::Low)
    } else if scores.overall >= rules.neutral_summary_min {
        (NEUTRAL_SUMMARY, Priority::Medium)
    } else {
        (CORRECTIVE_SUMMARY, Priority::High)
    };

    InsightBundle {
        strengths,
        weaknesses,
        recommendations,
        summary: summary.to_string(),
        priority,
    }
}

const ROADMAP_AREAS: [Dimension; 4] = [
    Dimension::CodeQuality,
    Dimension::Documentation,
    Dimension::Testing,
    Dimension::CiCd,
];

const ROADMAP_SUMMARY: &str = "Based on your repository scores, here's a general improvement plan.";
const ROADMAP_TOOLS: [&str; 5] = ["ESLint", "Prettier", "Jest", "GitHub Actions", "Codecov"];
const ROADMAP_IMPROVEMENT: &str = "20-30 points with consistent effort";

struct PlannedTask {
    theme: &'static str,
    title: &'static str,
    description: &'static str,
    priority: Priority,
    estimated_time: &'static str,
    resources: &'static [&'static str],
    success_criteria: &'static [&'static str],
}

const PLAN: [PlannedTask; 4] = [
    PlannedTask {
        theme: "Foundation & Code Quality",
        title: "Set up code linting",
        description: "Configure ESLint/Prettier for consistent code style",
        priority: Priority::High,
        estimated_time: "1-2 hours",
        resources: &["https://eslint.org/", "https://prettier.io/"],
        success_criteria: &["All new code follows linting rules", "CI fails on linting errors"],
    },
    PlannedTask {
        theme: "Testing & Documentation",
        title: "Improve README",
        description: "Add comprehensive documentation with examples",
        priority: Priority::Medium,
        estimated_time: "2-3 hours",
        resources: &["https://www.makeareadme.com/"],
        success_criteria: &["README has installation instructions", "Includes code examples"],
    },
    PlannedTask {
        theme: "CI/CD & Automation",
        title: "Set up GitHub Actions",
        description: "Create CI pipeline for automated testing",
        priority: Priority::High,
        estimated_time: "3-4 hours",
        resources: &["https://docs.github.com/en/actions"],
        success_criteria: &["Tests run on every PR", "Build status badges in README"],
    },
    PlannedTask {
        theme: "Collaboration & Maintenance",
        title: "Add contribution guidelines",
        description: "Create CONTRIBUTING.md file",
        priority: Priority::Medium,
        estimated_time: "1-2 hours",
        resources: &["https://docs.github.com/en/communities/setting-up-your-project-for-healthy-contributions/setting-guidelines-for-repository-contributors"],
        success_criteria: &["Clear contribution process", "Code review guidelines"],
    },
];

/// Generic four-week plan. Only the priority areas depend on the scores.
pub fn fallback_roadmap(scores: &DimensionScores, rules: &InsightRules) -> Roadmap {
    let priority_areas = ROADMAP_AREAS
        .into_iter()
        .filter(|dimension| scores.get(*dimension) < rules.roadmap_priority_below)
        .collect();

    let weeks = PLAN
        .iter()
        .zip(1u8..)
        .map(|(planned, week)| RoadmapWeek {
            week,
            theme: planned.theme.to_string(),
            tasks: vec![RoadmapTask {
                title: planned.title.to_string(),
                description: planned.description.to_string(),
                priority: planned.priority,
                estimated_time: planned.estimated_time.to_string(),
                resources: planned.resources.iter().map(|r| r.to_string()).collect(),
                success_criteria: planned
                    .success_criteria
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
            }],
        })
        .collect();

    Roadmap {
        summary: ROADMAP_SUMMARY.to_string(),
        priority_areas,
        weeks,
        recommended_tools: ROADMAP_TOOLS.iter().map(|tool| tool.to_string()).collect(),
        expected_improvement: ROADMAP_IMPROVEMENT.to_string(),
    }
}
