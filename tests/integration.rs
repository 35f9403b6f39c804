// Library-level checks of the scoring engine's observable properties.

use chrono::{DateTime, Duration, TimeZone, Utc};
use repo_insight::scan::readme::{analyze_readme, ReadmeSection};
use repo_insight::types::config::ReadmeRules;
use repo_insight::types::snapshot::{
    Commit, EntryKind, ItemState, PullRequest, RepositoryAttributes, RepositoryEntry,
};
use repo_insight::{
    badges, compare_snapshots, discover, evaluate, evaluate_facts, BadgeLevel, Dimension,
    DimensionScores, Facts, Priority, RepositorySnapshot, ScoringConfig, Winner,
};

fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

fn commit(author: &str, days_ago: i64, message: &str) -> Commit {
    Commit {
        author: author.to_string(),
        timestamp: Some(as_of() - Duration::days(days_ago)),
        message: message.to_string(),
    }
}

fn mature_snapshot() -> RepositorySnapshot {
    let mut entries = vec![
        RepositoryEntry::dir("src"),
        RepositoryEntry::dir("tests"),
        RepositoryEntry::dir("docs"),
        RepositoryEntry::dir(".github/workflows"),
        RepositoryEntry::file(".github/workflows/ci.yml"),
        RepositoryEntry::file("Dockerfile"),
        RepositoryEntry::file("LICENSE"),
        RepositoryEntry::file("CONTRIBUTING.md"),
        RepositoryEntry::file("jest.config.js"),
        RepositoryEntry::file("codecov.yml"),
    ];
    for index in 0..8 {
        entries.push(RepositoryEntry::file(&format!("tests/case_{index}_test.ts")));
    }

    let readme = format!(
        "# Engine\n\n{}\n\n## Installation\n\n```sh\nnpm install engine\n```\n\n\
         ## Usage\n\nSee the [guide](https://example.com/guide), the [api](./API.md) \
         and the [faq](./FAQ.md).\n\n## License\n\nMIT\n",
        "word ".repeat(320)
    );

    RepositorySnapshot {
        name: Some("engine".to_string()),
        owner: Some("acme".to_string()),
        attributes: RepositoryAttributes {
            stars: 120,
            open_issues: 3,
            size: 2_048,
            updated_at: Some(as_of() - Duration::days(2)),
            has_wiki: true,
            ..RepositoryAttributes::default()
        },
        languages: [("TypeScript", 9_000u64), ("Rust", 4_000), ("Shell", 200)]
            .into_iter()
            .map(|(name, bytes)| (name.to_string(), bytes))
            .collect(),
        commits: vec![
            commit("ana", 6, "feat: add scoring pipeline for repos"),
            commit("bo", 4, "fix: handle empty readme (#12)"),
            commit("cy", 2, "docs: describe badge rules in detail"),
            commit("di", 0, "test: cover the comparison winner rule"),
        ],
        pull_requests: vec![
            PullRequest {
                state: ItemState::Closed,
                created_at: Some(as_of() - Duration::days(5)),
                merged_at: Some(as_of() - Duration::days(4)),
                comments: 3,
                ..PullRequest::default()
            },
            PullRequest {
                state: ItemState::Closed,
                created_at: Some(as_of() - Duration::days(3)),
                merged_at: Some(as_of() - Duration::days(2)),
                comments: 1,
                ..PullRequest::default()
            },
        ],
        entries,
        readme,
        workflow_count: 2,
        ..RepositorySnapshot::default()
    }
}

fn all_scores(scores: &DimensionScores) -> Vec<u8> {
    Dimension::ALL
        .iter()
        .map(|dimension| scores.get(*dimension))
        .chain(std::iter::once(scores.overall))
        .collect()
}

#[test]
fn scores_stay_within_bounds() {
    for snapshot in [RepositorySnapshot::default(), mature_snapshot()] {
        let report = evaluate(&snapshot, &ScoringConfig::default(), as_of())
            .expect("snapshot should evaluate");
        assert!(all_scores(&report.scores).iter().all(|score| *score <= 100));
    }
}

#[test]
fn extreme_facts_are_clamped() {
    let mut facts = Facts::default();
    facts.structure.organization_score = 100;
    facts.commits.message_quality = 100.0;
    facts.commits.distinct_authors = 50;
    facts.pull_requests.total = 10;
    facts.pull_requests.merged_ratio = 1.0;
    facts.pull_requests.avg_comments = 9.0;
    facts.tests_ci.has_tests = true;
    facts.tests_ci.has_test_config = true;
    facts.tests_ci.has_coverage_config = true;
    facts.tests_ci.test_file_count = 40;
    facts.tests_ci.has_ci = true;
    facts.tests_ci.ci_config_file_count = 6;
    facts.tests_ci.workflow_count = 4;
    facts.languages.insert("Go".to_string(), 1);

    let report =
        evaluate_facts(&facts, &ScoringConfig::default(), as_of()).expect("facts should score");
    assert_eq!(report.scores.testing, 100);
    assert_eq!(report.scores.ci_cd, 100);
    assert_eq!(report.scores.code_quality, 100);
    assert!(all_scores(&report.scores).iter().all(|score| *score <= 100));
}

#[test]
fn evaluation_is_deterministic() {
    let snapshot = mature_snapshot();
    let config = ScoringConfig::default();
    let first = evaluate(&snapshot, &config, as_of()).expect("first run should evaluate");
    let second = evaluate(&snapshot, &config, as_of()).expect("second run should evaluate");
    assert_eq!(first, second);

    let later = evaluate(&snapshot, &config, as_of() + Duration::hours(1))
        .expect("later run should evaluate");
    let ids = |report: &repo_insight::EngineReport| {
        report
            .badges
            .iter()
            .map(|badge| badge.id.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(&first), ids(&later));
}

#[test]
fn default_weights_sum_to_one() {
    let weights = ScoringConfig::default().weights;
    assert!((weights.sum() - 1.0).abs() < 1e-9);
}

#[test]
fn empty_input_baseline() {
    let report = evaluate(
        &RepositorySnapshot::default(),
        &ScoringConfig::default(),
        as_of(),
    )
    .expect("empty snapshot should evaluate");
    assert_eq!(report.scores.testing, 0);
    assert_eq!(report.scores.ci_cd, 0);
    assert!(report.scores.documentation <= 20);
    assert!(!report.badges.iter().any(|badge| {
        matches!(
            badge.category.as_str(),
            "testing" | "documentation" | "ci-cd"
        ) && badge.level != BadgeLevel::Special
    }));
    assert_eq!(report.insights.priority, Priority::High);
}

#[test]
fn achievement_changes_tier_across_threshold() {
    let bands = ScoringConfig::default().badges.achievement;
    let level = |overall: u8| {
        let scores = DimensionScores {
            code_quality: 0,
            documentation: 0,
            testing: 0,
            ci_cd: 0,
            maintainability: 0,
            collaboration: 0,
            performance: 0,
            security: 0,
            overall,
        };
        let earned = badges::generate_badges(
            &scores,
            &Facts::default(),
            &ScoringConfig::default().badges,
            as_of(),
        )
        .expect("badges should generate");
        let achievements: Vec<BadgeLevel> = earned
            .iter()
            .filter(|badge| badge.category == "achievement")
            .map(|badge| badge.level)
            .collect();
        assert_eq!(achievements.len(), 1, "overall {overall}");
        achievements[0]
    };
    assert_eq!(level(89), BadgeLevel::Gold);
    assert_eq!(level(90), BadgeLevel::Platinum);
    assert_eq!(level(92), BadgeLevel::Platinum);
    assert_eq!(
        badges::overall_badge(92, &bands).level,
        Some(BadgeLevel::Platinum)
    );
}

#[test]
fn evenly_spaced_single_author_commits() {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let snapshot = RepositorySnapshot {
        commits: (0..3)
            .map(|day| Commit {
                author: "ana".to_string(),
                timestamp: Some(t0 + Duration::days(day)),
                message: "update".to_string(),
            })
            .collect(),
        ..RepositorySnapshot::default()
    };
    let facts = discover(&snapshot, &ScoringConfig::default().analyzers);
    assert!((facts.commits.frequency_per_day - 1.5).abs() < 1e-9);
    assert_eq!(facts.commits.distinct_authors, 1);
    assert!((facts.commits.consistency - 100.0).abs() < 1e-9);
}

#[test]
fn structured_readme_scores_sections_and_quality() {
    let readme = format!(
        "# Title\n\n{}\n\n## Installation\n\n```\nmake\n```\n\n## Usage\n\nRun it.\n",
        "alpha ".repeat(310)
    );
    let facts = analyze_readme(&readme, &ReadmeRules::default());
    assert!(facts.score >= 40);
    for section in [
        ReadmeSection::Title,
        ReadmeSection::Description,
        ReadmeSection::Installation,
        ReadmeSection::Usage,
    ] {
        assert!(facts.sections[&section], "{section:?}");
    }
    // code block bonus plus the 300-word bonus, at minimum.
    assert!(facts.quality >= 40);
    assert!(facts.has_code_examples);
}

#[test]
fn mature_repository_scores_well() {
    let report = evaluate(&mature_snapshot(), &ScoringConfig::default(), as_of())
        .expect("snapshot should evaluate");
    assert_eq!(report.repository.as_deref(), Some("acme/engine"));
    assert_eq!(report.scores.testing, 100);
    assert_eq!(report.scores.ci_cd, 100);
    assert!(report.scores.overall >= 70, "overall {}", report.scores.overall);
    assert!(report
        .badges
        .iter()
        .any(|badge| badge.name == "Polyglot Developer"));
    assert!(report.badges.iter().any(|badge| badge.name == "Testing Champion"));
    assert!(report.insights.strengths.contains(&"Good testing practices".to_string()));
}

#[test]
fn comparison_prefers_the_stronger_snapshot() {
    let result = compare_snapshots(
        &RepositorySnapshot::default(),
        &mature_snapshot(),
        &ScoringConfig::default(),
        as_of(),
    )
    .expect("comparison should succeed");
    assert_eq!(result.comparison.winner, Winner::Second);
    assert!(result.comparison.overall_delta < 0);
    assert_eq!(result.strengths, result.second.insights.strengths);
    assert_eq!(result.weaknesses, result.first.insights.weaknesses);
}

#[test]
fn invalid_snapshot_is_reported_once_before_scoring() {
    let snapshot = RepositorySnapshot {
        entries: vec![RepositoryEntry {
            name: "src".to_string(),
            path: String::new(),
            kind: EntryKind::Dir,
        }],
        ..RepositorySnapshot::default()
    };
    let err = evaluate(&snapshot, &ScoringConfig::default(), as_of())
        .expect_err("empty path should be rejected");
    assert!(err.to_string().starts_with("invalid snapshot:"));
}
