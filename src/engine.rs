//! Snapshot in, report out. Nothing here touches the filesystem or clock.

use crate::analyze;
use crate::badges;
use crate::error::Result;
use crate::insight;
use crate::scan::{self, Facts};
use crate::types::config::ScoringConfig;
use crate::types::report::EngineReport;
use crate::types::snapshot::RepositorySnapshot;
use chrono::{DateTime, Utc};
use tracing::info;

/// Validates the snapshot, derives facts once and scores them.
pub fn evaluate(
    snapshot: &RepositorySnapshot,
    config: &ScoringConfig,
    as_of: DateTime<Utc>,
) -> Result<EngineReport> {
    snapshot.validate()?;
    let facts = scan::discover(snapshot, &config.analyzers);
    let mut report = evaluate_facts(&facts, config, as_of)?;
    report.repository = snapshot.full_name();
    info!(
        repository = report.repository.as_deref().unwrap_or("<unnamed>"),
        overall = report.scores.overall,
        badges = report.badges.len(),
        "repository evaluated"
    );
    Ok(report)
}

/// Scoring half of [`evaluate`], for callers that already hold facts.
pub fn evaluate_facts(
    facts: &Facts,
    config: &ScoringConfig,
    as_of: DateTime<Utc>,
) -> Result<EngineReport> {
    let scores = analyze::score(facts, config, as_of);
    let badges = badges::generate_badges(&scores, facts, &config.badges, as_of)?;
    let overall_badge = badges::overall_badge(scores.overall, &config.badges.achievement);
    let insights = insight::compose_insights(&scores, &config.insights);
    let roadmap = insight::fallback_roadmap(&scores, &config.insights);

    Ok(EngineReport {
        repository: None,
        scores,
        overall_badge,
        badges,
        insights,
        roadmap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::types::report::BadgeLevel;
    use crate::types::snapshot::RepositoryEntry;
    use chrono::TimeZone;

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn empty_snapshot_evaluates_to_baseline() {
        let report = evaluate(
            &RepositorySnapshot::default(),
            &ScoringConfig::default(),
            as_of(),
        )
        .expect("empty snapshot should evaluate");
        assert_eq!(report.scores.testing, 0);
        assert_eq!(report.scores.ci_cd, 0);
        assert!(!report.badges.iter().any(|badge| {
            ["testing", "documentation", "ci-cd"].contains(&badge.category.as_str())
                && badge.level != BadgeLevel::Special
        }));
        // Nothing measured, nothing earned: no smell count means no Clean Code.
        assert!(report.badges.is_empty());
    }

    #[test]
    fn invalid_snapshot_fails_before_scoring() {
        let snapshot = RepositorySnapshot {
            entries: vec![RepositoryEntry::file("")],
            ..RepositorySnapshot::default()
        };
        let err = evaluate(&snapshot, &ScoringConfig::default(), as_of())
            .expect_err("empty entry path should be rejected");
        assert!(matches!(err, EngineError::InvalidSnapshot(_)));
    }

    #[test]
    fn repository_name_is_carried_into_the_report() {
        let snapshot = RepositorySnapshot {
            name: Some("engine".to_string()),
            owner: Some("acme".to_string()),
            ..RepositorySnapshot::default()
        };
        let report = evaluate(&snapshot, &ScoringConfig::default(), as_of())
            .expect("snapshot should evaluate");
        assert_eq!(report.repository.as_deref(), Some("acme/engine"));
    }
}
