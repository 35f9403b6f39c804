pub mod ci_cd;
pub mod code_quality;
pub mod collaboration;
pub mod documentation;
pub mod maintainability;
pub mod performance;
pub mod security;
pub mod testing;

use crate::scan::Facts;
use crate::types::config::ScoringConfig;
use crate::types::scoring::{DimensionScores, ScoreCard};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Raw, unrounded value of every dimension.
pub fn score_card(facts: &Facts, config: &ScoringConfig, as_of: DateTime<Utc>) -> ScoreCard {
    ScoreCard {
        code_quality: code_quality::code_quality_score(facts, &config.code_quality),
        documentation: documentation::documentation_score(facts, &config.documentation),
        testing: testing::testing_score(facts, &config.testing),
        ci_cd: ci_cd::ci_cd_score(facts, &config.ci_cd),
        maintainability: maintainability::maintainability_score(
            facts,
            &config.maintainability,
            as_of,
        ),
        collaboration: collaboration::collaboration_score(facts, &config.collaboration),
        performance: performance::performance_score(facts, &config.performance),
        security: security::security_score(facts, &config.security),
    }
}

pub fn score(facts: &Facts, config: &ScoringConfig, as_of: DateTime<Utc>) -> DimensionScores {
    let card = score_card(facts, config, as_of);
    let scores = card.finalize(&config.weights);
    debug!(
        code_quality = scores.code_quality,
        documentation = scores.documentation,
        testing = scores.testing,
        ci_cd = scores.ci_cd,
        maintainability = scores.maintainability,
        collaboration = scores.collaboration,
        performance = scores.performance,
        security = scores.security,
        overall = scores.overall,
        "dimensions scored"
    );
    scores
}
