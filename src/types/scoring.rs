use crate::types::config::DimensionWeights;
use serde::{Deserialize, Serialize};

/// Unrounded dimension value in [0, 100].
pub type Score = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    CodeQuality,
    Documentation,
    Testing,
    CiCd,
    Maintainability,
    Collaboration,
    Performance,
    Security,
}

impl Dimension {
    pub const ALL: [Dimension; 8] = [
        Dimension::CodeQuality,
        Dimension::Documentation,
        Dimension::Testing,
        Dimension::CiCd,
        Dimension::Maintainability,
        Dimension::Collaboration,
        Dimension::Performance,
        Dimension::Security,
    ];

    /// Config and serialization key.
    pub fn key(self) -> &'static str {
        match self {
            Self::CodeQuality => "code_quality",
            Self::Documentation => "documentation",
            Self::Testing => "testing",
            Self::CiCd => "ci_cd",
            Self::Maintainability => "maintainability",
            Self::Collaboration => "collaboration",
            Self::Performance => "performance",
            Self::Security => "security",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CodeQuality => "Code quality",
            Self::Documentation => "Documentation",
            Self::Testing => "Testing",
            Self::CiCd => "CI/CD",
            Self::Maintainability => "Maintainability",
            Self::Collaboration => "Collaboration",
            Self::Performance => "Performance",
            Self::Security => "Security",
        }
    }
}

/// Raw dimension values before the composite is taken and before rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreCard {
    pub code_quality: Score,
    pub documentation: Score,
    pub testing: Score,
    pub ci_cd: Score,
    pub maintainability: Score,
    pub collaboration: Score,
    pub performance: Score,
    pub security: Score,
}

impl ScoreCard {
    pub fn get(&self, dimension: Dimension) -> Score {
        match dimension {
            Dimension::CodeQuality => self.code_quality,
            Dimension::Documentation => self.documentation,
            Dimension::Testing => self.testing,
            Dimension::CiCd => self.ci_cd,
            Dimension::Maintainability => self.maintainability,
            Dimension::Collaboration => self.collaboration,
            Dimension::Performance => self.performance,
            Dimension::Security => self.security,
        }
    }

    /// Weighted sum of the clamped raw values, still unrounded.
    pub fn composite(&self, weights: &DimensionWeights) -> Score {
        let total: Score = Dimension::ALL
            .iter()
            .map(|dimension| clamp_score(self.get(*dimension)) * weights.get(*dimension))
            .sum();
        clamp_score(total)
    }

    /// Computes the composite, then rounds every value as the last step.
    pub fn finalize(&self, weights: &DimensionWeights) -> DimensionScores {
        DimensionScores {
            code_quality: round_score(self.code_quality),
            documentation: round_score(self.documentation),
            testing: round_score(self.testing),
            ci_cd: round_score(self.ci_cd),
            maintainability: round_score(self.maintainability),
            collaboration: round_score(self.collaboration),
            performance: round_score(self.performance),
            security: round_score(self.security),
            overall: round_score(self.composite(weights)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub code_quality: u8,
    pub documentation: u8,
    pub testing: u8,
    pub ci_cd: u8,
    pub maintainability: u8,
    pub collaboration: u8,
    pub performance: u8,
    pub security: u8,
    pub overall: u8,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::CodeQuality => self.code_quality,
            Dimension::Documentation => self.documentation,
            Dimension::Testing => self.testing,
            Dimension::CiCd => self.ci_cd,
            Dimension::Maintainability => self.maintainability,
            Dimension::Collaboration => self.collaboration,
            Dimension::Performance => self.performance,
            Dimension::Security => self.security,
        }
    }
}

pub fn clamp_score(value: Score) -> Score {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

fn round_score(value: Score) -> u8 {
    clamp_score(value).round() as u8
}
