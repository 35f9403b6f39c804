use crate::types::scoring::{Dimension, DimensionScores};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeLevel {
    Platinum,
    Gold,
    Silver,
    Bronze,
    Basic,
    Special,
}

impl BadgeLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Platinum => "platinum",
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Bronze => "bronze",
            Self::Basic => "basic",
            Self::Special => "special",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Platinum => "#E5E4E2",
            Self::Gold => "#FFD700",
            Self::Silver => "#C0C0C0",
            Self::Bronze => "#CD7F32",
            Self::Basic => "#4CAF50",
            Self::Special => "#9C27B0",
        }
    }
}

/// A badge before identity and timestamp are attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeSpec {
    pub name: String,
    pub level: BadgeLevel,
    pub category: String,
    pub icon: String,
    pub description: String,
    pub threshold: f64,
}

impl BadgeSpec {
    pub fn new(
        name: &str,
        level: BadgeLevel,
        category: &str,
        icon: &str,
        description: &str,
        threshold: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            level,
            category: category.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
            threshold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub level: BadgeLevel,
    pub category: String,
    pub icon: String,
    pub description: String,
    pub threshold: f64,
    pub earned_at: DateTime<Utc>,
}

/// Top-line descriptor for the overall score; `level` is `None` below the
/// lowest achievement band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallBadge {
    pub name: String,
    pub level: Option<BadgeLevel>,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightBundle {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub summary: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub estimated_time: String,
    pub resources: Vec<String>,
    pub success_criteria: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapWeek {
    pub week: u8,
    pub theme: String,
    pub tasks: Vec<RoadmapTask>,
}

/// Four-week improvement plan built from the scores alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub summary: String,
    pub priority_areas: Vec<Dimension>,
    pub weeks: Vec<RoadmapWeek>,
    pub recommended_tools: Vec<String>,
    pub expected_improvement: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineReport {
    pub repository: Option<String>,
    pub scores: DimensionScores,
    pub overall_badge: OverallBadge,
    pub badges: Vec<Badge>,
    pub insights: InsightBundle,
    pub roadmap: Roadmap,
}
