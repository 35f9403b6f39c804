use crate::types::report::{Badge, BadgeLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeExport {
    pub generated_at: DateTime<Utc>,
    pub total_badges: usize,
    pub badges: Vec<ExportedBadge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedBadge {
    pub name: String,
    pub level: BadgeLevel,
    pub category: String,
    pub description: String,
    pub earned_at: DateTime<Utc>,
}

pub fn export(badges: &[Badge], generated_at: DateTime<Utc>) -> BadgeExport {
    BadgeExport {
        generated_at,
        total_badges: badges.len(),
        badges: badges
            .iter()
            .map(|badge| ExportedBadge {
                name: badge.name.clone(),
                level: badge.level,
                category: badge.category.clone(),
                description: badge.description.clone(),
                earned_at: badge.earned_at,
            })
            .collect(),
    }
}

pub fn to_json(export: &BadgeExport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(export)
}
