use crate::types::config::AchievementBands;
use crate::types::report::{BadgeLevel, BadgeSpec, OverallBadge};

pub const CATEGORY: &str = "achievement";

/// The single highest band the overall score clears, if any.
pub fn achievement_badge(overall: u8, bands: &AchievementBands) -> Option<BadgeSpec> {
    let (level, threshold) = band_for(overall, bands)?;
    let (name, icon, description) = match level {
        BadgeLevel::Platinum => ("Elite Repository", "👑", "Top-tier repository excellence"),
        BadgeLevel::Gold => ("Gold Standard", "🏆", "Exceptional repository quality"),
        BadgeLevel::Silver => ("Silver Star", "⭐", "High-quality repository"),
        BadgeLevel::Bronze => ("Bronze Medal", "🥉", "Solid repository foundation"),
        BadgeLevel::Basic | BadgeLevel::Special => {
            ("Green Thumb", "🌱", "Growing repository with potential")
        }
    };
    Some(BadgeSpec::new(
        name,
        level,
        CATEGORY,
        icon,
        description,
        f64::from(threshold),
    ))
}

/// Top-line descriptor for display. Shares the achievement bands so both
/// views always name the same tier.
pub fn overall_badge(overall: u8, bands: &AchievementBands) -> OverallBadge {
    let level = band_for(overall, bands).map(|(level, _)| level);
    let (name, icon, description) = match level {
        Some(BadgeLevel::Platinum) => ("Elite Developer", "👑", "Top 10% of repositories"),
        Some(BadgeLevel::Gold) => ("Advanced Developer", "🥇", "Top 25% of repositories"),
        Some(BadgeLevel::Silver) => (
            "Proficient Developer",
            "🥈",
            "Above average repository quality",
        ),
        Some(BadgeLevel::Bronze) => (
            "Developing Developer",
            "🥉",
            "Good foundation with room for improvement",
        ),
        Some(BadgeLevel::Basic) | Some(BadgeLevel::Special) => (
            "Beginner Developer",
            "🌱",
            "Starting the development journey",
        ),
        None => ("Unranked", "○", "Below the lowest achievement band"),
    };
    OverallBadge {
        name: name.to_string(),
        level,
        icon: icon.to_string(),
        description: description.to_string(),
    }
}

fn band_for(overall: u8, bands: &AchievementBands) -> Option<(BadgeLevel, u8)> {
    [
        (BadgeLevel::Platinum, bands.platinum),
        (BadgeLevel::Gold, bands.gold),
        (BadgeLevel::Silver, bands.silver),
        (BadgeLevel::Bronze, bands.bronze),
        (BadgeLevel::Basic, bands.basic),
    ]
    .into_iter()
    .find(|(_, threshold)| overall >= *threshold)
}
