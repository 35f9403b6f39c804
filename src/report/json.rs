use crate::compare::SnapshotComparison;
use crate::types::report::EngineReport;

pub fn to_json(report: &EngineReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn comparison_to_json(comparison: &SnapshotComparison) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(comparison)
}
