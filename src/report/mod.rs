pub mod badges;
pub mod json;
pub mod md;
pub mod svg;

use crate::compare::SnapshotComparison;
use crate::error::Result;
use crate::types::report::EngineReport;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
    Badges,
    Svg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonFormat {
    Json,
    Md,
}

/// `generated_at` only appears in the badge export.
pub fn render(
    report: &EngineReport,
    format: OutputFormat,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(json::to_json(report)?),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Badges => Ok(badges::to_json(&badges::export(
            &report.badges,
            generated_at,
        ))?),
        OutputFormat::Svg => Ok(svg::badge_sheet(&report.badges)),
    }
}

pub fn render_comparison(
    comparison: &SnapshotComparison,
    format: ComparisonFormat,
) -> Result<String> {
    match format {
        ComparisonFormat::Json => Ok(json::comparison_to_json(comparison)?),
        ComparisonFormat::Md => Ok(md::comparison_to_markdown(comparison)),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_format_renders() {
        let report = fixtures::report();
        for format in [
            OutputFormat::Json,
            OutputFormat::Md,
            OutputFormat::Badges,
            OutputFormat::Svg,
        ] {
            let rendered =
                render(&report, format, fixtures::as_of()).expect("report should render");
            assert!(!rendered.is_empty(), "{format:?}");
        }
    }
}
