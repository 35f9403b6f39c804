use crate::compare::{SnapshotComparison, Winner};
use crate::types::report::EngineReport;
use crate::types::scoring::Dimension;

pub fn to_markdown(report: &EngineReport) -> String {
    let mut output = String::new();
    match &report.repository {
        Some(name) => output.push_str(&format!("# Repository Report: {name}\n\n")),
        None => output.push_str("# Repository Report\n\n"),
    }
    output.push_str(&format!(
        "Overall score: {} ({} {})\n\n",
        report.scores.overall, report.overall_badge.icon, report.overall_badge.name
    ));

    output.push_str("## Dimension Scores\n\n");
    output.push_str("| Dimension | Score |\n|---|---|\n");
    for dimension in Dimension::ALL {
        output.push_str(&format!(
            "| {} | {} |\n",
            dimension.label(),
            report.scores.get(dimension)
        ));
    }
    output.push('\n');

    output.push_str("## Badges\n\n");
    if report.badges.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for badge in &report.badges {
            output.push_str(&format!(
                "- {} {} ({}, {}): {}\n",
                badge.icon,
                badge.name,
                badge.level.as_str(),
                badge.category,
                badge.description
            ));
        }
        output.push('\n');
    }

    let insights = &report.insights;
    push_list(&mut output, "Strengths", &insights.strengths);
    push_list(&mut output, "Weaknesses", &insights.weaknesses);
    push_list(&mut output, "Recommendations", &insights.recommendations);
    output.push_str(&format!(
        "## Summary\n\n{} (priority: {:?})\n",
        insights.summary, insights.priority
    ));

    let roadmap = &report.roadmap;
    output.push_str(&format!("\n## Roadmap\n\n{}\n\n", roadmap.summary));
    let areas: Vec<&str> = roadmap
        .priority_areas
        .iter()
        .map(|dimension| dimension.label())
        .collect();
    if areas.is_empty() {
        output.push_str("Priority areas: none\n\n");
    } else {
        output.push_str(&format!("Priority areas: {}\n\n", areas.join(", ")));
    }
    for week in &roadmap.weeks {
        output.push_str(&format!("### Week {}: {}\n\n", week.week, week.theme));
        for task in &week.tasks {
            output.push_str(&format!(
                "- {} ({:?}, {}): {}\n",
                task.title, task.priority, task.estimated_time, task.description
            ));
        }
        output.push('\n');
    }
    output.push_str(&format!(
        "Recommended tools: {}\n\nExpected improvement: {}\n",
        roadmap.recommended_tools.join(", "),
        roadmap.expected_improvement
    ));

    output
}

pub fn comparison_to_markdown(result: &SnapshotComparison) -> String {
    let first = result.first.repository.as_deref().unwrap_or("first");
    let second = result.second.repository.as_deref().unwrap_or("second");
    let winner = match result.comparison.winner {
        Winner::First => first,
        Winner::Second => second,
    };

    let mut output = String::new();
    output.push_str(&format!("# Comparison: {first} vs {second}\n\n"));
    output.push_str(&format!(
        "Winner: {winner} (overall {} vs {}, delta {:+})\n\n",
        result.first.scores.overall, result.second.scores.overall, result.comparison.overall_delta
    ));

    output.push_str("| Dimension | First | Second | Delta |\n|---|---|---|---|\n");
    for delta in &result.comparison.per_dimension_deltas {
        output.push_str(&format!(
            "| {} | {} | {} | {:+} |\n",
            delta.dimension.label(),
            delta.first,
            delta.second,
            delta.delta
        ));
    }
    output.push('\n');

    push_list(&mut output, "Winner Strengths", &result.strengths);
    push_list(&mut output, "Loser Weaknesses", &result.weaknesses);
    output
}

fn push_list(output: &mut String, title: &str, items: &[String]) {
    output.push_str(&format!("## {title}\n\n"));
    if items.is_empty() {
        output.push_str("- none\n");
    } else {
        for item in items {
            output.push_str(&format!("- {item}\n"));
        }
    }
    output.push('\n');
}
