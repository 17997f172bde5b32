// Downloadable markdown report for a demo analysis
use crate::record::{AnalysisRecord, NO_FINDINGS};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

pub const DEMO_DISCLAIMER: &str =
    "Results are simulated and do not represent actual medical analysis.";

pub fn render_markdown(record: &AnalysisRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "# {} Analysis Report\n\n",
        record.category.display_name()
    ));
    output.push_str(&format!("- **Analysis ID:** {}\n", record.id));
    output.push_str(&format!(
        "- **Date:** {}\n",
        record.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "- **Primary finding:** {}\n\n",
        record.primary_finding()
    ));
    output.push_str(&format!("> **Demo Mode:** {}\n\n", DEMO_DISCLAIMER));

    output.push_str("## Confidence Scores\n\n");
    if record.predictions.is_empty() {
        output.push_str(NO_FINDINGS);
        output.push('\n');
    } else {
        output.push_str("| Condition | Confidence | Level |\n");
        output.push_str("|-----------|-----------:|-------|\n");
        for p in &record.predictions {
            output.push_str(&format!(
                "| {} | {:.0}% | {} |\n",
                p.label,
                p.percent(),
                p.level().name()
            ));
        }

        output.push_str("\n## Findings\n\n");
        for p in &record.predictions {
            match &p.description {
                Some(description) => {
                    output.push_str(&format!("- **{}**: {}\n", p.label, description))
                }
                None => output.push_str(&format!("- **{}**\n", p.label)),
            }
        }
    }

    if !record.recommendations.is_empty() {
        output.push_str("\n## Recommendations\n\n");
        for (i, rec) in record.recommendations.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, rec));
        }
    }

    output
}

pub fn write_report(record: &AnalysisRecord, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Could not create {}", parent.display()))?;
        }
    }

    fs::write(path, render_markdown(record))
        .with_context(|| format!("Could not write report to {}", path.display()))?;
    info!("Report saved to {}", path.display());
    Ok(())
}
