// Terminal and JSON rendering of demo results
use crate::catalog::{Category, Condition};
use crate::heatmap::HeatmapRegion;
use crate::models::ConfidenceLevel;
use crate::record::{AnalysisRecord, RecentAnalyses};
use crate::report::DEMO_DISCLAIMER;
use anyhow::{anyhow, Result};
use colored::{ColoredString, Colorize};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde::Serialize;
use std::io::{self, IsTerminal};

pub const JSON_ENV: &str = "ZEMEDIC_DEMO_JSON";

const BAR_WIDTH: usize = 30;

/// Output mode for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly output with colors
    Human,
    /// Machine-readable JSON output
    Json,
    /// Plain text without colors (for pipes/logs)
    Plain,
}

impl OutputMode {
    /// Auto-detect output mode based on environment
    pub fn auto() -> Self {
        if std::env::var(JSON_ENV).is_ok() {
            Self::Json
        } else if !io::stdout().is_terminal() {
            Self::Plain
        } else {
            Self::Human
        }
    }

    pub fn from_format(format: &str) -> Result<Self> {
        match format.to_lowercase().as_str() {
            "auto" => Ok(Self::auto()),
            "human" | "text" => Ok(Self::Human),
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            _ => Err(anyhow!(
                "Unknown output format: {}. Supported: auto, human, plain, json",
                format
            )),
        }
    }
}

/// CLI output writer with mode awareness
pub struct OutputWriter {
    mode: OutputMode,
}

impl OutputWriter {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Print a section header
    pub fn section(&self, title: &str) {
        match self.mode {
            OutputMode::Human => {
                println!();
                println!("{}", title.cyan().bold());
                println!("{}", "═".repeat(title.chars().count()).cyan());
            }
            OutputMode::Plain => {
                println!();
                println!("{}", title);
                println!("{}", "=".repeat(title.chars().count()));
            }
            OutputMode::Json => {}
        }
    }

    pub fn success(&self, message: &str) {
        if let Some(line) = format_success(self.mode, message) {
            println!("{}", line);
        }
    }

    pub fn error(&self, message: &str) {
        eprintln!("{}", format_error(self.mode, message));
    }

    pub fn warning(&self, message: &str) {
        match self.mode {
            OutputMode::Human => eprintln!("  {} {}", "⚠".yellow(), message),
            _ => eprintln!("  [WARN] {}", message),
        }
    }

    /// Print a key-value table
    pub fn table(&self, rows: &[(&str, String)]) {
        let max_key_len = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        match self.mode {
            OutputMode::Human => {
                for (key, value) in rows {
                    println!("  {:width$} │ {}", key.yellow(), value, width = max_key_len);
                }
            }
            OutputMode::Plain => {
                for (key, value) in rows {
                    println!("  {:width$} : {}", key, value, width = max_key_len);
                }
            }
            OutputMode::Json => {}
        }
    }

    /// Print one confidence bar, coloured by level in human mode
    pub fn confidence_bar(&self, label: &str, confidence: f64, label_width: usize) {
        let Some(line) = format_confidence_bar(self.mode, label, confidence, label_width) else {
            return;
        };
        println!("{}", line);
    }

    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Print a full analysis: header, confidence chart, findings, advice
    pub fn record(&self, record: &AnalysisRecord) -> Result<()> {
        if self.mode == OutputMode::Json {
            return self.json(record);
        }

        self.section(&format!("{} Analysis", record.category.display_name()));
        self.table(&[
            ("ID", record.id.clone()),
            ("Date", record.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
            ("Primary finding", record.primary_finding().to_string()),
        ]);
        match self.mode {
            OutputMode::Human => println!("\n  {} {}", "Demo Mode:".yellow().bold(), DEMO_DISCLAIMER),
            _ => println!("\n  Demo Mode: {}", DEMO_DISCLAIMER),
        }

        self.section("Confidence Scores");
        if record.predictions.is_empty() {
            println!("  No findings");
        }
        let label_width = record
            .predictions
            .iter()
            .map(|p| p.label.len())
            .max()
            .unwrap_or(0);
        for p in &record.predictions {
            self.confidence_bar(&p.label, p.confidence, label_width);
        }

        if !record.predictions.is_empty() {
            self.section("Findings");
            for p in &record.predictions {
                let level = paint_level(self.mode, p.level(), p.level().name());
                println!("  • {} [{}]", p.label, level);
                if let Some(description) = &p.description {
                    println!("    {}", description);
                }
            }
        }

        if let Some(overlay) = &record.overlay {
            self.overlay(overlay);
        }

        if !record.recommendations.is_empty() {
            self.section("Recommendations");
            for (i, rec) in record.recommendations.iter().enumerate() {
                println!("  {:>2}. {}", i + 1, rec);
            }
        }

        Ok(())
    }

    fn overlay(&self, regions: &[HeatmapRegion]) {
        self.section("Heatmap Overlay");
        if regions.is_empty() {
            println!("  No regions above display threshold");
            return;
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec![
            "Condition", "Center X %", "Center Y %", "Radius %", "Opacity", "Color",
        ]);
        for region in regions {
            table.add_row(vec![
                region.label.clone(),
                format!("{:.2}", region.center_x),
                format!("{:.2}", region.center_y),
                format!("{:.2}", region.radius),
                format!("{:.2}/{:.2}", region.peak_opacity, region.mid_opacity),
                region.color.clone(),
            ]);
        }
        println!("{table}");
    }

    /// Summary of the latest analyses, newest first
    pub fn recent(&self, recent: &RecentAnalyses) -> Result<()> {
        if self.mode == OutputMode::Json {
            return self.json(&recent.iter().collect::<Vec<_>>());
        }

        self.section(&format!("Recent Analyses (last {})", recent.limit()));
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["ID", "Category", "Primary Finding", "Findings"]);
        for record in recent.iter() {
            table.add_row(vec![
                record.id.clone(),
                record.category.display_name().to_string(),
                record.primary_finding().to_string(),
                record.predictions.len().to_string(),
            ]);
        }
        println!("{table}");
        Ok(())
    }

    pub fn catalog(&self, entries: &[(Category, &[Condition])]) -> Result<()> {
        if self.mode == OutputMode::Json {
            let json: Vec<_> = entries
                .iter()
                .map(|(category, conditions)| {
                    serde_json::json!({
                        "category": category,
                        "name": category.display_name(),
                        "conditions": conditions,
                    })
                })
                .collect();
            return self.json(&json);
        }

        for (category, conditions) in entries {
            let range = category.condition_range();
            self.section(&format!(
                "{} ({} conditions, {}-{} per analysis)",
                category.display_name(),
                conditions.len(),
                range.start(),
                range.end()
            ));

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_header(vec!["Condition", "Description", "Recommendations"]);
            for condition in conditions.iter() {
                table.add_row(vec![
                    condition.label.to_string(),
                    condition.description.to_string(),
                    condition.recommendations.len().to_string(),
                ]);
            }
            println!("{table}");
        }
        Ok(())
    }
}

fn paint_level(mode: OutputMode, level: ConfidenceLevel, text: &str) -> ColoredString {
    if mode != OutputMode::Human {
        return text.normal();
    }
    match level {
        ConfidenceLevel::High => text.red(),
        ConfidenceLevel::Moderate => text.yellow(),
        ConfidenceLevel::Low => text.green(),
    }
}

fn format_success(mode: OutputMode, message: &str) -> Option<String> {
    match mode {
        OutputMode::Human => Some(format!("  {} {}", "✓".green(), message)),
        OutputMode::Plain => Some(format!("  [OK] {}", message)),
        OutputMode::Json => None,
    }
}

fn format_error(mode: OutputMode, message: &str) -> String {
    match mode {
        OutputMode::Human => format!("  {} {}", "✗".red(), message),
        OutputMode::Plain => format!("  [ERROR] {}", message),
        OutputMode::Json => serde_json::json!({ "error": message }).to_string(),
    }
}

/// Render a horizontal bar; `None` in JSON mode
fn format_confidence_bar(
    mode: OutputMode,
    label: &str,
    confidence: f64,
    label_width: usize,
) -> Option<String> {
    let filled = ((confidence * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    let level = ConfidenceLevel::from_confidence(confidence);
    let bar = match mode {
        OutputMode::Human => format!(
            "{}{}",
            paint_level(mode, level, &"█".repeat(filled)),
            "░".repeat(BAR_WIDTH - filled)
        ),
        OutputMode::Plain => format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled)),
        OutputMode::Json => return None,
    };

    Some(format!(
        "  {:width$} │{} {:.0}%",
        label,
        bar,
        confidence * 100.0,
        width = label_width
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_mode_honours_json_env() {
        std::env::set_var(JSON_ENV, "1");
        let mode = OutputMode::auto();
        std::env::remove_var(JSON_ENV);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn test_plain_success_has_no_glyph() {
        let line = format_success(OutputMode::Plain, "Wrote default config to demo.json").unwrap();
        assert_eq!(line, "  [OK] Wrote default config to demo.json");
        assert!(!line.contains('✓'));
        assert!(format_success(OutputMode::Json, "quiet").is_none());
    }

    #[test]
    fn test_error_line() {
        assert_eq!(
            format_error(OutputMode::Plain, "Config is broken"),
            "  [ERROR] Config is broken"
        );
        let json: serde_json::Value =
            serde_json::from_str(&format_error(OutputMode::Json, "bad \"seed\"")).unwrap();
        assert_eq!(json["error"], "bad \"seed\"");
        assert!(format_error(OutputMode::Human, "oops").ends_with(" oops"));
    }

    #[test]
    fn test_from_format() {
        assert_eq!(OutputMode::from_format("JSON").unwrap(), OutputMode::Json);
        assert_eq!(OutputMode::from_format("plain").unwrap(), OutputMode::Plain);
        assert_eq!(OutputMode::from_format("text").unwrap(), OutputMode::Human);
        assert!(OutputMode::from_format("xml").is_err());
    }

    #[test]
    fn test_plain_bar() {
        let line = format_confidence_bar(OutputMode::Plain, "Stroke", 0.5, 8).unwrap();
        assert_eq!(
            line,
            format!("  Stroke   │{}{} 50%", "#".repeat(15), "-".repeat(15))
        );
    }

    #[test]
    fn test_bar_never_overflows() {
        let line = format_confidence_bar(OutputMode::Plain, "X", 1.0, 1).unwrap();
        assert_eq!(line.matches('#').count(), BAR_WIDTH);
        assert!(format_confidence_bar(OutputMode::Json, "X", 0.3, 1).is_none());
    }
}
