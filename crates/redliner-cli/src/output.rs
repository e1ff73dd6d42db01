//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use redliner_analyzer::AnalysisReport;
use redliner_domain::{Chunk, Section};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style, Width},
};

/// Column width for wrapped text cells.
const TEXT_WIDTH: usize = 80;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an analysis report.
    pub fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(report),
            OutputFormat::Table => Ok(self.format_report_table(report)),
        }
    }

    /// Format playbook chunks.
    pub fn format_chunks(&self, chunks: &[Chunk]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_chunks_json(chunks),
            OutputFormat::Table => Ok(self.format_chunks_table(chunks)),
        }
    }

    fn format_report_json(&self, report: &AnalysisReport) -> Result<String> {
        let context: Vec<serde_json::Value> = report
            .retrieved
            .iter()
            .map(|hit| {
                serde_json::json!({
                    "sequence_index": hit.chunk.sequence_index,
                    "distance": hit.distance,
                    "text": hit.chunk.text,
                })
            })
            .collect();

        let value = serde_json::json!({
            "conflicts": report.result.conflicts,
            "gaps": report.result.gaps,
            "irrelevant": report.result.irrelevant,
            "metadata": report.metadata,
            "context": context,
        });

        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_report_table(&self, report: &AnalysisReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Section", "Findings"]);

        for section in Section::ALL {
            let text = report.result.section(section);
            let findings = if report.result.is_sentinel(section) {
                self.colorize(text, "green")
            } else {
                self.colorize(text, section_color(section))
            };
            builder.push_record([section.to_string(), findings]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Width::wrap(TEXT_WIDTH)))
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let summary = format!(
            "Model: {} | Context: {} of {} chunks | {}ms",
            report.metadata.model_name,
            report.metadata.retrieved_chunks,
            report.metadata.playbook_chunks,
            report.metadata.processing_time_ms
        );

        format!("{}\n{}", table, self.info(&summary))
    }

    fn format_chunks_json(&self, chunks: &[Chunk]) -> Result<String> {
        let json_chunks: Vec<serde_json::Value> = chunks
            .iter()
            .map(|c| {
                serde_json::json!({
                    "sequence_index": c.sequence_index,
                    "tokens": c.token_count(),
                    "text": c.text,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_chunks)?)
    }

    fn format_chunks_table(&self, chunks: &[Chunk]) -> String {
        if chunks.is_empty() {
            return self.colorize("No chunks produced.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Tokens", "Text"]);

        for chunk in chunks {
            builder.push_record([
                chunk.sequence_index.to_string(),
                chunk.token_count().to_string(),
                chunk.text.clone(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Width::wrap(TEXT_WIDTH)))
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn section_color(section: Section) -> &'static str {
    match section {
        Section::Conflicts => "red",
        Section::Gaps => "yellow",
        Section::Irrelevant => "magenta",
    }
}
