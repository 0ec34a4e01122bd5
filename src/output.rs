// ==============================================================================
// output.rs - Inflation Factor Report Generation
// ==============================================================================
// Description: Renders per-file lambda results as text or JSON Lines
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 0.2.0
// ==============================================================================

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;

use crate::models::StatisticSemantics;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable block per file
    Text,
    /// One JSON object per file and line
    Json,
}

/// Result of processing one summary statistics file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflationReport {
    pub file: PathBuf,
    pub na_removed: usize,
    /// Markers left after `--extract` filtering, if filtering was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markers_extracted: Option<usize>,
    /// Number of statistics the median was taken over
    pub markers_used: usize,
    pub semantics: StatisticSemantics,
    pub lambda: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lambda_1000: Option<f64>,
}

/// Writes reports to a sink (stdout in the binary)
pub struct ReportWriter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn write(&mut self, report: &InflationReport) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.write_text(report),
            OutputFormat::Json => self.write_json(report),
        }?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_text(&mut self, report: &InflationReport) -> Result<()> {
        writeln!(self.writer, "{}", report.file.display())?;
        writeln!(
            self.writer,
            "  - {} NA values removed",
            format_count(report.na_removed)
        )?;
        if let Some(extracted) = report.markers_extracted {
            writeln!(self.writer, "  - {} markers extracted", format_count(extracted))?;
        }
        writeln!(self.writer, "  - lambda = {:.6}", report.lambda)?;
        if let Some(lambda_1000) = report.lambda_1000 {
            writeln!(self.writer, "  - lambda1000 = {:.6}", lambda_1000)?;
        }
        Ok(())
    }

    fn write_json(&mut self, report: &InflationReport) -> Result<()> {
        serde_json::to_writer(&mut self.writer, report)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Format a count with comma thousands separators (1234567 → "1,234,567")
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}
