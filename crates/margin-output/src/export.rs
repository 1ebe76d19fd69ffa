//! Metric export.
//!
//! Writes the per-company metrics as CSV and the full analysis result as JSON
//! so runs can be compared or post-processed outside the tool.

use crate::report::Result;
use margin_metrics::AnalysisResult;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File stem used for every export format.
pub const EXPORT_STEM: &str = "metrics";

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Pretty-printed JSON format.
    Json,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// One CSV row: a company and its metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRow {
    /// Company name.
    pub company: String,
    /// Mean profit margin.
    pub avg_profit_margin: f64,
    /// Sample standard deviation of net profit.
    pub profit_volatility: f64,
}

/// Flatten an analysis result into CSV rows, in company order.
pub fn metrics_rows(result: &AnalysisResult) -> Vec<MetricsRow> {
    result
        .companies
        .iter()
        .map(|company| MetricsRow {
            company: company.clone(),
            avg_profit_margin: result
                .avg_profit_margin
                .get(company)
                .unwrap_or(f64::NAN),
            profit_volatility: result
                .profit_volatility
                .get(company)
                .unwrap_or(f64::NAN),
        })
        .collect()
}

/// Write the metrics to any writer as CSV.
pub fn write_csv<W: Write>(result: &AnalysisResult, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in metrics_rows(result) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the analysis result to any writer as pretty JSON.
pub fn write_json<W: Write>(result: &AnalysisResult, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, result)?;
    writeln!(writer)?;
    Ok(())
}

/// Export `result` to `output_dir` in each of `formats`.
pub fn export_metrics(
    result: &AnalysisResult,
    output_dir: &Path,
    formats: &[ExportFormat],
) -> Result<Vec<PathBuf>> {
    if formats.is_empty() {
        return Ok(Vec::new());
    }

    fs::create_dir_all(output_dir)?;
    let mut written = Vec::with_capacity(formats.len());

    for format in formats {
        let path = output_dir.join(format!("{EXPORT_STEM}.{}", format.extension()));
        let file = File::create(&path)?;
        match format {
            ExportFormat::Csv => write_csv(result, file)?,
            ExportFormat::Json => write_json(result, file)?,
        }
        debug!(path = %path.display(), "Exported metrics");
        written.push(path);
    }

    Ok(written)
}
