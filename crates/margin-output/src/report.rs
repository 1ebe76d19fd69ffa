//! Report generation for an analysis run.
//!
//! [`Reporter`] writes every artifact of a run under one output directory:
//! charts, the text summary, and the requested metric exports.

use crate::charts::generate_graphs;
use crate::export::{ExportFormat, export_metrics};
use crate::summary::SummaryReport;
use chrono::{Local, NaiveDate};
use margin_data::CompanyData;
use margin_metrics::AnalysisResult;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Chart rendering error.
    #[error("Chart rendering error: {0}")]
    Chart(String),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Paths written by a [`Reporter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportArtifacts {
    /// Chart images.
    pub charts: Vec<PathBuf>,
    /// Text summary.
    pub summary: PathBuf,
    /// Metric export files.
    pub exports: Vec<PathBuf>,
}

impl ReportArtifacts {
    /// All written paths.
    pub fn all(&self) -> Vec<&Path> {
        self.charts
            .iter()
            .chain(std::iter::once(&self.summary))
            .chain(self.exports.iter())
            .map(PathBuf::as_path)
            .collect()
    }
}

/// Writes the artifacts of an analysis run.
#[derive(Debug, Clone)]
pub struct Reporter {
    output_dir: PathBuf,
    export_formats: Vec<ExportFormat>,
    analysis_date: Option<NaiveDate>,
}

impl Reporter {
    /// Create a reporter writing under `output_dir`, exporting CSV and JSON.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            export_formats: vec![ExportFormat::Csv, ExportFormat::Json],
            analysis_date: None,
        }
    }

    /// Set the metric export formats. An empty list disables export.
    pub fn with_export_formats(mut self, formats: Vec<ExportFormat>) -> Self {
        self.export_formats = formats;
        self
    }

    /// Fix the date stamped on the summary instead of today's local date.
    pub const fn with_analysis_date(mut self, date: NaiveDate) -> Self {
        self.analysis_date = Some(date);
        self
    }

    /// Output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render charts, summary and exports.
    pub fn write(&self, data: &CompanyData, result: &AnalysisResult) -> Result<ReportArtifacts> {
        let charts = generate_graphs(data, result, &self.output_dir)?;

        let date = self
            .analysis_date
            .unwrap_or_else(|| Local::now().date_naive());
        let summary = SummaryReport::from_result(result, date).save(&self.output_dir)?;

        let exports = export_metrics(result, &self.output_dir, &self.export_formats)?;

        info!(
            output_dir = %self.output_dir.display(),
            charts = charts.len(),
            exports = exports.len(),
            "Report written"
        );

        Ok(ReportArtifacts {
            charts,
            summary,
            exports,
        })
    }
}
