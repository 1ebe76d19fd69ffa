//! The load, analyze and report pipeline.

use crate::error::Result;
use crate::settings::PipelineConfig;
use margin_data::load_company_data;
use margin_metrics::{AnalysisResult, analyze_companies};
use margin_output::{ReportArtifacts, Reporter};
use tracing::info;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Computed metrics and headline companies.
    pub analysis: AnalysisResult,
    /// Files written.
    pub artifacts: ReportArtifacts,
}

/// Run the whole pipeline once.
///
/// Loading and analysis complete before anything is written, so a
/// validation failure leaves the output directory untouched.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineOutcome> {
    info!(input_dir = %config.input_dir.display(), "Loading company data");
    let data = load_company_data(&config.input_dir)?;

    let analysis = analyze_companies(&data)?;

    let mut reporter =
        Reporter::new(&config.output_dir).with_export_formats(config.export_formats.clone());
    if let Some(date) = config.analysis_date {
        reporter = reporter.with_analysis_date(date);
    }
    let artifacts = reporter.write(&data, &analysis)?;

    Ok(PipelineOutcome {
        analysis,
        artifacts,
    })
}
