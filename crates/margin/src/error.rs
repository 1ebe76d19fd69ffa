//! Error type for a pipeline run.

use margin_data::{DataError, ErrorKind};
use margin_metrics::MetricsError;
use margin_output::ReportError;
use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Invalid settings
    #[error("Configuration error: {0}")]
    Settings(#[from] config::ConfigError),

    /// Loading or validation failure
    #[error(transparent)]
    Data(#[from] DataError),

    /// Analysis failure
    #[error("Analysis error: {0}")]
    Metrics(#[from] MetricsError),

    /// Report writing failure
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

impl PipelineError {
    /// Validation taxonomy of the failure.
    ///
    /// Settings errors count as configuration errors; analysis and report
    /// failures are [`ErrorKind::Other`].
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Settings(_) => ErrorKind::Config,
            Self::Data(err) => err.kind(),
            Self::Metrics(_) | Self::Report(_) => ErrorKind::Other,
        }
    }
}
