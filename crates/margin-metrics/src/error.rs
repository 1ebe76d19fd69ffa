//! Error types for metric computation.

use thiserror::Error;

/// Result type for metric operations.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Fewer companies than a comparison needs
    #[error("Insufficient companies: need at least {required}, got {actual}")]
    InsufficientCompanies {
        /// Required number of companies
        required: usize,
        /// Number of companies provided
        actual: usize,
    },

    /// A company without any rows
    #[error("Company \"{0}\" has no rows")]
    EmptyCompany(String),
}
