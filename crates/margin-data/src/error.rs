//! Error types for data operations.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading and validating company spreadsheets.
#[derive(Debug, Error)]
pub enum DataError {
    /// Invalid input directory or unusable company set
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required column is absent from a source file
    #[error("File \"{file}\" is missing required column: {column}")]
    Schema {
        /// File name that failed the check
        file: String,
        /// First missing required column
        column: String,
    },

    /// A source file has missing or non-numeric values
    #[error("File \"{file}\" {reason}")]
    DataQuality {
        /// File name that failed the check
        file: String,
        /// Description of the failed rule
        reason: String,
    },

    /// A source file could not be parsed as a spreadsheet
    #[error("Failed to parse \"{file}\": {source}")]
    Parse {
        /// File name that could not be parsed
        file: String,
        /// Underlying reader error
        #[source]
        source: polars::prelude::PolarsError,
    },

    /// A workbook could not be opened or its first worksheet read
    #[error("Failed to read workbook \"{file}\": {source}")]
    Workbook {
        /// File name of the workbook
        file: String,
        /// Underlying workbook reader error
        #[source]
        source: calamine::Error,
    },

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Classification of a [`DataError`] into the validation taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid input directory, name collision, or fewer than two companies.
    Config,
    /// Missing required column.
    Schema,
    /// Missing values or non-numeric data.
    DataQuality,
    /// Reader or filesystem failure.
    Other,
}

impl DataError {
    /// Classify this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Config,
            Self::Schema { .. } => ErrorKind::Schema,
            Self::DataQuality { .. } => ErrorKind::DataQuality,
            Self::Parse { .. } | Self::Workbook { .. } | Self::Polars(_) | Self::Io(_) => {
                ErrorKind::Other
            }
        }
    }

    pub(crate) fn data_quality(file: &str, reason: impl Into<String>) -> Self {
        Self::DataQuality {
            file: file.to_string(),
            reason: reason.into(),
        }
    }
}
