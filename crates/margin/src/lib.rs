#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/margin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod settings;
pub mod error;
pub mod pipeline;

// Re-export main types from sub-crates
pub use margin_data as data;
pub use margin_metrics as metrics;
pub use margin_output as output;

pub use settings::{ConfigOverrides, PipelineConfig};
pub use error::{PipelineError, Result};
pub use pipeline::{PipelineOutcome, run_pipeline};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
