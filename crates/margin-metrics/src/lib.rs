#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/margin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analyzer;
pub mod error;
pub mod profitability;
pub mod ranking;
pub mod registry;
pub mod result;
pub mod stats;
pub mod volatility;

pub use analyzer::analyze_companies;
pub use error::{MetricsError, Result};
pub use result::{AnalysisResult, ConcernReason, MetricEntry, MetricMap, MetricWarning};

// Re-export registry types for convenience
pub use registry::{MetricInfo, available_metrics, get_metric_info};
