#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/margin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod charts;
pub mod export;
pub mod report;
pub mod summary;

pub use charts::generate_graphs;
pub use export::{ExportFormat, MetricsRow, export_metrics};
pub use report::{ReportArtifacts, ReportError, Reporter};
pub use summary::{SUMMARY_FILE, SummaryReport};
