#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/margin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod loader;
pub mod record;
pub mod validate;
pub mod workbook;

pub use error::{DataError, ErrorKind, Result};
pub use loader::{MIN_COMPANIES, load_company_data};
pub use record::{CompanyData, CompanyRecordSet, REQUIRED_COLUMNS, YearRecord};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
