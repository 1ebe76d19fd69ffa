//! Profit margin metrics.
//!
//! Profit margin is net profit over revenue for each reporting period. A
//! company's headline figure is the plain mean over its periods, with every
//! year weighted equally regardless of revenue size.

use crate::stats::mean;
use margin_data::CompanyRecordSet;

/// Per-row profit margins in row order.
pub fn profit_margins(company: &CompanyRecordSet) -> Vec<f64> {
    company.rows.iter().map(|r| r.profit_margin()).collect()
}

/// Mean profit margin across all rows. NaN for a company without rows.
pub fn average_profit_margin(company: &CompanyRecordSet) -> f64 {
    mean(&profit_margins(company)).unwrap_or(f64::NAN)
}

/// Years whose revenue is zero, making the margin non-finite.
pub fn zero_revenue_years(company: &CompanyRecordSet) -> Vec<f64> {
    company
        .rows
        .iter()
        .filter(|r| r.revenue == 0.0)
        .map(|r| r.year)
        .collect()
}
