//! Profit volatility.

use crate::stats::sample_std;
use margin_data::CompanyRecordSet;

/// Sample standard deviation of net profit across a company's rows.
///
/// NaN when the company has a single row.
pub fn profit_volatility(company: &CompanyRecordSet) -> f64 {
    sample_std(&company.net_profits())
}
