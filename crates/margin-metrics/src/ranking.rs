//! Headline determinations: most profitable and most concerning company.

use crate::result::{ConcernReason, MetricMap};
use crate::stats::first_max;
use margin_data::CompanyData;

/// Company with the highest finite average profit margin.
///
/// Ties go to the company met first.
pub fn most_profitable(avg_profit_margin: &MetricMap) -> Option<&str> {
    first_max(avg_profit_margin.pairs())
}

/// Company with the highest finite profit volatility.
///
/// Ties go to the company met first.
pub fn most_volatile(profit_volatility: &MetricMap) -> Option<&str> {
    first_max(profit_volatility.pairs())
}

/// First company, in input order, with any loss-making year.
///
/// Returns the company name with the year of its first loss. This is not the
/// largest loss nor the most frequent one, only the first company met.
pub fn first_loss_maker(data: &CompanyData) -> Option<(&str, f64)> {
    data.iter().find_map(|company| {
        company
            .first_loss()
            .map(|row| (company.company_name.as_str(), row.year))
    })
}

/// Most concerning company.
///
/// The first company with a loss-making year wins outright. Without any
/// loss, falls back to [`most_volatile`]. `None` only when no company has a
/// loss and no volatility is finite.
pub fn most_concerning<'a>(
    data: &'a CompanyData,
    profit_volatility: &'a MetricMap,
) -> Option<(&'a str, ConcernReason)> {
    if let Some((company, first_loss_year)) = first_loss_maker(data) {
        return Some((company, ConcernReason::NegativeProfit { first_loss_year }));
    }

    most_volatile(profit_volatility).map(|company| (company, ConcernReason::HighestVolatility))
}
