//! Company analysis.
//!
//! Computes the per-company metrics and the two headline determinations in a
//! single pass over the loaded companies, preserving their order.

use crate::error::{MetricsError, Result};
use crate::profitability::{average_profit_margin, zero_revenue_years};
use crate::ranking::{most_concerning, most_profitable};
use crate::result::{AnalysisResult, ConcernReason, MetricMap, MetricWarning};
use crate::volatility::profit_volatility;
use margin_data::{CompanyData, MIN_COMPANIES};
use tracing::{debug, info, warn};

/// Analyze loaded companies.
///
/// # Errors
/// * [`MetricsError::InsufficientCompanies`] for fewer than two companies
/// * [`MetricsError::EmptyCompany`] for a company without rows
pub fn analyze_companies(data: &CompanyData) -> Result<AnalysisResult> {
    if data.len() < MIN_COMPANIES {
        return Err(MetricsError::InsufficientCompanies {
            required: MIN_COMPANIES,
            actual: data.len(),
        });
    }

    let mut avg_profit_margin = MetricMap::new();
    let mut volatility = MetricMap::new();
    let mut warnings = Vec::new();

    for company in data {
        let name = &company.company_name;
        if company.rows.is_empty() {
            return Err(MetricsError::EmptyCompany(name.clone()));
        }

        for year in zero_revenue_years(company) {
            warnings.push(MetricWarning::ZeroRevenue {
                company: name.clone(),
                year,
            });
        }
        if company.rows.len() == 1 {
            warnings.push(MetricWarning::SingleObservation {
                company: name.clone(),
            });
        }

        let margin = average_profit_margin(company);
        let vol = profit_volatility(company);
        debug!(company = %name, avg_profit_margin = margin, profit_volatility = vol, "Computed metrics");

        avg_profit_margin.push(name.clone(), margin);
        volatility.push(name.clone(), vol);
    }

    let companies = data.names();

    let most_profitable = most_profitable(&avg_profit_margin).map_or_else(
        || fallback(&companies, "average profit margin", &mut warnings),
        str::to_string,
    );

    let (most_concerning, concern_reason) = most_concerning(data, &volatility).map_or_else(
        || {
            (
                fallback(&companies, "profit volatility", &mut warnings),
                ConcernReason::HighestVolatility,
            )
        },
        |(name, reason)| (name.to_string(), reason),
    );

    for warning in &warnings {
        warn!("{warning}");
    }
    info!(
        companies = companies.len(),
        most_profitable = %most_profitable,
        most_concerning = %most_concerning,
        reason = %concern_reason,
        "Analysis complete"
    );

    Ok(AnalysisResult {
        companies,
        avg_profit_margin,
        profit_volatility: volatility,
        most_profitable,
        most_concerning,
        concern_reason,
        warnings,
    })
}

fn fallback(companies: &[String], metric: &str, warnings: &mut Vec<MetricWarning>) -> String {
    // Callers guarantee at least MIN_COMPANIES entries.
    let first = companies.first().cloned().unwrap_or_default();
    warnings.push(MetricWarning::NoFiniteCandidate {
        metric: metric.to_string(),
        fallback: first.clone(),
    });
    first
}
