//! Analysis output types.

use serde::Serialize;
use std::fmt;

/// A company's value for one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricEntry {
    /// Company name.
    pub company: String,
    /// Metric value. May be non-finite.
    pub value: f64,
}

/// Per-company metric values in company order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MetricMap {
    entries: Vec<MetricEntry>,
}

impl MetricMap {
    /// Create an empty map.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a value for `company`.
    pub fn push(&mut self, company: impl Into<String>, value: f64) {
        self.entries.push(MetricEntry {
            company: company.into(),
            value,
        });
    }

    /// Value for `company`, if present.
    pub fn get(&self, company: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.company == company)
            .map(|e| e.value)
    }

    /// Iterate entries in company order.
    pub fn iter(&self) -> std::slice::Iter<'_, MetricEntry> {
        self.entries.iter()
    }

    /// `(company, value)` pairs in company order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|e| (e.company.as_str(), e.value))
    }

    /// Number of entries.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a MetricMap {
    type Item = &'a MetricEntry;
    type IntoIter = std::slice::Iter<'a, MetricEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Why a company was flagged as most concerning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConcernReason {
    /// The company had at least one loss-making year.
    NegativeProfit {
        /// Year of its first loss in row order.
        first_loss_year: f64,
    },
    /// No company had a loss; this one has the highest profit volatility.
    HighestVolatility,
}

impl fmt::Display for ConcernReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeProfit { first_loss_year } => {
                write!(f, "negative net profit in {first_loss_year}")
            }
            Self::HighestVolatility => write!(f, "highest profit volatility"),
        }
    }
}

/// Numeric edge cases met during analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetricWarning {
    /// Revenue of zero gave a non-finite margin.
    ZeroRevenue {
        /// Company name.
        company: String,
        /// Year with zero revenue.
        year: f64,
    },
    /// One row only, so volatility is undefined.
    SingleObservation {
        /// Company name.
        company: String,
    },
    /// No company had a finite value; the first company was taken.
    NoFiniteCandidate {
        /// Metric that could not be ranked.
        metric: String,
        /// Company selected instead.
        fallback: String,
    },
}

impl fmt::Display for MetricWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRevenue { company, year } => write!(
                f,
                "{company}: zero revenue in {year}, profit margin is undefined"
            ),
            Self::SingleObservation { company } => write!(
                f,
                "{company}: only one year of data, profit volatility is undefined"
            ),
            Self::NoFiniteCandidate { metric, fallback } => write!(
                f,
                "no finite {metric} values, defaulted to {fallback}"
            ),
        }
    }
}

/// Aggregate result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Company names in input order.
    pub companies: Vec<String>,
    /// Mean profit margin per company.
    pub avg_profit_margin: MetricMap,
    /// Sample standard deviation of net profit per company.
    pub profit_volatility: MetricMap,
    /// Company with the highest average profit margin.
    pub most_profitable: String,
    /// Company flagged as most concerning.
    pub most_concerning: String,
    /// Rule that selected [`Self::most_concerning`].
    pub concern_reason: ConcernReason,
    /// Numeric edge cases met while computing the metrics.
    pub warnings: Vec<MetricWarning>,
}
