//! Plain-text run summary.
//!
//! The summary names the run date, every analyzed company, the most
//! profitable and most concerning companies, and the metrics behind them.
//! Warnings about undefined metric values are appended only when present.

use crate::report::Result;
use chrono::NaiveDate;
use margin_metrics::AnalysisResult;
use margin_metrics::registry::list_metric_names;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the summary inside the output directory.
pub const SUMMARY_FILE: &str = "summary_report.txt";

/// Contents of the text summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    /// Date the analysis ran.
    pub analysis_date: NaiveDate,
    /// Analyzed companies, in analysis order.
    pub companies: Vec<String>,
    /// Company with the highest average profit margin.
    pub most_profitable: String,
    /// Company flagged as most concerning.
    pub most_concerning: String,
    /// Display names of the metrics used.
    pub metrics: Vec<String>,
    /// Rendered analysis warnings.
    pub warnings: Vec<String>,
}

impl SummaryReport {
    /// Build a summary from an analysis result.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use margin_data::{CompanyData, CompanyRecordSet, YearRecord};
    /// use margin_metrics::analyze_companies;
    /// use margin_output::SummaryReport;
    ///
    /// let row = |year, net_profit| YearRecord {
    ///     year,
    ///     revenue: 100.0,
    ///     expenses: 100.0 - net_profit,
    ///     net_profit,
    ///     assets: 0.0,
    ///     liabilities: 0.0,
    /// };
    /// let data = CompanyData::try_from(vec![
    ///     CompanyRecordSet::new("A", vec![row(2020.0, 10.0), row(2021.0, 12.0)]).unwrap(),
    ///     CompanyRecordSet::new("B", vec![row(2020.0, -1.0), row(2021.0, 3.0)]).unwrap(),
    /// ])
    /// .unwrap();
    /// let result = analyze_companies(&data).unwrap();
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    /// let summary = SummaryReport::from_result(&result, date);
    ///
    /// assert_eq!(summary.most_concerning, "B");
    /// assert!(summary.to_string().contains("Analysis Date: 2024-06-30"));
    /// ```
    pub fn from_result(result: &AnalysisResult, analysis_date: NaiveDate) -> Self {
        Self {
            analysis_date,
            companies: result.companies.clone(),
            most_profitable: result.most_profitable.clone(),
            most_concerning: result.most_concerning.clone(),
            metrics: list_metric_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            warnings: result.warnings.iter().map(ToString::to_string).collect(),
        }
    }

    /// Write the summary to `output_dir`, creating it if needed.
    pub fn save(&self, output_dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(output_dir)?;
        let path = output_dir.join(SUMMARY_FILE);
        fs::write(&path, self.to_string())?;
        debug!(path = %path.display(), "Wrote summary");
        Ok(path)
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Financial Analysis Summary")?;
        writeln!(f, "==========================")?;
        writeln!(f)?;
        writeln!(f, "Analysis Date: {}", self.analysis_date.format("%Y-%m-%d"))?;
        writeln!(f)?;

        writeln!(f, "Companies Analyzed:")?;
        for company in &self.companies {
            writeln!(f, "- {company}")?;
        }

        writeln!(f)?;
        writeln!(f, "Most Profitable Company:")?;
        writeln!(f, "{}", self.most_profitable)?;
        writeln!(f)?;

        writeln!(f, "Most Concerning Company:")?;
        writeln!(f, "{}", self.most_concerning)?;
        writeln!(f)?;

        writeln!(f, "Metrics Used:")?;
        for metric in &self.metrics {
            writeln!(f, "- {metric}")?;
        }

        if !self.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "Warnings:")?;
            for warning in &self.warnings {
                writeln!(f, "- {warning}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(warnings: Vec<String>) -> SummaryReport {
        SummaryReport {
            analysis_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            companies: vec!["Acme".to_string(), "Globex".to_string()],
            most_profitable: "Acme".to_string(),
            most_concerning: "Globex".to_string(),
            metrics: list_metric_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            warnings,
        }
    }

    #[test]
    fn test_summary_layout() {
        let expected = "\
Financial Analysis Summary
==========================

Analysis Date: 2025-01-15

Companies Analyzed:
- Acme
- Globex

Most Profitable Company:
Acme

Most Concerning Company:
Globex

Metrics Used:
- Revenue vs Year
- Net Profit vs Year
- Average Profit Margin
- Profit Volatility
";
        assert_eq!(summary(vec![]).to_string(), expected);
    }

    #[test]
    fn test_warnings_section_only_when_present() {
        let text = summary(vec!["Acme: zero revenue in 2020".to_string()]).to_string();
        assert!(text.ends_with("\nWarnings:\n- Acme: zero revenue in 2020\n"));
        assert!(!summary(vec![]).to_string().contains("Warnings:"));
    }
}
