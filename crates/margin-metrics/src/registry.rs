//! Metric Registry
//!
//! Central list of the metrics a report presents. The order of
//! [`available_metrics`] is the order reports list them in.

/// Metric metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricInfo {
    /// Stable identifier, also the chart file stem
    pub key: &'static str,
    /// Display name used in reports and chart labels
    pub name: &'static str,
}

/// Get all metric info, in report order
pub fn available_metrics() -> Vec<MetricInfo> {
    vec![
        MetricInfo {
            key: "revenue_vs_year",
            name: "Revenue vs Year",
        },
        MetricInfo {
            key: "net_profit_vs_year",
            name: "Net Profit vs Year",
        },
        MetricInfo {
            key: "profit_margin",
            name: "Average Profit Margin",
        },
        MetricInfo {
            key: "profit_volatility",
            name: "Profit Volatility",
        },
    ]
}

/// Get metric info by key
pub fn get_metric_info(key: &str) -> Option<MetricInfo> {
    available_metrics().into_iter().find(|m| m.key == key)
}

/// List all metric display names, in report order
pub fn list_metric_names() -> Vec<&'static str> {
    available_metrics().into_iter().map(|m| m.name).collect()
}
