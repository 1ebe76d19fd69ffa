//! Chart rendering.
//!
//! Two line charts plot the raw yearly series per company and two bar charts
//! compare the computed metrics. Charts are SVG files named after the metric
//! keys in the registry. Non-finite values are skipped.

use crate::report::{ReportError, Result};
use margin_data::{CompanyData, CompanyRecordSet};
use margin_metrics::{AnalysisResult, MetricInfo, MetricMap, get_metric_info};
use plotters::prelude::*;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Subdirectory of the output directory that holds the charts.
pub const GRAPHS_DIR: &str = "graphs";

const CHART_SIZE: (u32, u32) = (960, 640);
const CAPTION_FONT: (&str, f64) = ("sans-serif", 28.0);

/// Render all four charts into `output_dir/graphs`.
pub fn generate_graphs(
    data: &CompanyData,
    result: &AnalysisResult,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let graphs_dir = output_dir.join(GRAPHS_DIR);
    fs::create_dir_all(&graphs_dir)?;

    Ok(vec![
        plot_revenue(data, &graphs_dir)?,
        plot_net_profit(data, &graphs_dir)?,
        plot_profit_margin(result, &graphs_dir)?,
        plot_profit_volatility(result, &graphs_dir)?,
    ])
}

/// Revenue by year, one line per company.
pub fn plot_revenue(data: &CompanyData, dir: &Path) -> Result<PathBuf> {
    let (metric, path) = chart_target(dir, "revenue_vs_year")?;
    line_chart(&path, metric.name, "Revenue", data, |c| c.revenues())?;
    Ok(path)
}

/// Net profit by year, one line per company.
pub fn plot_net_profit(data: &CompanyData, dir: &Path) -> Result<PathBuf> {
    let (metric, path) = chart_target(dir, "net_profit_vs_year")?;
    line_chart(&path, metric.name, "Net Profit", data, |c| c.net_profits())?;
    Ok(path)
}

/// Average profit margin, one bar per company.
pub fn plot_profit_margin(result: &AnalysisResult, dir: &Path) -> Result<PathBuf> {
    let (metric, path) = chart_target(dir, "profit_margin")?;
    bar_chart(&path, metric, &result.avg_profit_margin)?;
    Ok(path)
}

/// Profit volatility, one bar per company.
pub fn plot_profit_volatility(result: &AnalysisResult, dir: &Path) -> Result<PathBuf> {
    let (metric, path) = chart_target(dir, "profit_volatility")?;
    bar_chart(&path, metric, &result.profit_volatility)?;
    Ok(path)
}

fn chart_target(dir: &Path, key: &str) -> Result<(MetricInfo, PathBuf)> {
    let metric = get_metric_info(key)
        .ok_or_else(|| ReportError::Chart(format!("Unknown metric: {key}")))?;
    Ok((metric, dir.join(format!("{}.svg", metric.key))))
}

fn chart_err<E: std::fmt::Display>(err: E) -> ReportError {
    ReportError::Chart(err.to_string())
}

fn line_chart<F>(
    path: &Path,
    title: &str,
    y_desc: &str,
    data: &CompanyData,
    values: F,
) -> Result<()>
where
    F: Fn(&CompanyRecordSet) -> Vec<f64>,
{
    let series: Vec<(&str, Vec<(f64, f64)>)> = data
        .iter()
        .map(|company| {
            let points = company
                .years()
                .into_iter()
                .zip(values(company))
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .collect();
            (company.company_name.as_str(), points)
        })
        .collect();

    let x_range = padded_range(
        series.iter().flat_map(|(_, p)| p.iter().map(|(x, _)| *x)),
        false,
    );
    let y_range = padded_range(
        series.iter().flat_map(|(_, p)| p.iter().map(|(_, y)| *y)),
        false,
    );

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, CAPTION_FONT)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range, y_range)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc(y_desc)
        .x_label_formatter(&|x| format!("{x:.0}"))
        .draw()
        .map_err(chart_err)?;

    for (idx, (name, points)) in series.into_iter().enumerate() {
        let style = Palette99::pick(idx).to_rgba().stroke_width(2);
        chart
            .draw_series(LineSeries::new(points, style))
            .map_err(chart_err)?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    debug!(path = %path.display(), "Rendered line chart");
    Ok(())
}

fn bar_chart(path: &Path, metric: MetricInfo, values: &MetricMap) -> Result<()> {
    let title = format!("{} Comparison", metric.name);
    let names: Vec<String> = values.iter().map(|e| e.company.clone()).collect();
    let count = names.len() as u32;
    let y_range = padded_range(
        values.pairs().map(|(_, v)| v).filter(|v| v.is_finite()),
        true,
    );

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&title, CAPTION_FONT)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d((0..count).into_segmented(), y_range)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Company")
        .y_desc(metric.name)
        .x_labels(names.len())
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(idx) => {
                names.get(*idx as usize).cloned().unwrap_or_default()
            }
            _ => String::new(),
        })
        .draw()
        .map_err(chart_err)?;

    let fill = Palette99::pick(0).to_rgba().filled();
    chart
        .draw_series(
            values
                .pairs()
                .enumerate()
                .filter(|(_, (_, v))| v.is_finite())
                .map(|(idx, (_, v))| {
                    let idx = idx as u32;
                    let mut bar = Rectangle::new(
                        [(SegmentValue::Exact(idx), 0.0), (SegmentValue::Exact(idx + 1), v)],
                        fill,
                    );
                    bar.set_margin(0, 0, 12, 12);
                    bar
                }),
        )
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    debug!(path = %path.display(), "Rendered bar chart");
    Ok(())
}

/// Axis range covering `values` with a 10% margin.
///
/// `include_zero` anchors bar charts at the baseline. A degenerate or empty
/// input still yields a drawable range.
fn padded_range<I>(values: I, include_zero: bool) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (mut lo, mut hi) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if include_zero {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }

    let span = hi - lo;
    if span == 0.0 {
        return (lo - 1.0)..(hi + 1.0);
    }

    let pad = span * 0.1;
    let lo = if include_zero && lo == 0.0 { 0.0 } else { lo - pad };
    let hi = if include_zero && hi == 0.0 { 0.0 } else { hi + pad };
    lo..hi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_target_uses_registry_key() {
        let (metric, path) = chart_target(Path::new("out"), "profit_margin").unwrap();
        assert_eq!(metric.name, "Average Profit Margin");
        assert_eq!(path, Path::new("out/profit_margin.svg"));

        assert!(matches!(
            chart_target(Path::new("out"), "ebitda"),
            Err(ReportError::Chart(_))
        ));
    }

    #[test]
    fn test_padded_range() {
        let range = padded_range([10.0, 20.0], false);
        assert!((range.start - 9.0).abs() < 1e-9);
        assert!((range.end - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_padded_range_bar_baseline() {
        let range = padded_range([0.1, 0.3], true);
        assert_eq!(range.start, 0.0);
        assert!((range.end - 0.33).abs() < 1e-9);

        let range = padded_range([-0.2, 0.3], true);
        assert!(range.start < -0.2);
    }

    #[test]
    fn test_padded_range_degenerate() {
        assert_eq!(padded_range(std::iter::empty(), false), 0.0..1.0);
        assert_eq!(padded_range([2020.0], false), 2019.0..2021.0);
        assert_eq!(padded_range([0.0, 0.0], true), -1.0..1.0);
    }
}
