//! Schema and data-quality checks on parsed spreadsheets.

use crate::error::{DataError, Result};
use crate::record::{REQUIRED_COLUMNS, YearRecord};
use polars::prelude::*;

/// Check that every required column is present.
///
/// Columns are checked in [`REQUIRED_COLUMNS`] order and the first missing
/// one is reported. Matching is exact and case-sensitive.
pub fn validate_columns(df: &DataFrame, file: &str) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if df.get_column_index(column).is_none() {
            return Err(DataError::Schema {
                file: file.to_string(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

/// Check cell completeness and the `Year` column type.
///
/// Missing values are looked for in every column, extra columns included,
/// before the `Year` column is checked for a numeric type.
pub fn validate_data(df: &DataFrame, file: &str) -> Result<()> {
    if df.get_columns().iter().any(|c| c.null_count() > 0) {
        return Err(DataError::data_quality(file, "contains missing values"));
    }

    if df.height() == 0 {
        return Err(DataError::data_quality(file, "contains no data rows"));
    }

    let year = df.column("Year")?;
    if !is_numeric(year.dtype()) {
        return Err(DataError::data_quality(file, "has non-numeric Year values"));
    }

    Ok(())
}

fn is_numeric(dtype: &DataType) -> bool {
    dtype.is_integer() || dtype.is_float()
}

/// Convert a validated frame into typed rows, keeping source row order.
///
/// Required columns other than `Year` are not type-checked by
/// [`validate_data`]; a value that cannot be read as a number is reported
/// here as a data-quality failure naming the column. Only numeric and text
/// columns are read, so boolean cells are rejected rather than taken as 0 or 1.
pub fn records_from_frame(df: &DataFrame, file: &str) -> Result<Vec<YearRecord>> {
    let [year, revenue, expenses, net_profit, assets, liabilities] =
        REQUIRED_COLUMNS.map(|name| numeric_column(df, file, name));
    let (year, revenue, expenses, net_profit, assets, liabilities) =
        (year?, revenue?, expenses?, net_profit?, assets?, liabilities?);

    let rows = (0..df.height())
        .map(|i| YearRecord {
            year: year[i],
            revenue: revenue[i],
            expenses: expenses[i],
            net_profit: net_profit[i],
            assets: assets[i],
            liabilities: liabilities[i],
        })
        .collect();

    Ok(rows)
}

fn numeric_column(df: &DataFrame, file: &str, name: &str) -> Result<Vec<f64>> {
    let non_numeric = || DataError::data_quality(file, format!("has non-numeric {name} values"));

    let column = df.column(name)?;
    if !is_numeric(column.dtype()) && column.dtype() != &DataType::String {
        return Err(non_numeric());
    }

    let values = column
        .cast(&DataType::Float64)
        .map_err(|_| non_numeric())?;

    values
        .f64()?
        .iter()
        .map(|v| v.ok_or_else(non_numeric))
        .collect()
}
