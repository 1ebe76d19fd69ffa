//! Excel workbook reading.
//!
//! The first worksheet is read with calamine and turned into a DataFrame, so
//! workbooks go through the same checks as CSV files. The first row holds the
//! column names. Each column gets the narrowest type its non-empty cells allow
//! (integer, float, boolean, then text), and empty cells become nulls.

use crate::error::{DataError, Result};
use calamine::{Data, Range, Reader, open_workbook_auto};
use polars::prelude::*;
use std::path::Path;

static EMPTY_CELL: Data = Data::Empty;

/// Read the first worksheet of the workbook at `path`.
pub fn read_workbook(path: &Path, file: &str) -> Result<DataFrame> {
    let workbook_err = |source| DataError::Workbook {
        file: file.to_string(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(workbook_err)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| DataError::data_quality(file, "contains no worksheets"))?
        .map_err(workbook_err)?;

    frame_from_range(&range).map_err(|source| DataError::Parse {
        file: file.to_string(),
        source,
    })
}

/// Convert a worksheet range into a DataFrame, using the first row as header.
pub fn frame_from_range(range: &Range<Data>) -> PolarsResult<DataFrame> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return DataFrame::new(Vec::new());
    };
    let body: Vec<&[Data]> = rows.collect();

    let columns = header
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let name = match cell {
                Data::Empty => format!("column_{idx}"),
                other => other.to_string(),
            };
            let cells: Vec<&Data> = body
                .iter()
                .map(|row| row.get(idx).unwrap_or(&EMPTY_CELL))
                .collect();
            typed_column(&name, &cells)
        })
        .collect();

    DataFrame::new(columns)
}

fn typed_column(name: &str, cells: &[&Data]) -> Column {
    let mut present = cells.iter().filter(|c| !matches!(c, Data::Empty));

    if present.clone().all(|c| matches!(c, Data::Int(_))) {
        let values: Vec<Option<i64>> = cells
            .iter()
            .map(|c| match c {
                Data::Int(v) => Some(*v),
                _ => None,
            })
            .collect();
        Column::new(name.into(), values)
    } else if present
        .clone()
        .all(|c| matches!(c, Data::Int(_) | Data::Float(_)))
    {
        let values: Vec<Option<f64>> = cells
            .iter()
            .map(|c| match c {
                Data::Int(v) => Some(*v as f64),
                Data::Float(v) => Some(*v),
                _ => None,
            })
            .collect();
        Column::new(name.into(), values)
    } else if present.all(|c| matches!(c, Data::Bool(_))) {
        let values: Vec<Option<bool>> = cells
            .iter()
            .map(|c| match c {
                Data::Bool(v) => Some(*v),
                _ => None,
            })
            .collect();
        Column::new(name.into(), values)
    } else {
        let values: Vec<Option<String>> = cells
            .iter()
            .map(|c| match c {
                Data::Empty => None,
                other => Some(other.to_string()),
            })
            .collect();
        Column::new(name.into(), values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(rows: Vec<Vec<Data>>) -> Range<Data> {
        let height = rows.len() as u32;
        let width = rows.iter().map(Vec::len).max().unwrap_or(0) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in rows.into_iter().enumerate() {
            for (c, cell) in row.into_iter().enumerate() {
                range.set_value((r as u32, c as u32), cell);
            }
        }
        range
    }

    fn header() -> Vec<Data> {
        ["Year", "Revenue", "Expenses", "Net Profit", "Assets", "Liabilities"]
            .into_iter()
            .map(|s| Data::String(s.to_string()))
            .collect()
    }

    #[test]
    fn test_numeric_sheet() {
        let sheet = range(vec![
            header(),
            vec![
                Data::Float(2020.0),
                Data::Float(100.0),
                Data::Float(90.0),
                Data::Float(10.0),
                Data::Int(500),
                Data::Int(200),
            ],
        ]);

        let df = frame_from_range(&sheet).unwrap();

        assert_eq!(df.height(), 1);
        assert_eq!(df.column("Year").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("Assets").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("Net Profit").unwrap().f64().unwrap().get(0), Some(10.0));

        crate::validate::validate_columns(&df, "acme.xlsx").unwrap();
        crate::validate::validate_data(&df, "acme.xlsx").unwrap();
        let rows = crate::validate::records_from_frame(&df, "acme.xlsx").unwrap();
        assert_eq!(rows[0].year, 2020.0);
        assert_eq!(rows[0].assets, 500.0);
    }

    #[test]
    fn test_empty_cells_become_nulls() {
        let sheet = range(vec![
            header(),
            vec![
                Data::Float(2020.0),
                Data::Empty,
                Data::Float(90.0),
                Data::Float(10.0),
                Data::Float(500.0),
                Data::Float(200.0),
            ],
        ]);

        let df = frame_from_range(&sheet).unwrap();
        assert_eq!(df.column("Revenue").unwrap().null_count(), 1);

        let err = crate::validate::validate_data(&df, "acme.xlsx").unwrap_err();
        assert_eq!(err.to_string(), "File \"acme.xlsx\" contains missing values");
    }

    #[test]
    fn test_column_types() {
        let sheet = range(vec![
            vec![
                Data::String("Flag".to_string()),
                Data::String("Label".to_string()),
            ],
            vec![Data::Bool(true), Data::String("FY20".to_string())],
            vec![Data::Bool(false), Data::Float(2021.0)],
        ]);

        let df = frame_from_range(&sheet).unwrap();
        assert_eq!(df.column("Flag").unwrap().dtype(), &DataType::Boolean);
        assert_eq!(df.column("Label").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_unreadable_workbook() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, "not a zip archive").unwrap();

        let err = read_workbook(&path, "broken.xlsx").unwrap_err();
        assert!(matches!(err, DataError::Workbook { .. }));
        assert!(err.to_string().contains("broken.xlsx"));
    }
}
