//! Directory loading for company spreadsheets.
//!
//! Every `.csv` or `.xlsx` file in the input directory is one company. Files are read in
//! ascending file-name order, validated, and collected into [`CompanyData`].
//! Any failure aborts the whole load.

use crate::error::{DataError, Result};
use crate::record::{CompanyData, CompanyRecordSet};
use crate::validate::{records_from_frame, validate_columns, validate_data};
use crate::workbook::read_workbook;
use polars::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Comma-separated text extension.
pub const CSV_EXTENSION: &str = "csv";

/// Excel workbook extension.
pub const XLSX_EXTENSION: &str = "xlsx";

/// Minimum number of companies needed for a comparison.
pub const MIN_COMPANIES: usize = 2;

/// Load and validate every spreadsheet in `folder`.
///
/// # Errors
/// * [`DataError::Config`] if `folder` is not a directory, two files map to the
///   same company name, or fewer than [`MIN_COMPANIES`] companies are loaded
/// * [`DataError::Schema`] if a file lacks a required column
/// * [`DataError::DataQuality`] if a file has missing or non-numeric values
pub fn load_company_data(folder: impl AsRef<Path>) -> Result<CompanyData> {
    let folder = folder.as_ref();
    if !folder.is_dir() {
        return Err(DataError::Config(format!(
            "Provided path is not a valid directory: {}",
            folder.display()
        )));
    }

    let mut data = CompanyData::new();

    for path in discover_spreadsheets(folder)? {
        let name = company_name(&path)?;
        if data.get(&name).is_some() {
            return Err(DataError::Config(format!(
                "Duplicate company name \"{name}\" from file \"{}\"",
                file_label(&path)
            )));
        }

        let company = load_company(&path)?;
        info!(company = %company.company_name, rows = company.rows.len(), "Loaded company");
        data.insert(company)?;
    }

    if data.len() < MIN_COMPANIES {
        return Err(DataError::Config(format!(
            "At least {MIN_COMPANIES} company spreadsheet files are required, found {}",
            data.len()
        )));
    }

    Ok(data)
}

/// List spreadsheet files in `folder`, sorted by file name.
///
/// Subdirectories and files with other extensions are skipped.
pub fn discover_spreadsheets(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if is_spreadsheet(&path) {
            debug!(file = %path.display(), "Discovered spreadsheet");
            files.push(path);
        } else {
            debug!(file = %path.display(), "Skipping non-spreadsheet file");
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Whether `path` carries a spreadsheet extension (case-insensitive).
pub fn is_spreadsheet(path: &Path) -> bool {
    has_extension(path, CSV_EXTENSION) || has_extension(path, XLSX_EXTENSION)
}

fn has_extension(path: &Path, expected: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(expected))
}

/// Parse, validate and convert a single spreadsheet.
pub fn load_company(path: &Path) -> Result<CompanyRecordSet> {
    let file = file_label(path);
    let df = read_spreadsheet(path)?;

    validate_columns(&df, &file)?;
    validate_data(&df, &file)?;

    let rows = records_from_frame(&df, &file)?;
    CompanyRecordSet::new(company_name(path)?, rows)
}

/// Read a spreadsheet into a DataFrame, inferring column types from all rows.
///
/// Workbooks are read from their first worksheet; anything else is parsed as
/// CSV with a header row.
pub fn read_spreadsheet(path: &Path) -> Result<DataFrame> {
    if has_extension(path, XLSX_EXTENSION) {
        return read_workbook(path, &file_label(path));
    }

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|source| DataError::Parse {
            file: file_label(path),
            source,
        })
}

fn company_name(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            DataError::Config(format!("Cannot derive company name from {}", path.display()))
        })
}

fn file_label(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
