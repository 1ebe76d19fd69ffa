//! Integration tests for loading company spreadsheets from disk.

use approx::assert_relative_eq;
use margin_data::{DataError, ErrorKind, load_company_data};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HEADER: &str = "Year,Revenue,Expenses,Net Profit,Assets,Liabilities";

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn valid_rows() -> String {
    format!("{HEADER}\n2020,100,90,10,500,200\n2021,200,170,30,550,210\n")
}

#[test]
fn test_loads_companies_in_file_name_order() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Zenco.csv", &valid_rows());
    write(
        dir.path(),
        "Acme.csv",
        &format!("{HEADER}\n2020,50,55,-5,300,100\n2021,60,55,5,320,90\n"),
    );

    let data = load_company_data(dir.path()).unwrap();

    assert_eq!(data.names(), vec!["Acme".to_string(), "Zenco".to_string()]);
    let acme = data.get("Acme").unwrap();
    assert_eq!(acme.rows.len(), 2);
    assert_relative_eq!(acme.rows[0].net_profit, -5.0);
    assert_relative_eq!(acme.rows[1].year, 2021.0);
}

#[test]
fn test_non_spreadsheet_files_and_subdirectories_are_ignored() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "A.csv", &valid_rows());
    write(dir.path(), "B.csv", &valid_rows());
    write(dir.path(), "README.txt", "not a spreadsheet");
    fs::create_dir(dir.path().join("archive.csv")).unwrap();

    let data = load_company_data(dir.path()).unwrap();
    assert_eq!(data.len(), 2);
}

#[test]
fn test_extra_columns_are_allowed() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "A.csv", &valid_rows());
    write(
        dir.path(),
        "B.csv",
        &format!("{HEADER},Employees\n2020,100,90,10,500,200,12\n"),
    );

    let data = load_company_data(dir.path()).unwrap();
    assert_eq!(data.get("B").unwrap().rows.len(), 1);
}

#[test]
fn test_missing_revenue_column_is_schema_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "A.csv", &valid_rows());
    write(
        dir.path(),
        "Broken.csv",
        "Year,Expenses,Net Profit,Assets,Liabilities\n2020,90,10,500,200\n",
    );

    let err = load_company_data(dir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);
    let msg = err.to_string();
    assert!(msg.contains("Revenue"), "{msg}");
    assert!(msg.contains("Broken.csv"), "{msg}");
}

#[test]
fn test_null_cell_is_data_quality_error_before_year_check() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "A.csv", &valid_rows());
    write(
        dir.path(),
        "Gappy.csv",
        &format!("{HEADER}\nFY20,100,,10,500,200\nFY21,200,170,30,550,210\n"),
    );

    let err = load_company_data(dir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DataQuality);
    assert!(err.to_string().contains("missing values"));
    assert!(err.to_string().contains("Gappy.csv"));
}

#[test]
fn test_non_numeric_year_is_data_quality_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "A.csv", &valid_rows());
    write(
        dir.path(),
        "Labels.csv",
        &format!("{HEADER}\nFY20,100,90,10,500,200\n"),
    );

    let err = load_company_data(dir.path()).unwrap_err();
    assert!(matches!(err, DataError::DataQuality { .. }));
    assert!(err.to_string().contains("non-numeric Year"));
}

#[test]
fn test_single_company_is_config_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Only.csv", &valid_rows());

    let err = load_company_data(dir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_empty_directory_is_config_error() {
    let dir = TempDir::new().unwrap();

    let err = load_company_data(dir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_file_path_is_config_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "A.csv", &valid_rows());

    let err = load_company_data(dir.path().join("A.csv")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[cfg(target_os = "linux")]
#[test]
fn test_duplicate_company_name_is_config_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Acme.csv", &valid_rows());
    write(dir.path(), "Acme.CSV", &valid_rows());

    let err = load_company_data(dir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
    assert!(err.to_string().contains("Duplicate company name \"Acme\""));
}

#[test]
fn test_header_only_file_is_data_quality_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "A.csv", &valid_rows());
    write(dir.path(), "B.csv", &format!("{HEADER}\n"));

    let err = load_company_data(dir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DataQuality);
    assert_eq!(err.to_string(), "File \"B.csv\" contains no data rows");
}

#[test]
fn test_boolean_revenue_is_data_quality_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "A.csv", &valid_rows());
    write(
        dir.path(),
        "B.csv",
        &format!("{HEADER}\n2020,true,90,10,500,200\n2021,false,170,30,550,210\n"),
    );

    let err = load_company_data(dir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DataQuality);
    assert_eq!(
        err.to_string(),
        "File \"B.csv\" has non-numeric Revenue values"
    );
}

#[test]
fn test_workbook_and_csv_with_same_stem_collide() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Acme.csv", &valid_rows());
    write(dir.path(), "Acme.xlsx", "placeholder");

    let err = load_company_data(dir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
    assert!(err.to_string().contains("Acme.xlsx"));
}

#[test]
fn test_unreadable_workbook_fails_the_load() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "A.csv", &valid_rows());
    write(dir.path(), "B.xlsx", "not a zip archive");

    let err = load_company_data(dir.path()).unwrap_err();
    assert!(matches!(err, DataError::Workbook { .. }));
    assert_eq!(err.kind(), ErrorKind::Other);
}
