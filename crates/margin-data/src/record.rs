//! Typed company records.
//!
//! A [`CompanyRecordSet`] holds the yearly rows of one company in source row
//! order. [`CompanyData`] keeps every loaded company in insertion order and
//! guarantees that company names are unique.

use crate::error::{DataError, Result};
use serde::{Deserialize, Serialize};

/// Column names every source file must provide, in check order.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Year",
    "Revenue",
    "Expenses",
    "Net Profit",
    "Assets",
    "Liabilities",
];

/// One reporting period for one company.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    /// Reporting year. Numeric but not required to be integral.
    pub year: f64,
    /// Revenue for the period.
    pub revenue: f64,
    /// Expenses for the period.
    pub expenses: f64,
    /// Net profit for the period (may be negative).
    pub net_profit: f64,
    /// Total assets.
    pub assets: f64,
    /// Total liabilities.
    pub liabilities: f64,
}

impl YearRecord {
    /// Net profit divided by revenue.
    ///
    /// Zero revenue is not guarded: the result is infinite or NaN.
    pub fn profit_margin(&self) -> f64 {
        self.net_profit / self.revenue
    }

    /// Whether the period closed with a loss.
    pub fn is_loss(&self) -> bool {
        self.net_profit < 0.0
    }
}

/// All yearly rows of a single company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecordSet {
    /// Company identifier, taken from the source file stem.
    pub company_name: String,
    /// Rows in source order.
    pub rows: Vec<YearRecord>,
}

impl CompanyRecordSet {
    /// Create a record set. Fails if `rows` is empty.
    pub fn new(company_name: impl Into<String>, rows: Vec<YearRecord>) -> Result<Self> {
        let company_name = company_name.into();
        if rows.is_empty() {
            return Err(DataError::Config(format!(
                "Company \"{company_name}\" has no rows"
            )));
        }
        Ok(Self { company_name, rows })
    }

    /// Years in row order.
    pub fn years(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.year).collect()
    }

    /// Revenues in row order.
    pub fn revenues(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.revenue).collect()
    }

    /// Net profits in row order.
    pub fn net_profits(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.net_profit).collect()
    }

    /// The first row with a negative net profit, if any.
    pub fn first_loss(&self) -> Option<&YearRecord> {
        self.rows.iter().find(|r| r.is_loss())
    }
}

/// Loaded companies in insertion order, keyed by unique name.
///
/// Serialises as a list of record sets. Deserialising goes through
/// [`CompanyData::insert`], so duplicate names are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<CompanyRecordSet>", try_from = "Vec<CompanyRecordSet>")]
pub struct CompanyData {
    companies: Vec<CompanyRecordSet>,
}

impl CompanyData {
    /// Create an empty collection.
    pub const fn new() -> Self {
        Self {
            companies: Vec::new(),
        }
    }

    /// Append a company. Fails if the name is already present or the company
    /// has no rows.
    pub fn insert(&mut self, company: CompanyRecordSet) -> Result<()> {
        if company.rows.is_empty() {
            return Err(DataError::Config(format!(
                "Company \"{}\" has no rows",
                company.company_name
            )));
        }
        if self.get(&company.company_name).is_some() {
            return Err(DataError::Config(format!(
                "Duplicate company name \"{}\"",
                company.company_name
            )));
        }
        self.companies.push(company);
        Ok(())
    }

    /// Look up a company by name.
    pub fn get(&self, name: &str) -> Option<&CompanyRecordSet> {
        self.companies.iter().find(|c| c.company_name == name)
    }

    /// Number of companies.
    pub const fn len(&self) -> usize {
        self.companies.len()
    }

    /// Whether no company has been loaded.
    pub const fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Iterate companies in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CompanyRecordSet> {
        self.companies.iter()
    }

    /// Company names in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.companies
            .iter()
            .map(|c| c.company_name.clone())
            .collect()
    }
}

impl TryFrom<Vec<CompanyRecordSet>> for CompanyData {
    type Error = DataError;

    fn try_from(companies: Vec<CompanyRecordSet>) -> Result<Self> {
        let mut data = Self::new();
        for company in companies {
            data.insert(company)?;
        }
        Ok(data)
    }
}

impl From<CompanyData> for Vec<CompanyRecordSet> {
    fn from(data: CompanyData) -> Self {
        data.companies
    }
}

impl<'a> IntoIterator for &'a CompanyData {
    type Item = &'a CompanyRecordSet;
    type IntoIter = std::slice::Iter<'a, CompanyRecordSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
