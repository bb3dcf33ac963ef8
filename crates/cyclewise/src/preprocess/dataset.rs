//! The cleaned, normalized output of preprocessing.

use std::fmt;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schema::{ColumnClassification, ColumnReport};

/// Why a column could not be rescaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateReason {
    /// All values are equal, so the standard deviation is zero.
    ZeroVariance,
    /// The column has no present values to derive a statistic from.
    NoValues,
    /// Mean or standard deviation is not a finite number.
    NonFiniteStatistics,
}

/// Raised when a column is zero-filled instead of rescaled.
///
/// This never aborts preprocessing; it travels with the processed dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegenerateColumnWarning {
    pub column: String,
    pub reason: DegenerateReason,
}

impl fmt::Display for DegenerateColumnWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            DegenerateReason::ZeroVariance => write!(
                f,
                "Column '{}' has zero variance; its normalized values were set to 0",
                self.column
            ),
            DegenerateReason::NonFiniteStatistics => write!(
                f,
                "Column '{}' has non-finite statistics; its normalized values were set to 0",
                self.column
            ),
            DegenerateReason::NoValues => write!(
                f,
                "Column '{}' has no values; it was filled with a placeholder",
                self.column
            ),
        }
    }
}

/// Complete cells of one processed column.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessedValues {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

impl ProcessedValues {
    pub fn len(&self) -> usize {
        match self {
            ProcessedValues::Numeric(values) => values.len(),
            ProcessedValues::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Numeric values, if this is a numeric column.
    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            ProcessedValues::Numeric(values) => Some(values),
            ProcessedValues::Text(_) => None,
        }
    }

    /// Text values, if this is a non-numeric column.
    pub fn as_text(&self) -> Option<&[String]> {
        match self {
            ProcessedValues::Numeric(_) => None,
            ProcessedValues::Text(values) => Some(values),
        }
    }

    fn display_cell(&self, row: usize) -> String {
        match self {
            ProcessedValues::Numeric(values) => {
                values.get(row).map(|v| v.to_string()).unwrap_or_default()
            }
            ProcessedValues::Text(values) => values.get(row).cloned().unwrap_or_default(),
        }
    }
}

/// A named processed column.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedColumn {
    pub name: String,
    pub values: ProcessedValues,
}

/// Header plus the first rows of a processed dataset, rendered as text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPreview {
    /// Column headers.
    pub headers: Vec<String>,
    /// Data rows (first N rows).
    pub rows: Vec<Vec<String>>,
    /// Total row count in the dataset.
    pub total_rows: usize,
    /// Whether the data was truncated.
    pub truncated: bool,
}

/// Dataset with imputed and z-score normalized columns.
///
/// Has the same columns, in the same order, and the same row count as the
/// raw dataset it was produced from. No cell is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedDataset {
    columns: Vec<ProcessedColumn>,
    row_count: usize,
    classification: ColumnClassification,
    reports: Vec<ColumnReport>,
    warnings: Vec<DegenerateColumnWarning>,
}

impl ProcessedDataset {
    pub(crate) fn new(
        columns: Vec<ProcessedColumn>,
        row_count: usize,
        classification: ColumnClassification,
        reports: Vec<ColumnReport>,
        warnings: Vec<DegenerateColumnWarning>,
    ) -> Self {
        Self {
            columns,
            row_count,
            classification,
            reports,
            warnings,
        }
    }

    pub fn columns(&self) -> &[ProcessedColumn] {
        &self.columns
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&ProcessedColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// The classification computed while processing.
    pub fn classification(&self) -> &ColumnClassification {
        &self.classification
    }

    /// One report per column, in header order.
    pub fn report(&self) -> &[ColumnReport] {
        &self.reports
    }

    /// Degenerate-column signals raised while processing.
    pub fn warnings(&self) -> &[DegenerateColumnWarning] {
        &self.warnings
    }

    /// Total number of cells that were filled in.
    pub fn imputed_count(&self) -> usize {
        self.reports.iter().map(|r| r.imputed).sum()
    }

    /// Header and the first `limit` rows rendered as text.
    pub fn preview(&self, limit: usize) -> DataPreview {
        let shown = self.row_count.min(limit);
        let rows = (0..shown)
            .map(|row| self.columns.iter().map(|c| c.values.display_cell(row)).collect())
            .collect();

        DataPreview {
            headers: self.columns.iter().map(|c| c.name.clone()).collect(),
            rows,
            total_rows: self.row_count,
            truncated: self.row_count > limit,
        }
    }

    /// Write the processed data as comma-separated values.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);

        writer.write_record(self.columns.iter().map(|c| c.name.as_str()))?;
        for row in 0..self.row_count {
            writer.write_record(self.columns.iter().map(|c| c.values.display_cell(row)))?;
        }

        writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}
