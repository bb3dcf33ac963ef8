//! Mean/mode imputation followed by z-score normalization.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::{CyclewiseError, Result};
use crate::input::{ColumnValues, RawDataset};
use crate::schema::{ColumnKind, ColumnReport, NumericStatistics};

use super::dataset::{
    DegenerateColumnWarning, DegenerateReason, ProcessedColumn, ProcessedDataset, ProcessedValues,
};

/// Preprocessing configuration.
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    /// Standard deviations at or below this are treated as zero, in addition
    /// to spreads within the rounding error of the column mean.
    pub degenerate_epsilon: f64,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            degenerate_epsilon: 1e-12,
        }
    }
}

/// Turns a raw dataset into a complete, normalized one.
#[derive(Debug, Clone)]
pub struct DataPreprocessor {
    config: PreprocessConfig,
}

impl DataPreprocessor {
    /// Create a preprocessor with default configuration.
    pub fn new() -> Self {
        Self::with_config(PreprocessConfig::default())
    }

    /// Create a preprocessor with custom configuration.
    pub fn with_config(config: PreprocessConfig) -> Self {
        Self { config }
    }

    /// Impute missing cells and normalize numeric columns.
    ///
    /// The input is left untouched. Numeric columns get their mean, other
    /// columns their most frequent value (earliest row wins a tie). Numeric
    /// columns are then rescaled with population statistics; a column with no
    /// spread becomes all zeros and yields a [`DegenerateColumnWarning`].
    pub fn preprocess(&self, dataset: &RawDataset) -> Result<ProcessedDataset> {
        if dataset.row_count() == 0 {
            return Err(CyclewiseError::EmptyDataset);
        }

        let classification = dataset.classify();
        debug!(
            numeric = classification.numeric.len(),
            non_numeric = classification.non_numeric.len(),
            rows = dataset.row_count(),
            missing = dataset.missing_count(),
            "classified columns"
        );

        let mut columns = Vec::with_capacity(dataset.column_count());
        let mut reports = Vec::with_capacity(dataset.column_count());
        let mut warnings = Vec::new();

        for column in &dataset.columns {
            let (values, report, warning) = match &column.values {
                ColumnValues::Numeric(values) => self.process_numeric(&column.name, values),
                ColumnValues::Text(values) => process_text(&column.name, values),
            };

            if let Some(warning) = warning {
                warn!(column = %warning.column, reason = ?warning.reason, "{}", warning);
                warnings.push(warning);
            }

            columns.push(ProcessedColumn {
                name: column.name.clone(),
                values,
            });
            reports.push(report);
        }

        Ok(ProcessedDataset::new(
            columns,
            dataset.row_count(),
            classification,
            reports,
            warnings,
        ))
    }

    fn process_numeric(
        &self,
        name: &str,
        values: &[Option<f64>],
    ) -> (ProcessedValues, ColumnReport, Option<DegenerateColumnWarning>) {
        let (filled, imputed, mean) = impute_mean(values);

        let mut report = ColumnReport {
            name: name.to_string(),
            kind: ColumnKind::Numeric,
            imputed,
            fill_value: (imputed > 0).then(|| mean.unwrap_or(0.0).to_string()),
            scaling: None,
            degenerate: false,
        };

        if mean.is_none() {
            report.degenerate = true;
            let warning = DegenerateColumnWarning {
                column: name.to_string(),
                reason: DegenerateReason::NoValues,
            };
            return (ProcessedValues::Numeric(filled), report, Some(warning));
        }

        let Some(stats) = NumericStatistics::from_values(&filled) else {
            return (ProcessedValues::Numeric(filled), report, None);
        };
        report.scaling = Some(stats);

        let reason = if !stats.is_finite() {
            Some(DegenerateReason::NonFiniteStatistics)
        } else if stats.is_constant(&filled, self.config.degenerate_epsilon) {
            Some(DegenerateReason::ZeroVariance)
        } else {
            None
        };

        if let Some(reason) = reason {
            report.degenerate = true;
            let warning = DegenerateColumnWarning {
                column: name.to_string(),
                reason,
            };
            let zeros = vec![0.0; filled.len()];
            return (ProcessedValues::Numeric(zeros), report, Some(warning));
        }

        let scaled = filled.iter().map(|v| stats.z_score(*v)).collect();
        (ProcessedValues::Numeric(scaled), report, None)
    }
}

impl Default for DataPreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

fn process_text(
    name: &str,
    values: &[Option<String>],
) -> (ProcessedValues, ColumnReport, Option<DegenerateColumnWarning>) {
    let mode = most_frequent(values);
    let imputed = values.iter().filter(|v| v.is_none()).count();
    let fill = mode.clone().unwrap_or_default();

    let filled = values
        .iter()
        .map(|v| v.clone().unwrap_or_else(|| fill.clone()))
        .collect();

    let warning = mode.is_none().then(|| DegenerateColumnWarning {
        column: name.to_string(),
        reason: DegenerateReason::NoValues,
    });

    let report = ColumnReport {
        name: name.to_string(),
        kind: ColumnKind::NonNumeric,
        imputed,
        fill_value: (imputed > 0).then_some(fill),
        scaling: None,
        degenerate: warning.is_some(),
    };

    (ProcessedValues::Text(filled), report, warning)
}

/// Fill missing cells with the mean of the present ones.
///
/// Returns the filled values, how many were filled, and the mean. When no
/// value is present the mean is `None` and every cell becomes `0.0`.
fn impute_mean(values: &[Option<f64>]) -> (Vec<f64>, usize, Option<f64>) {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    let imputed = values.len() - present.len();
    let mean = NumericStatistics::mean_of(&present);

    let fill = mean.unwrap_or(0.0);
    let filled = values.iter().map(|v| v.unwrap_or(fill)).collect();

    (filled, imputed, mean)
}

/// Most frequent present value; on a tie the one seen first wins.
fn most_frequent(values: &[Option<String>]) -> Option<String> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for value in values.iter().flatten() {
        *counts.entry(value.as_str()).or_insert(0) += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }

    best.map(|(value, _)| value.to_string())
}
