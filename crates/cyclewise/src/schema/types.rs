//! Column classification types.

use serde::{Deserialize, Serialize};

use crate::input::RawDataset;

/// Storage kind of a column, decided by inspecting its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Every present value is a finite number.
    Numeric,
    /// Anything else (text, mixed, booleans).
    NonNumeric,
}

impl ColumnKind {
    /// Returns true if this kind is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Numeric)
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::NonNumeric => "non-numeric",
        }
    }
}

/// Partition of a dataset's columns into numeric and non-numeric names.
///
/// Every column lands in exactly one list; both lists keep header order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnClassification {
    pub numeric: Vec<String>,
    pub non_numeric: Vec<String>,
}

impl ColumnClassification {
    /// Classify the columns of a dataset.
    pub fn of(dataset: &RawDataset) -> Self {
        let mut classification = Self::default();

        for column in &dataset.columns {
            match column.values.kind() {
                ColumnKind::Numeric => classification.numeric.push(column.name.clone()),
                ColumnKind::NonNumeric => classification.non_numeric.push(column.name.clone()),
            }
        }

        classification
    }

    /// Total number of classified columns.
    pub fn len(&self) -> usize {
        self.numeric.len() + self.non_numeric.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Column;

    #[test]
    fn test_every_column_in_exactly_one_partition() {
        let dataset = RawDataset::from_columns(vec![
            Column::numeric("cycle_length", vec![Some(28.0), None]),
            Column::text("flow", vec![Some("light"), Some("heavy")]),
            Column::numeric("sleep", vec![Some(7.0), Some(8.0)]),
        ])
        .unwrap();

        let classification = dataset.classify();
        assert_eq!(classification.numeric, vec!["cycle_length", "sleep"]);
        assert_eq!(classification.non_numeric, vec!["flow"]);
        assert_eq!(classification.len(), dataset.column_count());
    }
}
