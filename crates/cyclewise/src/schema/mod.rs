//! Column classification and preprocessing report types.

mod column;
mod types;

pub use column::{ColumnReport, NumericStatistics};
pub use types::{ColumnClassification, ColumnKind};
