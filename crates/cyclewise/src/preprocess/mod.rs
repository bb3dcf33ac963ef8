//! Imputation and normalization of uploaded datasets.

mod dataset;
mod engine;

pub use dataset::{
    DataPreview, DegenerateColumnWarning, DegenerateReason, ProcessedColumn, ProcessedDataset,
    ProcessedValues,
};
pub use engine::{DataPreprocessor, PreprocessConfig};
