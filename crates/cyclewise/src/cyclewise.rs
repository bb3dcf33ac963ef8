//! Main Cyclewise struct and public API.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::input::{Parser, ParserConfig, RawDataset, SourceMetadata};
use crate::preprocess::{DataPreprocessor, PreprocessConfig, ProcessedDataset};
use crate::schema::ColumnReport;

/// Configuration for loading and preprocessing.
#[derive(Debug, Clone, Default)]
pub struct CyclewiseConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Preprocessing configuration.
    pub preprocess: PreprocessConfig,
}

/// A parsed and preprocessed upload.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// The dataset after imputation and normalization.
    pub processed: ProcessedDataset,
}

impl LoadedDataset {
    /// Summarize what preprocessing did.
    pub fn summary(&self) -> DatasetSummary {
        let classification = self.processed.classification();
        DatasetSummary {
            file: self.source.file.clone(),
            format: self.source.format.clone(),
            rows: self.processed.row_count(),
            columns: self.processed.column_count(),
            numeric_columns: classification.numeric.clone(),
            non_numeric_columns: classification.non_numeric.clone(),
            imputed_cells: self.processed.imputed_count(),
            warnings: self.processed.warnings().iter().map(|w| w.to_string()).collect(),
            report: self.processed.report().to_vec(),
        }
    }
}

/// Summary of a loaded dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub file: String,
    pub format: String,
    pub rows: usize,
    pub columns: usize,
    pub numeric_columns: Vec<String>,
    pub non_numeric_columns: Vec<String>,
    /// Number of cells filled by imputation.
    pub imputed_cells: usize,
    /// Human-readable degenerate-column warnings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    pub report: Vec<ColumnReport>,
}

/// Loads uploads and runs them through preprocessing.
#[derive(Debug, Clone)]
pub struct Cyclewise {
    parser: Parser,
    preprocessor: DataPreprocessor,
}

impl Cyclewise {
    /// Create a new instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(CyclewiseConfig::default())
    }

    /// Create an instance with custom configuration.
    pub fn with_config(config: CyclewiseConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser),
            preprocessor: DataPreprocessor::with_config(config.preprocess),
        }
    }

    /// Parse and preprocess a file from disk.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<LoadedDataset> {
        let (raw, source) = self.parser.parse_file(path)?;
        self.finish(raw, source)
    }

    /// Parse and preprocess an uploaded file held in memory.
    pub fn load_bytes(&self, bytes: &[u8], name: impl Into<String>) -> Result<LoadedDataset> {
        let (raw, source) = self.parser.parse_bytes(bytes, name)?;
        self.finish(raw, source)
    }

    /// Preprocess an already-parsed dataset.
    pub fn preprocess(&self, raw: &RawDataset) -> Result<ProcessedDataset> {
        self.preprocessor.preprocess(raw)
    }

    fn finish(&self, raw: RawDataset, source: SourceMetadata) -> Result<LoadedDataset> {
        let processed = self.preprocessor.preprocess(&raw)?;

        info!(
            file = %source.file,
            rows = processed.row_count(),
            columns = processed.column_count(),
            imputed = processed.imputed_count(),
            degenerate = processed.warnings().len(),
            "loaded dataset"
        );

        Ok(LoadedDataset { source, processed })
    }
}

impl Default for Cyclewise {
    fn default() -> Self {
        Self::new()
    }
}
