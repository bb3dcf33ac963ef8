//! Cyclewise: dataset preprocessing and menstrual-health suggestions.
//!
//! An uploaded CSV is parsed into typed columns, missing cells are imputed
//! (mean for numeric columns, most frequent value otherwise) and numeric
//! columns are z-score normalized. Independently, five user metrics are run
//! through fixed threshold rules to produce text suggestions.
//!
//! # Example
//!
//! ```no_run
//! use cyclewise::{SessionContext, UserMetrics};
//!
//! let mut session = SessionContext::new();
//! session.upload_file("cycles.csv").unwrap();
//!
//! let metrics = UserMetrics::new(28, 5, 6, 8, 2).unwrap();
//! print!("{}", session.respond(&metrics));
//! ```

pub mod error;
pub mod input;
pub mod preprocess;
pub mod schema;
pub mod session;
pub mod suggestion;

mod cyclewise;

pub use crate::cyclewise::{Cyclewise, CyclewiseConfig, DatasetSummary, LoadedDataset};
pub use error::{CyclewiseError, Result};
pub use input::{Column, ColumnValues, Parser, ParserConfig, RawDataset, SourceMetadata};
pub use preprocess::{
    DataPreprocessor, DegenerateColumnWarning, PreprocessConfig, ProcessedDataset,
};
pub use schema::{ColumnClassification, ColumnKind, ColumnReport};
pub use session::{Rendered, SessionContext};
pub use suggestion::{
    MetricRange, Suggestion, SuggestionEngine, SuggestionKind, SuggestionList, UserMetrics,
};
