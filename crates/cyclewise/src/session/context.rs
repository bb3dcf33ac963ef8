//! Per-session state shared by preprocessing and suggestions.

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::cyclewise::{Cyclewise, CyclewiseConfig, LoadedDataset};
use crate::error::{CyclewiseError, Result};
use crate::suggestion::{SuggestionEngine, SuggestionList, UserMetrics};

use super::render::Rendered;

/// State for one user session, from first page load to reset.
///
/// Holds at most one loaded dataset. A failed upload leaves the session
/// without data, so later requests see [`CyclewiseError::MissingInput`].
pub struct SessionContext {
    engine: Cyclewise,
    dataset: Option<LoadedDataset>,
    started_at: DateTime<Utc>,
}

impl SessionContext {
    /// Start a session with default configuration.
    pub fn new() -> Self {
        Self::with_config(CyclewiseConfig::default())
    }

    /// Start a session with custom configuration.
    pub fn with_config(config: CyclewiseConfig) -> Self {
        Self {
            engine: Cyclewise::with_config(config),
            dataset: None,
            started_at: Utc::now(),
        }
    }

    /// When this session started (or was last reset).
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The dataset loaded in this session, if any.
    pub fn dataset(&self) -> Option<&LoadedDataset> {
        self.dataset.as_ref()
    }

    pub fn has_dataset(&self) -> bool {
        self.dataset.is_some()
    }

    /// The loader this session parses uploads with.
    pub fn engine(&self) -> &Cyclewise {
        &self.engine
    }

    /// Replace the session's dataset with an uploaded file.
    pub fn upload(&mut self, bytes: &[u8], name: impl Into<String>) -> Result<&LoadedDataset> {
        self.dataset = None;
        let loaded = self.engine.load_bytes(bytes, name);
        self.store(loaded)
    }

    /// Replace the session's dataset with a file from disk.
    pub fn upload_file(&mut self, path: impl AsRef<Path>) -> Result<&LoadedDataset> {
        self.dataset = None;
        let loaded = self.engine.load(path);
        self.store(loaded)
    }

    /// Store the outcome of an upload loaded elsewhere, such as on a
    /// worker thread. An error clears the session's dataset.
    pub fn store(&mut self, loaded: Result<LoadedDataset>) -> Result<&LoadedDataset> {
        match loaded {
            Ok(loaded) => Ok(self.dataset.insert(loaded)),
            Err(e) => {
                self.dataset = None;
                Err(e)
            }
        }
    }

    /// Compute suggestions for `metrics`.
    ///
    /// Fails with [`CyclewiseError::MissingInput`] until a dataset is loaded.
    pub fn suggest(&self, metrics: &UserMetrics) -> Result<SuggestionList> {
        let loaded = self.dataset.as_ref().ok_or(CyclewiseError::MissingInput)?;
        debug!(?metrics, "evaluating suggestion rules");
        Ok(SuggestionEngine::suggest(metrics, &loaded.processed))
    }

    /// Compute suggestions and render them for display.
    pub fn respond(&self, metrics: &UserMetrics) -> Rendered {
        Rendered::from_result(self.suggest(metrics))
    }

    /// Drop all session state and start over.
    pub fn reset(&mut self) {
        info!("session reset");
        self.dataset = None;
        self.started_at = Utc::now();
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
