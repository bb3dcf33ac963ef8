//! Upload and data preview handlers.

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::{info, warn};

use cyclewise::preprocess::DataPreview;
use cyclewise::{CyclewiseError, DatasetSummary};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Default number of rows to return in a preview.
const DEFAULT_PREVIEW_ROWS: usize = 100;

/// Name used when the client does not send one.
const DEFAULT_UPLOAD_NAME: &str = "upload.csv";

#[derive(Debug, Deserialize)]
pub struct UploadParams {
    pub filename: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    pub limit: Option<usize>,
}

/// Replace the session dataset with the request body.
///
/// Parsing runs on the blocking pool; the session lock is held only to
/// store the result. A failed upload leaves the session without data.
pub async fn upload_dataset(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Result<Json<DatasetSummary>, ApiError> {
    if body.is_empty() {
        state.session.write().await.reset();
        return Err(CyclewiseError::MissingInput.into());
    }

    let name = params
        .filename
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_UPLOAD_NAME.to_string());

    let engine = state.session.read().await.engine().clone();
    let loaded = tokio::task::spawn_blocking(move || engine.load_bytes(&body, name))
        .await
        .map_err(|e| ApiError::Internal(format!("upload task failed: {}", e)))?;

    let mut session = state.session.write().await;
    match session.store(loaded) {
        Ok(loaded) => {
            info!(file = %loaded.source.file, hash = %loaded.source.hash, "upload accepted");
            Ok(Json(loaded.summary()))
        }
        Err(e) => {
            warn!(error = %e, "upload rejected");
            Err(e.into())
        }
    }
}

/// Summary of the current dataset.
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<DatasetSummary>, ApiError> {
    let session = state.session.read().await;
    let loaded = session.dataset().ok_or(CyclewiseError::MissingInput)?;
    Ok(Json(loaded.summary()))
}

/// Get a preview of the processed data.
pub async fn get_data_preview(
    State(state): State<AppState>,
    Query(params): Query<PreviewParams>,
) -> Result<Json<DataPreview>, ApiError> {
    let session = state.session.read().await;
    let loaded = session.dataset().ok_or(CyclewiseError::MissingInput)?;

    let limit = params.limit.unwrap_or(DEFAULT_PREVIEW_ROWS);
    Ok(Json(loaded.processed.preview(limit)))
}
