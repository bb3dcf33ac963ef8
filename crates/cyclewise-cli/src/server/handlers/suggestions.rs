//! Metric ranges and suggestion handlers.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Serialize;

use cyclewise::suggestion::MetricsInput;
use cyclewise::{MetricRange, Rendered, SuggestionList, UserMetrics};

use crate::server::error::ApiError;
use crate::server::state::AppState;

#[derive(Serialize)]
pub struct MetricsResponse {
    pub ranges: Vec<MetricRange>,
    pub defaults: UserMetrics,
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: SuggestionList,
    /// Display lines, header first.
    pub lines: Vec<String>,
}

/// Slider ranges in form order.
pub async fn get_metric_ranges() -> Json<MetricsResponse> {
    Json(MetricsResponse {
        ranges: MetricRange::ALL.to_vec(),
        defaults: UserMetrics::default(),
    })
}

/// Evaluate the suggestion rules for submitted metrics.
pub async fn post_suggestions(
    State(state): State<AppState>,
    body: Result<Json<MetricsInput>, JsonRejection>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    let Json(input) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let metrics = UserMetrics::try_from(input)?;

    let session = state.session.read().await;
    let suggestions = session.suggest(&metrics)?;

    let lines = Rendered::Suggestions {
        suggestions: suggestions.clone(),
    }
    .lines();

    Ok(Json(SuggestionsResponse { suggestions, lines }))
}
