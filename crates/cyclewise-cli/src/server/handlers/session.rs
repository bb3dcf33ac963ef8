//! Session lifecycle handlers.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::server::state::AppState;

#[derive(Serialize)]
pub struct SessionResponse {
    pub started_at: DateTime<Utc>,
    pub has_dataset: bool,
}

/// Current session status.
pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.session.read().await;
    Json(SessionResponse {
        started_at: session.started_at(),
        has_dataset: session.has_dataset(),
    })
}

/// Drop the loaded dataset and start over.
pub async fn reset_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let mut session = state.session.write().await;
    session.reset();

    Json(SessionResponse {
        started_at: session.started_at(),
        has_dataset: session.has_dataset(),
    })
}
