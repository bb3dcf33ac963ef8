//! Application state for the web server.

use std::sync::Arc;
use tokio::sync::RwLock;

use cyclewise::SessionContext;

/// Shared application state.
///
/// The server is local and single-user, so one session is shared by every
/// request until it is reset.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<SessionContext>>,
}

impl AppState {
    /// Create new application state.
    pub fn new(session: SessionContext) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
        }
    }
}
