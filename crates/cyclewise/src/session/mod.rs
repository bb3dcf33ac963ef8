//! Session lifecycle and rendering of what the user sees.

mod context;
mod render;

pub use context::SessionContext;
pub use render::{NO_SUGGESTIONS, Rendered, SUGGESTIONS_HEADER, UPLOAD_WARNING};
