//! API request handlers.

mod data;
mod session;
mod suggestions;

pub use data::*;
pub use session::*;
pub use suggestions::*;
