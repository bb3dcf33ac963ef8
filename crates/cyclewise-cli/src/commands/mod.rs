//! CLI command implementations.

pub mod preprocess;
pub mod serve;
pub mod suggest;
