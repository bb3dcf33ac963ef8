//! Web server for the suggestion form.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
