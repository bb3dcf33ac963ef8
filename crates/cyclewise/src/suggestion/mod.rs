//! User metrics and the threshold rules that turn them into suggestions.

mod generator;
mod metrics;
mod suggestion;

pub use generator::{EXERCISE_THRESHOLD, SLEEP_THRESHOLD, STRESS_THRESHOLD, SuggestionEngine};
pub use metrics::{MetricRange, MetricsInput, UserMetrics};
pub use suggestion::{Suggestion, SuggestionKind, SuggestionList};
