//! Rule-based suggestion generation from user metrics.
//!
//! Each rule is a fixed threshold on one metric. Rules are checked
//! independently and in a fixed order; every rule that fires contributes one
//! suggestion.

use tracing::debug;

use crate::preprocess::ProcessedDataset;

use super::metrics::UserMetrics;
use super::suggestion::{SuggestionKind, SuggestionList};

/// Stress above this level triggers the diet suggestion.
pub const STRESS_THRESHOLD: u8 = 7;
/// Fewer weekly workouts than this trigger the exercise suggestion.
pub const EXERCISE_THRESHOLD: u8 = 3;
/// Fewer nightly hours than this trigger the sleep suggestion.
pub const SLEEP_THRESHOLD: u8 = 7;

struct Rule {
    kind: SuggestionKind,
    fires: fn(&UserMetrics) -> bool,
}

const RULES: &[Rule] = &[
    Rule {
        kind: SuggestionKind::Diet,
        fires: high_stress,
    },
    Rule {
        kind: SuggestionKind::Exercise,
        fires: low_exercise,
    },
    Rule {
        kind: SuggestionKind::Sleep,
        fires: short_sleep,
    },
];

fn high_stress(metrics: &UserMetrics) -> bool {
    metrics.stress_level() > STRESS_THRESHOLD
}

fn low_exercise(metrics: &UserMetrics) -> bool {
    metrics.exercise_frequency() < EXERCISE_THRESHOLD
}

fn short_sleep(metrics: &UserMetrics) -> bool {
    metrics.sleep_hours() < SLEEP_THRESHOLD
}

/// Generates suggestions from user metrics using fixed rules.
pub struct SuggestionEngine;

impl SuggestionEngine {
    /// Produce the suggestions for one interaction.
    ///
    /// The processed dataset is taken so both components share one call
    /// shape; no rule reads it, and the output depends on `metrics` alone.
    pub fn suggest(metrics: &UserMetrics, _processed: &ProcessedDataset) -> SuggestionList {
        let suggestions = Self::evaluate(metrics);
        debug!(count = suggestions.len(), "generated suggestions");
        suggestions
    }

    /// Apply every rule to `metrics`, in order.
    pub fn evaluate(metrics: &UserMetrics) -> SuggestionList {
        RULES
            .iter()
            .filter(|rule| (rule.fires)(metrics))
            .map(|rule| rule.kind)
            .collect()
    }
}
