//! User-reported health metrics and their allowed ranges.

use serde::{Deserialize, Serialize};

use crate::error::{CyclewiseError, Result};

/// Inclusive bounds for one slider input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricRange {
    /// Field name as used in requests.
    pub field: &'static str,
    /// Label shown next to the slider.
    pub label: &'static str,
    pub min: u8,
    pub max: u8,
}

impl MetricRange {
    pub const CYCLE_LENGTH: MetricRange = MetricRange {
        field: "cycle_length",
        label: "Cycle Length (days)",
        min: 21,
        max: 35,
    };

    pub const BLEEDING_DURATION: MetricRange = MetricRange {
        field: "bleeding_duration",
        label: "Bleeding Duration (days)",
        min: 1,
        max: 7,
    };

    pub const SLEEP_HOURS: MetricRange = MetricRange {
        field: "sleep_hours",
        label: "Sleep Hours per Night",
        min: 3,
        max: 12,
    };

    pub const STRESS_LEVEL: MetricRange = MetricRange {
        field: "stress_level",
        label: "Stress Level (1-10)",
        min: 1,
        max: 10,
    };

    pub const EXERCISE_FREQUENCY: MetricRange = MetricRange {
        field: "exercise_frequency",
        label: "Exercise Frequency per Week",
        min: 0,
        max: 7,
    };

    /// All ranges, in form order.
    pub const ALL: [MetricRange; 5] = [
        Self::CYCLE_LENGTH,
        Self::BLEEDING_DURATION,
        Self::SLEEP_HOURS,
        Self::STRESS_LEVEL,
        Self::EXERCISE_FREQUENCY,
    ];

    /// Check a value against this range.
    pub fn check(&self, value: i64) -> Result<u8> {
        if value < i64::from(self.min) || value > i64::from(self.max) {
            return Err(CyclewiseError::InvalidMetric {
                field: self.field,
                value,
                min: i64::from(self.min),
                max: i64::from(self.max),
            });
        }
        Ok(value as u8)
    }
}

/// Unvalidated metrics as they arrive from a form or the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsInput {
    pub cycle_length: i64,
    pub bleeding_duration: i64,
    pub sleep_hours: i64,
    pub stress_level: i64,
    pub exercise_frequency: i64,
}

/// One interaction's worth of user metrics.
///
/// Every field is within its [`MetricRange`]; values are fixed once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MetricsInput")]
pub struct UserMetrics {
    cycle_length: u8,
    bleeding_duration: u8,
    sleep_hours: u8,
    stress_level: u8,
    exercise_frequency: u8,
}

impl UserMetrics {
    /// Validate and build a metrics record.
    pub fn new(
        cycle_length: i64,
        bleeding_duration: i64,
        sleep_hours: i64,
        stress_level: i64,
        exercise_frequency: i64,
    ) -> Result<Self> {
        Ok(Self {
            cycle_length: MetricRange::CYCLE_LENGTH.check(cycle_length)?,
            bleeding_duration: MetricRange::BLEEDING_DURATION.check(bleeding_duration)?,
            sleep_hours: MetricRange::SLEEP_HOURS.check(sleep_hours)?,
            stress_level: MetricRange::STRESS_LEVEL.check(stress_level)?,
            exercise_frequency: MetricRange::EXERCISE_FREQUENCY.check(exercise_frequency)?,
        })
    }

    pub fn cycle_length(&self) -> u8 {
        self.cycle_length
    }

    pub fn bleeding_duration(&self) -> u8 {
        self.bleeding_duration
    }

    pub fn sleep_hours(&self) -> u8 {
        self.sleep_hours
    }

    pub fn stress_level(&self) -> u8 {
        self.stress_level
    }

    pub fn exercise_frequency(&self) -> u8 {
        self.exercise_frequency
    }
}

impl Default for UserMetrics {
    /// Every slider at its minimum, as a fresh form shows it.
    fn default() -> Self {
        Self {
            cycle_length: MetricRange::CYCLE_LENGTH.min,
            bleeding_duration: MetricRange::BLEEDING_DURATION.min,
            sleep_hours: MetricRange::SLEEP_HOURS.min,
            stress_level: MetricRange::STRESS_LEVEL.min,
            exercise_frequency: MetricRange::EXERCISE_FREQUENCY.min,
        }
    }
}

impl TryFrom<MetricsInput> for UserMetrics {
    type Error = CyclewiseError;

    fn try_from(input: MetricsInput) -> Result<Self> {
        Self::new(
            input.cycle_length,
            input.bleeding_duration,
            input.sleep_hours,
            input.stress_level,
            input.exercise_frequency,
        )
    }
}
