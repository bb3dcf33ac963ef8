//! Per-column preprocessing report.

use serde::{Deserialize, Serialize};

use super::types::ColumnKind;

/// Statistics used to rescale a numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericStatistics {
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
}

impl NumericStatistics {
    /// Compute mean and population standard deviation of complete values.
    ///
    /// Returns `None` for an empty slice. Values near the limits of `f64`
    /// are rescaled so their sums do not overflow.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mean = Self::mean_of(values)?;
        let count = values.len() as f64;

        let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        let std = if sum_sq.is_finite() {
            (sum_sq / count).sqrt()
        } else {
            let scale = values.iter().fold(0.0f64, |m, v| m.max(v.abs()));
            let scaled: f64 = values
                .iter()
                .map(|v| (v / scale - mean / scale).powi(2))
                .sum();
            scale * (scaled / count).sqrt()
        };

        Some(Self { mean, std })
    }

    /// Arithmetic mean, or `None` for an empty slice.
    pub fn mean_of(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }

        let count = values.len() as f64;
        let sum: f64 = values.iter().sum();
        if sum.is_finite() {
            Some(sum / count)
        } else {
            Some(values.iter().map(|v| v / count).sum())
        }
    }

    /// Whether both statistics are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.mean.is_finite() && self.std.is_finite()
    }

    /// Whether `values` (the ones these statistics describe) have no spread.
    ///
    /// True when every value is identical, when the deviation is within the
    /// rounding error of the mean for this many values, or when it is at or
    /// below `epsilon`.
    pub fn is_constant(&self, values: &[f64], epsilon: f64) -> bool {
        if let Some(first) = values.first() {
            if values.iter().all(|v| v == first) {
                return true;
            }
        }

        // var <= n*eps*var + (n*|mean|*eps)^2, solved for std
        let count = values.len() as f64;
        let slack = 1.0 - count * f64::EPSILON;
        let rounding = count * self.mean.abs() * f64::EPSILON;

        self.std <= epsilon || slack <= 0.0 || self.std * slack.sqrt() <= rounding
    }

    /// Calculate the z-score for a value.
    ///
    /// Only meaningful when the statistics are finite and not constant.
    pub fn z_score(&self, value: f64) -> f64 {
        let deviation = value - self.mean;
        if deviation.is_finite() {
            deviation / self.std
        } else {
            value / self.std - self.mean / self.std
        }
    }
}

/// What preprocessing did to one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnReport {
    /// Column name.
    pub name: String,
    /// Classified kind.
    pub kind: ColumnKind,
    /// Number of missing cells that were filled.
    pub imputed: usize,
    /// The fill value (mean or mode), when anything was filled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_value: Option<String>,
    /// Scaling statistics for numeric columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling: Option<NumericStatistics>,
    /// Whether the column was zero-filled because it had no spread.
    pub degenerate: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_statistics() {
        let stats = NumericStatistics::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((stats.mean - 5.0).abs() < 1e-12);
        assert!((stats.std - 2.0).abs() < 1e-12);
        assert!((stats.z_score(9.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_values_have_no_statistics() {
        assert!(NumericStatistics::from_values(&[]).is_none());
        assert!(NumericStatistics::mean_of(&[]).is_none());
    }

    #[test]
    fn test_repeated_large_values_are_constant() {
        for value in [36.6, 1000000.1, 123456789.123] {
            let values = vec![value; 7];
            let stats = NumericStatistics::from_values(&values).unwrap();
            assert!(stats.is_constant(&values, 1e-12), "value {}", value);
        }
    }

    #[test]
    fn test_rounding_level_spread_is_constant() {
        let base = 123456789.123f64;
        let values = [base, base, base, base + base * f64::EPSILON];
        let stats = NumericStatistics::from_values(&values).unwrap();
        assert!(stats.is_constant(&values, 1e-12));
    }

    #[test]
    fn test_real_spread_is_not_constant() {
        let values = [123456789.0, 123456790.0, 123456791.0];
        let stats = NumericStatistics::from_values(&values).unwrap();
        assert!(!stats.is_constant(&values, 1e-12));
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let values = [1e308, 1e308, -1e308];
        let stats = NumericStatistics::from_values(&values).unwrap();

        assert!(stats.is_finite());
        assert!((stats.mean - 1e308 / 3.0).abs() / 1e308 < 1e-12);
        assert!((stats.z_score(1e308) - 0.5f64.sqrt()).abs() < 1e-9);
        assert!((stats.z_score(-1e308) + 2.0f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_infinite_input_gives_non_finite_statistics() {
        let stats = NumericStatistics::from_values(&[1.0, f64::INFINITY]).unwrap();
        assert!(!stats.is_finite());
    }
}
