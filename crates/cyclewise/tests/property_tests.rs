//! Property-based tests for preprocessing and suggestions.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p cyclewise --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p cyclewise --test property_tests
//! ```

use proptest::prelude::*;

use cyclewise::{
    Column, DataPreprocessor, Parser, RawDataset, SuggestionEngine, UserMetrics,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// A numeric cell: missing about a fifth of the time.
fn numeric_cell() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        1 => Just(None),
        4 => (-1000.0f64..1000.0).prop_map(Some),
    ]
}

/// A categorical cell from a small vocabulary.
fn text_cell() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        1 => Just(None),
        4 => prop::sample::select(vec!["light", "medium", "heavy", "spotting"])
            .prop_map(|s| Some(s.to_string())),
    ]
}

/// A dataset with 1-30 rows, two numeric and one text column.
fn dataset() -> impl Strategy<Value = RawDataset> {
    (1usize..30).prop_flat_map(|rows| {
        (
            prop::collection::vec(numeric_cell(), rows),
            prop::collection::vec(numeric_cell(), rows),
            prop::collection::vec(text_cell(), rows),
        )
            .prop_map(|(a, b, flow)| {
                RawDataset::from_columns(vec![
                    Column::numeric("a", a),
                    Column::numeric("b", b),
                    Column::text("flow", flow),
                ])
                .unwrap()
            })
    })
}

fn metrics() -> impl Strategy<Value = UserMetrics> {
    (21i64..=35, 1i64..=7, 3i64..=12, 1i64..=10, 0i64..=7).prop_map(
        |(cycle, bleeding, sleep, stress, exercise)| {
            UserMetrics::new(cycle, bleeding, sleep, stress, exercise).unwrap()
        },
    )
}

// =============================================================================
// Preprocessing Properties
// =============================================================================

proptest! {
    /// Row and column counts survive preprocessing.
    #[test]
    fn shape_is_preserved(raw in dataset()) {
        let processed = DataPreprocessor::new().preprocess(&raw).unwrap();
        prop_assert_eq!(processed.row_count(), raw.row_count());
        prop_assert_eq!(processed.column_count(), raw.column_count());
        for column in processed.columns() {
            prop_assert_eq!(column.values.len(), raw.row_count());
        }
    }

    /// No numeric cell is left non-finite and text columns have a value everywhere.
    #[test]
    fn nothing_is_missing(raw in dataset()) {
        let processed = DataPreprocessor::new().preprocess(&raw).unwrap();
        for column in processed.columns() {
            if let Some(values) = column.values.as_numeric() {
                prop_assert!(values.iter().all(|v| v.is_finite()));
            }
        }
    }

    /// Columns that were not flagged degenerate end with mean 0 and std 1.
    #[test]
    fn non_degenerate_columns_are_standardized(raw in dataset()) {
        let processed = DataPreprocessor::new().preprocess(&raw).unwrap();
        for report in processed.report() {
            if report.degenerate || !report.kind.is_numeric() {
                continue;
            }
            let values = processed.column(&report.name).unwrap().values.as_numeric().unwrap();
            let n = values.len() as f64;
            let mean = values.iter().sum::<f64>() / n;
            let std = (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();
            prop_assert!(mean.abs() < 1e-6, "mean {}", mean);
            prop_assert!((std - 1.0).abs() < 1e-6, "std {}", std);
        }
    }

    /// Every column is classified exactly once.
    #[test]
    fn classification_partitions_columns(raw in dataset()) {
        let classification = raw.classify();
        prop_assert_eq!(classification.len(), raw.column_count());
        for name in raw.headers() {
            let in_numeric = classification.numeric.iter().any(|n| n == name);
            let in_other = classification.non_numeric.iter().any(|n| n == name);
            prop_assert!(in_numeric ^ in_other);
        }
    }

    /// The parser never panics on arbitrary bytes.
    #[test]
    fn parser_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..300)) {
        let _ = Parser::new().parse_bytes(&bytes, "fuzz.csv");
    }
}

// =============================================================================
// Suggestion Properties
// =============================================================================

proptest! {
    /// Same metrics always produce the same list.
    #[test]
    fn suggest_is_deterministic(m in metrics(), raw in dataset()) {
        let processed = DataPreprocessor::new().preprocess(&raw).unwrap();
        let first = SuggestionEngine::suggest(&m, &processed);
        let second = SuggestionEngine::suggest(&m, &processed);
        prop_assert_eq!(first, second);
    }

    /// Each rule fires exactly when its threshold is crossed.
    #[test]
    fn list_matches_thresholds(m in metrics()) {
        let list = SuggestionEngine::evaluate(&m);
        let expected = usize::from(m.stress_level() > 7)
            + usize::from(m.exercise_frequency() < 3)
            + usize::from(m.sleep_hours() < 7);
        prop_assert_eq!(list.len(), expected);
    }
}
