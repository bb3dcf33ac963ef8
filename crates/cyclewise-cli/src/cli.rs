//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use cyclewise::{CyclewiseConfig, MetricRange, ParserConfig, PreprocessConfig};

/// Cyclewise: dataset preprocessing and menstrual-health suggestions
#[derive(Parser)]
#[command(name = "cyclewise")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the local web form
    Serve {
        /// Port for web server
        #[arg(short, long, default_value = "8501")]
        port: u16,

        /// Don't automatically open browser
        #[arg(long)]
        no_open: bool,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Impute and normalize a CSV file and report what changed
    Preprocess {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output the summary as JSON
        #[arg(long, conflicts_with = "emit_csv")]
        json: bool,

        /// Write the processed dataset to stdout as CSV
        #[arg(long)]
        emit_csv: bool,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Upload a file and get suggestions for one set of metrics
    Suggest {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        metrics: MetricArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        input: InputArgs,
    },
}

/// Options controlling how uploads are read.
#[derive(Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// Field delimiter (auto-detected when omitted)
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Read at most this many data rows
    #[arg(long, value_name = "N")]
    pub max_rows: Option<usize>,

    /// Treat standard deviations at or below this as zero
    #[arg(long, value_name = "EPS")]
    pub epsilon: Option<f64>,
}

impl InputArgs {
    /// Build the library configuration from these flags.
    pub fn config(&self) -> Result<CyclewiseConfig, String> {
        let delimiter = match self.delimiter {
            Some(c) if c.is_ascii() => Some(c as u8),
            Some(c) => return Err(format!("Delimiter must be a single ASCII character, got '{}'", c)),
            None => None,
        };

        let mut preprocess = PreprocessConfig::default();
        if let Some(eps) = self.epsilon {
            preprocess.degenerate_epsilon = eps;
        }

        Ok(CyclewiseConfig {
            parser: ParserConfig {
                delimiter,
                max_rows: self.max_rows,
                ..Default::default()
            },
            preprocess,
        })
    }
}

/// The five slider values; each defaults to its minimum.
#[derive(Args, Clone, Debug)]
pub struct MetricArgs {
    /// Cycle length in days (21-35)
    #[arg(long, default_value_t = i64::from(MetricRange::CYCLE_LENGTH.min), allow_negative_numbers = true)]
    pub cycle_length: i64,

    /// Bleeding duration in days (1-7)
    #[arg(long, default_value_t = i64::from(MetricRange::BLEEDING_DURATION.min), allow_negative_numbers = true)]
    pub bleeding_duration: i64,

    /// Sleep hours per night (3-12)
    #[arg(long, default_value_t = i64::from(MetricRange::SLEEP_HOURS.min), allow_negative_numbers = true)]
    pub sleep_hours: i64,

    /// Stress level (1-10)
    #[arg(long, default_value_t = i64::from(MetricRange::STRESS_LEVEL.min), allow_negative_numbers = true)]
    pub stress_level: i64,

    /// Exercise sessions per week (0-7)
    #[arg(long, default_value_t = i64::from(MetricRange::EXERCISE_FREQUENCY.min), allow_negative_numbers = true)]
    pub exercise_frequency: i64,
}

impl MetricArgs {
    pub fn to_input(&self) -> cyclewise::suggestion::MetricsInput {
        cyclewise::suggestion::MetricsInput {
            cycle_length: self.cycle_length,
            bleeding_duration: self.bleeding_duration,
            sleep_hours: self.sleep_hours,
            stress_level: self.stress_level,
            exercise_frequency: self.exercise_frequency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_suggest_metrics_default_to_slider_minimum() {
        let cli = Cli::parse_from(["cyclewise", "suggest", "log.csv", "--stress-level", "8"]);
        match cli.command {
            Commands::Suggest { metrics, .. } => {
                assert_eq!(metrics.cycle_length, 21);
                assert_eq!(metrics.stress_level, 8);
                assert_eq!(metrics.exercise_frequency, 0);
            }
            _ => panic!("expected suggest"),
        }
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::parse_from(["cyclewise", "-vv", "preprocess", "log.csv"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_input_args_reject_non_ascii_delimiter() {
        let args = InputArgs {
            delimiter: Some('§'),
            ..Default::default()
        };
        assert!(args.config().is_err());

        let args = InputArgs {
            delimiter: Some(';'),
            max_rows: Some(10),
            epsilon: Some(1e-6),
        };
        let config = args.config().unwrap();
        assert_eq!(config.parser.delimiter, Some(b';'));
        assert_eq!(config.parser.max_rows, Some(10));
        assert_eq!(config.preprocess.degenerate_epsilon, 1e-6);
    }
}
