//! Preprocess command - impute, normalize, and report.

use std::io;
use std::path::PathBuf;

use colored::Colorize;
use cyclewise::Cyclewise;

use crate::cli::InputArgs;

pub fn run(
    file: PathBuf,
    json_output: bool,
    emit_csv: bool,
    input: InputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let engine = Cyclewise::with_config(input.config()?);
    let loaded = engine.load(&file)?;

    if emit_csv {
        let stdout = io::stdout();
        loaded.processed.write_csv(stdout.lock())?;
        return Ok(());
    }

    let summary = loaded.summary();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Preprocessed".cyan().bold(),
        summary.file.white()
    );
    println!(
        "  {} rows, {} columns ({} numeric, {} non-numeric), {} cells imputed",
        summary.rows,
        summary.columns,
        summary.numeric_columns.len(),
        summary.non_numeric_columns.len(),
        summary.imputed_cells
    );
    println!();
    println!("{}", "Columns:".yellow().bold());

    for column in &summary.report {
        let kind = if column.kind.is_numeric() {
            column.kind.label().blue()
        } else {
            column.kind.label().magenta()
        };

        let fill = match &column.fill_value {
            Some(value) => format!("{} filled with '{}'", column.imputed, value),
            None => "complete".to_string(),
        };

        let scaling = match &column.scaling {
            Some(stats) if !column.degenerate => {
                format!("mean {:.4}, std {:.4}", stats.mean, stats.std)
            }
            _ => String::new(),
        };

        println!(
            "  {:<24} {:<12} {:<28} {}",
            column.name.white(),
            kind,
            fill,
            scaling.dimmed()
        );
    }

    if !summary.warnings.is_empty() {
        println!();
        for warning in &summary.warnings {
            println!("{} {}", "Warning:".yellow(), warning);
        }
    }

    Ok(())
}
