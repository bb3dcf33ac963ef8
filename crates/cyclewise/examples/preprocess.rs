//! Example: Preprocess a cycle log and print suggestions.
//!
//! Usage:
//!   cargo run --example preprocess -- <file_path> [sleep stress exercise]
//!
//! Example:
//!   cargo run --example preprocess -- cycles.csv 6 8 2

use std::env;
use std::path::Path;

use cyclewise::{SessionContext, UserMetrics};

fn main() -> cyclewise::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example preprocess -- <file_path> [sleep stress exercise]");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    let numbers: Vec<i64> = args[2..].iter().filter_map(|a| a.parse().ok()).collect();
    let (sleep, stress, exercise) = match numbers.as_slice() {
        [sleep, stress, exercise, ..] => (*sleep, *stress, *exercise),
        _ => (7, 5, 3),
    };

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Cyclewise: {}", file_path);
    println!("{}", separator);
    println!();

    let mut session = SessionContext::new();
    let loaded = session.upload_file(path)?;

    println!("## Source");
    println!("  File: {}", loaded.source.file);
    println!("  Format: {}", loaded.source.format);
    println!("  Rows: {}", loaded.source.row_count);
    println!("  Columns: {}", loaded.source.column_count);
    println!("  Hash: {}", loaded.source.hash);
    println!();

    println!("## Columns");
    for report in loaded.processed.report() {
        println!(
            "  {:20} {:12} imputed={:<4} fill={}",
            report.name,
            report.kind.label(),
            report.imputed,
            report.fill_value.as_deref().unwrap_or("-")
        );
    }
    println!();

    if !loaded.processed.warnings().is_empty() {
        println!("## Warnings");
        for warning in loaded.processed.warnings() {
            println!("  {}", warning);
        }
        println!();
    }

    println!("## Preview");
    let preview = loaded.processed.preview(5);
    println!("  {}", preview.headers.join(" | "));
    for row in &preview.rows {
        println!("  {}", row.join(" | "));
    }
    println!();

    let metrics = UserMetrics::new(28, 5, sleep, stress, exercise)?;
    println!("## Suggestions (sleep={}, stress={}, exercise={})", sleep, stress, exercise);
    print!("{}", session.respond(&metrics));

    Ok(())
}
