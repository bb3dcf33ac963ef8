//! Suggest command - one full upload-and-submit interaction.

use std::path::PathBuf;

use colored::Colorize;
use cyclewise::{Rendered, SessionContext, UserMetrics};

use crate::cli::{InputArgs, MetricArgs};

pub fn run(
    file: PathBuf,
    metrics: MetricArgs,
    json_output: bool,
    input: InputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = UserMetrics::try_from(metrics.to_input())?;

    let mut session = SessionContext::with_config(input.config()?);
    let uploaded = session.upload_file(&file).map(|_| ());
    let rendered = match uploaded {
        Ok(()) => session.respond(&metrics),
        Err(e) => Rendered::from_error(&e),
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
        return Ok(());
    }

    if let Some(loaded) = session.dataset() {
        for warning in loaded.processed.warnings() {
            eprintln!("{} {}", "Warning:".yellow(), warning);
        }
    }

    match &rendered {
        Rendered::Warning { message } => println!("{}", message.yellow()),
        Rendered::Error { message } => return Err(message.clone().into()),
        Rendered::Suggestions { .. } => {
            for (i, line) in rendered.lines().iter().enumerate() {
                if i == 0 {
                    println!("{}", line.green().bold());
                } else {
                    println!("{}", line);
                }
            }
        }
    }

    Ok(())
}
