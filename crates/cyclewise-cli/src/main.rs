//! Cyclewise CLI - preprocessing reports and the local suggestion form.

mod cli;
mod commands;
mod logging;
mod server;
mod web;

use clap::Parser;
use cli::{Cli, Commands};
use logging::{LogConfig, init_logging};

fn main() {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose));

    let result = match cli.command {
        Commands::Serve {
            port,
            no_open,
            input,
        } => commands::serve::run(port, no_open, input),

        Commands::Preprocess {
            file,
            json,
            emit_csv,
            input,
        } => commands::preprocess::run(file, json, emit_csv, input),

        Commands::Suggest {
            file,
            metrics,
            json,
            input,
        } => commands::suggest::run(file, metrics, json, input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
