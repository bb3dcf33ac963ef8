//! Serve command - run the local web form.

use colored::Colorize;
use cyclewise::SessionContext;
use tracing::info;

use crate::cli::InputArgs;
use crate::server::{app, state::AppState};

pub fn run(port: u16, no_open: bool, input: InputArgs) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(SessionContext::with_config(input.config()?));

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting Cyclewise at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    if !no_open {
        if let Err(e) = open::that(&url) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, port, shutdown_signal()))?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    println!();
    println!("{}", "Shutting down...".yellow());
}
