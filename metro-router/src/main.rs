use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use metro_router::cli::{Cli, run};

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the answer.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
