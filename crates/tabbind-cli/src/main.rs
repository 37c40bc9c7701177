//! tabbind CLI - decode delimited files into records and back.

mod cli;
mod commands;
mod pet;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let result = match cli.command {
        Commands::Decode {
            file,
            json,
            delimiter,
        } => commands::decode::run(file, json, delimiter),

        Commands::Roundtrip {
            file,
            output,
            delimiter,
        } => commands::roundtrip::run(file, output, delimiter),

        Commands::Header { delimiter } => commands::header::run(delimiter),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
