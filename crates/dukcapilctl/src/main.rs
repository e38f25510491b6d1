//! dukcapilctl - Dispendukcapil bot operator CLI

use anyhow::Result;
use clap::Parser;
use dukcapilctl::cli::{Cli, Commands};
use dukcapilctl::{commands, output};

fn main() -> Result<()> {
    // Quiet unless asked: RUST_LOG=debug shows which rule fired
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask { text, limit } => {
            let report = commands::ask(&text.join(" "), limit)?;
            if cli.json {
                output::print_json(&report)?;
            } else {
                output::print_ask(&report);
            }
        }
        Commands::Button { id, limit } => {
            let response = commands::button(&id, limit)?;
            if cli.json {
                output::print_json(&response)?;
            } else {
                output::print_response(&response);
            }
        }
        Commands::Topics => {
            let rows = commands::topics();
            if cli.json {
                output::print_json(&rows)?;
            } else {
                output::print_topics(&rows);
            }
        }
        Commands::Check => {
            let report = commands::check()?;
            if cli.json {
                output::print_json(&report)?;
            } else {
                output::print_check(&report);
            }
            if !report.ok() {
                std::process::exit(1);
            }
        }
        Commands::Chunk { limit, file } => {
            let chunks = commands::chunk_file(&file, limit)?;
            if cli.json {
                output::print_json(&chunks)?;
            } else {
                output::print_chunks(&chunks, limit);
            }
        }
    }

    Ok(())
}
