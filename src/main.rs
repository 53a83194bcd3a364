//! pubscreen - fetch PubMed papers with non-academic authors
//!
//! Searches PubMed for a query, filters the results to papers with at least
//! one non-academic (industry) author, and writes a CSV report.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use pubscreen::{Config, logging, report, run};

#[derive(Parser)]
#[command(name = "pubscreen")]
#[command(about = "Fetch research papers from PubMed with non-academic authors")]
#[command(version)]
struct Cli {
    /// The search query for PubMed
    query: String,

    /// Filename to save the CSV results (default: stdout)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print debug information during execution
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.debug);

    let config = Config::default();
    let rows = run(&cli.query, &config);

    if rows.is_empty() {
        log::debug!("No matching papers found or an error occurred");
    }

    // Header-only output is still a valid report; exit 0 either way
    report::write_csv(&rows, cli.file.as_deref())?;
    Ok(())
}
