//! pubscreen - PubMed industry-author screening
//!
//! Searches PubMed via the NCBI E-utilities, fetches the matching records,
//! and keeps papers with at least one author whose affiliation does not look
//! academic. Results are emitted as a CSV report.
//!
//! # Example
//!
//! ```ignore
//! use pubscreen::{Config, run};
//!
//! let config = Config::default();
//! let rows = run("cancer immunotherapy", &config);
//! println!("{} papers with non-academic authors", rows.len());
//! ```

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod parser;
pub mod report;
pub mod runner;

// Re-exports
pub use config::Config;
pub use error::FetchError;
pub use extract::ReportRow;
pub use runner::run;
