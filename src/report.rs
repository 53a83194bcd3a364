//! CSV report output.
//!
//! Fixed column order; the header row is always written, so an empty result
//! renders as a header-only report.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::extract::ReportRow;

/// Report columns, in output order
pub const COLUMNS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// Write the report to a file, or to stdout when no path is given.
pub fn write_csv(rows: &[ReportRow], path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Cannot create {}", path.display()))?;
            write_report(rows, file)?;
            log::debug!("Results saved to {}", path.display());
        }
        None => write_report(rows, std::io::stdout().lock())?,
    }
    Ok(())
}

/// Write header and rows to any writer
pub fn write_report<W: Write>(rows: &[ReportRow], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(COLUMNS)?;
    for row in rows {
        wtr.write_record([
            row.pmid.as_str(),
            row.title.as_str(),
            row.publication_date.as_str(),
            &row.authors.join(", "),
            &row.affiliations.join(", "),
            row.email.as_str(),
        ])?;
    }
    wtr.flush().context("Cannot flush CSV output")?;
    Ok(())
}
