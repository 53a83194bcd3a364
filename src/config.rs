//! Pipeline configuration

use std::time::Duration;

/// Runtime configuration for the screening pipeline
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the NCBI E-utilities endpoints
    pub base_url: String,
    /// Maximum number of identifiers requested from ESearch
    pub max_results: usize,
    /// Total per-request timeout
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/".to_string(),
            max_results: 100,
            timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// URL of the ESearch endpoint
    pub fn esearch_url(&self) -> String {
        format!("{}esearch.fcgi", self.base_url)
    }

    /// URL of the EFetch endpoint
    pub fn efetch_url(&self) -> String {
        format!("{}efetch.fcgi", self.base_url)
    }
}
