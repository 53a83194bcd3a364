//! Pipeline orchestration: search, fetch, extract.

use crate::client;
use crate::config::Config;
use crate::extract::{self, ReportRow};

/// Run the screening pipeline for one query.
///
/// Remote failures at either stage are logged and degrade to an empty
/// result; an empty report is a valid outcome, not an error. Rows come back
/// in the order EFetch returned the records.
pub fn run(query: &str, config: &Config) -> Vec<ReportRow> {
    let ids = match client::search_ids(config, query) {
        Ok(ids) => ids,
        Err(e) => {
            log::warn!("Search request failed: {e}");
            return Vec::new();
        }
    };

    if ids.is_empty() {
        log::debug!("No papers found for the given query");
        return Vec::new();
    }
    log::debug!("Search returned {} ids", ids.len());

    let articles = match client::fetch_records(config, &ids) {
        Ok(articles) => articles,
        Err(e) => {
            log::warn!("Fetch request failed: {e}");
            return Vec::new();
        }
    };

    let total = articles.len();
    let rows: Vec<ReportRow> = articles.iter().filter_map(extract::extract).collect();
    log::debug!("Kept {} of {} articles", rows.len(), total);

    rows
}
