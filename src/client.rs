//! E-utilities HTTP client.
//!
//! Uses async reqwest internally via a shared tokio runtime, but presents a
//! sync interface: the pipeline is strictly sequential, one blocking request
//! per stage.

use std::sync::LazyLock;
use std::time::Duration;

use crate::config::Config;
use crate::error::FetchError;
use crate::parser::{self, PubmedArticle};

/// Connect timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared async HTTP client with connection pooling.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .expect("failed to build HTTP client")
});

/// Shared tokio runtime for HTTP operations.
pub static SHARED_RUNTIME: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
});

/// Blocking HTTP GET returning the response body as text
fn get_text(url: &str, params: &[(&str, &str)], timeout: Duration) -> Result<String, FetchError> {
    SHARED_RUNTIME.handle().block_on(async {
        let resp = SHARED_CLIENT
            .get(url)
            .query(params)
            .timeout(timeout)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| FetchError::from_reqwest(&e))?;
        resp.text().await.map_err(|e| FetchError::from_reqwest(&e))
    })
}

/// Search PubMed for identifiers matching a free-text query.
///
/// Returns the ordered identifier list from ESearch, capped at
/// `config.max_results`. An empty list is a valid outcome (nothing matched).
pub fn search_ids(config: &Config, query: &str) -> Result<Vec<String>, FetchError> {
    let retmax = config.max_results.to_string();
    let params = [("db", "pubmed"), ("term", query), ("retmax", retmax.as_str())];

    log::debug!("ESearch: term={query:?} retmax={retmax}");
    let body = get_text(&config.esearch_url(), &params, config.timeout)?;
    parser::parse_esearch_ids(&body)
}

/// Fetch full records for a non-empty identifier list.
///
/// Issues one batched EFetch request (comma-joined ids, `retmode=xml`) and
/// returns the parsed articles in document order.
pub fn fetch_records(config: &Config, ids: &[String]) -> Result<Vec<PubmedArticle>, FetchError> {
    let id_list = ids.join(",");
    let params = [("db", "pubmed"), ("id", id_list.as_str()), ("retmode", "xml")];

    log::debug!("EFetch: {} ids", ids.len());
    let body = get_text(&config.efetch_url(), &params, config.timeout)?;
    parser::parse_article_set(&body)
}
