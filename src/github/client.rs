use tracing::{debug, info, warn};

use super::error::SearchError;
use super::query::{DEFAULT_API_URL, build_search_url};
use super::response::parse_search_response;
use crate::models::RepositoryRecord;

/// Source of search result pages
///
/// Implementations must be shareable with a background worker.
pub trait RepositorySearch: Send + Sync {
    fn fetch_page(&self, topics: &[String], page: u32)
    -> Result<Vec<RepositoryRecord>, SearchError>;
}

/// Blocking client for the GitHub search endpoint
///
/// Unauthenticated, default agent settings, no retry.
pub struct GithubClient {
    agent: ureq::Agent,
    base_url: String,
}

impl GithubClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Point the client at another API root (GitHub Enterprise, local test server)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { agent: ureq::Agent::new(), base_url: base_url.into() }
    }
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositorySearch for GithubClient {
    fn fetch_page(
        &self,
        topics: &[String],
        page: u32,
    ) -> Result<Vec<RepositoryRecord>, SearchError> {
        let url = build_search_url(&self.base_url, topics, page);
        debug!(%url, "requesting search page");

        let response = match self.agent.get(&url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                warn!(status, page, "search request rejected");
                return Err(SearchError::http(status, &body));
            }
            Err(ureq::Error::Transport(transport)) => {
                warn!(error = %transport, "search request failed");
                return Err(SearchError::Network(transport.to_string()));
            }
        };

        let body = response.into_string().map_err(|e| SearchError::Network(e.to_string()))?;
        let records = parse_search_response(&body)?;
        info!(page, count = records.len(), "fetched search page");
        Ok(records)
    }
}
