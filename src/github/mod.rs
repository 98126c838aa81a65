//! Remote search client for the GitHub repository search endpoint.
//!
//! One page of results is fetched per call: topics become `topic:<value>`
//! clauses joined with `+`, followed by a fixed `sort:updated-desc` order and
//! the requested page number. The response carries no paging metadata, an
//! empty page is the only end-of-results signal.

pub mod client;
pub mod deserializers;
pub mod error;
pub mod query;
pub mod response;

pub use client::{GithubClient, RepositorySearch};
pub use error::SearchError;
pub use query::{DEFAULT_API_URL, build_query, build_search_url};
pub use response::parse_search_response;
