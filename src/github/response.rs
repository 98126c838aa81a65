use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::deserializers::{
    default_description, deserialize_description, deserialize_timestamp, null_as_default,
};
use super::error::SearchError;
use crate::models::RepositoryRecord;

/// Top level of `GET /search/repositories`; paging metadata is ignored
#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<RepositoryItem>,
}

#[derive(Debug, Deserialize)]
struct RepositoryItem {
    html_url: String,
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    full_name: Option<String>,
    #[serde(default = "default_description", deserialize_with = "deserialize_description")]
    description: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    updated_at: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pushed_at: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    created_at: DateTime<Utc>,
    stargazers_count: u32,
    watchers_count: u32,
    #[serde(default)]
    owner: Option<Owner>,
    #[serde(default, deserialize_with = "null_as_default")]
    topics: Vec<String>,
    #[serde(default)]
    language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Owner {
    #[serde(default)]
    avatar_url: Option<String>,
}

impl From<RepositoryItem> for RepositoryRecord {
    fn from(item: RepositoryItem) -> Self {
        let full_name = item.full_name.unwrap_or_else(|| item.name.clone());
        RepositoryRecord {
            url: item.html_url,
            name: item.name,
            full_name,
            description: item.description,
            updated_at: item.updated_at,
            pushed_at: item.pushed_at,
            created_at: item.created_at,
            star_count: item.stargazers_count,
            watcher_count: item.watchers_count,
            avatar_url: item.owner.and_then(|o| o.avatar_url),
            topic_tags: item.topics,
            primary_language: item.language,
        }
    }
}

/// Decode a search response body into records, in response order
///
/// A missing required field in any item fails the whole page.
pub fn parse_search_response(body: &str) -> Result<Vec<RepositoryRecord>, SearchError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.items.into_iter().map(RepositoryRecord::from).collect())
}
