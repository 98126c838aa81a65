use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder shown when a repository has no description
pub const NO_DESCRIPTION: &str = "No description";

/// A repository returned by the topic search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub url: String,
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub star_count: u32,
    pub watcher_count: u32,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub topic_tags: Vec<String>,
    #[serde(default)]
    pub primary_language: Option<String>,
}

/// Topic equality as used for tag chips and toggling: case-insensitive, Unicode aware
pub fn same_topic(a: &str, b: &str) -> bool {
    a.chars().flat_map(char::to_lowercase).eq(b.chars().flat_map(char::to_lowercase))
}
