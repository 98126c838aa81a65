//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use github_topics::browser::{BrowserError, BrowserLauncher};
use github_topics::github::{RepositorySearch, SearchError};
use github_topics::models::RepositoryRecord;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// JSON response with the given status and raw body
pub fn json_response(status: u16, body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.into(), "application/json")
}

/// Mock API answering every `GET /search/repositories` with `template`
pub async fn search_server(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

/// Raw query string of the single request the server received
pub async fn recorded_query(server: &MockServer) -> String {
    let requests = server.received_requests().await.expect("Request recording is disabled");
    assert_eq!(requests.len(), 1, "Expected exactly one request");
    requests[0].url.query().unwrap_or_default().to_string()
}

/// Builder for one `items[]` entry of a search response
pub struct RepoJsonBuilder {
    value: Value,
}

impl RepoJsonBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            value: json!({
                "name": name,
                "full_name": format!("octo/{}", name),
                "html_url": format!("https://github.com/octo/{}", name),
                "description": format!("{} description", name),
                "updated_at": "2024-05-01T10:00:00Z",
                "pushed_at": "2024-05-01T09:00:00Z",
                "created_at": "2020-01-01T00:00:00Z",
                "stargazers_count": 10,
                "watchers_count": 10,
                "owner": { "login": "octo", "avatar_url": "https://avatars.example/octo" },
                "topics": ["rust"],
                "language": "Rust"
            }),
        }
    }

    pub fn stars(mut self, stars: u32) -> Self {
        self.value["stargazers_count"] = json!(stars);
        self.value["watchers_count"] = json!(stars);
        self
    }

    pub fn topics(mut self, topics: &[&str]) -> Self {
        self.value["topics"] = json!(topics);
        self
    }

    pub fn null_description(mut self) -> Self {
        self.value["description"] = Value::Null;
        self
    }

    pub fn without(mut self, field: &str) -> Self {
        if let Some(obj) = self.value.as_object_mut() {
            obj.remove(field);
        }
        self
    }

    pub fn to_value(&self) -> Value {
        self.value.clone()
    }
}

/// Full response body `{ "total_count": n, "items": [...] }`
pub fn search_body(items: &[RepoJsonBuilder]) -> String {
    let items: Vec<Value> = items.iter().map(RepoJsonBuilder::to_value).collect();
    json!({ "total_count": items.len(), "incomplete_results": false, "items": items }).to_string()
}

/// In-memory record with stable timestamps
pub fn record(name: &str) -> RepositoryRecord {
    let ts = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    RepositoryRecord {
        url: format!("https://github.com/octo/{}", name),
        name: name.to_string(),
        full_name: format!("octo/{}", name),
        description: format!("{} description", name),
        updated_at: ts,
        pushed_at: ts,
        created_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        star_count: 10,
        watcher_count: 10,
        avatar_url: None,
        topic_tags: vec!["rust".to_string()],
        primary_language: Some("Rust".to_string()),
    }
}

/// Search fake that records every call and answers from a fixed script
#[derive(Clone, Default)]
pub struct RecordingSearch {
    pub calls: Arc<Mutex<Vec<(Vec<String>, u32)>>>,
    pub pages: Arc<Mutex<Vec<Result<Vec<RepositoryRecord>, SearchError>>>>,
}

impl RecordingSearch {
    /// Answers are handed out in order; once exhausted, every page is empty
    pub fn with_pages(pages: Vec<Result<Vec<RepositoryRecord>, SearchError>>) -> Self {
        Self { calls: Arc::default(), pages: Arc::new(Mutex::new(pages)) }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl RepositorySearch for RecordingSearch {
    fn fetch_page(
        &self,
        topics: &[String],
        page: u32,
    ) -> Result<Vec<RepositoryRecord>, SearchError> {
        self.calls.lock().unwrap().push((topics.to_vec(), page));
        let mut pages = self.pages.lock().unwrap();
        if pages.is_empty() { Ok(Vec::new()) } else { pages.remove(0) }
    }
}

/// Browser fake that remembers opened urls
#[derive(Clone, Default)]
pub struct SpyBrowser {
    pub opened: Arc<Mutex<Vec<String>>>,
}

impl BrowserLauncher for SpyBrowser {
    fn open_url(&mut self, url: &str) -> Result<(), BrowserError> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
