/// Remote search client tests against a mock GitHub API
///
/// These tests exercise the real request path: url building, transport and decoding
mod common;

use common::{RepoJsonBuilder, json_response, recorded_query, search_body, search_server};
use github_topics::github::{GithubClient, RepositorySearch, SearchError};
use github_topics::models::RepositoryRecord;
use github_topics::models::repository::NO_DESCRIPTION;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer};

fn topics(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Run the blocking client off the async runtime
async fn fetch(
    server: &MockServer,
    values: &[&str],
    page: u32,
) -> Result<Vec<RepositoryRecord>, SearchError> {
    let base_url = server.uri();
    let topics = topics(values);
    tokio::task::spawn_blocking(move || {
        GithubClient::with_base_url(base_url).fetch_page(&topics, page)
    })
    .await
    .expect("Search task panicked")
}

#[tokio::test]
async fn test_single_topic_query_and_empty_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("page", "1"))
        .respond_with(json_response(200, search_body(&[])))
        .expect(1)
        .mount(&server)
        .await;

    let records = fetch(&server, &["kotlin"], 1).await.unwrap();

    assert!(records.is_empty(), "Empty items should be an empty page, not an error");
    assert_eq!(recorded_query(&server).await, "q=topic:kotlin+sort:updated-desc&page=1");
}

#[tokio::test]
async fn test_multiple_topics_keep_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("page", "3"))
        .respond_with(json_response(200, search_body(&[])))
        .expect(1)
        .mount(&server)
        .await;

    fetch(&server, &["rust", "cli", "tui"], 3).await.unwrap();

    assert_eq!(
        recorded_query(&server).await,
        "q=topic:rust+topic:cli+topic:tui+sort:updated-desc&page=3"
    );
}

#[tokio::test]
async fn test_topic_with_reserved_characters_is_encoded() {
    let server = search_server(json_response(200, search_body(&[]))).await;

    fetch(&server, &["c++", "a&b"], 1).await.unwrap();

    assert_eq!(
        recorded_query(&server).await,
        "q=topic:c%2B%2B+topic:a%26b+sort:updated-desc&page=1"
    );
}

#[tokio::test]
async fn test_records_follow_response_order() {
    let body = search_body(&[
        RepoJsonBuilder::new("first").stars(5).topics(&["rust", "async"]),
        RepoJsonBuilder::new("second").null_description().without("language"),
    ]);
    let server = search_server(json_response(200, body)).await;

    let records = fetch(&server, &["rust"], 1).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "first");
    assert_eq!(records[0].star_count, 5);
    assert_eq!(records[0].topic_tags, vec!["rust", "async"]);
    assert_eq!(records[0].avatar_url.as_deref(), Some("https://avatars.example/octo"));
    assert_eq!(records[1].url, "https://github.com/octo/second");
    assert_eq!(records[1].description, NO_DESCRIPTION);
    assert_eq!(records[1].primary_language, None);
}

#[tokio::test]
async fn test_http_error_status_is_reported() {
    let server = search_server(json_response(
        403,
        r#"{"message":"API rate limit exceeded for 127.0.0.1."}"#,
    ))
    .await;

    let err = fetch(&server, &["rust"], 1).await.unwrap_err();

    match err {
        SearchError::Http { status, message } => {
            assert_eq!(status, 403);
            assert!(message.contains("rate limit"));
        }
        other => panic!("Expected HTTP error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = search_server(json_response(200, "{\"items\": [")).await;

    let err = fetch(&server, &["rust"], 1).await.unwrap_err();

    assert!(matches!(err, SearchError::Parse(_)));
}

#[tokio::test]
async fn test_missing_required_field_fails_whole_page() {
    let body = search_body(&[
        RepoJsonBuilder::new("ok"),
        RepoJsonBuilder::new("broken").without("stargazers_count"),
    ]);
    let server = search_server(json_response(200, body)).await;

    let result = fetch(&server, &["rust"], 1).await;

    assert!(matches!(result, Err(SearchError::Parse(_))));
}

#[test]
fn test_unreachable_host_is_network_error() {
    // Bind then drop to get a port nobody listens on
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = GithubClient::with_base_url(format!("http://127.0.0.1:{}", port));

    let err = client.fetch_page(&topics(&["rust"]), 1).unwrap_err();

    assert!(matches!(err, SearchError::Network(_)));
}
