use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Public GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Fixed recency order appended to every query
pub const SORT_CLAUSE: &str = "sort:updated-desc";

// Characters that would end or split a `topic:<value>` clause inside `q=`
const TOPIC_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`');

/// Build the `q=` value: one `topic:<value>` clause per topic, in order, then the sort clause
///
/// # Examples
///
/// ```
/// use github_topics::github::build_query;
///
/// let topics = vec!["rust".to_string(), "tui".to_string()];
/// assert_eq!(build_query(&topics), "topic:rust+topic:tui+sort:updated-desc");
/// ```
pub fn build_query(topics: &[String]) -> String {
    topics
        .iter()
        .map(|topic| format!("topic:{}", utf8_percent_encode(topic, TOPIC_ENCODE_SET)))
        .chain(std::iter::once(SORT_CLAUSE.to_string()))
        .collect::<Vec<_>>()
        .join("+")
}

/// Full URL of one search page against `base_url`
pub fn build_search_url(base_url: &str, topics: &[String], page: u32) -> String {
    format!(
        "{}/search/repositories?q={}&page={}",
        base_url.trim_end_matches('/'),
        build_query(topics),
        page
    )
}
