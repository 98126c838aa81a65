//! Topic tag list <-> single column codec

/// ASCII unit separator; GitHub topics are `[a-z0-9-]` so it never occurs in a tag
pub const TAG_SEPARATOR: char = '\u{1f}';

/// Join tags for storage. An empty list is stored as `NULL` so that `[""]` stays distinct.
pub fn join_tags(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        None
    } else {
        let separator = TAG_SEPARATOR.to_string();
        Some(tags.join(separator.as_str()))
    }
}

/// Inverse of [`join_tags`]
pub fn split_tags(stored: Option<&str>) -> Vec<String> {
    match stored {
        None => Vec::new(),
        Some(s) => s.split(TAG_SEPARATOR).map(str::to_string).collect(),
    }
}
