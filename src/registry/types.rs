use serde::Deserialize;

/// Top-level search response: an `items` array of repositories.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResponse {
    pub items: Vec<SearchItem>,
}

/// One repository entry from the search endpoint.
///
/// `name` and `stargazers_count` are required; an entry without them is
/// a parse failure, not a silently skipped row. `description` is null
/// for repositories without one.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SearchItem {
    pub name: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
}
