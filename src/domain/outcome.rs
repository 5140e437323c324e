use serde::Serialize;

/// Result of a lookup: either the extracted excerpt or the fallback message,
/// paired with whatever URL the search resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryOutcome {
    pub content: String,
    pub url: Option<String>,
}
