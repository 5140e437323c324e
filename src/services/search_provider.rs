use async_trait::async_trait;
use thiserror::Error;

/// A single web search: the full query text plus the region to search from.
/// The language restriction is carried by the `site:` clause in `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub region: String,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("search provider answered with status {0}")]
    Status(u16),

    #[error("blocked by captcha or consent page")]
    Blocked,
}

/// External web search. Implementations return result URLs in the order the
/// provider ranked them.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<String>, SearchError>;

    fn name(&self) -> &'static str;
}
