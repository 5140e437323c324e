use crate::{
    configuration::{LookupSettings, Settings},
    domain::{accumulate_paragraphs, QueryOutcome},
};

use super::{
    body_paragraphs, build_client, ExtractError, FetchError, GoogleScraper, PageFetcher,
    ReqwestFetcher, SearchProvider, SearchQuery,
};

/// Finds the Wikipedia article for a query and cuts a lead excerpt out of it.
///
/// Holds nothing mutable: every call to [`WikiLookup::run`] is independent.
pub struct WikiLookup {
    settings: LookupSettings,
    search_provider: Box<dyn SearchProvider>,
    page_fetcher: Box<dyn PageFetcher>,
}

impl WikiLookup {
    pub fn new(
        settings: LookupSettings,
        search_provider: Box<dyn SearchProvider>,
        page_fetcher: Box<dyn PageFetcher>,
    ) -> Self {
        WikiLookup {
            settings,
            search_provider,
            page_fetcher,
        }
    }

    /// Google search plus a reqwest fetcher, both sending the configured headers.
    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        let client = build_client(&settings.http)?;

        Ok(WikiLookup::new(
            settings.lookup.clone(),
            Box::new(GoogleScraper::new(client.clone())),
            Box::new(ReqwestFetcher::new(client)),
        ))
    }

    pub fn settings(&self) -> &LookupSettings {
        &self.settings
    }

    /// First search result on `<lang>.<site>`, or `None`. Search failures are
    /// logged and reported as not found.
    pub async fn resolve(&self, query: &str) -> Option<String> {
        let target_domain = self.settings.target_domain();
        let search_query = SearchQuery {
            text: format!("{} site:{}", query, target_domain),
            region: self.settings.region.clone(),
        };

        match self.search_provider.search(&search_query).await {
            Ok(links) => links.into_iter().find(|link| link.contains(&target_domain)),
            Err(e) => {
                log::error!(
                    "Error in searching Wikipedia link with {}: {}",
                    self.search_provider.name(),
                    e
                );
                None
            }
        }
    }

    /// Lead excerpt of the page at `url`, or `None` when there is no url or
    /// nothing could be extracted.
    pub async fn extract(&self, url: Option<&str>) -> Option<String> {
        let Some(url) = url else {
            log::warn!("No link provided.");
            return None;
        };

        match self.try_extract(url).await {
            Ok(content) => Some(content),
            Err(ExtractError::Empty) => None,
            Err(ExtractError::Fetch(e)) => {
                log::error!("Error in fetching Wikipedia page: {}", e);
                None
            }
            Err(e) => {
                log::error!("Error in parsing Wikipedia page {}: {}", url, e);
                None
            }
        }
    }

    pub async fn try_extract(&self, url: &str) -> Result<String, ExtractError> {
        let html_content = self.page_fetcher.fetch(url).await?;
        let paragraphs = body_paragraphs(&html_content)?;

        let content = accumulate_paragraphs(paragraphs, self.settings.min_sentences.get());
        match content.is_empty() {
            true => Err(ExtractError::Empty),
            false => Ok(content),
        }
    }

    /// Resolve then extract. Never fails: missing content becomes the fallback
    /// message, and the resolved url (if any) is returned either way.
    pub async fn run(&self, query: &str) -> QueryOutcome {
        let url = self.resolve(query).await;
        let content = self.extract(url.as_deref()).await;

        match content {
            Some(content) => QueryOutcome { content, url },
            None => QueryOutcome {
                content: self.settings.fallback_message.clone(),
                url,
            },
        }
    }
}
