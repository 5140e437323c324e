use async_trait::async_trait;
use reqwest::{header::COOKIE, Client};
use scraper::{Html, Selector};
use serde::Serialize;

use crate::domain::result_link::extract_result_url;

use super::{SearchError, SearchProvider, SearchQuery};

const GOOGLE_URL: &str = "https://www.google.com/search";
const NUM_RESULTS: usize = 10;
// Interface language of the results page; the article language comes from the
// `site:` clause.
const INTERFACE_LANG: &str = "en";

#[derive(Serialize)]
struct GoogleQuery<'a> {
    q: &'a str,
    num: usize,
    hl: &'a str,
    gl: &'a str,
}

/// Scrapes Google's HTML results page. The client carries the configured
/// default headers.
pub struct GoogleScraper {
    client: Client,
    search_url: String,
}

impl GoogleScraper {
    pub fn new(client: Client) -> Self {
        GoogleScraper::with_search_url(client, GOOGLE_URL)
    }

    pub fn with_search_url(client: Client, search_url: impl Into<String>) -> Self {
        GoogleScraper {
            client,
            search_url: search_url.into(),
        }
    }
}

#[async_trait]
impl SearchProvider for GoogleScraper {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<String>, SearchError> {
        let params = GoogleQuery {
            q: &query.text,
            num: NUM_RESULTS + 2,
            hl: INTERFACE_LANG,
            gl: &query.region,
        };

        let res = self
            .client
            .get(&self.search_url)
            .query(&params)
            .header(COOKIE, "CONSENT=YES+")
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(SearchError::Status(res.status().as_u16()));
        }

        let html_content = res.text().await?;
        let links = parse_result_links(&html_content)?;

        log::info!("Found {} result urls for query: {}", links.len(), query.text);

        Ok(links)
    }

    fn name(&self) -> &'static str {
        "google"
    }
}

/// Pulls result URLs, in page order, out of a Google results page.
///
/// A captcha ("/sorry/") or consent form is a block. Any other page without
/// result links is a plain "no results" page, whatever its language.
pub fn parse_result_links(html_content: &str) -> Result<Vec<String>, SearchError> {
    let a_tag_selector = Selector::parse("a[href]").unwrap();
    let block_selector = Selector::parse(
        r#"form[action*="/sorry/"], form[action*="consent.google"], #captcha-form"#,
    )
    .unwrap();

    let html_document = Html::parse_document(html_content);

    let links: Vec<String> = html_document
        .select(&a_tag_selector)
        .filter_map(|tag| tag.value().attr("href"))
        .filter_map(extract_result_url)
        .collect();

    let blocked = html_document.select(&block_selector).next().is_some();

    match (links.is_empty(), blocked) {
        (true, true) => Err(SearchError::Blocked),
        _ => Ok(links),
    }
}
