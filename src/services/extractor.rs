use scraper::{Html, Selector};
use thiserror::Error;

use super::FetchError;

pub const BODY_CONTENT_ID: &str = "bodyContent";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("page has no #bodyContent element")]
    MissingContainer,

    #[error("no paragraph text found")]
    Empty,
}

/// Text of every `<p>` under `#bodyContent`, in document order and untrimmed.
pub fn body_paragraphs(html_content: &str) -> Result<Vec<String>, ExtractError> {
    let container_selector = Selector::parse(&format!("#{}", BODY_CONTENT_ID)).unwrap();
    let p_selector = Selector::parse("p").unwrap();

    let html_document = Html::parse_document(html_content);
    let container = html_document
        .select(&container_selector)
        .next()
        .ok_or(ExtractError::MissingContainer)?;

    Ok(container
        .select(&p_selector)
        .map(|p| p.text().collect())
        .collect())
}
