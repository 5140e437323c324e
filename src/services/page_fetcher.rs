use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};
use thiserror::Error;

use crate::configuration::HttpSettings;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Body of a successful (2xx) GET.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Client shared by search and page fetches, carrying the configured headers
/// on every request.
pub fn build_client(http: &HttpSettings) -> Result<Client, FetchError> {
    let mut headers = HeaderMap::new();
    for (name, value) in http.headers.iter() {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| FetchError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| FetchError::InvalidHeader {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        headers.insert(header_name, header_value);
    }

    let mut builder = Client::builder().default_headers(headers).cookie_store(true);
    if let Some(secs) = http.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    Ok(builder.build()?)
}

pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(client: Client) -> Self {
        ReqwestFetcher { client }
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let res = self.client.get(url).send().await?;

        if !res.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: res.status().as_u16(),
            });
        }

        Ok(res.text().await?)
    }
}
