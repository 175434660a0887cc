use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::{FetchError, RawContentFetcher};

/// Plain GET client for `raw.githubusercontent.com`-style hosts.
pub struct RawContentClient {
    client: Client,
}

impl RawContentClient {
    pub fn new(client: Client) -> Self {
        RawContentClient { client }
    }
}

#[async_trait]
impl RawContentFetcher for RawContentClient {
    async fn fetch(&self, url: &str) -> Result<Option<String>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::transport(url, e))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
            return Err(FetchError::status(url, status));
        }
        if status != StatusCode::OK {
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::transport(url, e))?;
        Ok(Some(body))
    }
}
