//! GitHub access behind two capability traits so the pipeline can run against fakes.
//!
//! - [`SearchClient`]: repository search, implemented by [`search::GitHubSearch`].
//! - [`RawContentFetcher`]: plain file download, implemented by [`raw::RawContentClient`].

pub mod error;
pub mod raw;
pub mod search;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::models::RepositoryMatch;

pub use error::FetchError;

pub const USER_AGENT: &str = concat!("license-combiner/", env!("CARGO_PKG_VERSION"));

/// Searches the code host for repositories.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Run `query` and return matches in the host's ranking order.
    async fn search_repositories(&self, query: &str) -> Result<Vec<RepositoryMatch>, FetchError>;
}

/// Downloads raw files by URL.
#[async_trait]
pub trait RawContentFetcher: Send + Sync {
    /// `Ok(Some(body))` on a success status, `Ok(None)` when the file is not there.
    ///
    /// Transient statuses (429, 5xx) come back as `Err` so callers can retry them.
    async fn fetch(&self, url: &str) -> Result<Option<String>, FetchError>;
}

/// Shared reqwest client with the crate's user agent and request timeout.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}
