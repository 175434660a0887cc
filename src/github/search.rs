use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{FetchError, SearchClient};
use crate::models::RepositoryMatch;

/// Only the top result is ever used.
const RESULTS_PER_PAGE: &str = "1";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    full_name: String,
    #[serde(default)]
    default_branch: Option<String>,
}

/// Repository search against the GitHub REST API (`/search/repositories`).
pub struct GitHubSearch {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubSearch {
    pub fn new(client: Client, api_url: impl Into<String>, token: Option<String>) -> Self {
        GitHubSearch {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }
}

#[async_trait]
impl SearchClient for GitHubSearch {
    async fn search_repositories(&self, query: &str) -> Result<Vec<RepositoryMatch>, FetchError> {
        let url = format!("{}/search/repositories", self.api_url);
        debug!(%url, %query, "searching repositories");

        let mut request = self
            .client
            .get(&url)
            .query(&[("q", query), ("per_page", RESULTS_PER_PAGE)])
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::transport(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(&url, status));
        }

        let data: SearchResponse = response.json().await.map_err(|e| {
            if e.is_decode() {
                FetchError::Decode {
                    url: url.clone(),
                    message: e.to_string(),
                }
            } else {
                FetchError::transport(&url, e)
            }
        })?;

        Ok(data
            .items
            .into_iter()
            .filter_map(|item| {
                let mut repo = RepositoryMatch::from_full_name(&item.full_name)?;
                repo.default_branch = item.default_branch;
                Some(repo)
            })
            .collect())
    }
}
