use tracing::{debug, warn};

use crate::github::RawContentFetcher;
use crate::models::{LicenseText, RepositoryMatch};
use crate::retry::RetryPolicy;

/// Where license files are looked for in a repository.
#[derive(Debug, Clone)]
pub struct LicenseLocation {
    pub raw_url: String,
    pub branch: String,
    pub files: Vec<String>,
    pub use_default_branch: bool,
}

impl LicenseLocation {
    /// The repository's reported default branch when enabled, else the configured one.
    fn branch_for<'a>(&'a self, repo: &'a RepositoryMatch) -> &'a str {
        match (&repo.default_branch, self.use_default_branch) {
            (Some(branch), true) => branch,
            _ => &self.branch,
        }
    }

    /// Candidate URLs in probe order: `<raw_url>/<owner>/<repo>/<branch>/<file>`.
    pub fn candidate_urls(&self, repo: &RepositoryMatch) -> Vec<String> {
        let base = self.raw_url.trim_end_matches('/');
        let branch = self.branch_for(repo);
        self.files
            .iter()
            .map(|file| format!("{}/{}/{}/{}", base, repo.full_name, branch, file))
            .collect()
    }
}

/// Probe the candidates in order and return the first one that exists.
///
/// Later candidates are never requested once one succeeds. A candidate that
/// keeps failing at the network level is logged and skipped.
pub async fn fetch_license(
    fetcher: &dyn RawContentFetcher,
    retry: &RetryPolicy,
    candidates: &[String],
) -> Option<LicenseText> {
    for url in candidates {
        match retry.run("license", || fetcher.fetch(url)).await {
            Ok(Some(body)) => {
                debug!(%url, bytes = body.len(), "license found");
                return Some(LicenseText {
                    url: url.clone(),
                    body,
                });
            }
            Ok(None) => debug!(%url, "no license at candidate"),
            Err(err) => warn!(%url, error = %err, "license probe failed"),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::FetchError;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct MapFetcher {
        files: HashMap<String, Result<String, StatusCode>>,
        requested: Mutex<Vec<String>>,
    }

    impl MapFetcher {
        fn with(mut self, url: &str, body: Result<&str, StatusCode>) -> Self {
            self.files.insert(url.to_string(), body.map(str::to_string));
            self
        }
    }

    #[async_trait]
    impl RawContentFetcher for MapFetcher {
        async fn fetch(&self, url: &str) -> Result<Option<String>, FetchError> {
            self.requested.lock().unwrap().push(url.to_string());
            match self.files.get(url) {
                Some(Ok(body)) => Ok(Some(body.clone())),
                Some(Err(status)) => Err(FetchError::status(url, *status)),
                None => Ok(None),
            }
        }
    }

    fn location() -> LicenseLocation {
        LicenseLocation {
            raw_url: "https://raw.example.com/".to_string(),
            branch: "master".to_string(),
            files: vec!["LICENSE".to_string(), "LICENSE.md".to_string()],
            use_default_branch: false,
        }
    }

    fn repo() -> RepositoryMatch {
        RepositoryMatch::from_full_name("Alamofire/Alamofire").unwrap()
    }

    fn retry() -> RetryPolicy {
        RetryPolicy::new(1).with_base_delay(Duration::ZERO)
    }

    #[test]
    fn test_candidate_urls_in_order() {
        let urls = location().candidate_urls(&repo());
        assert_eq!(
            urls,
            vec![
                "https://raw.example.com/Alamofire/Alamofire/master/LICENSE",
                "https://raw.example.com/Alamofire/Alamofire/master/LICENSE.md",
            ]
        );
    }

    #[test]
    fn test_default_branch_only_when_enabled() {
        let mut repo = repo();
        repo.default_branch = Some("main".to_string());

        let mut loc = location();
        assert!(loc.candidate_urls(&repo)[0].contains("/master/"));

        loc.use_default_branch = true;
        assert!(loc.candidate_urls(&repo)[0].contains("/main/"));
    }

    #[tokio::test]
    async fn test_first_success_stops_probing() {
        let urls = location().candidate_urls(&repo());
        let fetcher = MapFetcher::default()
            .with(&urls[0], Ok("MIT License"))
            .with(&urls[1], Ok("other"));

        let license = fetch_license(&fetcher, &retry(), &urls).await.unwrap();
        assert_eq!(license.body, "MIT License");
        assert_eq!(license.url, urls[0]);
        assert_eq!(*fetcher.requested.lock().unwrap(), vec![urls[0].clone()]);
    }

    #[tokio::test]
    async fn test_falls_back_to_markdown_variant() {
        let urls = location().candidate_urls(&repo());
        let fetcher = MapFetcher::default().with(&urls[1], Ok("# MIT"));

        let license = fetch_license(&fetcher, &retry(), &urls).await.unwrap();
        assert_eq!(license.body, "# MIT");
        assert_eq!(fetcher.requested.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_all_missing_is_soft_miss() {
        let urls = location().candidate_urls(&repo());
        let fetcher = MapFetcher::default();
        assert!(fetch_license(&fetcher, &retry(), &urls).await.is_none());
    }

    #[tokio::test]
    async fn test_failing_candidate_is_skipped() {
        let urls = location().candidate_urls(&repo());
        let fetcher = MapFetcher::default()
            .with(&urls[0], Err(StatusCode::BAD_GATEWAY))
            .with(&urls[1], Ok("# MIT"));

        let license = fetch_license(&fetcher, &retry(), &urls).await.unwrap();
        assert_eq!(license.body, "# MIT");
        // first candidate tried twice (one retry), then the second once
        assert_eq!(fetcher.requested.lock().unwrap().len(), 3);
    }
}
