use futures::future::join_all;
use indicatif::ProgressBar;
use tracing::{info, warn};

use crate::fetcher::{fetch_license, LicenseLocation};
use crate::github::{RawContentFetcher, SearchClient};
use crate::models::{LibraryReport, Outcome};
use crate::resolver::{resolve, Resolution};
use crate::retry::RetryPolicy;

pub struct PipelineSettings {
    pub language: String,
    pub location: LicenseLocation,
    pub retry: RetryPolicy,
    /// Libraries processed at once; values below 1 are treated as 1.
    pub concurrency: usize,
}

/// Resolves each library to a repository and fetches its license.
pub struct Pipeline {
    search: Box<dyn SearchClient>,
    fetcher: Box<dyn RawContentFetcher>,
    settings: PipelineSettings,
}

impl Pipeline {
    pub fn new(
        search: Box<dyn SearchClient>,
        fetcher: Box<dyn RawContentFetcher>,
        settings: PipelineSettings,
    ) -> Self {
        Pipeline {
            search,
            fetcher,
            settings,
        }
    }

    /// Process every library and return one report per library, in input order.
    ///
    /// Libraries run in batches of `concurrency`; a failure for one library
    /// never stops the others.
    pub async fn run(
        &self,
        libraries: &[String],
        progress: Option<&ProgressBar>,
    ) -> Vec<LibraryReport> {
        let mut reports = Vec::with_capacity(libraries.len());

        for batch in libraries.chunks(self.settings.concurrency.max(1)) {
            let results = join_all(batch.iter().map(|name| self.process(name))).await;

            for report in results {
                if let Some(pb) = progress {
                    pb.set_message(report.name.clone());
                    pb.inc(1);
                }
                reports.push(report);
            }
        }

        reports
    }

    async fn process(&self, name: &str) -> LibraryReport {
        let outcome = match resolve(
            self.search.as_ref(),
            &self.settings.retry,
            name,
            &self.settings.language,
        )
        .await
        {
            Ok(Resolution::Found(repository)) => {
                let candidates = self.settings.location.candidate_urls(&repository);
                let license =
                    fetch_license(self.fetcher.as_ref(), &self.settings.retry, &candidates).await;
                match license {
                    Some(license) => {
                        info!(library = name, url = %license.url, "license fetched");
                        Outcome::Licensed {
                            repository,
                            license,
                        }
                    }
                    None => {
                        warn!(
                            library = name,
                            repository = %repository.full_name,
                            "no license file found"
                        );
                        Outcome::SoftMiss { repository }
                    }
                }
            }
            Ok(Resolution::NoMatch) => Outcome::NoMatch,
            Err(err) => {
                warn!(library = name, error = %err, "repository search failed");
                Outcome::Failed {
                    reason: err.to_string(),
                }
            }
        };

        LibraryReport {
            name: name.to_string(),
            outcome,
        }
    }
}
