use tracing::{debug, warn};

use crate::github::{FetchError, SearchClient};
use crate::models::RepositoryMatch;
use crate::retry::RetryPolicy;

/// Result of looking a library up on the code host.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(RepositoryMatch),
    NoMatch,
}

/// Search query for a library, restricted to one language.
pub fn build_query(library: &str, language: &str) -> String {
    if language.is_empty() {
        library.to_string()
    } else {
        format!("{} language:{}", library, language)
    }
}

/// Resolve `library` to a repository using the "select highest-ranked match" policy.
///
/// The search ranking is trusted as-is; an empty result is [`Resolution::NoMatch`].
pub async fn resolve(
    search: &dyn SearchClient,
    retry: &RetryPolicy,
    library: &str,
    language: &str,
) -> Result<Resolution, FetchError> {
    let query = build_query(library, language);
    let matches = retry
        .run("search", || search.search_repositories(&query))
        .await?;

    match matches.into_iter().next() {
        Some(repo) => {
            debug!(library, repository = %repo.full_name, "resolved");
            Ok(Resolution::Found(repo))
        }
        None => {
            warn!(library, %query, "no repository found");
            Ok(Resolution::NoMatch)
        }
    }
}
