use serde::{Deserialize, Serialize};

/// The repository chosen for a library by the search step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryMatch {
    /// Owning user or organization.
    pub owner: String,
    /// Fully qualified `owner/name`.
    pub full_name: String,
    /// Branch the code host reports as default, when the search result carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
}

impl RepositoryMatch {
    /// Build a match from a `owner/name` string. Returns `None` when there is no owner part.
    pub fn from_full_name(full_name: &str) -> Option<Self> {
        let (owner, name) = full_name.split_once('/')?;
        if owner.is_empty() || name.is_empty() {
            return None;
        }
        Some(RepositoryMatch {
            owner: owner.to_string(),
            full_name: full_name.to_string(),
            default_branch: None,
        })
    }
}

/// A license body and the URL it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseText {
    pub url: String,
    pub body: String,
}

/// What happened to one library during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Repository found and a license file fetched.
    Licensed {
        repository: RepositoryMatch,
        license: LicenseText,
    },
    /// Repository found but no candidate license path succeeded.
    SoftMiss { repository: RepositoryMatch },
    /// The search returned no repositories.
    NoMatch,
    /// The search itself failed after retries.
    Failed { reason: String },
}

impl Outcome {
    pub fn repository(&self) -> Option<&RepositoryMatch> {
        match self {
            Outcome::Licensed { repository, .. } | Outcome::SoftMiss { repository } => {
                Some(repository)
            }
            Outcome::NoMatch | Outcome::Failed { .. } => None,
        }
    }

    pub fn license(&self) -> Option<&LicenseText> {
        match self {
            Outcome::Licensed { license, .. } => Some(license),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Licensed { .. } => write!(f, "licensed"),
            Outcome::SoftMiss { .. } => write!(f, "no license file"),
            Outcome::NoMatch => write!(f, "no repository"),
            Outcome::Failed { .. } => write!(f, "failed"),
        }
    }
}

/// Per-library result, kept in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryReport {
    pub name: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    Text,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}
