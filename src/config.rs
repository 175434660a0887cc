use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::Cli;
use crate::models::OutputFormat;

/// Root configuration structure, deserialized from `.license-combiner/config.toml`.
///
/// Every field has a default, so an empty file is valid.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Library list, one name per line.
    pub input: PathBuf,
    /// Combined license file written at the end of the run.
    pub output: PathBuf,
    pub format: OutputFormat,
    pub search: SearchConfig,
    pub license: LicenseConfig,
    pub network: NetworkConfig,
}

/// Repository search settings.
#[derive(Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Base URL of the GitHub REST API.
    pub api_url: String,
    /// Value of the `language:` qualifier added to every query.
    pub language: String,
    /// Bearer token. Anonymous search works but is heavily rate limited.
    pub token: Option<String>,
}

/// Where license files are looked up.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LicenseConfig {
    /// Raw-content host serving `<owner>/<repo>/<branch>/<file>`.
    pub raw_url: String,
    pub branch: String,
    /// Candidate file names, probed in order.
    pub files: Vec<String>,
    /// Prefer the default branch reported by the search result over `branch`.
    pub use_default_branch: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub timeout_secs: u64,
    /// Extra attempts for timeouts, connection failures, 429 and 5xx.
    pub retries: u32,
    /// Delay before the first retry; doubles on each further attempt.
    pub retry_delay_ms: u64,
    /// Libraries processed at once. `1` is strictly sequential.
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from("library_list.txt"),
            output: PathBuf::from("COMBINED_LICENSE"),
            format: OutputFormat::Html,
            search: SearchConfig::default(),
            license: LicenseConfig::default(),
            network: NetworkConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            api_url: "https://api.github.com".to_string(),
            language: "swift".to_string(),
            token: None,
        }
    }
}

impl Default for LicenseConfig {
    fn default() -> Self {
        LicenseConfig {
            raw_url: "https://raw.githubusercontent.com".to_string(),
            branch: "master".to_string(),
            files: vec!["LICENSE".to_string(), "LICENSE.md".to_string()],
            use_default_branch: false,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            timeout_secs: 10,
            retries: 2,
            retry_delay_ms: 500,
            concurrency: 4,
        }
    }
}

impl std::fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchConfig")
            .field("api_url", &self.api_url)
            .field("language", &self.language)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl NetworkConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

impl Config {
    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(input) = &cli.input {
            self.input = input.clone();
        }
        if let Some(output) = &cli.output {
            self.output = output.clone();
        }
        if let Some(format) = cli.format {
            self.format = format.into();
        }
        if let Some(language) = &cli.language {
            self.search.language = language.clone();
        }
        if let Some(token) = &cli.token {
            self.search.token = Some(token.clone());
        }
        if let Some(branch) = &cli.branch {
            self.license.branch = branch.clone();
        }
        if cli.use_default_branch {
            self.license.use_default_branch = true;
        }
        if let Some(concurrency) = cli.concurrency {
            self.network.concurrency = usize::from(concurrency);
        }
        self
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override`: path passed via `--config`
/// 2. `<project_path>/.license-combiner/config.toml`
/// 3. `~/.config/license-combiner/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".license-combiner").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("license-combiner")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}
