//! `license-combiner`: find each library's GitHub repository and combine their license files.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and set up logging.
//! 2. Load config ([`config::load_config`]) and apply CLI overrides.
//! 3. Read the library list ([`input::load_libraries`]).
//! 4. For each library, search GitHub and take the top match ([`resolver`]),
//!    then probe its license files ([`fetcher`]); driven by [`pipeline`].
//! 5. Render the combined document ([`format`]) and write it ([`writer`]).
//! 6. Print the run report ([`report`]).
//! 7. Exit `1` if `--fail-on-miss` is set and a library has no license.

mod cli;
mod config;
mod fetcher;
mod format;
mod github;
mod input;
mod models;
mod pipeline;
mod report;
mod resolver;
mod retry;
mod writer;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use cli::{Cli, ReportFormat};
use config::load_config;
use fetcher::LicenseLocation;
use format::formatter_for;
use github::raw::RawContentClient;
use github::search::GitHubSearch;
use pipeline::{Pipeline, PipelineSettings};
use retry::RetryPolicy;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let config = load_config(&cwd, cli.config.as_deref())?.with_overrides(&cli);
    debug!(?config, "configuration loaded");

    let libraries = input::load_libraries(&config.input)?;
    info!(count = libraries.len(), input = %config.input.display(), "libraries loaded");

    if libraries.is_empty() {
        eprintln!(
            "No library names found in {}",
            config.input.display()
        );
    }

    let client = github::build_http_client(config.network.timeout())
        .context("failed to build HTTP client")?;

    if config.search.token.is_none() {
        info!("no GitHub token configured; search requests are unauthenticated");
    }

    let pipeline = Pipeline::new(
        Box::new(GitHubSearch::new(
            client.clone(),
            config.search.api_url.clone(),
            config.search.token.clone(),
        )),
        Box::new(RawContentClient::new(client)),
        PipelineSettings {
            language: config.search.language.clone(),
            location: LicenseLocation {
                raw_url: config.license.raw_url.clone(),
                branch: config.license.branch.clone(),
                files: config.license.files.clone(),
                use_default_branch: config.license.use_default_branch,
            },
            retry: RetryPolicy::new(config.network.retries)
                .with_base_delay(config.network.retry_delay()),
            concurrency: config.network.concurrency,
        },
    );

    let pb = if !cli.quiet && !libraries.is_empty() {
        let pb = ProgressBar::new(libraries.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let reports = pipeline.run(&libraries, pb.as_ref()).await;

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    let document = formatter_for(config.format).render(&reports);
    writer::write_output(&config.output, &document)?;
    info!(
        output = %config.output.display(),
        format = %config.format,
        bytes = document.len(),
        "combined license written"
    );

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&reports, &config.output, cli.verbose, cli.quiet);
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        ReportFormat::None => {}
    }

    let missing = reports
        .iter()
        .filter(|r| r.outcome.license().is_none())
        .count();

    if cli.fail_on_miss && missing > 0 {
        if !cli.quiet {
            eprintln!(
                "  {} {} of {} libraries have no license",
                "✗".red(),
                missing,
                reports.len()
            );
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Diagnostics go to stderr. `RUST_LOG` wins over the verbosity flags.
fn init_logging(cli: &Cli) {
    let default_level = if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
