use std::path::PathBuf;

use clap::Parser;

use crate::models::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "license-combiner",
    about = "Find each library's GitHub repository and combine their license files",
    version
)]
pub struct Cli {
    /// File listing one library name per line [default: library_list.txt]
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Combined license output file [default: COMBINED_LICENSE]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: html]
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Language filter for the repository search [default: swift]
    #[arg(long)]
    pub language: Option<String>,

    /// Branch to read license files from [default: master]
    #[arg(long)]
    pub branch: Option<String>,

    /// Read license files from the repository's reported default branch
    #[arg(long = "default-branch")]
    pub use_default_branch: bool,

    /// GitHub API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Config file [default: ./.license-combiner/config.toml, fallback ~/.config/license-combiner/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of libraries processed at once [default: 4]
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: Option<u16>,

    /// Run report printed after the output is written
    #[arg(long, default_value = "terminal", value_name = "REPORT")]
    pub report: ReportFormat,

    /// Exit with status 1 when any library ends up without a license
    #[arg(long)]
    pub fail_on_miss: bool,

    /// Show every library in the report and log at info level
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the summary line
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FormatArg {
    Html,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
    None,
}
