use std::path::Path;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::models::{LibraryReport, Outcome};

/// Print the run summary, then a table of libraries without a license (all libraries with `verbose`).
pub fn render(reports: &[LibraryReport], output: &Path, verbose: bool, quiet: bool) {
    let total = reports.len();
    let licensed = count(reports, |o| matches!(o, Outcome::Licensed { .. }));
    let soft_miss = count(reports, |o| matches!(o, Outcome::SoftMiss { .. }));
    let no_match = count(reports, |o| matches!(o, Outcome::NoMatch));
    let failed = count(reports, |o| matches!(o, Outcome::Failed { .. }));

    if quiet {
        println!(
            "Total: {}  Licensed: {}  No license: {}  No repository: {}  Failed: {}",
            total,
            licensed.to_string().green(),
            soft_miss.to_string().yellow(),
            no_match.to_string().yellow(),
            failed.to_string().red(),
        );
        return;
    }

    println!(
        "\n {} v{}",
        "license-combiner".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Wrote: {}\n", output.display());

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Libraries          : {}", total));
    println!(
        " │  {:<48} │",
        format!("{}  Licensed        : {:>4}", "✓".green(), licensed)
    );
    println!(
        " │  {:<48} │",
        format!("{}  No license file : {:>4}", "⚠".yellow(), soft_miss)
    );
    println!(
        " │  {:<48} │",
        format!("{}  No repository   : {:>4}", "⚠".yellow(), no_match)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Failed          : {:>4}", "✗".red(), failed)
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    let shown: Vec<&LibraryReport> = reports
        .iter()
        .filter(|r| verbose || r.outcome.license().is_none())
        .collect();

    if !shown.is_empty() {
        if verbose {
            println!(" {} All libraries:\n", "[INFO]".cyan().bold());
        } else {
            println!(" {} Libraries without a license:\n", "[WARN]".yellow().bold());
        }
        println!("{}", build_table(&shown));
        println!();
    }
}

fn build_table(reports: &[&LibraryReport]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Library").add_attribute(Attribute::Bold),
            Cell::new("Repository").add_attribute(Attribute::Bold),
            Cell::new("Source").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

    for report in reports {
        let repository = report
            .outcome
            .repository()
            .map(|r| r.full_name.as_str())
            .unwrap_or("-");

        let source = match &report.outcome {
            Outcome::Licensed { license, .. } => license.url.as_str(),
            Outcome::Failed { reason } => reason.as_str(),
            _ => "-",
        };

        let status_color = match report.outcome {
            Outcome::Licensed { .. } => Color::Green,
            Outcome::SoftMiss { .. } | Outcome::NoMatch => Color::Yellow,
            Outcome::Failed { .. } => Color::Red,
        };

        table.add_row(vec![
            Cell::new(&report.name),
            Cell::new(repository),
            Cell::new(source),
            Cell::new(report.outcome.to_string()).fg(status_color),
        ]);
    }

    table
}

fn count(reports: &[LibraryReport], pred: impl Fn(&Outcome) -> bool) -> usize {
    reports.iter().filter(|r| pred(&r.outcome)).count()
}
