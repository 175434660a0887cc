use std::path::Path;

use anyhow::{Context, Result};

/// Read the library list: one name per line, trimmed, blank lines skipped, file order kept.
pub fn load_libraries(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read library list {}", path.display()))?;
    Ok(parse_libraries(&content))
}

fn parse_libraries(content: &str) -> Vec<String> {
    content
        .trim_start_matches('\u{feff}')
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
