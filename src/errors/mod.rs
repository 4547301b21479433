use anyhow::Context as _;
use std::path::Path;

/// Add context to catalog load errors
pub fn load_context(path: &Path) -> String {
    format!("Failed to load catalog file: {}", path.display())
}

/// Add context to table row parse errors
pub fn row_context(table: &str, row: usize) -> String {
    format!("Failed to parse {} row {}", table, row)
}

/// Add context to preference input errors
pub fn input_context(line: usize) -> String {
    format!("Invalid preference input on line {}", line)
}

/// Wrap result with catalog load context
pub fn with_load_context<T, E>(result: Result<T, E>, path: &Path) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(load_context(path))
}

/// Wrap result with table row context
pub fn with_row_context<T, E>(result: Result<T, E>, table: &str, row: usize) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(row_context(table, row))
}
