//! Locate the `[features]` table within a manifest. This is a line scanner,
//! not a TOML parser. We only need the raw lines so the comments survive.

use crate::FeatureDocsError;
use tracing::trace;

/// Header line that opens the feature table
pub const FEATURES_HEADER: &str = "[features]";

/// Get the trimmed lines of the manifest's `[features]` table, excluding the
/// header itself. The table ends at the next table header, or the end of the
/// file.
pub fn feature_table(manifest: &str) -> Result<Vec<&str>, FeatureDocsError> {
    let mut lines = manifest.lines().map(str::trim);
    if !lines.by_ref().any(|line| line == FEATURES_HEADER) {
        return Err(FeatureDocsError::MissingFeaturesSection);
    }

    let table: Vec<&str> =
        lines.take_while(|line| !is_table_header(line)).collect();
    trace!(lines = table.len(), "Located features table");
    Ok(table)
}

/// Does this (trimmed) line open a new table?
fn is_table_header(line: &str) -> bool {
    line.starts_with('[') && line.ends_with(']')
}
