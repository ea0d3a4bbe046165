use crate::{
    manifest::FEATURES_HEADER,
    splice::{END_MARKER, START_MARKER},
};
use std::path::PathBuf;
use thiserror::Error;

/// An error that aborts generation. None of these are recoverable; the
/// documentation file is never written once one of these occurs.
#[derive(Debug, Error)]
pub enum FeatureDocsError {
    /// Manifest has no `[features]` table to document
    #[error("Missing `{header}` section in manifest", header = FEATURES_HEADER)]
    MissingFeaturesSection,

    /// A line in the features table isn't a comment and doesn't have exactly
    /// one `=`
    #[error("Invalid feature line: `{line}`")]
    InvalidFeatureLine { line: String },

    /// Documentation file is missing one or both markers
    #[error(
        "Missing markers in documentation file; expected both `{start}` and \
        `{end}`",
        start = START_MARKER,
        end = END_MARKER
    )]
    MissingMarkers,

    /// The last end marker comes before the first start marker, so there's
    /// no region to replace
    #[error(
        "Marker `{end}` must come after `{start}`",
        start = START_MARKER,
        end = END_MARKER
    )]
    MarkersOutOfOrder,

    /// Check mode found a document that doesn't match the manifest
    #[error("`{}` is out of date with the manifest", .path.display())]
    OutOfDate { path: PathBuf },
}
