//! Replace the generated region of a markdown document

use crate::FeatureDocsError;

/// Marks the start of the generated region. Invisible when rendered
pub const START_MARKER: &str = "[//]: # (FEATURE_FLAGS_START)";
/// Marks the end of the generated region. Invisible when rendered
pub const END_MARKER: &str = "[//]: # (FEATURE_FLAGS_END)";

/// A documentation file, split around its generated region. The old content
/// of the region is discarded. The region spans from the *first* start marker
/// through the *last* end marker, so any stray markers in between are
/// swallowed on the next splice.
#[derive(Debug, PartialEq)]
pub struct Document<'a> {
    /// Everything before the start marker
    before: &'a str,
    /// Everything after the end marker
    after: &'a str,
}

impl<'a> Document<'a> {
    /// Find the generated region in a document. Fails if either marker is
    /// missing.
    pub fn parse(content: &'a str) -> Result<Self, FeatureDocsError> {
        let (Some(start), Some(end)) =
            (content.find(START_MARKER), content.rfind(END_MARKER))
        else {
            return Err(FeatureDocsError::MissingMarkers);
        };
        if end < start {
            return Err(FeatureDocsError::MarkersOutOfOrder);
        }

        Ok(Self {
            before: &content[..start],
            after: &content[end + END_MARKER.len()..],
        })
    }

    /// Build a new document with the generated region replaced by the given
    /// markdown. Content outside the markers is untouched.
    pub fn splice(&self, markdown: &str) -> String {
        format!(
            "{before}{START_MARKER}\n{markdown}\n\n{END_MARKER}{after}",
            before = self.before,
            after = self.after,
        )
    }
}
