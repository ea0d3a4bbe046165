//! Parse grouped feature documentation out of the lines of a `[features]`
//! table.
//!
//! Comment syntax within the table:
//! - `#! Name` opens a group called `Name`
//! - `##!` opens a group with an empty name
//! - `## text` adds a line of documentation for the next feature
//! - `# text` is a plain comment and is ignored
//!
//! Any other non-empty line is a feature definition `name = value`.

use crate::FeatureDocsError;
use indexmap::IndexMap;
use tracing::{debug, trace};

/// Documentation for every grouped feature in a manifest. Groups and the
/// features within them are kept in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureDocs {
    /// Group name => feature name => doc comment
    groups: IndexMap<String, IndexMap<String, String>>,
}

/// A single classified line of the features table
#[derive(Debug, PartialEq)]
enum Line<'a> {
    Blank,
    /// `##!`; opens a group with no name
    NamelessGroup,
    /// `## ...`; one line of documentation, trimmed
    Doc(&'a str),
    /// `#! ...`; opens a named group
    Group(&'a str),
    /// `# ...`; not documentation
    Comment,
    /// `name = value`; the feature name, trimmed
    Feature(&'a str),
}

impl<'a> Line<'a> {
    /// Classify a trimmed line. Order matters here, since the prefixes overlap
    fn classify(line: &'a str) -> Result<Self, FeatureDocsError> {
        let classified = if line.is_empty() {
            Self::Blank
        } else if line.starts_with("##!") {
            Self::NamelessGroup
        } else if let Some(doc) = line.strip_prefix("##") {
            Self::Doc(doc.trim())
        } else if let Some(name) = line.strip_prefix("#!") {
            Self::Group(name.trim())
        } else if line.starts_with('#') {
            Self::Comment
        } else {
            let mut parts = line.split('=');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(name), Some(_), None) => Self::Feature(name.trim()),
                _ => {
                    return Err(FeatureDocsError::InvalidFeatureLine {
                        line: line.to_owned(),
                    });
                }
            }
        };
        Ok(classified)
    }
}

/// Accumulated state while folding over the table
#[derive(Debug, Default)]
struct ParseState {
    /// Doc lines seen since the last feature, each terminated by `\n`
    comments: String,
    /// Most recently opened group. `None` until the first group marker
    group: Option<String>,
    groups: IndexMap<String, IndexMap<String, String>>,
}

impl ParseState {
    /// Apply one line of the table. A feature line always consumes the
    /// accumulated docs, even when there's no open group to attribute them
    /// to, so docs above a dropped feature never leak into the next group.
    fn line(mut self, line: &str) -> Result<Self, FeatureDocsError> {
        match Line::classify(line)? {
            Line::Blank | Line::Comment => {}
            Line::NamelessGroup => self.open_group(""),
            Line::Group(name) => self.open_group(name),
            Line::Doc(doc) => {
                self.comments.push_str(doc);
                self.comments.push('\n');
            }
            Line::Feature(feature) => {
                let comment = collapse(&self.comments);
                self.comments.clear();
                if let Some(group) = &self.group {
                    trace!(group, feature, comment, "Documented feature");
                    self.groups
                        .entry(group.clone())
                        .or_default()
                        .insert(feature.to_owned(), comment);
                } else {
                    debug!(feature, "Skipping feature outside of any group");
                }
            }
        }
        Ok(self)
    }

    /// Switch to a group, creating it if this is the first time we've seen
    /// it. Reopening a group appends to its existing features.
    fn open_group(&mut self, name: &str) {
        debug!(group = name, "Opening group");
        self.groups.entry(name.to_owned()).or_default();
        self.group = Some(name.to_owned());
    }
}

/// Join accumulated doc lines into a single comment. Only the *first* line
/// break becomes a space; any later ones are kept as-is.
fn collapse(comments: &str) -> String {
    comments.replacen('\n', " ", 1).trim().to_owned()
}

impl FeatureDocs {
    /// Parse documentation from the lines of a features table. Lines are
    /// expected to be trimmed already.
    pub fn parse<'a>(
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, FeatureDocsError> {
        let state = lines
            .into_iter()
            .try_fold(ParseState::default(), ParseState::line)?;
        Ok(Self {
            groups: state.groups,
        })
    }

    /// Iterate over each group name and its features, in declaration order
    pub fn groups(
        &self,
    ) -> impl Iterator<Item = (&str, &IndexMap<String, String>)> {
        self.groups
            .iter()
            .map(|(name, features)| (name.as_str(), features))
    }
}

#[cfg(test)]
impl FeatureDocs {
    /// Get the documentation for a single feature
    fn get(&self, group: &str, feature: &str) -> Option<&str> {
        self.groups.get(group)?.get(feature).map(String::as_str)
    }
}
