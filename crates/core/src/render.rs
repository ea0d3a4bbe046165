//! Render parsed feature docs as markdown

use crate::FeatureDocs;
use itertools::Itertools;
use std::fmt::{self, Display};

/// Each group is its name, a blank line, then a bullet per feature. Groups are
/// separated by a blank line. A group with an empty name still gets its
/// (empty) heading line.
impl Display for FeatureDocs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups = self.groups().format_with("\n\n", |(name, features), f| {
            let features =
                features.iter().format_with("\n", |(feature, comment), f| {
                    f(&format_args!("- `{feature}` - {comment}"))
                });
            f(&format_args!("{name}\n\n{features}"))
        });
        write!(f, "{groups}")
    }
}

impl FeatureDocs {
    /// Render as a markdown string. Alias for `to_string`
    pub fn render(&self) -> String {
        self.to_string()
    }
}
