//! Generate documentation for Cargo features from the comments in the
//! `[features]` table of `Cargo.toml`, and splice it into a markdown file.
//!
//! Unlike putting the docs in the crate root, the rendered output lives in a
//! standalone file, so it's readable in the published crate and can be
//! included wherever it's needed.
//!
//! **This crate is not semver compliant**. The version is locked to the root
//! `feature_docs` crate version. If you choose to depend directly on this
//! crate, you do so at your own risk of breakage.

mod error;
mod features;
mod manifest;
mod render;
mod splice;
#[cfg(any(test, feature = "test"))]
mod test_util;

pub use error::FeatureDocsError;
pub use features::FeatureDocs;
pub use manifest::{FEATURES_HEADER, feature_table};
pub use splice::{Document, END_MARKER, START_MARKER};
#[cfg(any(test, feature = "test"))]
pub use test_util::*;

use anyhow::Context;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Manifest path, relative to the project root
pub const DEFAULT_MANIFEST: &str = "Cargo.toml";
/// Documentation file path, relative to the project root
pub const DEFAULT_DOCS: &str = "src/docs.md";

/// The pair of files we read from and write to
#[derive(Clone, Debug)]
pub struct Project {
    manifest: PathBuf,
    docs: PathBuf,
}

/// Result of a successful [Project::generate]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Generated {
    /// Documentation file content changed
    Updated,
    /// Documentation file was rewritten with identical content
    Unchanged,
}

impl Project {
    /// Use the default file locations within a project root
    pub fn new(root: &Path) -> Self {
        Self::with_paths(root.join(DEFAULT_MANIFEST), root.join(DEFAULT_DOCS))
    }

    /// Use explicit file locations
    pub fn with_paths(manifest: PathBuf, docs: PathBuf) -> Self {
        Self { manifest, docs }
    }

    pub fn docs(&self) -> &Path {
        &self.docs
    }

    /// Parse feature docs from the manifest
    pub fn load(&self) -> anyhow::Result<FeatureDocs> {
        let manifest = read(&self.manifest)?;
        let docs = feature_table(&manifest)
            .and_then(FeatureDocs::parse)
            .with_context(|| {
                format!("Error parsing `{}`", self.manifest.display())
            })?;
        debug!(
            manifest = %self.manifest.display(),
            groups = docs.groups().count(),
            "Loaded feature docs"
        );
        Ok(docs)
    }

    /// Render feature docs from the manifest as markdown
    pub fn render(&self) -> anyhow::Result<String> {
        Ok(self.load()?.render())
    }

    /// Regenerate the documentation file in place. Nothing is written unless
    /// both files are valid.
    pub fn generate(&self) -> anyhow::Result<Generated> {
        let (current, updated) = self.splice()?;
        fs::write(&self.docs, &updated).with_context(|| {
            format!("Error writing `{}`", self.docs.display())
        })?;
        info!(docs = %self.docs.display(), "Wrote feature docs");

        Ok(if current == updated {
            Generated::Unchanged
        } else {
            Generated::Updated
        })
    }

    /// Check that the documentation file is up to date with the manifest,
    /// without writing anything
    pub fn check(&self) -> anyhow::Result<()> {
        let (current, updated) = self.splice()?;
        if current == updated {
            Ok(())
        } else {
            Err(FeatureDocsError::OutOfDate {
                path: self.docs.clone(),
            }
            .into())
        }
    }

    /// Build the updated documentation file content. Returns the current
    /// content as well, for comparison.
    fn splice(&self) -> anyhow::Result<(String, String)> {
        let current = read(&self.docs)?;
        let context = || format!("Error updating `{}`", self.docs.display());
        // Check the markers before touching the manifest
        let document = Document::parse(&current).with_context(context)?;
        let markdown = self.render()?;
        let updated = document.splice(&markdown);
        Ok((current, updated))
    }
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Error reading `{}`", path.display()))
}
