#![forbid(unsafe_code)]
#![deny(clippy::all)]

//! Command line interface for feature_docs.
//!
//! **This crate is not semver compliant**. The version is locked to the root
//! `feature_docs` crate version. If you choose to depend directly on this
//! crate, you do so at your own risk of breakage.

mod util;

pub use util::print_error;

use clap::Parser;
use feature_docs_core::{DEFAULT_DOCS, DEFAULT_MANIFEST, Generated, Project};
use std::{path::PathBuf, process::ExitCode};
use tracing::info;

const COMMAND_NAME: &str = "feature-docs";

#[derive(Debug, Parser)]
#[clap(
    author,
    version,
    about,
    name = COMMAND_NAME,
    long_about = "Generate documentation for Cargo features from the comments \
    in the `[features]` table of a manifest, and write it between the \
    FEATURE_FLAGS_START and FEATURE_FLAGS_END markers of a markdown file"
)]
pub struct Args {
    /// Project root. The manifest and docs paths are relative to this
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,
    /// Path to the manifest containing the `[features]` table
    #[clap(long, default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,
    /// Path to the markdown file to update
    #[clap(long, default_value = DEFAULT_DOCS)]
    pub docs: PathBuf,
    /// Don't write anything; fail if the docs file is out of date
    #[clap(long, conflicts_with = "print")]
    pub check: bool,
    /// Print the rendered markdown to stdout instead of updating the docs file
    #[clap(long)]
    pub print: bool,
}

impl Args {
    /// Alias for [clap::Parser::parse]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Run the generator
    pub fn execute(self) -> anyhow::Result<ExitCode> {
        let project = Project::with_paths(
            self.root.join(&self.manifest),
            self.root.join(&self.docs),
        );

        if self.print {
            println!("{}", project.render()?);
        } else if self.check {
            project.check()?;
        } else {
            match project.generate()? {
                Generated::Updated => {
                    info!(docs = %project.docs().display(), "Docs updated");
                }
                Generated::Unchanged => {
                    info!(docs = %project.docs().display(), "Docs unchanged");
                }
            }
        }
        Ok(ExitCode::SUCCESS)
    }
}
