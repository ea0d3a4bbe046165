//! Test utilities, shared with the CLI tests via the `test` feature

use crate::{DEFAULT_DOCS, DEFAULT_MANIFEST, Project};
use rstest::fixture;
use std::{
    env, fs,
    ops::Deref,
    path::{Path, PathBuf},
};
use tracing::error;
use uuid::Uuid;

/// Create a new temporary folder. This will include a random subfolder to
/// guarantee uniqueness for this test.
#[fixture]
pub fn temp_dir() -> TempDir {
    TempDir::new()
}

/// Guard for a temporary directory. Create the directory on creation, delete
/// it on drop.
#[derive(Debug)]
pub struct TempDir(PathBuf);

impl TempDir {
    fn new() -> Self {
        let path = env::temp_dir().join(Uuid::new_v4().to_string());
        fs::create_dir(&path).unwrap();
        Self(path)
    }

    /// Write a file within this directory, creating parent directories as
    /// needed. Return the absolute path
    pub fn write(&self, path: &str, content: &str) -> PathBuf {
        let path = self.0.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    /// Read a file within this directory
    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.0.join(path)).unwrap()
    }

    /// Lay out a project in this directory, with a manifest and docs file at
    /// their default locations
    pub fn project(&self, manifest: &str, docs: &str) -> Project {
        self.write(DEFAULT_MANIFEST, manifest);
        self.write(DEFAULT_DOCS, docs);
        Project::new(self)
    }
}

impl Deref for TempDir {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        // Clean up
        if let Err(error) = fs::remove_dir_all(&self.0) {
            error!(
                error = &error as &dyn std::error::Error,
                "Error deleting temporary directory `{}`",
                self.0.display()
            );
        }
    }
}

/// Assert a result is the `Err` variant and the stringified error contains
/// the given message. The `Err` variant type must implement
/// `Into<anyhow::Error>`. All errors are converted to anyhow to ensure the
/// display string contains the entire error context.
#[macro_export]
macro_rules! assert_err {
    ($result:expr, $msg:expr) => {{
        let error: anyhow::Error = $result.unwrap_err().into();
        let msg = $msg;
        let actual = format!("{error:#}");
        assert!(
            actual.contains(msg),
            "Expected error message to contain {msg:?}, but was: {actual:?}"
        )
    }};
}
