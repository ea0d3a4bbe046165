//! Test-only binary for CLI integration tests. This skips the tracing setup
//! of the main binary, so stderr contains only the error output.

use feature_docs_cli::{Args, print_error};
use std::process::ExitCode;

fn main() -> ExitCode {
    Args::parse().execute().unwrap_or_else(|error| {
        print_error(&error);
        ExitCode::FAILURE
    })
}
