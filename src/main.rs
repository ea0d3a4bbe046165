#![forbid(unsafe_code)]
#![deny(clippy::all)]

use feature_docs_cli::{Args, print_error};
use std::process::ExitCode;
use tracing_subscriber::{filter::EnvFilter, prelude::*};

fn main() -> ExitCode {
    initialize_tracing();
    Args::parse().execute().unwrap_or_else(|error| {
        print_error(&error);
        ExitCode::FAILURE
    })
}

/// Set up tracing to log to stderr. Verbosity is controlled by `RUST_LOG`.
/// Default to warnings only, so a successful run prints nothing.
fn initialize_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_subscriber = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);
    tracing_subscriber::registry().with(stderr_subscriber).init();
}
