//! Test the `feature-docs` command end to end

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use feature_docs_core::{END_MARKER, START_MARKER, TempDir, temp_dir};
use pretty_assertions::assert_eq;
use predicates::str::contains;
use rstest::rstest;

const MANIFEST: &str = r#"[package]
name = "demo"
version = "0.1.0"

[features]
default = ["tokio"]

#! Runtimes
## Run on tokio
tokio = ["dep:tokio"]
## Run on smol. Not as well
## tested as tokio
smol = ["dep:smol"]

# Not part of the docs
internal = []

#! Formats
## JSON support
json = ["dep:serde_json"]

[dependencies]
tokio = {version = "1", optional = true}
"#;

const RENDERED: &str = concat!(
    "Runtimes\n\n",
    "- `tokio` - Run on tokio\n",
    "- `smol` - Run on smol. Not as well tested as tokio\n",
    // Undocumented features keep the separator
    "- `internal` - \n\n",
    "Formats\n\n",
    "- `json` - JSON support",
);

/// Get a command to run the generator from within the given directory
fn feature_docs(dir: &TempDir) -> Command {
    let mut command = cargo_bin_cmd!("feature_docs_cli");
    command.current_dir(&**dir);
    command
}

fn docs() -> String {
    format!("# Features\n\n{START_MARKER}\n{END_MARKER}\n\n## License\n")
}

fn expected_docs() -> String {
    format!(
        "# Features\n\n{START_MARKER}\n{RENDERED}\n\n{END_MARKER}\n\n\
        ## License\n"
    )
}

/// With no arguments, use the default paths relative to the current dir. A
/// second run on the output changes nothing.
#[rstest]
fn test_generate(temp_dir: TempDir) {
    temp_dir.project(MANIFEST, &docs());

    for _ in 0..2 {
        feature_docs(&temp_dir)
            .assert()
            .success()
            .stdout("")
            .stderr("");
        assert_eq!(temp_dir.read("src/docs.md"), expected_docs());
    }
}

/// Paths can be overridden
#[rstest]
fn test_generate_paths(temp_dir: TempDir) {
    temp_dir.write("crate/Manifest.toml", MANIFEST);
    temp_dir.write("crate/FEATURES.md", &docs());

    feature_docs(&temp_dir)
        .args([
            "--root",
            "crate",
            "--manifest",
            "Manifest.toml",
            "--docs",
            "FEATURES.md",
        ])
        .assert()
        .success();
    assert_eq!(temp_dir.read("crate/FEATURES.md"), expected_docs());
}

#[rstest]
fn test_print(temp_dir: TempDir) {
    temp_dir.project(MANIFEST, &docs());

    feature_docs(&temp_dir)
        .arg("--print")
        .assert()
        .success()
        .stdout(format!("{RENDERED}\n"));
    // Nothing written
    assert_eq!(temp_dir.read("src/docs.md"), docs());
}

#[rstest]
fn test_check(temp_dir: TempDir) {
    temp_dir.project(MANIFEST, &docs());

    feature_docs(&temp_dir)
        .arg("--check")
        .assert()
        .failure()
        .stderr(contains("is out of date with the manifest"));
    assert_eq!(temp_dir.read("src/docs.md"), docs());

    feature_docs(&temp_dir).assert().success();
    feature_docs(&temp_dir).arg("--check").assert().success();
}

#[rstest]
fn test_check_print_conflict(temp_dir: TempDir) {
    feature_docs(&temp_dir)
        .args(["--check", "--print"])
        .assert()
        .failure()
        .stderr(contains("cannot be used with"));
}

/// Any error fails the run without touching the docs file
#[rstest]
#[case::missing_features(
    "[package]\nname = \"demo\"\n",
    docs(),
    "Missing `[features]` section in manifest"
)]
#[case::invalid_line(
    "[features]\n#! Group\na=b=c\n",
    docs(),
    "Invalid feature line: `a=b=c`"
)]
#[case::missing_start_marker(
    MANIFEST,
    format!("# Features\n{END_MARKER}\n"),
    "Missing markers in documentation file"
)]
#[case::missing_end_marker(
    MANIFEST,
    format!("# Features\n{START_MARKER}\n"),
    "Missing markers in documentation file"
)]
#[case::markers_out_of_order(
    MANIFEST,
    format!("{END_MARKER}\n{START_MARKER}\n"),
    "must come after"
)]
fn test_generate_error(
    temp_dir: TempDir,
    #[case] manifest: &str,
    #[case] docs: String,
    #[case] expected_error: &str,
) {
    temp_dir.project(manifest, &docs);

    feature_docs(&temp_dir)
        .assert()
        .failure()
        .stdout("")
        .stderr(contains(expected_error));
    assert_eq!(temp_dir.read("src/docs.md"), docs);
}

/// Missing files are reported with their path
#[rstest]
fn test_generate_missing_docs(temp_dir: TempDir) {
    temp_dir.write("Cargo.toml", MANIFEST);

    feature_docs(&temp_dir)
        .assert()
        .failure()
        .stderr(contains("Error reading `./src/docs.md`"));
}
