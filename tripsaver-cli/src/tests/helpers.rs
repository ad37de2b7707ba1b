//! Test helpers for writing catalog fixtures and invoking commands.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// A single-destination catalog in the on-disk format.
pub(super) const HAMPI_CATALOG: &str = r#"[{
    "id": "hampi",
    "name": "Hampi",
    "state": "Karnataka",
    "type": "heritage",
    "categories": ["Heritage", "Spiritual", "Culture"],
    "best_months": [11, 12, 1, 2],
    "avoid_months": [4, 5],
    "climate": "hot",
    "budget": "budget"
}]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// A temporary directory addressed with UTF-8 paths.
pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Parse `argv` and run the selected command against an in-memory writer.
pub(super) fn invoke(argv: &[String], stdout: &mut Vec<u8>) -> Result<(), CliError> {
    let cli = Cli::try_parse_from(argv).map_err(CliError::from)?;
    match cli.command {
        Command::Recommend(args) => recommend::run_recommend(args, stdout),
        Command::Itinerary(args) => itinerary::run_itinerary(args, stdout),
    }
}

/// Decode captured stdout as JSON.
pub(super) fn stdout_json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("stdout should be JSON")
}
