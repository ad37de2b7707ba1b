//! Error types emitted by the TripSaver CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use tripsaver_core::{ParseEnumError, PreferencesError};
use tripsaver_data::CatalogLoadError;
use tripsaver_scorer::ScoringConfigError;

/// Errors emitted by the TripSaver CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced catalog path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced catalog path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced catalog path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// An option named a value outside its closed set.
    #[error("invalid --{field}: {source}")]
    InvalidOption {
        /// Flag name.
        field: &'static str,
        /// Parse failure.
        #[source]
        source: ParseEnumError,
    },
    /// Loading a catalog failed.
    #[error(transparent)]
    LoadCatalog(#[from] CatalogLoadError),
    /// The traveller's preferences were rejected.
    #[error("invalid preferences: {0}")]
    InvalidPreferences(#[from] PreferencesError),
    /// The scorer rejected its configuration.
    #[error("invalid scorer configuration: {0}")]
    ScorerConfig(#[from] ScoringConfigError),
    /// The itinerary catalog held no plans at all.
    #[error("no itinerary available for '{destination}': the catalog is empty")]
    NoItinerary {
        /// Requested destination.
        destination: String,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
