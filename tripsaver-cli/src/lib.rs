//! Command-line interface for the TripSaver engine.
//!
//! Two subcommands print pretty JSON to stdout:
//! - `recommend` ranks the destination catalog for a traveller.
//! - `itinerary` resolves a day-by-day plan for one destination.
//!
//! Options layer through `ortho_config` (defaults, config file, environment,
//! flags) under the `TRIPSAVER` prefix. Catalogs default to the bundled data.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::Serialize;

mod error;
mod itinerary;
mod recommend;

pub use error::CliError;

use itinerary::{ItineraryArgs, run_itinerary};
use recommend::{RecommendArgs, run_recommend};

const ARG_RECOMMEND_MONTH: &str = "month";
const ARG_RECOMMEND_BUDGET: &str = "budget";
const ARG_RECOMMEND_INTERESTS: &str = "interests";
const ARG_RECOMMEND_CLIMATE: &str = "climate";
const ARG_RECOMMEND_DESTINATIONS: &str = "destinations";
const ARG_RECOMMEND_LIMIT: &str = "limit";
const ENV_RECOMMEND_MONTH: &str = "TRIPSAVER_CMDS_RECOMMEND_MONTH";
const ENV_RECOMMEND_BUDGET: &str = "TRIPSAVER_CMDS_RECOMMEND_BUDGET";

const ARG_ITINERARY_DESTINATION: &str = "destination";
const ARG_ITINERARY_DAYS: &str = "days";
const ARG_ITINERARY_TYPE: &str = "type";
const ARG_ITINERARY_STATE: &str = "state";
const ARG_ITINERARY_PACE: &str = "pace";
const ARG_ITINERARY_CATALOG: &str = "itineraries";
const ENV_ITINERARY_DESTINATION: &str = "TRIPSAVER_CMDS_ITINERARY_DESTINATION";

/// Run the TripSaver CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, catalogs or the
/// request itself are unusable, or when output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Recommend(args) => run_recommend(args, &mut stdout),
        Command::Itinerary(args) => run_itinerary(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tripsaver",
    about = "Rank travel destinations and plan itineraries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank destinations against a traveller's preferences.
    Recommend(RecommendArgs),
    /// Resolve a day-by-day itinerary for a destination.
    Itinerary(ItineraryArgs),
}

/// Check that an optional catalog override points at a regular file.
fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match tripsaver_data::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Split a comma-separated option into trimmed, non-empty entries.
fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_owned)
            .collect()
    })
    .unwrap_or_default()
}

fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
