//! Itinerary command implementation for the TripSaver CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tripsaver_core::{CityKey, DestinationMeta, DestinationType, ItineraryPlan};
use tripsaver_itinerary::{
    DEFAULT_FALLBACK_DAYS, ItineraryResolver, MatchKind, Pace, StaticCatalog, filter_by_pace,
};

use crate::{
    ARG_ITINERARY_CATALOG, ARG_ITINERARY_DAYS, ARG_ITINERARY_DESTINATION, ARG_ITINERARY_PACE,
    ARG_ITINERARY_STATE, ARG_ITINERARY_TYPE, CliError, ENV_ITINERARY_DESTINATION,
    require_existing, write_json,
};

/// CLI arguments for the `itinerary` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Resolve a curated day-by-day plan for a destination. \
                 Destinations without a plan of their own borrow one from a \
                 related city chosen by --type or --state; as a last resort \
                 the first plan in the catalog is printed and flagged as an \
                 emergency match.",
    about = "Plan an itinerary for a destination"
)]
#[ortho_config(prefix = "TRIPSAVER")]
pub(crate) struct ItineraryArgs {
    /// Destination or city name, e.g. "goa" or "Himachal Pradesh".
    #[arg(value_name = "destination")]
    #[serde(default)]
    pub(crate) destination: Option<String>,
    /// Trip length in days.
    #[arg(long = ARG_ITINERARY_DAYS, value_name = "days")]
    #[serde(default)]
    pub(crate) days: Option<u8>,
    /// Destination type used to find a related city, e.g. "beach".
    #[arg(long = ARG_ITINERARY_TYPE, value_name = "type")]
    #[serde(default, rename = "type")]
    pub(crate) kind: Option<String>,
    /// State or region used to find a related city, e.g. "Kerala".
    #[arg(long = ARG_ITINERARY_STATE, value_name = "state")]
    #[serde(default)]
    pub(crate) state: Option<String>,
    /// Travel pace: relaxed, balanced or fast.
    #[arg(long = ARG_ITINERARY_PACE, value_name = "pace")]
    #[serde(default)]
    pub(crate) pace: Option<String>,
    /// Path to an itinerary catalog JSON file.
    #[arg(long = ARG_ITINERARY_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) itineraries: Option<Utf8PathBuf>,
}

impl ItineraryArgs {
    pub(crate) fn into_config(self) -> Result<ItineraryConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ItineraryConfig::try_from(merged)
    }
}

/// Resolved `itinerary` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ItineraryConfig {
    /// Requested destination key.
    pub(crate) destination: String,
    /// Requested trip length.
    pub(crate) days: u8,
    /// Kind and state for the remap stages.
    pub(crate) meta: DestinationMeta,
    /// Activity filter.
    pub(crate) pace: Pace,
    /// Catalog override; bundled data when absent.
    pub(crate) itineraries: Option<Utf8PathBuf>,
}

impl ItineraryConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        self.itineraries
            .as_deref()
            .map_or(Ok(()), |path| require_existing(path, ARG_ITINERARY_CATALOG))
    }

    fn load_catalog(&self) -> Result<StaticCatalog, CliError> {
        let catalog = match &self.itineraries {
            Some(path) => tripsaver_data::load_itineraries(path)?,
            None => tripsaver_data::bundled_itineraries()?,
        };
        Ok(catalog)
    }
}

impl TryFrom<ItineraryArgs> for ItineraryConfig {
    type Error = CliError;

    fn try_from(args: ItineraryArgs) -> Result<Self, Self::Error> {
        let destination = args.destination.ok_or(CliError::MissingArgument {
            field: ARG_ITINERARY_DESTINATION,
            env: ENV_ITINERARY_DESTINATION,
        })?;
        let kind = args
            .kind
            .as_deref()
            .map(str::parse::<DestinationType>)
            .transpose()
            .map_err(|source| CliError::InvalidOption {
                field: ARG_ITINERARY_TYPE,
                source,
            })?;
        let pace = args
            .pace
            .as_deref()
            .map(str::parse::<Pace>)
            .transpose()
            .map_err(|source| CliError::InvalidOption {
                field: ARG_ITINERARY_PACE,
                source,
            })?
            .unwrap_or_default();
        Ok(Self {
            destination,
            days: args.days.unwrap_or(DEFAULT_FALLBACK_DAYS),
            meta: DestinationMeta {
                kind,
                state: args.state,
            },
            pace,
            itineraries: args.itineraries,
        })
    }
}

/// JSON printed by the `itinerary` command.
#[derive(Debug, Serialize)]
pub(crate) struct ItineraryOutput<'a> {
    /// Catalog city whose plan was used.
    pub(crate) city: &'a CityKey,
    /// Trip length of the plan.
    pub(crate) days: u8,
    /// How the plan was found.
    pub(crate) via: MatchKind,
    /// Set when the plan is unrelated to the request.
    pub(crate) emergency: bool,
    /// Pace the activities were filtered for.
    pub(crate) pace: Pace,
    /// Curated trip lengths for the requested destination.
    pub(crate) durations: Vec<u8>,
    /// The plan, filtered for pace.
    pub(crate) plan: ItineraryPlan,
}

pub(crate) fn run_itinerary(args: ItineraryArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    execute_itinerary(&config, writer)
}

/// Resolve the configured destination and write the plan as JSON.
pub(crate) fn execute_itinerary(
    config: &ItineraryConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let resolver = ItineraryResolver::new(config.load_catalog()?);
    let resolution = resolver.resolve(&config.destination, config.days, Some(&config.meta));
    let emergency = resolution.is_emergency();
    let resolved = resolution.resolved.ok_or_else(|| CliError::NoItinerary {
        destination: config.destination.clone(),
    })?;
    if emergency {
        log::warn!(
            "no related itinerary for '{}'; printing {} instead",
            config.destination,
            resolved.city
        );
    }
    let output = ItineraryOutput {
        city: &resolved.city,
        days: resolved.days,
        via: resolved.via,
        emergency,
        pace: config.pace,
        durations: resolver.available_durations(&config.destination),
        plan: filter_by_pace(resolved.plan, config.pace),
    };
    write_json(writer, &output)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ItineraryConfig, CliError> {
    let merged = ItineraryArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ItineraryConfig::try_from(merged)
}
