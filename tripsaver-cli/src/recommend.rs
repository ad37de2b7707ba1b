//! Recommend command implementation for the TripSaver CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tripsaver_core::{Destination, DestinationScorer, PreferencesRequest};
use tripsaver_scorer::{DEFAULT_MAX_RESULTS, RuleBasedScorer, ScorerConfig};

use crate::{
    ARG_RECOMMEND_BUDGET, ARG_RECOMMEND_CLIMATE, ARG_RECOMMEND_DESTINATIONS,
    ARG_RECOMMEND_INTERESTS, ARG_RECOMMEND_LIMIT, ARG_RECOMMEND_MONTH, CliError,
    ENV_RECOMMEND_BUDGET, ENV_RECOMMEND_MONTH, require_existing, split_list, write_json,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every destination in the catalog against the \
                 traveller's month, budget, interests and preferred climate, \
                 then print the best matches as JSON. The bundled catalog is \
                 used unless --destinations names a JSON file.",
    about = "Rank destinations for a traveller"
)]
#[ortho_config(prefix = "TRIPSAVER")]
pub(crate) struct RecommendArgs {
    /// Travel month, 1 (January) to 12 (December).
    #[arg(long = ARG_RECOMMEND_MONTH, value_name = "1-12")]
    #[serde(default)]
    pub(crate) month: Option<u8>,
    /// Budget tier: budget, moderate or premium.
    #[arg(long = ARG_RECOMMEND_BUDGET, value_name = "tier")]
    #[serde(default)]
    pub(crate) budget: Option<String>,
    /// Comma-separated interest categories, e.g. "Beach,Heritage".
    #[arg(long = ARG_RECOMMEND_INTERESTS, value_name = "list")]
    #[serde(default)]
    pub(crate) interests: Option<String>,
    /// Comma-separated preferred climates, e.g. "tropical,cool".
    #[arg(long = ARG_RECOMMEND_CLIMATE, value_name = "list")]
    #[serde(default)]
    pub(crate) climate: Option<String>,
    /// Path to a destination catalog JSON file.
    #[arg(long = ARG_RECOMMEND_DESTINATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) destinations: Option<Utf8PathBuf>,
    /// Maximum number of recommendations printed.
    #[arg(long = ARG_RECOMMEND_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Preferences as supplied, validated by the scorer.
    pub(crate) request: PreferencesRequest,
    /// Catalog override; bundled data when absent.
    pub(crate) destinations: Option<Utf8PathBuf>,
    /// Result cap.
    pub(crate) limit: usize,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        self.destinations
            .as_deref()
            .map_or(Ok(()), |path| require_existing(path, ARG_RECOMMEND_DESTINATIONS))
    }

    fn load_catalog(&self) -> Result<Vec<Destination>, CliError> {
        let catalog = match &self.destinations {
            Some(path) => tripsaver_data::load_destinations(path)?,
            None => tripsaver_data::bundled_destinations()?,
        };
        Ok(catalog)
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let month = args.month.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_MONTH,
            env: ENV_RECOMMEND_MONTH,
        })?;
        let budget = args.budget.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_BUDGET,
            env: ENV_RECOMMEND_BUDGET,
        })?;
        let climate = split_list(args.climate.as_deref());
        let request = PreferencesRequest {
            month: Some(month),
            budget: Some(budget),
            categories: split_list(args.interests.as_deref()),
            climate: (!climate.is_empty()).then_some(climate),
        };
        Ok(Self {
            request,
            destinations: args.destinations,
            limit: args.limit.unwrap_or(DEFAULT_MAX_RESULTS),
        })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    execute_recommend(&config, writer)
}

/// Score the configured catalog and write the ranking as JSON.
pub(crate) fn execute_recommend(
    config: &RecommendConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let catalog = config.load_catalog()?;
    let scorer =
        RuleBasedScorer::with_config(ScorerConfig::default().with_max_results(config.limit))?;
    let ranked = scorer.recommend(&catalog, &config.request)?;
    log::debug!(
        "recommending {} of {} scored destinations",
        ranked.len(),
        ranked.total_scored
    );
    write_json(writer, &ranked)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
