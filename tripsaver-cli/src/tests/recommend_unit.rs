//! Focused unit tests covering recommend configuration and execution.

use super::helpers::{HAMPI_CATALOG, stdout_json, workspace, write_utf8};
use super::*;
use crate::recommend::{
    RecommendArgs, RecommendConfig, config_from_layers_for_test, execute_recommend,
};
use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::json;
use tripsaver_core::PreferencesRequest;
use tripsaver_scorer::DEFAULT_MAX_RESULTS;

fn complete_args() -> RecommendArgs {
    RecommendArgs {
        month: Some(12),
        budget: Some("moderate".into()),
        ..RecommendArgs::default()
    }
}

#[rstest]
#[case::missing_month(None, Some("moderate"), ARG_RECOMMEND_MONTH, ENV_RECOMMEND_MONTH)]
#[case::missing_budget(Some(3), None, ARG_RECOMMEND_BUDGET, ENV_RECOMMEND_BUDGET)]
fn converting_without_required_fields_errors(
    #[case] month: Option<u8>,
    #[case] budget: Option<&str>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = RecommendArgs {
        month,
        budget: budget.map(str::to_owned),
        ..RecommendArgs::default()
    };
    let err = RecommendConfig::try_from(args).expect_err("missing field should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_splits_lists_and_defaults_limit() {
    let args = RecommendArgs {
        interests: Some(" Beach, Heritage ,,".into()),
        climate: Some("tropical".into()),
        ..complete_args()
    };
    let config = RecommendConfig::try_from(args).expect("config should build");
    assert_eq!(
        config.request,
        PreferencesRequest {
            month: Some(12),
            budget: Some("moderate".into()),
            categories: vec!["Beach".into(), "Heritage".into()],
            climate: Some(vec!["tropical".into()]),
        }
    );
    assert_eq!(config.limit, DEFAULT_MAX_RESULTS);
    assert!(config.destinations.is_none());
}

#[rstest]
fn blank_climate_means_no_preference() {
    let args = RecommendArgs {
        climate: Some(" , ".into()),
        ..complete_args()
    };
    let config = RecommendConfig::try_from(args).expect("config should build");
    assert!(config.request.climate.is_none());
}

#[rstest]
fn validate_sources_reports_missing_catalog() {
    let (_tmp, root) = workspace();
    let config = RecommendConfig::try_from(RecommendArgs {
        destinations: Some(root.join("absent.json")),
        ..complete_args()
    })
    .expect("config should build");
    match config.validate_sources() {
        Err(CliError::MissingSourceFile { field, .. }) => {
            assert_eq!(field, ARG_RECOMMEND_DESTINATIONS);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let (_tmp, root) = workspace();
    let config = RecommendConfig::try_from(RecommendArgs {
        destinations: Some(root.clone()),
        ..complete_args()
    })
    .expect("config should build");
    match config.validate_sources() {
        Err(CliError::SourcePathNotFile { path, .. }) => assert_eq!(path, root),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn execute_scores_a_catalog_from_disk() {
    let (_tmp, root) = workspace();
    let catalog = root.join("destinations.json");
    write_utf8(&catalog, HAMPI_CATALOG.as_bytes());
    let config = RecommendConfig::try_from(RecommendArgs {
        month: Some(1),
        budget: Some("budget".into()),
        interests: Some("Heritage".into()),
        destinations: Some(catalog),
        ..RecommendArgs::default()
    })
    .expect("config should build");

    let mut stdout = Vec::new();
    execute_recommend(&config, &mut stdout).expect("recommend should succeed");
    let output = stdout_json(&stdout);
    assert_eq!(output["items"][0]["destination"]["id"], "hampi");
    assert_eq!(output["total_scored"], 1);
}

#[rstest]
fn execute_rejects_unknown_interests() {
    let config = RecommendConfig::try_from(RecommendArgs {
        interests: Some("Casino".into()),
        ..complete_args()
    })
    .expect("config should build");
    let mut stdout = Vec::new();
    let err = execute_recommend(&config, &mut stdout).expect_err("unknown interest");
    assert!(matches!(err, CliError::InvalidPreferences(_)));
    assert!(stdout.is_empty());
}

#[rstest]
fn execute_rejects_a_zero_limit() {
    let config = RecommendConfig::try_from(RecommendArgs {
        limit: Some(0),
        ..complete_args()
    })
    .expect("config should build");
    let err = execute_recommend(&config, &mut Vec::<u8>::new()).expect_err("zero limit");
    assert!(matches!(err, CliError::ScorerConfig(_)));
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "month": "december" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "month": 6,
            "budget": "premium",
            "limit": 3,
        }),
        None,
    );
    composer.push_environment(json!({
        "budget": "budget",
        "interests": "Beach",
    }));
    composer.push_cli(json!({ "month": 11 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request.month, Some(11));
    assert_eq!(config.request.budget.as_deref(), Some("budget"));
    assert_eq!(config.request.categories, ["Beach"]);
    assert_eq!(config.limit, 3);
}
