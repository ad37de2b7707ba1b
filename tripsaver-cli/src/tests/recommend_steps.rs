//! Behaviour-driven step definitions driving the recommend CLI scenarios.

use super::helpers::{HAMPI_CATALOG, invoke, stdout_json, workspace, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tempfile::TempDir;

#[derive(Debug)]
struct RecommendWorld {
    _tmp: TempDir,
    root: Utf8PathBuf,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RecommendWorld {
    fn new() -> Self {
        let (tmp, root) = workspace();
        Self {
            _tmp: tmp,
            root,
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn push_flag(&self, flag: &str, value: &str) {
        self.cli_args
            .borrow_mut()
            .extend([format!("--{flag}"), value.to_owned()]);
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }

    fn items(&self) -> Vec<serde_json::Value> {
        let output = stdout_json(&self.stdout.borrow());
        output["items"]
            .as_array()
            .cloned()
            .expect("items should be an array")
    }
}

#[fixture]
fn world() -> RecommendWorld {
    RecommendWorld::new()
}

#[given("I ask for month {month} on a {budget} budget")]
fn ask_for(#[from(world)] world: &RecommendWorld, month: u8, budget: String) {
    world.push_flag(ARG_RECOMMEND_MONTH, &month.to_string());
    world.push_flag(ARG_RECOMMEND_BUDGET, &budget);
}

#[given("I omit the month")]
fn omit_month(#[from(world)] world: &RecommendWorld) {
    world.push_flag(ARG_RECOMMEND_BUDGET, "moderate");
}

#[given("I am interested in {interests}")]
fn interested_in(#[from(world)] world: &RecommendWorld, interests: String) {
    world.push_flag(ARG_RECOMMEND_INTERESTS, &interests);
}

#[given("I limit the results to {limit}")]
fn limit_results(#[from(world)] world: &RecommendWorld, limit: usize) {
    world.push_flag(ARG_RECOMMEND_LIMIT, &limit.to_string());
}

#[given("a destination catalog file exists")]
fn catalog_exists(#[from(world)] world: &RecommendWorld) {
    let path = world.root.join("destinations.json");
    write_utf8(&path, HAMPI_CATALOG.as_bytes());
    world.push_flag(ARG_RECOMMEND_DESTINATIONS, path.as_str());
}

#[given("the destination catalog points at a missing file")]
fn catalog_missing(#[from(world)] world: &RecommendWorld) {
    let path = world.root.join("absent.json");
    world.push_flag(ARG_RECOMMEND_DESTINATIONS, path.as_str());
}

#[when("I run the recommend command")]
fn run_recommend_command(#[from(world)] world: &RecommendWorld) {
    let mut argv = vec!["tripsaver".to_owned(), "recommend".to_owned()];
    argv.extend(world.cli_args.borrow().iter().cloned());
    let mut buffer = world.stdout.borrow_mut();
    let outcome = invoke(&argv, &mut *buffer);
    world.result.replace(Some(outcome));
}

#[then("the recommend command succeeds")]
fn command_succeeds(#[from(world)] world: &RecommendWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err:?}");
    }
}

#[then("every recommendation is tagged {category}")]
fn every_tagged(#[from(world)] world: &RecommendWorld, category: String) {
    let items = world.items();
    assert!(!items.is_empty(), "expected at least one recommendation");
    for item in items {
        let categories = item["destination"]["categories"]
            .as_array()
            .expect("categories should be an array");
        assert!(
            categories.iter().any(|tag| tag == category.as_str()),
            "{item} is not tagged {category}"
        );
    }
}

#[then("{count} recommendations are printed")]
fn count_printed(#[from(world)] world: &RecommendWorld, count: usize) {
    assert_eq!(world.items().len(), count);
}

#[then("the first recommendation is {id}")]
fn first_recommendation(#[from(world)] world: &RecommendWorld, id: String) {
    let items = world.items();
    let first = items.first().expect("one recommendation");
    assert_eq!(first["destination"]["id"], id.as_str());
}

#[then("the command fails naming the missing month")]
fn fails_missing_month(#[from(world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_RECOMMEND_MONTH),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the preferences are invalid")]
fn fails_invalid_preferences(#[from(world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::InvalidPreferences(_) => {}
        other => panic!("expected InvalidPreferences, found {other:?}"),
    }
}

#[then("the command fails because the catalog file is missing")]
fn fails_missing_catalog(#[from(world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::MissingSourceFile { field, .. } => {
            assert_eq!(*field, ARG_RECOMMEND_DESTINATIONS);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

macro_rules! register_recommend_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/recommend_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RecommendWorld) {
            let _ = world;
        }
    };
}

register_recommend_scenario!(recommend_bundled, "recommending from the bundled catalog");
register_recommend_scenario!(recommend_capped, "capping the number of recommendations");
register_recommend_scenario!(recommend_from_disk, "recommending from a catalog on disk");
register_recommend_scenario!(recommend_missing_month, "rejecting a missing month");
register_recommend_scenario!(recommend_unknown_budget, "rejecting an unknown budget");
register_recommend_scenario!(recommend_missing_catalog, "rejecting a missing catalog file");
