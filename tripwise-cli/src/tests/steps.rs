//! Behaviour-driven step definitions driving the CLI scenarios.

use super::helpers::{SMALL_CATALOG, Workspace};
use super::*;
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tripwise_core::{ItineraryDay, Recommendation};

/// Scenario state shared between steps.
#[derive(Debug)]
struct CliWorld {
    workspace: Workspace,
    request_path: Utf8PathBuf,
    include_request: RefCell<bool>,
    catalog_path: RefCell<Option<Utf8PathBuf>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl CliWorld {
    fn new() -> Self {
        let workspace = Workspace::new();
        let request_path = workspace.path("request.json");
        Self {
            workspace,
            request_path,
            include_request: RefCell::new(true),
            catalog_path: RefCell::new(None),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn write_request(&self, contents: &str) {
        super::helpers::write_utf8(&self.request_path, contents.as_bytes());
    }

    fn command_line(&self, command: &str) -> Vec<String> {
        let mut argv = vec!["tripwise".to_owned(), command.to_owned()];
        if *self.include_request.borrow() {
            argv.push(self.request_path.as_str().to_owned());
        }
        if let Some(catalog) = self.catalog_path.borrow().as_ref() {
            argv.extend([format!("--{ARG_CATALOG}"), catalog.as_str().to_owned()]);
        }
        argv
    }

    fn run(&self, command: &str) {
        let parsed = Cli::try_parse_from(self.command_line(command)).map_err(CliError::from);
        let outcome = parsed.and_then(|cli| {
            let mut buffer = self.stdout.borrow_mut();
            run_command(cli.command, &mut *buffer)
        });
        self.result.replace(Some(outcome));
    }

    fn stdout_json<T: serde::de::DeserializeOwned>(&self) -> T {
        {
            let borrowed = self.result.borrow();
            let result = borrowed.as_ref().expect("result recorded");
            result.as_ref().expect("expected success");
        }
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be JSON")
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |outcome| {
            outcome
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> CliWorld {
    CliWorld::new()
}

#[given("a recommend request selecting art at full importance")]
fn art_request(#[from(world)] world: &CliWorld) {
    world.write_request(
        r#"{"preferences":[{"id":"1","label":"Art & Culture","selected":true,"importance":100}]}"#,
    );
}

#[given("a custom catalog exists on disk")]
fn custom_catalog(#[from(world)] world: &CliWorld) {
    let path = world.workspace.write("catalog.json", SMALL_CATALOG);
    world.catalog_path.replace(Some(path));
}

#[given("a catalog with an out-of-range rating exists on disk")]
fn invalid_catalog(#[from(world)] world: &CliWorld) {
    let path = world.workspace.write(
        "catalog.json",
        r#"{"destinations":[{"id":"x","name":"Xanadu","location":"Nowhere","rating":7.5}]}"#,
    );
    world.catalog_path.replace(Some(path));
}

#[given("an itinerary request for two days in Xanadu")]
fn xanadu_request(#[from(world)] world: &CliWorld) {
    world.write_request(r#"{"destinationId":"x","days":2}"#);
}

#[given("the request file contains invalid JSON")]
fn invalid_json(#[from(world)] world: &CliWorld) {
    world.write_request("{ not valid json");
}

#[given("I omit the request path")]
fn omit_request(#[from(world)] world: &CliWorld) {
    *world.include_request.borrow_mut() = false;
}

#[when("I run the recommend command")]
fn run_recommend(#[from(world)] world: &CliWorld) {
    world.run("recommend");
}

#[when("I run the itinerary command")]
fn run_itinerary(#[from(world)] world: &CliWorld) {
    world.run("itinerary");
}

#[then("the command succeeds and Kyoto is ranked first")]
fn kyoto_first(#[from(world)] world: &CliWorld) {
    let ranked: Vec<Recommendation> = world.stdout_json();
    assert_eq!(ranked.len(), 8);
    let first = ranked.first().expect("at least one recommendation");
    assert_eq!(first.destination.name, "Kyoto");
    assert!(first.score.is_some());
}

#[then("the command prints two days of three activities")]
fn two_days(#[from(world)] world: &CliWorld) {
    let days: Vec<ItineraryDay> = world.stdout_json();
    assert_eq!(days.len(), 2);
    for day in &days {
        let titles: Vec<&str> = day.activities.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["Pleasure dome", "Sacred river", "Caverns"]);
    }
}

#[then("the command fails because the catalog is invalid")]
fn fails_invalid_catalog(#[from(world)] world: &CliWorld) {
    match &*world.error() {
        CliError::InvalidCatalog { source, .. } => {
            assert!(matches!(
                **source,
                tripwise_core::CatalogError::RatingOutOfRange { .. }
            ));
        }
        other => panic!("expected InvalidCatalog, found {other:?}"),
    }
}

#[then("the command fails because the request JSON is invalid")]
fn fails_invalid_json(#[from(world)] world: &CliWorld) {
    match &*world.error() {
        CliError::ParseInput { path, .. } => assert_eq!(*path, world.request_path),
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[then("the command fails because the request path is missing")]
fn fails_missing_request(#[from(world)] world: &CliWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, env } => {
            assert_eq!(*field, ARG_REQUEST);
            assert_eq!(*env, ENV_RECOMMEND_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

macro_rules! register_cli_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/cli.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: CliWorld) {
            let _ = world;
        }
    };
}

register_cli_scenario!(recommend_happy_path, "recommending from a JSON request");
register_cli_scenario!(itinerary_custom_catalog, "planning with a custom catalog");
register_cli_scenario!(itinerary_invalid_catalog, "rejecting invalid catalogs");
register_cli_scenario!(recommend_invalid_json, "rejecting invalid JSON input");
register_cli_scenario!(recommend_missing_request, "rejecting missing request paths");
