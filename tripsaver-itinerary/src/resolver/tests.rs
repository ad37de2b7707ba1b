//! Unit coverage for itinerary resolution.
#![expect(
    clippy::expect_used,
    clippy::indexing_slicing,
    reason = "tests fail fast on unexpected shapes"
)]

use rstest::{fixture, rstest};
use tripsaver_core::test_support::plan;
use tripsaver_core::{CityKey, DestinationMeta, DestinationType};

use super::{ItineraryResolver, MatchKind, StepOutcome};
use crate::{CityPlans, RemapTables, StaticCatalog};

#[fixture]
fn resolver() -> ItineraryResolver<StaticCatalog> {
    let catalog = StaticCatalog::new(vec![
        CityPlans::new("goa", vec![plan("Goa", 3), plan("Goa", 5)]),
        CityPlans::new("delhi", vec![plan("Delhi", 3)]),
        CityPlans::new("kochi", vec![plan("Kochi", 3)]),
        CityPlans::new("manali", vec![plan("Manali", 5)]),
    ])
    .expect("valid catalog");
    ItineraryResolver::new(catalog)
}

#[rstest]
fn direct_match_normalises_key(resolver: ItineraryResolver<StaticCatalog>) {
    let resolution = resolver.resolve("  GOA ", 5, None);
    assert_eq!(resolution.via(), Some(MatchKind::Direct));
    assert_eq!(resolution.plan().map(|found| found.days), Some(5));
    assert_eq!(resolution.steps.len(), 1);
}

#[rstest]
fn type_remap_finds_canonical_city(resolver: ItineraryResolver<StaticCatalog>) {
    let meta = DestinationMeta::with_kind(DestinationType::Beach);
    let resolution = resolver.resolve("unknown-village", 3, Some(&meta));
    let found = resolution.resolved.as_ref().expect("plan resolved");
    assert_eq!(found.via, MatchKind::TypeMapped);
    assert_eq!(found.city, CityKey::new("goa"));
    assert_eq!(found.plan.destination, "Goa");
    assert_eq!(resolution.steps[0].outcome, StepOutcome::NotFound);
}

#[rstest]
fn state_remap_follows_type_remap(resolver: ItineraryResolver<StaticCatalog>) {
    let meta = DestinationMeta {
        kind: Some(DestinationType::Spiritual),
        state: Some("Kerala".into()),
    };
    let resolution = resolver.resolve("munnar", 3, Some(&meta));
    assert_eq!(resolution.via(), Some(MatchKind::StateMapped));
    assert_eq!(resolution.plan().map(|found| found.destination.as_str()), Some("Kochi"));
    let stages: Vec<MatchKind> = resolution.steps.iter().map(|step| step.stage).collect();
    assert_eq!(
        stages,
        [MatchKind::Direct, MatchKind::TypeMapped, MatchKind::StateMapped]
    );
}

#[rstest]
fn key_naming_a_state_is_remapped(resolver: ItineraryResolver<StaticCatalog>) {
    let resolution = resolver.resolve("Puducherry", 3, None);
    assert_eq!(resolution.via(), Some(MatchKind::NameMapped));
    assert_eq!(resolution.resolved.expect("plan resolved").city.as_str(), "kochi");
}

#[rstest]
fn missing_day_count_falls_back_to_default(resolver: ItineraryResolver<StaticCatalog>) {
    let resolution = resolver.resolve("goa", 7, Some(&DestinationMeta::default()));
    let found = resolution.resolved.as_ref().expect("plan resolved");
    assert_eq!(found.via, MatchKind::DayFallback);
    assert_eq!(found.city.as_str(), "goa");
    assert_eq!(found.days, 3);
    assert!(!resolution.is_emergency());
}

#[rstest]
fn day_fallback_tries_discovered_cities_in_order(resolver: ItineraryResolver<StaticCatalog>) {
    let meta = DestinationMeta {
        kind: Some(DestinationType::Hill),
        state: Some("Delhi".into()),
    };
    let resolution = resolver.resolve("nowhere", 4, Some(&meta));
    let fallbacks: Vec<(&str, StepOutcome)> = resolution
        .steps
        .iter()
        .filter(|step| step.stage == MatchKind::DayFallback)
        .map(|step| {
            (
                step.city.as_ref().map_or("", CityKey::as_str),
                step.outcome,
            )
        })
        .collect();
    assert_eq!(
        fallbacks,
        [("manali", StepOutcome::NotFound), ("delhi", StepOutcome::Found)]
    );
}

#[rstest]
fn emergency_fallback_is_flagged(resolver: ItineraryResolver<StaticCatalog>) {
    let resolution = resolver.resolve("atlantis", 2, None);
    assert!(resolution.is_emergency());
    assert!(!MatchKind::Emergency.is_genuine());
    let found = resolution.resolved.as_ref().expect("plan resolved");
    assert_eq!(found.city.as_str(), "goa");
    assert_eq!(found.days, 3);
    let last = resolution.steps.last().expect("steps recorded");
    assert_eq!(last.stage, MatchKind::Emergency);
    assert_eq!(last.outcome, StepOutcome::Found);
}

#[rstest]
fn skipped_stages_are_recorded(resolver: ItineraryResolver<StaticCatalog>) {
    let resolution = resolver.resolve("atlantis", 2, None);
    let outcomes: Vec<(MatchKind, StepOutcome)> = resolution
        .steps
        .iter()
        .map(|step| (step.stage, step.outcome))
        .collect();
    assert_eq!(
        outcomes,
        [
            (MatchKind::Direct, StepOutcome::NotFound),
            (MatchKind::TypeMapped, StepOutcome::Skipped),
            (MatchKind::StateMapped, StepOutcome::Skipped),
            (MatchKind::NameMapped, StepOutcome::Skipped),
            (MatchKind::DayFallback, StepOutcome::Skipped),
            (MatchKind::Emergency, StepOutcome::Found),
        ]
    );
}

#[rstest]
fn empty_catalog_resolves_to_nothing() {
    let resolver = ItineraryResolver::new(StaticCatalog::empty());
    let resolution = resolver.resolve("goa", 3, None);
    assert!(resolution.plan().is_none());
    assert!(!resolution.is_emergency());
}

#[rstest]
fn resolution_is_deterministic(resolver: ItineraryResolver<StaticCatalog>) {
    let meta = DestinationMeta::with_state("Rajasthan");
    assert_eq!(
        resolver.resolve("udaipur", 2, Some(&meta)),
        resolver.resolve("udaipur", 2, Some(&meta))
    );
}

#[rstest]
fn custom_fallback_days_are_used() {
    let catalog = StaticCatalog::new(vec![CityPlans::new("goa", vec![plan("Goa", 5)])])
        .expect("valid catalog");
    let resolver = ItineraryResolver::with_tables(catalog, RemapTables::empty())
        .with_fallback_days(5);
    let resolution = resolver.resolve("goa", 2, None);
    assert_eq!(resolution.via(), Some(MatchKind::DayFallback));
}

#[rstest]
fn lists_destinations_with_display_names(resolver: ItineraryResolver<StaticCatalog>) {
    let names: Vec<String> = resolver
        .available_destinations()
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    assert_eq!(names, ["Goa", "Delhi", "Kochi", "Manali"]);
}

#[rstest]
#[case("goa", vec![3, 5])]
#[case("Himachal Pradesh", vec![5])]
#[case("atlantis", vec![])]
fn lists_durations(
    resolver: ItineraryResolver<StaticCatalog>,
    #[case] destination: &str,
    #[case] expected: Vec<u8>,
) {
    assert_eq!(resolver.available_durations(destination), expected);
}

#[rstest]
fn steps_serialise_in_snake_case(resolver: ItineraryResolver<StaticCatalog>) {
    let meta = DestinationMeta::with_kind(DestinationType::Beach);
    let resolution = resolver.resolve("unknown-village", 3, Some(&meta));
    let json = serde_json::to_value(&resolution.steps).expect("serialise steps");
    assert_eq!(
        json,
        serde_json::json!([
            {"stage": "direct", "city": "unknown-village", "days": 3, "outcome": "not_found"},
            {"stage": "type_mapped", "city": "goa", "days": 3, "outcome": "found"},
        ])
    );
}
