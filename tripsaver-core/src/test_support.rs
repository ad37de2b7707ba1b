//! Test-only builders for destinations and itinerary plans used by unit and
//! behaviour tests across the workspace.

use crate::{
    BudgetTier, Category, Climate, Destination, DestinationRecord, DestinationType, ItineraryCta,
    ItineraryDay, ItineraryPlan, Month, MonthSet,
};

/// Collect month numbers into a set, skipping anything outside `1..=12`.
#[must_use]
pub fn months(numbers: &[u8]) -> MonthSet {
    numbers
        .iter()
        .filter_map(|number| Month::new(*number).ok())
        .collect()
}

/// Build a destination from a record, panicking on invalid fixture data.
///
/// # Panics
/// Panics when `record` breaks a destination invariant.
#[must_use]
#[expect(clippy::expect_used, reason = "fixtures use constant, valid data")]
pub fn destination(record: DestinationRecord) -> Destination {
    Destination::try_from(record).expect("fixture destination is valid")
}

/// The beach destination used throughout the scoring scenarios: Beach and
/// Party, best November to March, moderate budget.
#[must_use]
pub fn goa() -> Destination {
    let mut record = DestinationRecord::new(
        "goa",
        "Goa",
        DestinationType::Beach,
        Climate::Tropical,
        BudgetTier::Moderate,
    )
    .with_state("Goa")
    .with_categories([Category::Beach, Category::Party]);
    record.best_months = months(&[11, 12, 1, 2, 3]);
    record.avoid_months = months(&[6, 7, 8, 9]);
    destination(record)
}

/// A consistent plan for `destination` lasting `days` days, one booking slot
/// per day.
#[must_use]
pub fn plan(destination: &str, days: u8) -> ItineraryPlan {
    ItineraryPlan {
        destination: destination.to_owned(),
        emoji: None,
        days,
        title: format!("{days}-Day {destination}"),
        description: format!("{days} days in {destination}"),
        best_time: String::new(),
        budget: String::new(),
        itinerary: (1..=days)
            .map(|day| ItineraryDay {
                day,
                title: format!("Day {day}"),
                description: format!("Day {day} in {destination}"),
                emoji: None,
                places: vec![format!("{destination} centre")],
                activities: vec!["Local food".to_owned(), "Trekking".to_owned()],
                ctas: vec![ItineraryCta {
                    category: crate::CtaCategory::Hotel,
                    label: "Hotels".to_owned(),
                    provider: crate::AffiliateProvider::Agoda,
                    emoji: None,
                    link: None,
                }],
            })
            .collect(),
    }
}
