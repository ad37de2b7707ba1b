//! Destinations and the closed vocabularies that describe them.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::closed_set::closed_set;
use crate::{MonthSet, ParseEnumError};

closed_set! {
    /// Broad kind of destination, used to pick a stand-in itinerary.
    DestinationType, "destination type" {
        /// Beach towns.
        Beach => "beach",
        /// Hill stations.
        Hill => "hill",
        /// Large cities.
        City => "city",
        /// Historic sites and forts.
        Heritage => "heritage",
        /// Islands.
        Island => "island",
        /// National parks and reserves.
        Wildlife => "wildlife",
        /// Pilgrimage towns.
        Spiritual => "spiritual",
        /// Trekking and outdoor sport bases.
        Adventure => "adventure",
    }
}

closed_set! {
    /// Interest tag used to match a destination against user interests.
    Category, "category" {
        /// Beaches.
        Beach => "Beach",
        /// Mountains.
        Mountain => "Mountain",
        /// Hill country.
        Hill => "Hill",
        /// Historic sites.
        Heritage => "Heritage",
        /// Temples and pilgrimage.
        Spiritual => "Spiritual",
        /// Outdoor sport.
        Adventure => "Adventure",
        /// Countryside and parks.
        Nature => "Nature",
        /// Safaris and reserves.
        Wildlife => "Wildlife",
        /// Urban life.
        City => "City",
        /// Coastline.
        Coastal => "Coastal",
        /// Backwater cruises.
        Backwaters => "Backwaters",
        /// Nightlife.
        Party => "Party",
        /// Couples' getaways.
        Romantic => "Romantic",
        /// Snowfall.
        Snow => "Snow",
        /// Ski slopes.
        Ski => "Ski",
        /// Colonial architecture.
        Colonial => "Colonial",
        /// Islands.
        Island => "Island",
        /// Arts and local culture.
        Culture => "Culture",
        /// Lakes.
        Lake => "Lake",
        /// Temple towns.
        Temple => "Temple",
    }
}

closed_set! {
    /// Typical climate at a destination.
    Climate, "climate" {
        /// Warm and wet.
        Tropical => "tropical",
        /// Cold.
        Cold => "cold",
        /// Hot and dry.
        Hot => "hot",
        /// Mild.
        Moderate => "moderate",
        /// Humid.
        Humid => "humid",
        /// Cool.
        Cool => "cool",
        /// Extreme swings.
        Extreme => "extreme",
        /// High-altitude desert.
        ColdDesert => "cold_desert",
        /// Heavy rainfall.
        Wet => "wet",
    }
}

/// Spending tier, ordered from cheapest to most expensive.
///
/// The legacy aliases `low`, `medium` and `high` are accepted when parsing.
///
/// # Examples
/// ```
/// use tripsaver_core::BudgetTier;
///
/// let tier: BudgetTier = "medium".parse().unwrap();
/// assert_eq!(tier, BudgetTier::Moderate);
/// assert_eq!(BudgetTier::Budget.distance(BudgetTier::Premium), 2);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    /// Backpacker spending.
    #[serde(alias = "low")]
    Budget,
    /// Mid-range spending.
    #[serde(alias = "medium")]
    Moderate,
    /// Luxury spending.
    #[serde(alias = "high")]
    Premium,
}

impl BudgetTier {
    /// Every tier, cheapest first.
    pub const ALL: &'static [Self] = &[Self::Budget, Self::Moderate, Self::Premium];

    /// Position on the ordered scale `budget < moderate < premium`.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Budget => 0,
            Self::Moderate => 1,
            Self::Premium => 2,
        }
    }

    /// Number of steps between two tiers on the ordered scale.
    #[must_use]
    pub const fn distance(self, other: Self) -> u8 {
        self.rank().abs_diff(other.rank())
    }

    /// Return the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Moderate => "moderate",
            Self::Premium => "premium",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetTier {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "budget" | "low" => Ok(Self::Budget),
            "moderate" | "medium" => Ok(Self::Moderate),
            "premium" | "high" => Ok(Self::Premium),
            _ => Err(ParseEnumError::new("budget tier", s)),
        }
    }
}

/// Errors returned when a destination record breaks an invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DestinationError {
    /// The identifier was empty or whitespace.
    #[error("destination id must not be empty")]
    EmptyId,
    /// A month was listed as both best and avoid.
    #[error("destination {id} lists months {overlap} as both best and avoid")]
    OverlappingMonths {
        /// Identifier of the offending destination.
        id: String,
        /// Months present in both sets.
        overlap: MonthSet,
    },
    /// The ideal trip length was zero days.
    #[error("destination {id} must have a positive ideal trip length")]
    ZeroTripDays {
        /// Identifier of the offending destination.
        id: String,
    },
}

/// Plain destination data as stored in catalogs.
///
/// Convert into a [`Destination`] with `TryFrom` to enforce the invariants.
///
/// # Examples
/// ```
/// use tripsaver_core::{
///     BudgetTier, Category, Climate, Destination, DestinationRecord, DestinationType, Month,
/// };
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let goa = Destination::try_from(
///     DestinationRecord::new("goa", "Goa", DestinationType::Beach, Climate::Tropical, BudgetTier::Moderate)
///         .with_categories([Category::Beach, Category::Party])
///         .with_best_months([Month::new(1)?, Month::new(2)?]),
/// )?;
/// assert_eq!(goa.id(), "goa");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationRecord {
    /// Unique key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// State or region.
    #[serde(default)]
    pub state: String,
    /// Country.
    #[serde(default)]
    pub country: String,
    /// Destination kind.
    #[serde(rename = "type")]
    pub kind: DestinationType,
    /// Interest tags.
    #[serde(default)]
    pub categories: BTreeSet<Category>,
    /// Months when a visit is recommended.
    #[serde(default)]
    pub best_months: MonthSet,
    /// Months to avoid.
    #[serde(default)]
    pub avoid_months: MonthSet,
    /// Typical climate.
    pub climate: Climate,
    /// Spending tier.
    pub budget: BudgetTier,
    /// Suggested trip length in days.
    #[serde(default = "default_trip_days")]
    pub ideal_trip_days: u8,
}

const fn default_trip_days() -> u8 {
    3
}

impl DestinationRecord {
    /// Start a record with the required attributes and empty month sets.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: DestinationType,
        climate: Climate,
        budget: BudgetTier,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            state: String::new(),
            country: String::new(),
            kind,
            categories: BTreeSet::new(),
            best_months: MonthSet::new(),
            avoid_months: MonthSet::new(),
            climate,
            budget,
            ideal_trip_days: default_trip_days(),
        }
    }

    /// Set the state or region.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Add interest tags.
    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories.extend(categories);
        self
    }

    /// Add recommended months.
    #[must_use]
    pub fn with_best_months(mut self, months: impl IntoIterator<Item = crate::Month>) -> Self {
        for month in months {
            self.best_months.insert(month);
        }
        self
    }

    /// Add months to avoid.
    #[must_use]
    pub fn with_avoid_months(mut self, months: impl IntoIterator<Item = crate::Month>) -> Self {
        for month in months {
            self.avoid_months.insert(month);
        }
        self
    }
}

/// A validated travel destination.
///
/// Best and avoid months never overlap and the identifier is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DestinationRecord", into = "DestinationRecord")]
pub struct Destination {
    record: DestinationRecord,
}

impl TryFrom<DestinationRecord> for Destination {
    type Error = DestinationError;

    fn try_from(record: DestinationRecord) -> Result<Self, Self::Error> {
        if record.id.trim().is_empty() {
            return Err(DestinationError::EmptyId);
        }
        let overlap = record.best_months.intersection(record.avoid_months);
        if !overlap.is_empty() {
            return Err(DestinationError::OverlappingMonths {
                id: record.id,
                overlap,
            });
        }
        if record.ideal_trip_days == 0 {
            return Err(DestinationError::ZeroTripDays { id: record.id });
        }
        Ok(Self { record })
    }
}

impl From<Destination> for DestinationRecord {
    fn from(destination: Destination) -> Self {
        destination.record
    }
}

impl Destination {
    /// Unique key.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.record.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// State or region.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.record.state
    }

    /// Country.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.record.country
    }

    /// Destination kind.
    #[must_use]
    pub const fn kind(&self) -> DestinationType {
        self.record.kind
    }

    /// Interest tags.
    #[must_use]
    pub const fn categories(&self) -> &BTreeSet<Category> {
        &self.record.categories
    }

    /// Months when a visit is recommended.
    #[must_use]
    pub const fn best_months(&self) -> MonthSet {
        self.record.best_months
    }

    /// Months to avoid.
    #[must_use]
    pub const fn avoid_months(&self) -> MonthSet {
        self.record.avoid_months
    }

    /// Typical climate.
    #[must_use]
    pub const fn climate(&self) -> Climate {
        self.record.climate
    }

    /// Spending tier.
    #[must_use]
    pub const fn budget(&self) -> BudgetTier {
        self.record.budget
    }

    /// Suggested trip length in days.
    #[must_use]
    pub const fn ideal_trip_days(&self) -> u8 {
        self.record.ideal_trip_days
    }

    /// Metadata the itinerary resolver uses to pick a stand-in city.
    #[must_use]
    pub fn meta(&self) -> DestinationMeta {
        DestinationMeta {
            kind: Some(self.record.kind),
            state: (!self.record.state.trim().is_empty()).then(|| self.record.state.clone()),
        }
    }
}

/// Optional destination attributes consulted when no itinerary exists under
/// the destination's own key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DestinationMeta {
    /// Destination kind, if known.
    pub kind: Option<DestinationType>,
    /// State or region name, if known.
    pub state: Option<String>,
}

impl DestinationMeta {
    /// Metadata carrying only a kind.
    #[must_use]
    pub const fn with_kind(kind: DestinationType) -> Self {
        Self {
            kind: Some(kind),
            state: None,
        }
    }

    /// Metadata carrying only a state.
    #[must_use]
    pub fn with_state(state: impl Into<String>) -> Self {
        Self {
            kind: None,
            state: Some(state.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Month;
    use rstest::{fixture, rstest};

    fn month(number: u8) -> Month {
        Month::new(number).expect("valid month")
    }

    #[fixture]
    fn goa() -> DestinationRecord {
        DestinationRecord::new(
            "goa",
            "Goa",
            DestinationType::Beach,
            Climate::Tropical,
            BudgetTier::Moderate,
        )
        .with_state("Goa")
        .with_categories([Category::Beach, Category::Party])
        .with_best_months([11, 12, 1, 2, 3].map(month))
        .with_avoid_months([6, 7, 8, 9].map(month))
    }

    #[rstest]
    fn valid_record_converts(goa: DestinationRecord) {
        let destination = Destination::try_from(goa).expect("valid destination");
        assert_eq!(destination.name(), "Goa");
        assert!(destination.best_months().contains(month(1)));
        assert_eq!(destination.meta().state.as_deref(), Some("Goa"));
    }

    #[rstest]
    fn overlapping_months_are_rejected(goa: DestinationRecord) {
        let err = Destination::try_from(goa.with_avoid_months([month(1)]))
            .expect_err("overlap should fail");
        match err {
            DestinationError::OverlappingMonths { overlap, .. } => {
                assert!(overlap.contains(month(1)));
                assert_eq!(overlap.len(), 1);
            }
            other => panic!("expected OverlappingMonths, found {other:?}"),
        }
    }

    #[rstest]
    fn blank_id_is_rejected(mut goa: DestinationRecord) {
        goa.id = "  ".into();
        assert_eq!(Destination::try_from(goa), Err(DestinationError::EmptyId));
    }

    #[rstest]
    fn zero_trip_days_is_rejected(mut goa: DestinationRecord) {
        goa.ideal_trip_days = 0;
        assert!(matches!(
            Destination::try_from(goa),
            Err(DestinationError::ZeroTripDays { .. })
        ));
    }

    #[test]
    fn deserialises_catalog_shape() {
        let json = r#"{
            "id": "manali",
            "name": "Manali",
            "state": "Himachal Pradesh",
            "type": "hill",
            "categories": ["Mountain", "Adventure"],
            "best_months": [3, "april", 5],
            "avoid_months": [12, 1],
            "climate": "cool",
            "budget": "medium"
        }"#;
        let destination: Destination = serde_json::from_str(json).expect("decode destination");
        assert_eq!(destination.kind(), DestinationType::Hill);
        assert_eq!(destination.budget(), BudgetTier::Moderate);
        assert!(destination.best_months().contains(month(4)));
        assert_eq!(destination.ideal_trip_days(), 3);
    }

    #[test]
    fn unknown_category_fails_to_deserialise() {
        let json = r#"{"id": "x", "name": "X", "type": "city", "categories": ["Casino"],
            "climate": "hot", "budget": "budget"}"#;
        assert!(serde_json::from_str::<Destination>(json).is_err());
    }

    #[rstest]
    #[case("Beach", Category::Beach)]
    #[case("beach", Category::Beach)]
    #[case(" WILDLIFE ", Category::Wildlife)]
    fn category_parsing_is_case_insensitive(#[case] input: &str, #[case] expected: Category) {
        assert_eq!(input.parse::<Category>(), Ok(expected));
    }

    #[rstest]
    #[case(BudgetTier::Budget, BudgetTier::Budget, 0)]
    #[case(BudgetTier::Budget, BudgetTier::Moderate, 1)]
    #[case(BudgetTier::Premium, BudgetTier::Moderate, 1)]
    #[case(BudgetTier::Premium, BudgetTier::Budget, 2)]
    fn budget_distance_is_symmetric(
        #[case] left: BudgetTier,
        #[case] right: BudgetTier,
        #[case] expected: u8,
    ) {
        assert_eq!(left.distance(right), expected);
        assert_eq!(right.distance(left), expected);
    }

    #[test]
    fn climate_uses_snake_case() {
        assert_eq!(Climate::ColdDesert.to_string(), "cold_desert");
        assert_eq!("cold_desert".parse::<Climate>(), Ok(Climate::ColdDesert));
    }
}
