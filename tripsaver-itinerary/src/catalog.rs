//! In-memory itinerary catalog.
//!
//! The catalog keeps cities in the order they were supplied so the first plan
//! is stable across runs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tripsaver_core::{CityKey, ItineraryPlan, ItinerarySource};

/// All plans for one city, as stored in catalog files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityPlans {
    /// City key; normalised on deserialisation.
    pub key: CityKey,
    /// Plans for the city, one per trip length.
    pub plans: Vec<ItineraryPlan>,
}

impl CityPlans {
    /// Group `plans` under `key`.
    #[must_use]
    pub fn new(key: &str, plans: Vec<ItineraryPlan>) -> Self {
        Self {
            key: CityKey::new(key),
            plans,
        }
    }
}

/// Errors returned when catalog data is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A city key was empty after normalisation.
    #[error("city key must not be empty")]
    EmptyCityKey,
    /// A city appeared more than once.
    #[error("city {city} is listed more than once")]
    DuplicateCity {
        /// Offending city.
        city: CityKey,
    },
    /// A city had no plans.
    #[error("city {city} has no plans")]
    NoPlans {
        /// Offending city.
        city: CityKey,
    },
    /// Two plans for one city shared a trip length.
    #[error("city {city} has more than one {days}-day plan")]
    DuplicateDays {
        /// Offending city.
        city: CityKey,
        /// Repeated trip length.
        days: u8,
    },
    /// A plan's trip length disagreed with its number of days.
    #[error("{days}-day plan for {city} lists {actual} days")]
    DayCountMismatch {
        /// Offending city.
        city: CityKey,
        /// Declared trip length.
        days: u8,
        /// Number of itinerary days present.
        actual: usize,
    },
    /// Day numbers were not `1..=days` in order.
    #[error("{days}-day plan for {city} numbers day {position} as {found}")]
    DayNumbering {
        /// Offending city.
        city: CityKey,
        /// Declared trip length.
        days: u8,
        /// Expected day number.
        position: usize,
        /// Day number found.
        found: u8,
    },
}

/// Immutable catalog of curated plans keyed by city and trip length.
///
/// # Examples
/// ```
/// use tripsaver_core::test_support::plan;
/// use tripsaver_core::{CityKey, ItinerarySource};
/// use tripsaver_itinerary::{CityPlans, StaticCatalog};
///
/// # fn main() -> Result<(), tripsaver_itinerary::CatalogError> {
/// let catalog = StaticCatalog::new(vec![
///     CityPlans::new("Goa", vec![plan("Goa", 5), plan("Goa", 3)]),
/// ])?;
/// assert_eq!(catalog.durations(&CityKey::new("goa")), vec![3, 5]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    cities: Vec<CityPlans>,
    index: HashMap<CityKey, usize>,
}

impl StaticCatalog {
    /// Validate and build a catalog, keeping city order.
    ///
    /// # Errors
    /// Returns [`CatalogError`] for empty or repeated city keys, cities
    /// without plans, repeated trip lengths within a city, and plans whose
    /// days do not run `1..=days`.
    pub fn new(cities: Vec<CityPlans>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(cities.len());
        for (position, city) in cities.iter().enumerate() {
            validate_city(city)?;
            if index.insert(city.key.clone(), position).is_some() {
                return Err(CatalogError::DuplicateCity {
                    city: city.key.clone(),
                });
            }
        }
        Ok(Self { cities, index })
    }

    /// An empty catalog.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of cities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Report whether the catalog holds no plans.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    fn city(&self, key: &CityKey) -> Option<&CityPlans> {
        self.index
            .get(key)
            .and_then(|position| self.cities.get(*position))
    }
}

fn validate_city(city: &CityPlans) -> Result<(), CatalogError> {
    if city.key.is_empty() {
        return Err(CatalogError::EmptyCityKey);
    }
    if city.plans.is_empty() {
        return Err(CatalogError::NoPlans {
            city: city.key.clone(),
        });
    }
    let mut seen = Vec::with_capacity(city.plans.len());
    for plan in &city.plans {
        if seen.contains(&plan.days) {
            return Err(CatalogError::DuplicateDays {
                city: city.key.clone(),
                days: plan.days,
            });
        }
        seen.push(plan.days);
        validate_plan(&city.key, plan)?;
    }
    Ok(())
}

fn validate_plan(city: &CityKey, plan: &ItineraryPlan) -> Result<(), CatalogError> {
    if plan.itinerary.len() != usize::from(plan.days) {
        return Err(CatalogError::DayCountMismatch {
            city: city.clone(),
            days: plan.days,
            actual: plan.itinerary.len(),
        });
    }
    for (position, day) in (1_usize..).zip(&plan.itinerary) {
        if usize::from(day.day) != position {
            return Err(CatalogError::DayNumbering {
                city: city.clone(),
                days: plan.days,
                position,
                found: day.day,
            });
        }
    }
    Ok(())
}

impl ItinerarySource for StaticCatalog {
    fn plan(&self, city: &CityKey, days: u8) -> Option<&ItineraryPlan> {
        self.city(city)?.plans.iter().find(|plan| plan.days == days)
    }

    fn first_plan(&self) -> Option<(&CityKey, &ItineraryPlan)> {
        let first = self.cities.first()?;
        first.plans.first().map(|plan| (&first.key, plan))
    }

    fn durations(&self, city: &CityKey) -> Vec<u8> {
        let mut days: Vec<u8> = self
            .city(city)
            .map(|entry| entry.plans.iter().map(|plan| plan.days).collect())
            .unwrap_or_default();
        days.sort_unstable();
        days
    }

    fn cities(&self) -> Box<dyn Iterator<Item = &CityKey> + '_> {
        Box::new(self.cities.iter().map(|city| &city.key))
    }
}
