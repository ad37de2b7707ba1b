//! Itinerary lookup for the TripSaver engine.
//!
//! [`StaticCatalog`] holds curated day-by-day plans keyed by city and trip
//! length. [`ItineraryResolver`] finds the best plan for any destination,
//! including the many that have no plan of their own, by walking
//! [`RemapTables`] from the destination's kind and state to a canonical
//! city. [`filter_by_pace`] trims a resolved plan to the traveller's pace.
//!
//! # Examples
//!
//! ```
//! use tripsaver_core::test_support::plan;
//! use tripsaver_itinerary::{CityPlans, ItineraryResolver, MatchKind, StaticCatalog};
//!
//! # fn main() -> Result<(), tripsaver_itinerary::CatalogError> {
//! let catalog = StaticCatalog::new(vec![CityPlans::new("manali", vec![plan("Manali", 5)])])?;
//! let resolver = ItineraryResolver::new(catalog);
//! let resolution = resolver.resolve("Himachal Pradesh", 5, None);
//! assert_eq!(resolution.via(), Some(MatchKind::NameMapped));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalog;
mod pace;
mod remap;
mod resolver;

pub use catalog::{CatalogError, CityPlans, StaticCatalog};
pub use pace::{Pace, filter_by_pace};
pub use remap::RemapTables;
pub use resolver::{
    AvailableDestination, DEFAULT_FALLBACK_DAYS, ItineraryResolver, MatchKind, Resolution,
    ResolutionStep, Resolved, StepOutcome,
};
