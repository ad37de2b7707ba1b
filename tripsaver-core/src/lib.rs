//! Core domain types for the TripSaver engine.
//!
//! These models validate at the boundary so the scorer and the itinerary
//! resolver only ever see well-formed data. Closed vocabularies such as
//! budget tiers, climates and booking categories are enums; constructors and
//! deserialisers return `Result` to surface invalid input early.
//!
//! The crate also defines the seams the engine depends on:
//! [`DestinationScorer`], [`ItinerarySource`] and [`AffiliateLinkBuilder`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod affiliate;
mod closed_set;
mod destination;
mod itinerary;
mod month;
mod preferences;
mod recommendation;
mod scorer;
mod source;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use affiliate::{AffiliateLinkBuilder, LinkRequest};
pub use closed_set::ParseEnumError;
pub use destination::{
    BudgetTier, Category, Climate, Destination, DestinationError, DestinationMeta,
    DestinationRecord, DestinationType,
};
pub use itinerary::{
    AffiliateProvider, CityKey, CtaCategory, ItineraryCta, ItineraryDay, ItineraryPlan,
};
pub use month::{Month, MonthError, MonthSet};
pub use preferences::{PreferencesError, PreferencesRequest, UserPreferences};
pub use recommendation::{
    Badge, InterestMatch, MatchTier, Reason, Recommendations, ScoreBreakdown, ScoredDestination,
    ScoringStep,
};
pub use scorer::DestinationScorer;
pub use source::ItinerarySource;
