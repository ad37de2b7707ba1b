//! Facade crate for the TripSaver recommendation engine.
//!
//! This crate re-exports the domain types, the rule-based scorer and the
//! itinerary resolver, and exposes the bundled catalogs behind the
//! `bundled-data` feature.

#![forbid(unsafe_code)]

pub use tripsaver_core::{
    AffiliateLinkBuilder, AffiliateProvider, Badge, BudgetTier, Category, CityKey, Climate,
    CtaCategory, Destination, DestinationError, DestinationMeta, DestinationRecord,
    DestinationScorer, DestinationType, InterestMatch, ItineraryCta, ItineraryDay, ItineraryPlan,
    ItinerarySource, LinkRequest, MatchTier, Month, MonthError, MonthSet, ParseEnumError,
    PreferencesError, PreferencesRequest, Reason, Recommendations, ScoreBreakdown,
    ScoredDestination, ScoringStep, UserPreferences,
};

pub use tripsaver_scorer::{RuleBasedScorer, ScorerConfig, ScoringConfigError, ScoringWeights};

pub use tripsaver_itinerary::{
    AvailableDestination, CatalogError, CityPlans, ItineraryResolver, MatchKind, Pace,
    RemapTables, Resolution, ResolutionStep, Resolved, StaticCatalog, StepOutcome,
    filter_by_pace,
};

#[cfg(feature = "bundled-data")]
pub use tripsaver_data::{
    CatalogLoadError, bundled_destinations, bundled_itineraries, load_destinations,
    load_itineraries,
};
