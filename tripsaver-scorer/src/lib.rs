//! Rule-based destination scoring for the TripSaver engine.
//!
//! [`RuleBasedScorer`] implements
//! [`DestinationScorer`](tripsaver_core::DestinationScorer) with a
//! point-weighted heuristic on a 100-point scale:
//! - **Interest filter** drops destinations sharing no category with the
//!   traveller's interests before anything is scored.
//! - **Timing** rewards best months and penalises avoid months.
//! - **Budget** rewards matching tiers and tapers with tier distance.
//! - **Interest** rewards one or more shared categories.
//! - **Climate** rewards a preferred climate.
//! - **Popularity** adds a small bonus for a curated set of destinations.
//!
//! Weights are plain configuration ([`ScoringWeights`], [`ScorerConfig`])
//! validated when the scorer is built.
//!
//! # Examples
//!
//! ```
//! use tripsaver_core::test_support::goa;
//! use tripsaver_core::{DestinationScorer, PreferencesRequest};
//! use tripsaver_scorer::RuleBasedScorer;
//!
//! let catalog = [goa()];
//! let request = PreferencesRequest {
//!     month: Some(1),
//!     budget: Some("moderate".into()),
//!     categories: vec!["Beach".into()],
//!     climate: None,
//! };
//! let ranked = RuleBasedScorer::new()
//!     .recommend(&catalog, &request)
//!     .expect("request is complete");
//! assert_eq!(ranked.items[0].destination.id(), "goa");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod scorer;
mod weights;

pub use scorer::RuleBasedScorer;
pub use weights::{
    DEFAULT_MAX_RESULTS, DEFAULT_POPULAR, SCORE_SCALE, ScorerConfig, ScoringConfigError,
    ScoringWeights,
};
