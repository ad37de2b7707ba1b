//! `ItineraryResolver`: find the best curated plan for any destination.
//!
//! Resolution tries progressively looser matches and stops at the first hit:
//!
//! 1. the destination's own key with the requested trip length;
//! 2. the canonical city for the destination's kind;
//! 3. the canonical city for the destination's state;
//! 4. the canonical city when the key itself names a state;
//! 5. every city found above, retried with the fallback trip length;
//! 6. the first plan in the catalog, flagged as an emergency match.
//!
//! Only an empty catalog resolves to nothing. Every attempt is recorded as a
//! [`ResolutionStep`] and logged at debug level.

use serde::Serialize;
use tripsaver_core::{CityKey, DestinationMeta, ItineraryPlan, ItinerarySource};

use crate::RemapTables;

/// Trip length retried when the requested one is not curated.
pub const DEFAULT_FALLBACK_DAYS: u8 = 3;

/// How a plan was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// The destination's own key and trip length.
    Direct,
    /// The canonical city for the destination kind.
    TypeMapped,
    /// The canonical city for the destination state.
    StateMapped,
    /// The canonical city for a key that names a state.
    NameMapped,
    /// A discovered city with the fallback trip length.
    DayFallback,
    /// The first plan in the catalog, unrelated to the request.
    Emergency,
}

impl MatchKind {
    /// Report whether the plan relates to the requested destination.
    #[must_use]
    pub const fn is_genuine(self) -> bool {
        !matches!(self, Self::Emergency)
    }
}

/// Outcome of one lookup attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    /// A plan was found.
    Found,
    /// The city had no plan for the trip length.
    NotFound,
    /// The stage had nothing to try.
    Skipped,
}

/// One recorded lookup attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionStep {
    /// Stage that made the attempt.
    pub stage: MatchKind,
    /// City tried, if the stage had one.
    pub city: Option<CityKey>,
    /// Trip length tried.
    pub days: u8,
    /// What happened.
    pub outcome: StepOutcome,
}

/// A plan together with how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved<'a> {
    /// The plan.
    pub plan: &'a ItineraryPlan,
    /// Stage that found it.
    pub via: MatchKind,
    /// Catalog city that owns it.
    pub city: CityKey,
    /// Its trip length.
    pub days: u8,
}

/// Result of [`ItineraryResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution<'a> {
    /// The plan, absent only for an empty catalog.
    pub resolved: Option<Resolved<'a>>,
    /// Every attempt in order.
    pub steps: Vec<ResolutionStep>,
}

impl<'a> Resolution<'a> {
    /// The resolved plan.
    #[must_use]
    pub fn plan(&self) -> Option<&'a ItineraryPlan> {
        self.resolved.as_ref().map(|found| found.plan)
    }

    /// Stage that produced the plan.
    #[must_use]
    pub fn via(&self) -> Option<MatchKind> {
        self.resolved.as_ref().map(|found| found.via)
    }

    /// Report whether the plan came from the emergency fallback.
    #[must_use]
    pub fn is_emergency(&self) -> bool {
        self.via() == Some(MatchKind::Emergency)
    }
}

/// A curated destination offered to travellers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableDestination {
    /// Display name.
    pub name: String,
    /// Catalog key.
    pub value: CityKey,
}

/// Resolve destinations to curated plans.
///
/// The resolver is generic over its [`ItinerarySource`] so a generated
/// source can replace the static catalog.
#[derive(Debug, Clone)]
pub struct ItineraryResolver<S>
where
    S: ItinerarySource,
{
    source: S,
    tables: RemapTables,
    fallback_days: u8,
}

impl<S> ItineraryResolver<S>
where
    S: ItinerarySource,
{
    /// Construct a resolver with the default tables and fallback length.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_tables(source, RemapTables::default())
    }

    /// Construct a resolver with explicit remap tables.
    #[must_use]
    pub const fn with_tables(source: S, tables: RemapTables) -> Self {
        Self {
            source,
            tables,
            fallback_days: DEFAULT_FALLBACK_DAYS,
        }
    }

    /// Replace the fallback trip length.
    #[must_use]
    pub const fn with_fallback_days(mut self, days: u8) -> Self {
        self.fallback_days = days;
        self
    }

    /// The underlying source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Resolve `destination_key` and `days` to a plan.
    ///
    /// `meta` supplies the destination's kind and state for the remap
    /// stages; pass `None` when nothing is known beyond the key.
    ///
    /// # Examples
    /// ```
    /// use tripsaver_core::test_support::plan;
    /// use tripsaver_core::{DestinationMeta, DestinationType};
    /// use tripsaver_itinerary::{CityPlans, ItineraryResolver, MatchKind, StaticCatalog};
    ///
    /// # fn main() -> Result<(), tripsaver_itinerary::CatalogError> {
    /// let catalog = StaticCatalog::new(vec![CityPlans::new("goa", vec![plan("Goa", 3)])])?;
    /// let resolver = ItineraryResolver::new(catalog);
    /// let beach = DestinationMeta::with_kind(DestinationType::Beach);
    ///
    /// let resolution = resolver.resolve("unknown-village", 3, Some(&beach));
    /// assert_eq!(resolution.via(), Some(MatchKind::TypeMapped));
    /// assert_eq!(resolution.plan().map(|p| p.destination.as_str()), Some("Goa"));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn resolve(
        &self,
        destination_key: &str,
        days: u8,
        meta: Option<&DestinationMeta>,
    ) -> Resolution<'_> {
        let mut attempt = Attempt::new(&self.source, days);
        let key = CityKey::new(destination_key);
        let kind = meta.and_then(|found| found.kind);
        let state = meta.and_then(|found| found.state.as_deref());

        let stages = [
            (MatchKind::Direct, Some(key.clone())),
            (
                MatchKind::TypeMapped,
                kind.and_then(|value| self.tables.city_for_type(value)).cloned(),
            ),
            (
                MatchKind::StateMapped,
                state.and_then(|value| self.tables.city_for_state(value)).cloned(),
            ),
            (
                MatchKind::NameMapped,
                self.tables.city_for_state(key.as_str()).cloned(),
            ),
        ];
        for (stage, city) in stages {
            if let Some(found) = attempt.try_stage(stage, city, days) {
                return attempt.finish(Some(found));
            }
        }

        let discovered = std::mem::take(&mut attempt.discovered);
        if discovered.is_empty() {
            attempt.skip(MatchKind::DayFallback, self.fallback_days);
        }
        for city in discovered {
            let retried = attempt.try_stage(MatchKind::DayFallback, Some(city), self.fallback_days);
            if let Some(found) = retried {
                return attempt.finish(Some(found));
            }
        }

        let emergency = self.source.first_plan().map(|(city, plan)| {
            log::warn!(
                "no itinerary for '{destination_key}' ({days} days); using emergency fallback {city} ({} days)",
                plan.days
            );
            attempt.record(MatchKind::Emergency, Some(city.clone()), plan.days, StepOutcome::Found);
            Resolved {
                plan,
                via: MatchKind::Emergency,
                city: city.clone(),
                days: plan.days,
            }
        });
        if emergency.is_none() {
            log::warn!("itinerary catalog is empty; nothing to resolve for '{destination_key}'");
            attempt.record(MatchKind::Emergency, None, days, StepOutcome::NotFound);
        }
        attempt.finish(emergency)
    }

    /// Curated cities with display names, in catalog order.
    #[must_use]
    pub fn available_destinations(&self) -> Vec<AvailableDestination> {
        self.source
            .cities()
            .map(|city| AvailableDestination {
                name: display_name(city.as_str()),
                value: city.clone(),
            })
            .collect()
    }

    /// Curated trip lengths for `destination`, ascending.
    ///
    /// Falls back to the destination's state city when the key has no plans
    /// of its own; empty when neither does.
    #[must_use]
    pub fn available_durations(&self, destination: &str) -> Vec<u8> {
        let key = CityKey::new(destination);
        let direct = self.source.durations(&key);
        if !direct.is_empty() {
            return direct;
        }
        self.tables
            .city_for_state(key.as_str())
            .map(|city| self.source.durations(city))
            .unwrap_or_default()
    }
}

/// Capitalise the first letter of a catalog key.
fn display_name(key: &str) -> String {
    let mut chars = key.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Book-keeping for one call to [`ItineraryResolver::resolve`].
struct Attempt<'a, S: ItinerarySource> {
    source: &'a S,
    requested_days: u8,
    discovered: Vec<CityKey>,
    steps: Vec<ResolutionStep>,
}

impl<'a, S: ItinerarySource> Attempt<'a, S> {
    const fn new(source: &'a S, requested_days: u8) -> Self {
        Self {
            source,
            requested_days,
            discovered: Vec::new(),
            steps: Vec::new(),
        }
    }

    fn try_stage(
        &mut self,
        stage: MatchKind,
        candidate: Option<CityKey>,
        days: u8,
    ) -> Option<Resolved<'a>> {
        let Some(city) = candidate else {
            self.skip(stage, days);
            return None;
        };
        if stage != MatchKind::DayFallback
            && !self.discovered.contains(&city)
            && self.source.contains_city(&city)
        {
            self.discovered.push(city.clone());
        }
        if let Some(plan) = self.source.plan(&city, days) {
            self.record(stage, Some(city.clone()), days, StepOutcome::Found);
            return Some(Resolved {
                plan,
                via: stage,
                city,
                days,
            });
        }
        self.record(stage, Some(city), days, StepOutcome::NotFound);
        None
    }

    fn skip(&mut self, stage: MatchKind, days: u8) {
        self.record(stage, None, days, StepOutcome::Skipped);
    }

    fn record(&mut self, stage: MatchKind, city: Option<CityKey>, days: u8, outcome: StepOutcome) {
        log::debug!(
            "{stage:?}: {} for {days} days -> {outcome:?} (requested {})",
            city.as_ref().map_or("-", CityKey::as_str),
            self.requested_days
        );
        self.steps.push(ResolutionStep {
            stage,
            city,
            days,
            outcome,
        });
    }

    fn finish(self, resolved: Option<Resolved<'a>>) -> Resolution<'a> {
        Resolution {
            resolved,
            steps: self.steps,
        }
    }
}

#[cfg(test)]
mod tests;
