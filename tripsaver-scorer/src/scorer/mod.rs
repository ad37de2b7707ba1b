//! `RuleBasedScorer`: point-weighted destination ranking.
//!
//! Each destination that survives the interest filter is scored in five
//! steps (timing, budget, interest, climate, popularity). Reasons are
//! collected in that order, the sum is clamped into `0..=100` and the list
//! is sorted stably by descending score.

use std::collections::BTreeSet;

use tripsaver_core::{
    Badge, Destination, DestinationScorer, InterestMatch, MatchTier, Reason, Recommendations,
    ScoreBreakdown, ScoredDestination, ScoringStep, UserPreferences,
};

use crate::weights::{SCORE_SCALE, ScorerConfig, ScoringConfigError};

/// Rank destinations with fixed point weights.
///
/// # Examples
///
/// ```
/// use tripsaver_core::test_support::goa;
/// use tripsaver_core::{BudgetTier, Category, DestinationScorer, Month, UserPreferences};
/// use tripsaver_scorer::RuleBasedScorer;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = [goa()];
/// let prefs = UserPreferences::new(Month::new(1)?, BudgetTier::Moderate)
///     .with_categories([Category::Beach]);
/// let ranked = RuleBasedScorer::new().score(&catalog, &prefs);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked.items[0].breakdown.timing, 36);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleBasedScorer {
    config: ScorerConfig,
}

impl RuleBasedScorer {
    /// Construct a scorer using the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a scorer with explicit configuration.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError`] when the configuration fails
    /// validation.
    pub fn with_config(config: ScorerConfig) -> Result<Self, ScoringConfigError> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Interest sub-score for `destination`.
    ///
    /// Returns `None` when the traveller selected no interests. A destination
    /// sharing no category yields a [`MatchTier::Weak`] match worth nothing;
    /// [`DestinationScorer::score`] filters those out before scoring.
    #[must_use]
    pub fn interest_match(
        &self,
        destination: &Destination,
        prefs: &UserPreferences,
    ) -> Option<InterestMatch> {
        let wanted = prefs.categories();
        if wanted.is_empty() {
            return None;
        }
        let matched = destination.categories().intersection(wanted).count();
        let tier = MatchTier::from_match_count(matched);
        let weights = &self.config.weights;
        let points = match tier {
            MatchTier::Primary => weights.interest_primary,
            MatchTier::Secondary => weights.interest_secondary,
            MatchTier::Weak => 0,
        };
        Some(InterestMatch {
            points,
            matched,
            tier,
        })
    }

    fn score_one<'a>(
        &self,
        destination: &'a Destination,
        prefs: &UserPreferences,
    ) -> ScoredDestination<'a> {
        let weights = &self.config.weights;
        let mut card = Scorecard::default();

        let month = prefs.month();
        if destination.best_months().contains(month) {
            card.timing(weights.timing_best, Reason::PerfectTiming, Some(Badge::PerfectSeason));
        } else if destination.avoid_months().contains(month) {
            card.timing(weights.timing_avoid_penalty, Reason::OffSeason, None);
        } else {
            card.timing(weights.timing_neutral, Reason::AcceptableSeason, None);
        }

        match destination.budget().distance(prefs.budget()) {
            0 => card.budget(weights.budget_exact, Reason::BudgetMatch, Some(Badge::BudgetMatch)),
            1 => card.budget(weights.budget_adjacent, Reason::BudgetClose, None),
            _ => card.budget(weights.budget_distant, Reason::BudgetDifferent, None),
        }

        let interest = self.interest_match(destination, prefs);
        if let Some(found) = interest.filter(|found| found.matched > 0) {
            card.breakdown.interest = found.points;
            card.reasons.push(Reason::MatchingInterests(found.matched));
            if found.tier == MatchTier::Primary {
                card.badges.insert(Badge::PerfectMatch);
            }
        }

        if prefs
            .climate()
            .is_some_and(|climates| climates.contains(&destination.climate()))
        {
            card.breakdown.climate = weights.climate_match;
            card.reasons.push(Reason::IdealClimate);
            card.badges.insert(Badge::GreatWeather);
        }

        if weights.popularity_bonus > 0 && self.config.popular.contains(destination.id()) {
            card.breakdown.popularity = weights.popularity_bonus;
            card.badges.insert(Badge::PopularChoice);
        }

        ScoredDestination {
            destination,
            score: clamp_score(card.breakdown.raw_total()),
            reasons: card.reasons,
            badges: card.badges,
            interest,
            breakdown: card.breakdown,
        }
    }
}

#[derive(Default)]
struct Scorecard {
    breakdown: ScoreBreakdown,
    reasons: Vec<Reason>,
    badges: BTreeSet<Badge>,
}

impl Scorecard {
    fn timing(&mut self, points: i32, reason: Reason, badge: Option<Badge>) {
        self.breakdown.timing = points;
        self.note(reason, badge);
    }

    fn budget(&mut self, points: i32, reason: Reason, badge: Option<Badge>) {
        self.breakdown.budget = points;
        self.note(reason, badge);
    }

    fn note(&mut self, reason: Reason, badge: Option<Badge>) {
        self.reasons.push(reason);
        self.badges.extend(badge);
    }
}

fn clamp_score(raw: i32) -> u8 {
    u8::try_from(raw.clamp(0, SCORE_SCALE)).unwrap_or_default()
}

fn passes_interest_filter(destination: &Destination, prefs: &UserPreferences) -> bool {
    let wanted = prefs.categories();
    wanted.is_empty() || !destination.categories().is_disjoint(wanted)
}

impl DestinationScorer for RuleBasedScorer {
    fn score<'a>(
        &self,
        destinations: &'a [Destination],
        prefs: &UserPreferences,
    ) -> Recommendations<'a> {
        let mut trace = Vec::with_capacity(destinations.len());
        let mut items = Vec::new();

        for destination in destinations {
            let id = destination.id();
            if !passes_interest_filter(destination, prefs) {
                log::debug!("filtered out {id}: no matching interests");
                trace.push(ScoringStep::Filtered {
                    destination_id: id.to_owned(),
                });
                continue;
            }
            let scored = self.score_one(destination, prefs);
            let raw = scored.breakdown.raw_total();
            log::debug!("scored {id}: raw {raw}, clamped {}", scored.score);
            trace.push(ScoringStep::Scored {
                destination_id: id.to_owned(),
                raw,
                score: scored.score,
            });
            items.push(scored);
        }

        let total_scored = items.len();
        items.sort_by(|left, right| right.score.cmp(&left.score));
        items.truncate(self.config.max_results);
        log::debug!(
            "recommending {} of {total_scored} scored destinations",
            items.len()
        );

        Recommendations {
            items,
            total_scored,
            trace,
        }
    }
}
