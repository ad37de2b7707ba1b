//! Point weights and scorer configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum attainable score before the popularity bonus.
pub const SCORE_SCALE: i32 = 100;

/// Default cap on the number of recommendations returned.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Destination ids that earn the popularity bonus by default.
pub const DEFAULT_POPULAR: &[&str] = &["goa", "manali", "jaipur", "kerala", "leh", "andaman"];

/// Points awarded by each scoring step on the 100-point scale.
///
/// The full-credit values of the four weighted steps sum to
/// [`SCORE_SCALE`] and keep the ordering timing > budget > interest >
/// climate. Exact values are tunable; call [`ScoringWeights::validate`]
/// after changing them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Travel month is a best month.
    pub timing_best: i32,
    /// Travel month is neither best nor avoid.
    pub timing_neutral: i32,
    /// Travel month is an avoid month; must be negative.
    pub timing_avoid_penalty: i32,
    /// Budget tiers match.
    pub budget_exact: i32,
    /// Budget tiers are one step apart.
    pub budget_adjacent: i32,
    /// Budget tiers are two steps apart.
    pub budget_distant: i32,
    /// Two or more interests match.
    pub interest_primary: i32,
    /// Exactly one interest matches.
    pub interest_secondary: i32,
    /// Destination climate is preferred.
    pub climate_match: i32,
    /// Destination is in the popular set.
    pub popularity_bonus: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            timing_best: 36,
            timing_neutral: 9,
            timing_avoid_penalty: -27,
            budget_exact: 27,
            budget_adjacent: 13,
            budget_distant: 4,
            interest_primary: 23,
            interest_secondary: 11,
            climate_match: 14,
            popularity_bonus: 5,
        }
    }
}

impl ScoringWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError`] when the full-credit values do not sum
    /// to [`SCORE_SCALE`], break the step ordering, when a partial credit
    /// exceeds its full credit, or when the avoid penalty is not negative.
    ///
    /// # Examples
    /// ```
    /// use tripsaver_scorer::{ScoringConfigError, ScoringWeights};
    ///
    /// assert!(ScoringWeights::default().validate().is_ok());
    ///
    /// let flat = ScoringWeights { timing_avoid_penalty: 0, ..ScoringWeights::default() };
    /// assert_eq!(flat.validate(), Err(ScoringConfigError::PenaltyNotNegative { penalty: 0 }));
    /// ```
    pub fn validate(self) -> Result<Self, ScoringConfigError> {
        let total = self.max_total();
        if total != SCORE_SCALE {
            return Err(ScoringConfigError::MaximaSum { total });
        }
        if !self.has_step_ordering() {
            return Err(ScoringConfigError::StepOrdering);
        }
        if let Some(component) = self.partial_exceeding_full() {
            return Err(ScoringConfigError::PartialExceedsFull { component });
        }
        if self.timing_avoid_penalty >= 0 {
            return Err(ScoringConfigError::PenaltyNotNegative {
                penalty: self.timing_avoid_penalty,
            });
        }
        if self.popularity_bonus < 0 {
            return Err(ScoringConfigError::NegativeBonus {
                bonus: self.popularity_bonus,
            });
        }
        Ok(self)
    }

    const fn max_total(&self) -> i32 {
        self.timing_best
            .saturating_add(self.budget_exact)
            .saturating_add(self.interest_primary)
            .saturating_add(self.climate_match)
    }

    const fn has_step_ordering(&self) -> bool {
        self.timing_best > self.budget_exact
            && self.budget_exact > self.interest_primary
            && self.interest_primary > self.climate_match
            && self.climate_match > 0
    }

    const fn partial_exceeding_full(&self) -> Option<&'static str> {
        if self.timing_neutral < 0 || self.timing_neutral > self.timing_best {
            Some("timing")
        } else if self.budget_distant < 0
            || self.budget_distant > self.budget_adjacent
            || self.budget_adjacent > self.budget_exact
        {
            Some("budget")
        } else if self.interest_secondary < 0 || self.interest_secondary > self.interest_primary {
            Some("interest")
        } else {
            None
        }
    }
}

/// Settings for [`RuleBasedScorer`](crate::RuleBasedScorer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Point weights.
    pub weights: ScoringWeights,
    /// Maximum number of recommendations returned.
    pub max_results: usize,
    /// Destination ids that earn the popularity bonus.
    pub popular: BTreeSet<String>,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            max_results: DEFAULT_MAX_RESULTS,
            popular: DEFAULT_POPULAR.iter().map(|id| (*id).to_owned()).collect(),
        }
    }
}

impl ScorerConfig {
    /// Replace the result cap.
    #[must_use]
    pub const fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Replace the point weights.
    #[must_use]
    pub const fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Replace the popular set.
    #[must_use]
    pub fn with_popular<I, S>(mut self, popular: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.popular = popular.into_iter().map(Into::into).collect();
        self
    }

    /// Validate the configuration and return it.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError::ZeroMaxResults`] when the cap is zero and
    /// propagates weight validation failures.
    pub fn validate(self) -> Result<Self, ScoringConfigError> {
        if self.max_results == 0 {
            return Err(ScoringConfigError::ZeroMaxResults);
        }
        self.weights.validate()?;
        Ok(self)
    }
}

/// Errors raised when scorer weights or settings are unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringConfigError {
    /// Full-credit values did not add up to the score scale.
    #[error("full-credit weights sum to {total}, expected 100")]
    MaximaSum {
        /// Actual sum.
        total: i32,
    },
    /// Full credits were not ordered timing > budget > interest > climate > 0.
    #[error("weights must be ordered timing > budget > interest > climate > 0")]
    StepOrdering,
    /// A partial credit was negative or larger than its full credit.
    #[error("{component} partial credit must lie between zero and its full credit")]
    PartialExceedsFull {
        /// Step whose partial credit is out of range.
        component: &'static str,
    },
    /// The avoid-month penalty was zero or positive.
    #[error("avoid-month penalty must be negative, found {penalty}")]
    PenaltyNotNegative {
        /// Configured penalty.
        penalty: i32,
    },
    /// The popularity bonus was negative.
    #[error("popularity bonus must not be negative, found {bonus}")]
    NegativeBonus {
        /// Configured bonus.
        bonus: i32,
    },
    /// The result cap was zero.
    #[error("max_results must be at least 1")]
    ZeroMaxResults,
}
