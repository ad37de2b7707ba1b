//! Scored destinations and the trace that explains them.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::Destination;

/// Human-readable explanation attached to a score.
///
/// Reasons are emitted in scoring order, so the first entries describe
/// timing and budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// The travel month is one of the best months.
    PerfectTiming,
    /// The travel month is one to avoid.
    OffSeason,
    /// The travel month is neither best nor avoid.
    AcceptableSeason,
    /// The budget tier matches exactly.
    BudgetMatch,
    /// The budget tier is one step away.
    BudgetClose,
    /// The budget tier is two steps away.
    BudgetDifferent,
    /// Number of interest categories in common.
    MatchingInterests(usize),
    /// The destination climate is one the traveller prefers.
    IdealClimate,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerfectTiming => f.write_str("✓ Perfect time to visit"),
            Self::OffSeason => f.write_str("⚠ Not ideal season"),
            Self::AcceptableSeason => f.write_str("○ Acceptable season"),
            Self::BudgetMatch => f.write_str("✓ Matches your budget"),
            Self::BudgetClose => f.write_str("○ Close to your budget"),
            Self::BudgetDifferent => f.write_str("⚠ Different budget range"),
            Self::MatchingInterests(1) => f.write_str("✓ 1 matching interest"),
            Self::MatchingInterests(count) => write!(f, "✓ {count} matching interests"),
            Self::IdealClimate => f.write_str("✓ Ideal climate for you"),
        }
    }
}

impl Serialize for Reason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Achievement badge, ordered the way badges are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Badge {
    /// Travel month is a best month.
    PerfectSeason,
    /// Budget tier matches exactly.
    BudgetMatch,
    /// Two or more interests match.
    PerfectMatch,
    /// Climate matches the traveller's preference.
    GreatWeather,
    /// Destination is in the curated popular set.
    PopularChoice,
}

impl Badge {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PerfectSeason => "Perfect Season",
            Self::BudgetMatch => "Budget Match",
            Self::PerfectMatch => "Perfect Match",
            Self::GreatWeather => "Great Weather",
            Self::PopularChoice => "Popular Choice",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Badge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// How strongly a destination matches the traveller's interests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// Two or more categories in common.
    Primary,
    /// Exactly one category in common.
    Secondary,
    /// No categories in common.
    Weak,
}

impl MatchTier {
    /// Tier for a number of matching categories.
    ///
    /// # Examples
    /// ```
    /// use tripsaver_core::MatchTier;
    ///
    /// assert_eq!(MatchTier::from_match_count(0), MatchTier::Weak);
    /// assert_eq!(MatchTier::from_match_count(1), MatchTier::Secondary);
    /// assert_eq!(MatchTier::from_match_count(4), MatchTier::Primary);
    /// ```
    #[must_use]
    pub const fn from_match_count(matched: usize) -> Self {
        match matched {
            0 => Self::Weak,
            1 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Interest sub-score for one destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterestMatch {
    /// Points awarded.
    pub points: i32,
    /// Number of categories in common.
    pub matched: usize,
    /// Qualitative tier.
    pub tier: MatchTier,
}

/// Contribution of each scoring step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    /// Seasonal timing; negative in avoid months.
    pub timing: i32,
    /// Budget proximity.
    pub budget: i32,
    /// Interest overlap.
    pub interest: i32,
    /// Climate preference.
    pub climate: i32,
    /// Curated popularity bonus.
    pub popularity: i32,
}

impl ScoreBreakdown {
    /// Sum of all contributions before clamping.
    #[must_use]
    pub const fn raw_total(&self) -> i32 {
        self.timing
            .saturating_add(self.budget)
            .saturating_add(self.interest)
            .saturating_add(self.climate)
            .saturating_add(self.popularity)
    }
}

/// A destination with its score and explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredDestination<'a> {
    /// The scored destination.
    pub destination: &'a Destination,
    /// Final score in `0..=100`.
    pub score: u8,
    /// Explanations in scoring order.
    pub reasons: Vec<Reason>,
    /// Badges earned.
    pub badges: BTreeSet<Badge>,
    /// Interest sub-score; absent when the traveller gave no interests.
    pub interest: Option<InterestMatch>,
    /// Per-step contributions.
    pub breakdown: ScoreBreakdown,
}

/// One decision recorded while scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ScoringStep {
    /// Dropped by the interest filter.
    Filtered {
        /// Identifier of the dropped destination.
        destination_id: String,
    },
    /// Scored.
    Scored {
        /// Identifier of the scored destination.
        destination_id: String,
        /// Total before clamping.
        raw: i32,
        /// Final clamped score.
        score: u8,
    },
}

/// Result of one scoring call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recommendations<'a> {
    /// Ranked destinations, best first.
    pub items: Vec<ScoredDestination<'a>>,
    /// Destinations that passed the interest filter and were scored.
    pub total_scored: usize,
    /// Decisions in evaluation order.
    pub trace: Vec<ScoringStep>,
}

impl<'a> Recommendations<'a> {
    /// Report whether nothing was recommended.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of recommended destinations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over recommendations, best first.
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredDestination<'a>> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for Recommendations<'a> {
    type Item = ScoredDestination<'a>;
    type IntoIter = std::vec::IntoIter<ScoredDestination<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
