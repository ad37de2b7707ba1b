//! Trim itinerary activities to a travel pace.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tripsaver_core::{ItineraryPlan, ParseEnumError};

const FAST_ACTIVITIES: &[&str] = &[
    "water sports",
    "rock climbing",
    "paragliding",
    "trekking",
    "skiing",
];

const RELAXED_ACTIVITIES: &[&str] = &["beach", "walks", "spa", "rest", "relaxation", "dining"];

/// How packed the traveller wants each day to be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    /// Downtime and gentle activities only.
    Relaxed,
    /// Everything the plan offers.
    #[default]
    Balanced,
    /// Adventure sports only.
    Fast,
}

impl Pace {
    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relaxed => "relaxed",
            Self::Balanced => "balanced",
            Self::Fast => "fast",
        }
    }

    /// Report whether `activity` suits this pace.
    ///
    /// Matching is a case-insensitive substring test against a short list of
    /// keywords per pace.
    #[must_use]
    pub fn allows(self, activity: &str) -> bool {
        let keywords = match self {
            Self::Balanced => return true,
            Self::Fast => FAST_ACTIVITIES,
            Self::Relaxed => RELAXED_ACTIVITIES,
        };
        let lower = activity.to_lowercase();
        keywords.iter().any(|keyword| lower.contains(keyword))
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pace {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relaxed" => Ok(Self::Relaxed),
            "balanced" => Ok(Self::Balanced),
            "fast" => Ok(Self::Fast),
            _ => Err(ParseEnumError {
                kind: "pace",
                value: s.to_owned(),
            }),
        }
    }
}

/// Copy `plan`, keeping only the activities that suit `pace`.
///
/// Places and call-to-actions are left untouched.
///
/// # Examples
/// ```
/// use tripsaver_core::test_support::plan;
/// use tripsaver_itinerary::{Pace, filter_by_pace};
///
/// let trip = plan("Manali", 2);
/// let fast = filter_by_pace(&trip, Pace::Fast);
/// assert_eq!(fast.itinerary[0].activities, ["Trekking"]);
/// assert_eq!(filter_by_pace(&trip, Pace::Balanced), trip);
/// ```
#[must_use]
pub fn filter_by_pace(plan: &ItineraryPlan, pace: Pace) -> ItineraryPlan {
    let mut filtered = plan.clone();
    for day in &mut filtered.itinerary {
        day.activities.retain(|activity| pace.allows(activity));
    }
    filtered
}
