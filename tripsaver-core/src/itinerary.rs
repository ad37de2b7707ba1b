//! Day-by-day itinerary plans.
//!
//! Plans are curated data: the engine looks them up but never generates
//! them. Each day carries call-to-action slots naming an affiliate
//! provider; links are attached later by an
//! [`AffiliateLinkBuilder`](crate::AffiliateLinkBuilder).

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::closed_set::closed_set;

closed_set! {
    /// Kind of booking a call-to-action leads to.
    CtaCategory, "call-to-action category" {
        /// Accommodation.
        Hotel => "hotel",
        /// Tours and experiences.
        Activity => "activity",
        /// Gear and supplies.
        Essential => "essential",
        /// Buses, trains and rentals.
        Transport => "transport",
        /// Restaurants and food tours.
        Food => "food",
    }
}

closed_set! {
    /// Affiliate partner that fulfils a call-to-action.
    AffiliateProvider, "affiliate provider" {
        /// Hotel bookings.
        Agoda => "agoda",
        /// Tours and activities.
        GetYourGuide => "getyourguide",
        /// Retail.
        Amazon => "amazon",
        /// Bus tickets.
        AbhiBus => "abhibus",
        /// Flights and packages.
        MakeMyTrip => "makemytrip",
        /// Retail.
        Flipkart => "flipkart",
    }
}

/// Call-to-action slot within an itinerary day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryCta {
    /// Kind of booking.
    pub category: CtaCategory,
    /// Button text.
    pub label: String,
    /// Partner that fulfils the booking.
    pub provider: AffiliateProvider,
    /// Decorative emoji.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// Resolved affiliate URL; empty until links are attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// One day of an itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// Day number starting at 1.
    pub day: u8,
    /// Short heading.
    pub title: String,
    /// Summary of the day.
    pub description: String,
    /// Decorative emoji.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// Places visited.
    #[serde(default)]
    pub places: Vec<String>,
    /// Activities on offer.
    #[serde(default)]
    pub activities: Vec<String>,
    /// Booking slots.
    #[serde(default)]
    pub ctas: Vec<ItineraryCta>,
}

/// A curated multi-day plan for one destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryPlan {
    /// Display name of the destination.
    pub destination: String,
    /// Decorative emoji.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// Trip length in days.
    pub days: u8,
    /// Plan heading.
    pub title: String,
    /// Plan summary.
    pub description: String,
    /// When to go, as free text.
    #[serde(default)]
    pub best_time: String,
    /// Expected spend, as free text.
    #[serde(default)]
    pub budget: String,
    /// Days in order.
    pub itinerary: Vec<ItineraryDay>,
}

impl ItineraryPlan {
    /// Iterate over every call-to-action in day order.
    pub fn ctas(&self) -> impl Iterator<Item = &ItineraryCta> {
        self.itinerary.iter().flat_map(|day| day.ctas.iter())
    }
}

/// Normalised catalog key for a city: trimmed and lowercased.
///
/// # Examples
/// ```
/// use tripsaver_core::CityKey;
///
/// assert_eq!(CityKey::new("  Goa "), CityKey::new("goa"));
/// assert_eq!(CityKey::new("Goa").as_str(), "goa");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CityKey(String);

impl CityKey {
    /// Normalise `raw` into a key.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// The normalised key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Report whether the key is empty after normalisation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for CityKey {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for CityKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<CityKey> for String {
    fn from(key: CityKey) -> Self {
        key.0
    }
}

impl Borrow<str> for CityKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
