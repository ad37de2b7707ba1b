//! Read-only access to curated itinerary plans.

use crate::{CityKey, ItineraryPlan};

/// Look up itinerary plans by city and trip length.
///
/// Implementations are immutable once built and shared across threads.
/// Iteration order must be stable: the first plan is the resolver's
/// last-resort answer.
///
/// # Examples
///
/// ```rust
/// use tripsaver_core::{CityKey, ItineraryPlan, ItinerarySource};
///
/// struct EmptySource;
///
/// impl ItinerarySource for EmptySource {
///     fn plan(&self, _city: &CityKey, _days: u8) -> Option<&ItineraryPlan> {
///         None
///     }
///
///     fn first_plan(&self) -> Option<(&CityKey, &ItineraryPlan)> {
///         None
///     }
///
///     fn durations(&self, _city: &CityKey) -> Vec<u8> {
///         Vec::new()
///     }
///
///     fn cities(&self) -> Box<dyn Iterator<Item = &CityKey> + '_> {
///         Box::new(std::iter::empty())
///     }
/// }
///
/// assert!(!EmptySource.contains_city(&CityKey::new("goa")));
/// ```
pub trait ItinerarySource: Send + Sync {
    /// Plan for `city` lasting exactly `days` days.
    fn plan(&self, city: &CityKey, days: u8) -> Option<&ItineraryPlan>;

    /// First plan in iteration order, with its city.
    fn first_plan(&self) -> Option<(&CityKey, &ItineraryPlan)>;

    /// Day counts available for `city`, ascending.
    fn durations(&self, city: &CityKey) -> Vec<u8>;

    /// City keys in iteration order.
    fn cities(&self) -> Box<dyn Iterator<Item = &CityKey> + '_>;

    /// Report whether any plan exists for `city`.
    fn contains_city(&self, city: &CityKey) -> bool {
        !self.durations(city).is_empty()
    }
}
