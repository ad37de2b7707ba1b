//! Rank destinations for a traveller.
//!
//! The `DestinationScorer` trait ranks a catalog of
//! [`Destination`](crate::Destination)s against validated
//! [`UserPreferences`](crate::UserPreferences).

use crate::{Destination, PreferencesError, PreferencesRequest, Recommendations, UserPreferences};

/// Score and rank destinations.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one scorer can
/// serve concurrent requests. Scoring is infallible: a traveller whose
/// interests match nothing receives an empty [`Recommendations`].
///
/// Implementations must:
/// - Return items sorted by descending score, keeping catalog order for ties.
/// - Keep every score within `0..=100`.
///
/// # Examples
///
/// ```rust
/// use tripsaver_core::{
///     Destination, DestinationScorer, PreferencesRequest, Recommendations, UserPreferences,
/// };
///
/// struct NothingScorer;
///
/// impl DestinationScorer for NothingScorer {
///     fn score<'a>(
///         &self,
///         _destinations: &'a [Destination],
///         _prefs: &UserPreferences,
///     ) -> Recommendations<'a> {
///         Recommendations::default()
///     }
/// }
///
/// let request = PreferencesRequest {
///     month: Some(1),
///     budget: Some("budget".into()),
///     ..PreferencesRequest::default()
/// };
/// assert!(NothingScorer.recommend(&[], &request).unwrap().is_empty());
/// assert!(NothingScorer.recommend(&[], &PreferencesRequest::default()).is_err());
/// ```
pub trait DestinationScorer: Send + Sync {
    /// Rank `destinations` according to `prefs`.
    fn score<'a>(
        &self,
        destinations: &'a [Destination],
        prefs: &UserPreferences,
    ) -> Recommendations<'a>;

    /// Validate a raw request and rank `destinations` against it.
    ///
    /// # Errors
    /// Returns [`PreferencesError`] when the request is incomplete or names
    /// an unknown budget, category or climate. Nothing is scored in that
    /// case.
    fn recommend<'a>(
        &self,
        destinations: &'a [Destination],
        request: &PreferencesRequest,
    ) -> Result<Recommendations<'a>, PreferencesError> {
        let prefs = UserPreferences::try_from(request)?;
        Ok(self.score(destinations, &prefs))
    }
}
