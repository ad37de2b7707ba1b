//! Traveller preferences and their validation.
//!
//! [`PreferencesRequest`] is the loosely-typed form that arrives from callers
//! and configuration. Converting it into [`UserPreferences`] is the single
//! validation point: scoring never sees a partially specified request.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{BudgetTier, Category, Climate, Month, MonthError, ParseEnumError};

/// Validated preferences for one scoring call.
///
/// # Examples
/// ```
/// use tripsaver_core::{BudgetTier, Category, Month, UserPreferences};
///
/// # fn main() -> Result<(), tripsaver_core::MonthError> {
/// let prefs = UserPreferences::new(Month::new(1)?, BudgetTier::Moderate)
///     .with_categories([Category::Beach]);
/// assert!(prefs.categories().contains(&Category::Beach));
/// assert!(prefs.climate().is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    month: Month,
    budget: BudgetTier,
    #[serde(default)]
    categories: BTreeSet<Category>,
    #[serde(default)]
    climate: Option<BTreeSet<Climate>>,
}

impl UserPreferences {
    /// Preferences with no interests and no climate preference.
    #[must_use]
    pub const fn new(month: Month, budget: BudgetTier) -> Self {
        Self {
            month,
            budget,
            categories: BTreeSet::new(),
            climate: None,
        }
    }

    /// Add interest categories.
    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories.extend(categories);
        self
    }

    /// Add preferred climates.
    #[must_use]
    pub fn with_climate(mut self, climates: impl IntoIterator<Item = Climate>) -> Self {
        self.climate.get_or_insert_with(BTreeSet::new).extend(climates);
        self
    }

    /// Month of travel.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Budget tier.
    #[must_use]
    pub const fn budget(&self) -> BudgetTier {
        self.budget
    }

    /// Interest categories; empty when the traveller has no preference.
    #[must_use]
    pub const fn categories(&self) -> &BTreeSet<Category> {
        &self.categories
    }

    /// Preferred climates, if any were given.
    #[must_use]
    pub const fn climate(&self) -> Option<&BTreeSet<Climate>> {
        self.climate.as_ref()
    }
}

/// Unvalidated preferences as supplied by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesRequest {
    /// Month number.
    pub month: Option<u8>,
    /// Budget tier name.
    pub budget: Option<String>,
    /// Interest category names.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Climate names.
    #[serde(default)]
    pub climate: Option<Vec<String>>,
}

/// Errors raised while validating a [`PreferencesRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferencesError {
    /// No travel month was supplied.
    #[error("travel month is required")]
    MissingMonth,
    /// The travel month was outside `1..=12`.
    #[error(transparent)]
    InvalidMonth(#[from] MonthError),
    /// No budget tier was supplied.
    #[error("budget tier is required")]
    MissingBudget,
    /// A budget, category or climate name was not recognised.
    #[error(transparent)]
    Parse(#[from] ParseEnumError),
}

impl TryFrom<&PreferencesRequest> for UserPreferences {
    type Error = PreferencesError;

    fn try_from(request: &PreferencesRequest) -> Result<Self, Self::Error> {
        let month = Month::new(request.month.ok_or(PreferencesError::MissingMonth)?)?;
        let budget: BudgetTier = request
            .budget
            .as_deref()
            .ok_or(PreferencesError::MissingBudget)?
            .parse()?;
        let categories = request
            .categories
            .iter()
            .map(|name| name.parse::<Category>())
            .collect::<Result<BTreeSet<_>, _>>()?;
        let climate = request
            .climate
            .as_deref()
            .filter(|names| !names.is_empty())
            .map(|names| {
                names
                    .iter()
                    .map(|name| name.parse::<Climate>())
                    .collect::<Result<BTreeSet<_>, _>>()
            })
            .transpose()?;
        Ok(Self {
            month,
            budget,
            categories,
            climate,
        })
    }
}

impl TryFrom<PreferencesRequest> for UserPreferences {
    type Error = PreferencesError;

    fn try_from(request: PreferencesRequest) -> Result<Self, Self::Error> {
        Self::try_from(&request)
    }
}
