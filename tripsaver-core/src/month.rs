//! Calendar months and compact month sets.
//!
//! Catalog records historically stored best months either as numbers or as
//! English names, so [`Month`] accepts both forms when parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Errors returned when constructing or parsing a [`Month`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthError {
    /// The number was outside `1..=12`.
    #[error("month {0} is outside 1..=12")]
    OutOfRange(u16),
    /// The text was neither a month number nor a month name.
    #[error("unrecognised month '{0}'")]
    Unrecognised(String),
}

/// A calendar month numbered `1..=12`.
///
/// # Examples
/// ```
/// use tripsaver_core::Month;
///
/// # fn main() -> Result<(), tripsaver_core::MonthError> {
/// let january = Month::new(1)?;
/// assert_eq!(january.get(), 1);
/// assert_eq!("Jan".parse::<Month>()?, january);
/// assert!(Month::new(13).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "MonthRepr", into = "u8")]
pub struct Month(u8);

impl Month {
    /// Validate and construct a month from its number.
    ///
    /// # Errors
    /// Returns [`MonthError::OutOfRange`] unless `number` is in `1..=12`.
    pub const fn new(number: u8) -> Result<Self, MonthError> {
        if number >= 1 && number <= 12 {
            Ok(Self(number))
        } else {
            Err(MonthError::OutOfRange(number as u16))
        }
    }

    /// Return the month number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Iterate over all twelve months in calendar order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1_u8..=12).map(Self)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Month {
    type Err = MonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u16>() {
            let narrowed = u8::try_from(number).map_err(|_| MonthError::OutOfRange(number))?;
            return Self::new(narrowed);
        }
        let lower = trimmed.to_ascii_lowercase();
        MONTH_NAMES
            .iter()
            .position(|name| *name == lower || (lower.len() >= 3 && name.starts_with(&lower)))
            .and_then(|index| u8::try_from(index).ok())
            .map(|index| Self(index + 1))
            .ok_or_else(|| MonthError::Unrecognised(trimmed.to_owned()))
    }
}

impl TryFrom<u8> for Month {
    type Error = MonthError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MonthRepr {
    Number(u16),
    Name(String),
}

impl TryFrom<MonthRepr> for Month {
    type Error = MonthError;

    fn try_from(repr: MonthRepr) -> Result<Self, Self::Error> {
        match repr {
            MonthRepr::Number(number) => {
                let narrowed = u8::try_from(number).map_err(|_| MonthError::OutOfRange(number))?;
                Self::new(narrowed)
            }
            MonthRepr::Name(name) => name.parse(),
        }
    }
}

/// A set of months stored as a bitmask.
///
/// # Examples
/// ```
/// use tripsaver_core::{Month, MonthSet};
///
/// # fn main() -> Result<(), tripsaver_core::MonthError> {
/// let winter: MonthSet = [12, 1, 2].into_iter().map(Month::new).collect::<Result<_, _>>()?;
/// assert!(winter.contains(Month::new(1)?));
/// assert!(!winter.contains(Month::new(7)?));
/// assert_eq!(winter.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Month>", into = "Vec<Month>")]
pub struct MonthSet {
    bits: u16,
}

impl MonthSet {
    /// Construct an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    const fn bit(month: Month) -> u16 {
        1_u16 << month.0
    }

    /// Add a month to the set.
    pub const fn insert(&mut self, month: Month) {
        self.bits |= Self::bit(month);
    }

    /// Add a month while returning `self` for chaining.
    #[must_use]
    pub const fn with(mut self, month: Month) -> Self {
        self.insert(month);
        self
    }

    /// Report whether `month` is in the set.
    #[must_use]
    pub const fn contains(self, month: Month) -> bool {
        self.bits & Self::bit(month) != 0
    }

    /// Return the months present in both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Report whether the sets share no month.
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.bits & other.bits == 0
    }

    /// Report whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Number of months in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.bits.count_ones()
    }

    /// Iterate over members in calendar order.
    pub fn iter(self) -> impl Iterator<Item = Month> {
        Month::all().filter(move |month| self.contains(*month))
    }
}

impl FromIterator<Month> for MonthSet {
    fn from_iter<I: IntoIterator<Item = Month>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

impl From<Vec<Month>> for MonthSet {
    fn from(months: Vec<Month>) -> Self {
        months.into_iter().collect()
    }
}

impl From<MonthSet> for Vec<Month> {
    fn from(set: MonthSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Display for MonthSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for month in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{month}")?;
            first = false;
        }
        Ok(())
    }
}
