//! Stand-in city tables.
//!
//! Most destinations have no curated plan of their own. These tables map a
//! destination's kind or state to a canonical city that does.

use std::collections::BTreeMap;

use tripsaver_core::{CityKey, DestinationType};

const TYPE_TO_CITY: &[(DestinationType, &str)] = &[
    (DestinationType::Beach, "goa"),
    (DestinationType::Island, "kochi"),
    (DestinationType::Hill, "manali"),
    (DestinationType::Heritage, "jaipur"),
    (DestinationType::City, "delhi"),
    (DestinationType::Spiritual, "varanasi"),
    (DestinationType::Adventure, "leh"),
    (DestinationType::Wildlife, "kochi"),
];

const STATE_TO_CITY: &[(&str, &str)] = &[
    ("karnataka", "bangalore"),
    ("goa", "goa"),
    ("delhi", "delhi"),
    ("maharashtra", "mumbai"),
    ("rajasthan", "jaipur"),
    ("himachal pradesh", "manali"),
    ("uttar pradesh", "agra"),
    ("uttarakhand", "rishikesh"),
    ("kerala", "kochi"),
    ("andaman & nicobar", "kochi"),
    ("puducherry", "kochi"),
    ("tamil nadu", "bangalore"),
    ("west bengal", "darjeeling"),
    ("sikkim", "darjeeling"),
    ("meghalaya", "darjeeling"),
    ("ladakh", "leh"),
    ("jammu & kashmir", "leh"),
    ("punjab", "delhi"),
    ("assam", "darjeeling"),
    ("madhya pradesh", "jaipur"),
    ("telangana", "bangalore"),
];

/// Type and state lookups used by the resolver.
///
/// # Examples
/// ```
/// use tripsaver_core::DestinationType;
/// use tripsaver_itinerary::RemapTables;
///
/// let tables = RemapTables::default();
/// assert_eq!(tables.city_for_type(DestinationType::Beach).map(|c| c.as_str()), Some("goa"));
/// assert_eq!(tables.city_for_state(" Kerala ").map(|c| c.as_str()), Some("kochi"));
/// assert!(tables.city_for_state("atlantis").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemapTables {
    by_type: BTreeMap<DestinationType, CityKey>,
    by_state: BTreeMap<CityKey, CityKey>,
}

impl Default for RemapTables {
    fn default() -> Self {
        let by_type = TYPE_TO_CITY
            .iter()
            .map(|(kind, city)| (*kind, CityKey::new(city)))
            .collect();
        let by_state = STATE_TO_CITY
            .iter()
            .map(|(state, city)| (CityKey::new(state), CityKey::new(city)))
            .collect();
        Self { by_type, by_state }
    }
}

impl RemapTables {
    /// Tables with no entries.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            by_type: BTreeMap::new(),
            by_state: BTreeMap::new(),
        }
    }

    /// Map `kind` to `city`, replacing any existing entry.
    #[must_use]
    pub fn with_type(mut self, kind: DestinationType, city: &str) -> Self {
        self.by_type.insert(kind, CityKey::new(city));
        self
    }

    /// Map `state` to `city`, replacing any existing entry.
    #[must_use]
    pub fn with_state(mut self, state: &str, city: &str) -> Self {
        self.by_state.insert(CityKey::new(state), CityKey::new(city));
        self
    }

    /// Canonical city for a destination kind.
    #[must_use]
    pub fn city_for_type(&self, kind: DestinationType) -> Option<&CityKey> {
        self.by_type.get(&kind)
    }

    /// Canonical city for a state or region name, matched case-insensitively.
    #[must_use]
    pub fn city_for_state(&self, state: &str) -> Option<&CityKey> {
        self.by_state.get(&CityKey::new(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DestinationType::Island, "kochi")]
    #[case(DestinationType::Wildlife, "kochi")]
    #[case(DestinationType::Adventure, "leh")]
    #[case(DestinationType::Spiritual, "varanasi")]
    fn every_type_has_a_city(#[case] kind: DestinationType, #[case] city: &str) {
        let tables = RemapTables::default();
        assert_eq!(tables.city_for_type(kind).map(CityKey::as_str), Some(city));
        assert!(DestinationType::ALL
            .iter()
            .all(|each| tables.city_for_type(*each).is_some()));
    }

    #[rstest]
    #[case("Himachal Pradesh", "manali")]
    #[case("JAMMU & KASHMIR", "leh")]
    #[case("telangana", "bangalore")]
    fn states_match_case_insensitively(#[case] state: &str, #[case] city: &str) {
        let tables = RemapTables::default();
        assert_eq!(tables.city_for_state(state).map(CityKey::as_str), Some(city));
    }

    #[rstest]
    fn default_state_table_is_complete() {
        assert_eq!(STATE_TO_CITY.len(), 21);
    }

    #[rstest]
    fn overrides_replace_defaults() {
        let tables = RemapTables::default().with_type(DestinationType::Beach, "Gokarna");
        assert_eq!(
            tables
                .city_for_type(DestinationType::Beach)
                .map(CityKey::as_str),
            Some("gokarna")
        );
        assert!(RemapTables::empty().city_for_state("goa").is_none());
    }
}
