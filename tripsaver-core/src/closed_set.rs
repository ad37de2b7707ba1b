//! Closed string-backed enumerations.
//!
//! Catalog data names categories, climates and providers with plain strings.
//! The `closed_set!` macro turns each vocabulary into an enum so unknown
//! values are rejected when data enters the engine rather than silently
//! ignored during scoring.

use thiserror::Error;

/// A string did not name any member of a closed set.
///
/// # Examples
/// ```
/// use std::str::FromStr;
/// use tripsaver_core::Climate;
///
/// let err = Climate::from_str("arctic").unwrap_err();
/// assert_eq!(err.to_string(), "unknown climate 'arctic'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    /// Name of the vocabulary that rejected the value.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

/// Declare a closed enum with a canonical string for each variant.
///
/// Parsing is case-insensitive and ignores surrounding whitespace; the
/// canonical string is used for `Display` and serde.
macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every member in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Return the canonical string for this member.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|member| member.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| $crate::ParseEnumError::new($kind, s))
            }
        }
    };
}

pub(crate) use closed_set;
