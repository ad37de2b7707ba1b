//! Destination and itinerary catalog loaders.

use std::collections::BTreeSet;
use std::fmt;
use std::io::{BufReader, Read};

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use tripsaver_core::Destination;
use tripsaver_itinerary::{CatalogError, CityPlans, StaticCatalog};

use crate::fs::open_utf8_file;

const BUNDLED_DESTINATIONS: &str = include_str!("../data/destinations.json");
const BUNDLED_ITINERARIES: &str = include_str!("../data/itineraries.json");

/// Where catalog data came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// A file on disk.
    File(Utf8PathBuf),
    /// Data compiled into this crate.
    Bundled(&'static str),
}

impl fmt::Display for CatalogOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{path}"),
            Self::Bundled(name) => write!(f, "bundled {name}"),
        }
    }
}

/// Errors raised while loading catalogs.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The catalog file could not be opened.
    #[error("failed to open catalog {path}: {source}")]
    Open {
        /// Path that failed to open.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The catalog was not valid JSON or broke a record invariant.
    #[error("failed to parse catalog {origin}: {source}")]
    Parse {
        /// Where the data came from.
        origin: CatalogOrigin,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// Two destinations shared an identifier.
    #[error("destination '{id}' appears more than once in {origin}")]
    DuplicateDestination {
        /// Where the data came from.
        origin: CatalogOrigin,
        /// Repeated identifier.
        id: String,
    },
    /// The itinerary catalog was inconsistent.
    #[error("invalid itinerary catalog {origin}: {source}")]
    InvalidItineraries {
        /// Where the data came from.
        origin: CatalogOrigin,
        /// Validation failure.
        #[source]
        source: CatalogError,
    },
}

/// Load a destination catalog from a JSON file.
///
/// The file holds an array of destination records. Each record is validated
/// as it is decoded and identifiers must be unique.
///
/// # Errors
/// Returns [`CatalogLoadError`] when the file cannot be opened or parsed, a
/// record is invalid, or an identifier repeats.
pub fn load_destinations(path: &Utf8Path) -> Result<Vec<Destination>, CatalogLoadError> {
    let reader = open(path)?;
    read_destinations(reader, CatalogOrigin::File(path.to_path_buf()))
}

/// Load an itinerary catalog from a JSON file.
///
/// The file holds an array of `{ "key": city, "plans": [...] }` entries; file
/// order becomes catalog order.
///
/// # Errors
/// Returns [`CatalogLoadError`] when the file cannot be opened or parsed or
/// the catalog fails validation.
pub fn load_itineraries(path: &Utf8Path) -> Result<StaticCatalog, CatalogLoadError> {
    let reader = open(path)?;
    read_itineraries(reader, CatalogOrigin::File(path.to_path_buf()))
}

/// The destination catalog compiled into this crate.
///
/// # Errors
/// Returns [`CatalogLoadError`] if the bundled data is malformed.
pub fn bundled_destinations() -> Result<Vec<Destination>, CatalogLoadError> {
    read_destinations(
        BUNDLED_DESTINATIONS.as_bytes(),
        CatalogOrigin::Bundled("destinations"),
    )
}

/// The itinerary catalog compiled into this crate.
///
/// # Errors
/// Returns [`CatalogLoadError`] if the bundled data is malformed.
pub fn bundled_itineraries() -> Result<StaticCatalog, CatalogLoadError> {
    read_itineraries(
        BUNDLED_ITINERARIES.as_bytes(),
        CatalogOrigin::Bundled("itineraries"),
    )
}

fn open(path: &Utf8Path) -> Result<impl Read, CatalogLoadError> {
    let file = open_utf8_file(path).map_err(|source| CatalogLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

fn read_destinations(
    reader: impl Read,
    origin: CatalogOrigin,
) -> Result<Vec<Destination>, CatalogLoadError> {
    let destinations: Vec<Destination> = match serde_json::from_reader(reader) {
        Ok(destinations) => destinations,
        Err(source) => return Err(CatalogLoadError::Parse { origin, source }),
    };
    let mut seen = BTreeSet::new();
    for destination in &destinations {
        if !seen.insert(destination.id()) {
            return Err(CatalogLoadError::DuplicateDestination {
                origin,
                id: destination.id().to_owned(),
            });
        }
    }
    log::debug!("loaded {} destinations from {origin}", destinations.len());
    Ok(destinations)
}

fn read_itineraries(
    reader: impl Read,
    origin: CatalogOrigin,
) -> Result<StaticCatalog, CatalogLoadError> {
    let cities: Vec<CityPlans> = match serde_json::from_reader(reader) {
        Ok(cities) => cities,
        Err(source) => return Err(CatalogLoadError::Parse { origin, source }),
    };
    let catalog = match StaticCatalog::new(cities) {
        Ok(catalog) => catalog,
        Err(source) => return Err(CatalogLoadError::InvalidItineraries { origin, source }),
    };
    log::debug!("loaded itineraries for {} cities from {origin}", catalog.len());
    Ok(catalog)
}
