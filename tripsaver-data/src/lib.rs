//! Catalog loading for the TripSaver engine.
//!
//! Responsibilities:
//! - Read destination and itinerary catalogs from JSON files.
//! - Ship a bundled copy of both catalogs compiled into the crate.
//! - Validate everything it loads before handing it to the scorer or
//!   resolver.
//!
//! Boundaries:
//! - Do not encode scoring or resolution rules (they live in
//!   `tripsaver-scorer` and `tripsaver-itinerary`).
//! - Surface every failure to the caller; nothing is retried or masked.

#![forbid(unsafe_code)]

mod fs;
mod load;

pub use fs::{file_is_file, open_dir_and_file, open_utf8_file};
pub use load::{
    CatalogLoadError, CatalogOrigin, bundled_destinations, bundled_itineraries, load_destinations,
    load_itineraries,
};
