#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Court boundary `GeoJSON` handling.
//!
//! Resolves district court identifiers against boundary features and joins
//! aggregated court statistics onto the boundaries, producing the
//! map-ready `dcourts` and `ccourts` feature collections.

pub mod boundary;
pub mod enrich;
pub mod identity;

use particourts_court_models::CourtError;
use thiserror::Error;

pub use enrich::{enrich_circuits, enrich_districts};
pub use identity::{resolve_district_id, resolve_missing_ids};

/// Errors that can occur while resolving or enriching boundaries.
#[derive(Debug, Error)]
pub enum GeoError {
    /// `GeoJSON` parsing or structure error.
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] Box<geojson::Error>),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A court's identity rules failed.
    #[error("Court error: {0}")]
    Court(#[from] CourtError),

    /// No boundary feature has a `NAME` matching the district court.
    #[error("Couldn't generate ID of {name}")]
    UnresolvedDistrict {
        /// District court name.
        name: String,
    },

    /// A boundary feature's `FID` is not an integer.
    #[error("Invalid FID {value} on boundary feature {name:?}")]
    InvalidFid {
        /// The feature's `NAME`, if any.
        name: Option<String>,
        /// The raw `FID` value.
        value: String,
    },
}

impl From<geojson::Error> for GeoError {
    fn from(e: geojson::Error) -> Self {
        Self::GeoJson(Box::new(e))
    }
}
