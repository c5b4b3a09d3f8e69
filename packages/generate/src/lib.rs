#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Map data generation pipeline.
//!
//! Loads judge and district court records, aggregates per-court statistics
//! from the judge rosters, and writes enriched court boundary `GeoJSON`
//! ready for the map frontend.

pub mod config;
pub mod interactive;

use std::path::{Path, PathBuf};

use chrono::Datelike as _;
use geojson::FeatureCollection;
use particourts_court::{Rosters, all_circuits, refresh_court};
use particourts_court_models::{CircuitCourt, Court as _, CourtError, DistrictCourt};
use particourts_geography::{
    GeoError, boundary::parse_boundaries, enrich_circuits, enrich_districts, resolve_missing_ids,
};
use particourts_judge_models::Judge;
use serde::de::DeserializeOwned;
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;

pub use config::PipelineConfig;

/// Errors that can occur while generating map data.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// An input file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A JSON input file did not match its record shape.
    #[error("Invalid records in {path}: {source}")]
    Records {
        /// Records file that failed to deserialize.
        path: PathBuf,
        /// Deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// A boundary file could not be parsed.
    #[error("Invalid boundaries in {path}: {source}")]
    Boundaries {
        /// Boundary file that failed to parse.
        path: PathBuf,
        /// Parse failure.
        #[source]
        source: GeoError,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file parse error.
    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Boundary resolution or enrichment error.
    #[error(transparent)]
    Geo(#[from] GeoError),

    /// Court identity error.
    #[error(transparent)]
    Court(#[from] CourtError),
}

/// Which boundary outputs to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Target {
    /// District and circuit boundaries.
    All,
    /// District boundaries only.
    Districts,
    /// Circuit boundaries only.
    Circuits,
}

impl Target {
    const fn includes_districts(self) -> bool {
        matches!(self, Self::All | Self::Districts)
    }

    const fn includes_circuits(self) -> bool {
        matches!(self, Self::All | Self::Circuits)
    }
}

/// The year used for age and service calculations.
#[must_use]
pub fn current_year(config: &PipelineConfig) -> i32 {
    config
        .as_of_year
        .unwrap_or_else(|| chrono::Utc::now().year())
}

/// Reads a file to a string.
///
/// # Errors
///
/// Returns [`GenerateError::Read`] if the file cannot be read.
pub fn read_file(path: &Path) -> Result<String, GenerateError> {
    std::fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, GenerateError> {
    let contents = read_file(path)?;
    serde_json::from_str(&contents).map_err(|source| GenerateError::Records {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the judge list. Order is preserved.
///
/// # Errors
///
/// Fails if the file cannot be read, is not a JSON array of judge records,
/// or names an appointing president with no known party.
pub fn load_judges(path: &Path) -> Result<Vec<Judge>, GenerateError> {
    let judges: Vec<Judge> = load_records(path)?;
    log::info!("Loaded {} judges from {}", judges.len(), path.display());
    Ok(judges)
}

/// Loads the district court list.
///
/// # Errors
///
/// Fails if the file cannot be read, is not a JSON array of district court
/// records, or a court of appeal is not a valid circuit ordinal.
pub fn load_district_courts(path: &Path) -> Result<Vec<DistrictCourt>, GenerateError> {
    let courts: Vec<DistrictCourt> = load_records(path)?;
    log::info!(
        "Loaded {} district courts from {}",
        courts.len(),
        path.display()
    );
    Ok(courts)
}

/// Loads a boundary feature collection.
///
/// # Errors
///
/// Fails if the file cannot be read or is not a `GeoJSON` feature
/// collection.
pub fn load_boundaries(path: &Path) -> Result<FeatureCollection, GenerateError> {
    let contents = read_file(path)?;
    let boundaries = parse_boundaries(&contents).map_err(|source| GenerateError::Boundaries {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "Loaded {} boundary features from {}",
        boundaries.features.len(),
        path.display()
    );
    Ok(boundaries)
}

/// Writes a feature collection as pretty-printed JSON, creating parent
/// directories as needed.
///
/// # Errors
///
/// Fails if the collection cannot be serialized or the file cannot be
/// written.
pub fn write_collection(path: &Path, collection: &FeatureCollection) -> Result<(), GenerateError> {
    let write_error = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let json = serde_json::to_string_pretty(collection)?;
    std::fs::write(path, json).map_err(write_error)?;

    log::info!(
        "Wrote {} features to {}",
        collection.features.len(),
        path.display()
    );
    Ok(())
}

/// Resolves missing district ids against `boundaries`, then recomputes
/// every court's statistics from its roster in `judges`.
///
/// # Errors
///
/// Fails if a court without an id has no matching boundary feature.
pub fn build_district_courts(
    judges: &[Judge],
    courts: &mut [DistrictCourt],
    boundaries: &FeatureCollection,
    current_year: i32,
) -> Result<(), GenerateError> {
    resolve_missing_ids(courts, boundaries)?;

    let rosters = Rosters::from_judges(judges);

    for court in courts.iter_mut() {
        let roster = rosters.district(court.id);
        refresh_court(court, roster, current_year);
    }

    let known: Vec<Option<i64>> = courts.iter().map(|court| court.id).collect();
    for id in rosters.orphaned_districts(&known) {
        log::warn!("Judges assigned to unknown district court {id}");
    }

    Ok(())
}

/// Builds every registered circuit court with statistics from its roster
/// in `judges`.
#[must_use]
pub fn build_circuit_courts(judges: &[Judge], current_year: i32) -> Vec<CircuitCourt> {
    let rosters = Rosters::from_judges(judges);
    let mut circuits = all_circuits();

    for circuit in &mut circuits {
        refresh_court(circuit, rosters.circuit(circuit.id), current_year);
    }

    circuits
}

/// Enriches district boundaries from the loaded judges and courts.
///
/// # Errors
///
/// See [`build_district_courts`] and [`enrich_districts`].
pub fn district_collection(
    judges: &[Judge],
    mut courts: Vec<DistrictCourt>,
    boundaries: &FeatureCollection,
    current_year: i32,
) -> Result<FeatureCollection, GenerateError> {
    build_district_courts(judges, &mut courts, boundaries, current_year)?;
    Ok(enrich_districts(boundaries, &courts)?)
}

/// Enriches circuit boundaries from the loaded judges.
///
/// # Errors
///
/// See [`enrich_circuits`].
pub fn circuit_collection(
    judges: &[Judge],
    boundaries: &FeatureCollection,
    current_year: i32,
) -> Result<FeatureCollection, GenerateError> {
    let circuits = build_circuit_courts(judges, current_year);
    Ok(enrich_circuits(boundaries, &circuits)?)
}

/// Runs the pipeline for `target`, reading and writing the files named in
/// `config`.
///
/// # Errors
///
/// Fails on the first unreadable input, invalid record, unresolvable
/// district, or unwritable output.
pub fn generate(config: &PipelineConfig, target: Target) -> Result<(), GenerateError> {
    let year = current_year(config);
    log::info!("Generating {target} boundaries as of {year}");

    let judges = load_judges(&config.judges)?;

    if target.includes_districts() {
        let courts = load_district_courts(&config.district_courts)?;
        let boundaries = load_boundaries(&config.district_boundaries)?;
        let enriched = district_collection(&judges, courts, &boundaries, year)?;
        write_collection(&config.district_output, &enriched)?;
    }

    if target.includes_circuits() {
        let boundaries = load_boundaries(&config.circuit_boundaries)?;
        let enriched = circuit_collection(&judges, &boundaries, year)?;
        write_collection(&config.circuit_output, &enriched)?;
    }

    Ok(())
}

/// Loads the district courts and resolves every missing id against the
/// district boundaries.
///
/// # Errors
///
/// Fails if an input cannot be loaded or a court cannot be resolved.
pub fn assign_ids(config: &PipelineConfig) -> Result<Vec<DistrictCourt>, GenerateError> {
    let mut courts = load_district_courts(&config.district_courts)?;
    let boundaries = load_boundaries(&config.district_boundaries)?;
    resolve_missing_ids(&mut courts, &boundaries)?;
    Ok(courts)
}

/// Renders the circuit registry as a plain-text table.
///
/// The `LAYER` column is the whitespace-free name used for the court's
/// map layer, or `-` when the circuit has no ordinal name.
#[must_use]
pub fn format_circuits(circuits: &[CircuitCourt]) -> String {
    use std::fmt::Write as _;

    let mut out = format!(
        "{:<4} {:<30} {:<22} {:<5} LAYER\n",
        "ID", "NAME", "JUSTICE", "SEATS"
    );
    out.push_str(&"-".repeat(86));
    out.push('\n');

    for circuit in circuits {
        let layer = circuit
            .no_whitespace_name()
            .unwrap_or_else(|_| "-".to_string());
        let _ = writeln!(
            out,
            "{:<4} {:<30} {:<22} {:<5} {layer}",
            circuit.id, circuit.name, circuit.supervising_justice, circuit.max_judges
        );
    }

    out
}

/// Renders resolved district ids, one court per line.
#[must_use]
pub fn format_district_ids(courts: &[DistrictCourt]) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();

    for court in courts {
        let id = court
            .id
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        let _ = writeln!(out, "{id:>4}  {}", court.name);
    }

    out
}
