//! Pipeline file locations.
//!
//! Paths come from a TOML file chosen by `--config`, falling back to the
//! file named by [`CONFIG_ENV_VAR`], falling back to [`PipelineConfig::default`].
//! Every key is optional; missing keys keep their default.
//!
//! ```toml
//! judges = "data/judges.json"
//! district_courts = "data/district_courts.json"
//! district_boundaries = "sources/dc_boundaries.geojson"
//! district_output = "out/dc_usable.geojson"
//! circuit_boundaries = "sources/cc_boundaries.geojson"
//! circuit_output = "out/cc_usable.geojson"
//! as_of_year = 2025
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::GenerateError;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "PARTICOURTS_CONFIG";

/// Input and output locations for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// JSON array of judge records.
    pub judges: PathBuf,
    /// JSON array of district court records.
    pub district_courts: PathBuf,
    /// District boundary `GeoJSON`.
    pub district_boundaries: PathBuf,
    /// Enriched district boundaries.
    pub district_output: PathBuf,
    /// Circuit boundary `GeoJSON`.
    pub circuit_boundaries: PathBuf,
    /// Enriched circuit boundaries.
    pub circuit_output: PathBuf,
    /// Year used for age and service calculations. Defaults to the
    /// current UTC year.
    pub as_of_year: Option<i32>,
}

const SOURCES_DIR: &str = "../../../../PrepareData/sources";
const DISPLAY_DIR: &str = "../../../../DisplayMaps/sources";

impl Default for PipelineConfig {
    fn default() -> Self {
        let sources = Path::new(SOURCES_DIR);
        let display = Path::new(DISPLAY_DIR);

        Self {
            judges: sources.join("judges.json"),
            district_courts: sources.join("district_courts.json"),
            district_boundaries: sources.join("dc_boundaries.geojson"),
            district_output: display.join("dc_usable.geojson"),
            circuit_boundaries: sources.join("cc_boundaries.geojson"),
            circuit_output: display.join("cc_usable.geojson"),
            as_of_year: None,
        }
    }
}

impl PipelineConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Toml`] if the text is not valid config TOML.
    pub fn from_toml(contents: &str) -> Result<Self, GenerateError> {
        Ok(toml::de::from_str(contents)?)
    }

    /// Reads a config file.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Read`] if the file cannot be read, or
    /// [`GenerateError::Toml`] if it does not parse.
    pub fn from_file(path: &Path) -> Result<Self, GenerateError> {
        let contents = crate::read_file(path)?;
        Self::from_toml(&contents)
    }

    /// Resolves the config for a run: `explicit` if given, else the file
    /// named by [`CONFIG_ENV_VAR`], else the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, GenerateError> {
        let path = explicit.map(Path::to_path_buf).or_else(|| {
            std::env::var(CONFIG_ENV_VAR)
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        });

        match path {
            Some(path) => {
                log::info!("Loading pipeline config from {}", path.display());
                Self::from_file(&path)
            }
            None => {
                log::debug!("No pipeline config given, using defaults");
                Ok(Self::default())
            }
        }
    }
}
