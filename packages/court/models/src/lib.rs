#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Circuit and district court types.
//!
//! Both court kinds implement the [`Court`] trait, which exposes the shared
//! roster statistics ([`CourtStats`]) and the derived vacancy and lean
//! figures. Identity rules differ per kind: circuit courts are named by a
//! fixed ordinal table, district courts carry a parent circuit parsed from
//! an ordinal suffix and an identifier that may be resolved later from
//! boundary data.

pub mod circuit;
pub mod district;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;

pub use circuit::{CIRCUIT_NAMES, CircuitCourt, circuit_name};
pub use district::{CourtOfAppeal, DistrictCourt, DistrictCourtRecord, parse_court_of_appeal};

/// Errors raised by court identity rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourtError {
    /// Circuit identifier has no entry in the ordinal name table.
    #[error("circuit id {id} is outside the ordinal table (0..=11)")]
    CircuitOutOfRange {
        /// The offending identifier.
        id: i64,
    },

    /// Court-of-appeal text is neither `"D.C."` nor an ordinal like `"9th"`.
    #[error("invalid court of appeal {value:?}: expected an ordinal such as \"1st\" or \"D.C.\"")]
    InvalidCourtOfAppeal {
        /// The text that failed to parse.
        value: String,
    },
}

/// Overall lean of a court.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CourtLean {
    /// More Democratic than Republican appointees (`+1`).
    Democratic,
    /// More Republican than Democratic appointees (`-1`).
    Republican,
    /// Evenly split (`0`).
    Even,
}

impl CourtLean {
    /// Compares the two party counts.
    #[must_use]
    pub const fn from_counts(dem_judges: i32, gop_judges: i32) -> Self {
        if dem_judges > gop_judges {
            Self::Democratic
        } else if dem_judges < gop_judges {
            Self::Republican
        } else {
            Self::Even
        }
    }

    /// Returns the signed encoding used in map output: `+1`, `-1`, or `0`.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Democratic => 1,
            Self::Republican => -1,
            Self::Even => 0,
        }
    }
}

/// Roster-derived statistics shared by every court kind.
///
/// `gop_judges` is derived as `active_judges - dem_judges`, so the two party
/// counts always sum to `active_judges` even when the roster used to compute
/// `dem_judges` has a different length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CourtStats {
    /// Number of seated active judges.
    pub active_judges: i32,
    /// Name of the chief judge, empty if none is flagged.
    pub chief_judge: String,
    /// Judges eligible for senior status.
    pub senior_eligible_judges: i32,
    /// Judges appointed by Democratic presidents.
    pub dem_judges: i32,
    /// Judges appointed by Republican presidents.
    pub gop_judges: i32,
    /// Retiring judges appointed by Democratic presidents.
    pub dem_retiring: i32,
    /// Retiring judges appointed by Republican presidents.
    pub gop_retiring: i32,
}

impl CourtStats {
    /// Dominant partisanship from the current party counts.
    #[must_use]
    pub const fn lean(&self) -> CourtLean {
        CourtLean::from_counts(self.dem_judges, self.gop_judges)
    }
}

/// Capability shared by circuit and district courts.
pub trait Court {
    /// Numeric identifier, or `None` if it has not been resolved yet.
    fn id(&self) -> Option<i64>;

    /// Court name as given in the source data.
    fn name(&self) -> &str;

    /// Authorized number of judgeships.
    fn max_judges(&self) -> i32;

    /// Current roster statistics.
    fn stats(&self) -> &CourtStats;

    /// Replaces the roster statistics in one step.
    fn apply_stats(&mut self, stats: CourtStats);

    /// Name with spaces replaced by underscores, for file and layer names.
    ///
    /// # Errors
    ///
    /// Returns [`CourtError`] if the court's display name cannot be resolved.
    fn no_whitespace_name(&self) -> Result<String, CourtError>;

    /// Authorized seats minus active judges. Not clamped: an over-full
    /// court reports a negative count.
    fn vacancies(&self) -> i32 {
        self.max_judges() - self.stats().active_judges
    }

    /// Dominant partisanship of the court.
    fn lean(&self) -> CourtLean {
        self.stats().lean()
    }
}
