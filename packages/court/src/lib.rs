#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Court roster aggregation.
//!
//! Groups judges into per-court rosters, derives each court's statistics
//! from its roster, and provides the embedded registry of circuit courts.

pub mod aggregate;
pub mod registry;
pub mod roster;

pub use aggregate::{aggregate, apply_roster, refresh_court};
pub use registry::all_circuits;
pub use roster::Rosters;
