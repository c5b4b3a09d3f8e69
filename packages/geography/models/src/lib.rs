#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Constant lookup tables used when preparing court data.
//!
//! Every lookup here is case-insensitive and returns a sentinel for unknown
//! keys rather than an error.

pub mod districts;
pub mod states;
