//! Party classification for appointing presidents.
//!
//! A judge's partisanship is the party of the president who first appointed
//! them. Only presidents whose appointees are still in the roster data are
//! listed. Any other name is rejected.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;

/// Presidents whose appointees count as Democratic.
pub const DEMOCRATIC_PRESIDENTS: &[&str] = &["Clinton", "Obama", "Biden"];

/// Presidents whose appointees count as Republican.
pub const REPUBLICAN_PRESIDENTS: &[&str] = &["Reagan", "G.H.W. Bush", "G.W. Bush", "Trump"];

/// Party lean of a single judge.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Partisanship {
    /// Appointed by a Democratic president (`+1`).
    Democratic,
    /// Appointed by a Republican president (`-1`).
    Republican,
}

impl Partisanship {
    /// Returns the signed encoding used in map output: `+1` or `-1`.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Democratic => 1,
            Self::Republican => -1,
        }
    }
}

/// Errors raised when an appointing authority cannot be classified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    /// The president is in neither party table.
    #[error("appointing authority {appointed_by:?} is not accounted for")]
    UnknownAuthority {
        /// The president name that failed lookup (after stripping).
        appointed_by: String,
    },

    /// A judge record named a president in neither party table.
    #[error(
        "Judge was appointed by a president not accounted for. \
         {name} appointed by {appointed_by} in court #{court}"
    )]
    UnknownJudgeAuthority {
        /// Judge name.
        name: String,
        /// The president name that failed lookup (after stripping).
        appointed_by: String,
        /// Court identifier from the judge record.
        court: i64,
    },
}

/// Returns the significant president from an appointing-authority string.
///
/// `"Obama / Biden"` means appointed by Obama and later elevated by Biden;
/// only the first name counts. Strings without a `/` are returned as-is.
#[must_use]
pub fn appointing_president(appointed_by: &str) -> &str {
    match appointed_by.split_once('/') {
        Some((first, _)) => first.trim(),
        None => appointed_by,
    }
}

/// Classifies an appointing authority into a [`Partisanship`].
///
/// # Errors
///
/// Returns [`ClassificationError::UnknownAuthority`] if the president is in
/// neither party table. Matching is exact and case-sensitive.
pub fn derive_partisanship(appointed_by: &str) -> Result<Partisanship, ClassificationError> {
    let president = appointing_president(appointed_by);

    if DEMOCRATIC_PRESIDENTS.contains(&president) {
        Ok(Partisanship::Democratic)
    } else if REPUBLICAN_PRESIDENTS.contains(&president) {
        Ok(Partisanship::Republican)
    } else {
        Err(ClassificationError::UnknownAuthority {
            appointed_by: president.to_string(),
        })
    }
}
