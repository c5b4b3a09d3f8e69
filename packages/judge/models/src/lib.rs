#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Judge record types and per-judge derivations.
//!
//! A [`Judge`] is classified by party when it is constructed (including when
//! it is deserialized), so every judge that exists has a known
//! [`Partisanship`]. Age, tenure, and senior-status eligibility are computed
//! against an explicit `current_year` rather than the wall clock.

pub mod partisanship;

use serde::{Deserialize, Serialize};

pub use partisanship::{ClassificationError, Partisanship, derive_partisanship};

/// Minimum value of age plus years of service for senior status
/// (the "Rule of 80").
pub const SENIOR_STATUS_SUM: i32 = 80;

/// Minimum age for senior status.
pub const RETIREMENT_AGE: i32 = 65;

/// A sitting judge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "JudgeRecord", into = "JudgeRecord")]
pub struct Judge {
    /// Full name.
    pub name: String,
    /// `true` for circuit (appellate) judges, `false` for district judges.
    pub is_circuit: bool,
    /// Identifier of the court this judge sits on.
    pub court: i64,
    /// Title as listed in the source roster.
    pub title: String,
    /// Year of birth.
    pub year_of_birth: i32,
    /// Year of appointment to the current court.
    pub appointment_year: i32,
    /// Whether this judge is the court's chief judge.
    pub is_chief: bool,
    /// Whether this judge has announced retirement or senior status.
    pub is_retiring: bool,
    appointed_by: String,
    partisanship: Partisanship,
}

/// Wire shape of a judge record, as produced by the roster scraper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeRecord {
    /// Full name.
    pub name: String,
    /// `true` for circuit judges.
    pub is_circuit: bool,
    /// Court identifier.
    pub court: i64,
    /// Year of birth.
    pub year_of_birth: i32,
    /// Title.
    #[serde(default)]
    pub title: String,
    /// Appointing authority, e.g. `"Obama"` or `"G.W. Bush / Trump"`.
    pub appointed_by: String,
    /// Year of appointment.
    pub appointment_year: i32,
    /// Chief judge flag.
    #[serde(default)]
    pub is_chief: bool,
    /// Retiring flag.
    #[serde(default)]
    pub is_retiring: bool,
}

impl TryFrom<JudgeRecord> for Judge {
    type Error = ClassificationError;

    fn try_from(record: JudgeRecord) -> Result<Self, Self::Error> {
        let partisanship = derive_partisanship(&record.appointed_by).map_err(|e| match e {
            ClassificationError::UnknownAuthority { appointed_by }
            | ClassificationError::UnknownJudgeAuthority { appointed_by, .. } => {
                ClassificationError::UnknownJudgeAuthority {
                    name: record.name.clone(),
                    appointed_by,
                    court: record.court,
                }
            }
        })?;

        Ok(Self {
            name: record.name,
            is_circuit: record.is_circuit,
            court: record.court,
            title: record.title,
            year_of_birth: record.year_of_birth,
            appointment_year: record.appointment_year,
            is_chief: record.is_chief,
            is_retiring: record.is_retiring,
            appointed_by: record.appointed_by,
            partisanship,
        })
    }
}

impl From<Judge> for JudgeRecord {
    fn from(judge: Judge) -> Self {
        Self {
            name: judge.name,
            is_circuit: judge.is_circuit,
            court: judge.court,
            year_of_birth: judge.year_of_birth,
            title: judge.title,
            appointed_by: judge.appointed_by,
            appointment_year: judge.appointment_year,
            is_chief: judge.is_chief,
            is_retiring: judge.is_retiring,
        }
    }
}

impl Judge {
    /// Builds a judge from a roster record, classifying its partisanship.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationError::UnknownJudgeAuthority`] if the
    /// appointing president is in neither party table.
    pub fn new(record: JudgeRecord) -> Result<Self, ClassificationError> {
        Self::try_from(record)
    }

    /// Appointing authority exactly as recorded.
    #[must_use]
    pub fn appointed_by(&self) -> &str {
        &self.appointed_by
    }

    /// The president whose party determines this judge's partisanship.
    #[must_use]
    pub fn appointing_president(&self) -> &str {
        partisanship::appointing_president(&self.appointed_by)
    }

    /// Party lean, fixed at construction.
    #[must_use]
    pub const fn partisanship(&self) -> Partisanship {
        self.partisanship
    }

    /// Age in `current_year`.
    #[must_use]
    pub const fn age(&self, current_year: i32) -> i32 {
        current_year - self.year_of_birth
    }

    /// Years on the current court as of `current_year`.
    #[must_use]
    pub const fn years_of_service(&self, current_year: i32) -> i32 {
        current_year - self.appointment_year
    }

    /// Whether the judge may take senior status in `current_year`.
    ///
    /// Requires both `age >= 65` and `age + service >= 80`.
    #[must_use]
    pub const fn is_senior_eligible(&self, current_year: i32) -> bool {
        let age = self.age(current_year);
        age >= RETIREMENT_AGE && age + self.years_of_service(current_year) >= SENIOR_STATUS_SUM
    }

    /// Estimated years until the judge becomes eligible for senior status.
    ///
    /// This is the sum of the years remaining on each gate (Rule of 80 and
    /// minimum age), not the larger of the two, so it is an upper bound on
    /// the real wait.
    #[must_use]
    pub const fn years_until_senior_eligible(&self, current_year: i32) -> i32 {
        let age = self.age(current_year);
        let sum = age + self.years_of_service(current_year);

        let rule_of_80 = if sum >= SENIOR_STATUS_SUM {
            0
        } else {
            SENIOR_STATUS_SUM - sum
        };
        let to_retirement_age = if age >= RETIREMENT_AGE {
            0
        } else {
            RETIREMENT_AGE - age
        };

        rule_of_80 + to_retirement_age
    }
}
