//! District (trial) courts.

use serde::{Deserialize, Serialize};

use crate::{Court, CourtError, CourtStats};

/// Parses the court-of-appeal column of the district roster into a circuit id.
///
/// `"D.C."` maps to 0. Any other value must be an ordinal such as `"1st"` or
/// `"10th"`: the last two characters are dropped and the rest must be a
/// non-negative integer.
///
/// # Errors
///
/// Returns [`CourtError::InvalidCourtOfAppeal`] if the value is not in
/// either form.
pub fn parse_court_of_appeal(value: &str) -> Result<i64, CourtError> {
    if value == "D.C." {
        return Ok(0);
    }

    let invalid = || CourtError::InvalidCourtOfAppeal {
        value: value.to_string(),
    };

    let (cut, _) = value.char_indices().rev().nth(1).ok_or_else(invalid)?;

    value[..cut]
        .parse::<u32>()
        .map(i64::from)
        .map_err(|_| invalid())
}

/// Court-of-appeal as it appears in input data: either already numeric or
/// the roster's ordinal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourtOfAppeal {
    /// Circuit id.
    Id(i64),
    /// Ordinal text, e.g. `"5th"` or `"D.C."`.
    Ordinal(String),
}

impl CourtOfAppeal {
    /// Resolves to a circuit id.
    ///
    /// # Errors
    ///
    /// Returns [`CourtError::InvalidCourtOfAppeal`] if ordinal text fails to
    /// parse.
    pub fn resolve(&self) -> Result<i64, CourtError> {
        match self {
            Self::Id(id) => Ok(*id),
            Self::Ordinal(text) => parse_court_of_appeal(text),
        }
    }
}

/// Input shape of a district court record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictCourtRecord {
    /// Boundary `FID`, if already known.
    #[serde(default)]
    pub id: Option<i64>,
    /// Full name, e.g. "Eastern District of Virginia".
    pub name: String,
    /// Short form, e.g. "E.D. Va.".
    #[serde(default)]
    pub abbreviation: String,
    /// Parent circuit.
    pub court_of_appeal: CourtOfAppeal,
    /// Authorized judgeships.
    pub max_judges: i32,
    /// Roster statistics, if pre-computed.
    #[serde(flatten)]
    pub stats: CourtStats,
}

/// A federal district court.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DistrictCourtRecord", rename_all = "camelCase")]
pub struct DistrictCourt {
    /// Boundary `FID`. `None` until resolved against boundary data.
    pub id: Option<i64>,
    /// Full name, matched exactly against boundary `NAME` properties.
    pub name: String,
    /// Short form.
    pub abbreviation: String,
    /// Parent circuit id.
    pub court_of_appeal: i64,
    /// Authorized judgeships.
    pub max_judges: i32,
    /// Roster statistics.
    #[serde(flatten)]
    pub stats: CourtStats,
}

impl TryFrom<DistrictCourtRecord> for DistrictCourt {
    type Error = CourtError;

    fn try_from(record: DistrictCourtRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: record.id,
            court_of_appeal: record.court_of_appeal.resolve()?,
            name: record.name,
            abbreviation: record.abbreviation,
            max_judges: record.max_judges,
            stats: record.stats,
        })
    }
}

impl DistrictCourt {
    /// Creates a district court with no identifier and zeroed statistics
    /// apart from the chief judge.
    ///
    /// # Errors
    ///
    /// Returns [`CourtError::InvalidCourtOfAppeal`] if `court_of_appeal` is
    /// not `"D.C."` or an ordinal.
    pub fn new(
        name: impl Into<String>,
        abbreviation: impl Into<String>,
        court_of_appeal: &str,
        max_judges: i32,
        chief_judge: impl Into<String>,
    ) -> Result<Self, CourtError> {
        Ok(Self {
            id: None,
            name: name.into(),
            abbreviation: abbreviation.into(),
            court_of_appeal: parse_court_of_appeal(court_of_appeal)?,
            max_judges,
            stats: CourtStats {
                chief_judge: chief_judge.into(),
                ..CourtStats::default()
            },
        })
    }
}

impl Court for DistrictCourt {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn max_judges(&self) -> i32 {
        self.max_judges
    }

    fn stats(&self) -> &CourtStats {
        &self.stats
    }

    fn apply_stats(&mut self, stats: CourtStats) {
        self.stats = stats;
    }

    fn no_whitespace_name(&self) -> Result<String, CourtError> {
        Ok(self.name.replace(' ', "_"))
    }
}
