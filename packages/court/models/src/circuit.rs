//! Circuit (appellate) courts.

use serde::{Deserialize, Serialize};

use crate::{Court, CourtError, CourtStats};

/// Display names of the regional circuits, indexed by circuit id.
pub const CIRCUIT_NAMES: [&str; 12] = [
    "District of Columbia Circuit",
    "First Circuit",
    "Second Circuit",
    "Third Circuit",
    "Fourth Circuit",
    "Fifth Circuit",
    "Sixth Circuit",
    "Seventh Circuit",
    "Eighth Circuit",
    "Ninth Circuit",
    "Tenth Circuit",
    "Eleventh Circuit",
];

/// Resolves a circuit id to its display name.
///
/// # Errors
///
/// Returns [`CourtError::CircuitOutOfRange`] if `id` is not in `0..=11`.
pub fn circuit_name(id: i64) -> Result<&'static str, CourtError> {
    usize::try_from(id)
        .ok()
        .and_then(|index| CIRCUIT_NAMES.get(index))
        .copied()
        .ok_or(CourtError::CircuitOutOfRange { id })
}

/// A regional court of appeals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitCourt {
    /// Circuit number; 0 is the D.C. Circuit.
    pub id: i64,
    /// Name as given in the source data.
    pub name: String,
    /// Supreme Court justice allotted to this circuit.
    pub supervising_justice: String,
    /// Authorized judgeships.
    pub max_judges: i32,
    /// Roster statistics.
    #[serde(flatten)]
    pub stats: CourtStats,
}

impl CircuitCourt {
    /// Creates a circuit court with zeroed statistics.
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        supervising_justice: impl Into<String>,
        max_judges: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            supervising_justice: supervising_justice.into(),
            max_judges,
            stats: CourtStats::default(),
        }
    }

    /// Display name from the ordinal table. This is the join key against
    /// circuit boundary features.
    ///
    /// # Errors
    ///
    /// Returns [`CourtError::CircuitOutOfRange`] if the id is not a known
    /// circuit.
    pub fn display_name(&self) -> Result<&'static str, CourtError> {
        circuit_name(self.id)
    }
}

impl Court for CircuitCourt {
    fn id(&self) -> Option<i64> {
        Some(self.id)
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
        Ok(self.display_name()?.replace(' ', "_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_table_bounds() {
        assert_eq!(circuit_name(0), Ok("District of Columbia Circuit"));
        assert_eq!(circuit_name(9), Ok("Ninth Circuit"));
        assert_eq!(circuit_name(11), Ok("Eleventh Circuit"));
        assert_eq!(
            circuit_name(12),
            Err(CourtError::CircuitOutOfRange { id: 12 })
        );
        assert_eq!(
            circuit_name(-1),
            Err(CourtError::CircuitOutOfRange { id: -1 })
        );
    }

    #[test]
    fn no_whitespace_name_uses_display_name() {
        let court = CircuitCourt::new(1, "1st Cir.", "Jackson", 6);
        assert_eq!(court.no_whitespace_name().unwrap(), "First_Circuit");

        let court = CircuitCourt::new(13, "Federal", "Roberts", 12);
        assert!(court.no_whitespace_name().is_err());
    }

    #[test]
    fn vacancies_are_not_clamped() {
        let mut court = CircuitCourt::new(2, "Second Circuit", "Sotomayor", 12);
        court.stats.active_judges = 9;
        assert_eq!(court.vacancies(), 3);

        court.stats.active_judges = 13;
        assert_eq!(court.vacancies(), -1);
    }

    #[test]
    fn deserializes_with_flattened_stats() {
        let court: CircuitCourt = serde_json::from_value(serde_json::json!({
            "id": 4,
            "name": "Fourth Circuit",
            "supervisingJustice": "Roberts",
            "maxJudges": 15,
            "activeJudges": 15,
            "chiefJudge": "Albert Diaz",
            "demJudges": 9,
            "gopJudges": 6
        }))
        .unwrap();
        assert_eq!(court.id(), Some(4));
        assert_eq!(court.stats.chief_judge, "Albert Diaz");
        assert_eq!(court.vacancies(), 0);
        assert_eq!(court.lean().value(), 1);
    }
}
