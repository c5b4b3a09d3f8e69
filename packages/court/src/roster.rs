//! Groups a judge list into per-court rosters.

use std::collections::BTreeMap;

use particourts_judge_models::Judge;

/// Judges grouped by court kind and court identifier.
///
/// Within each roster judges keep the order they had in the input list,
/// which is what decides the chief judge when more than one is flagged.
#[derive(Debug, Default)]
pub struct Rosters<'a> {
    circuit: BTreeMap<i64, Vec<&'a Judge>>,
    district: BTreeMap<i64, Vec<&'a Judge>>,
}

impl<'a> Rosters<'a> {
    /// Splits `judges` by [`Judge::is_circuit`] and [`Judge::court`].
    #[must_use]
    pub fn from_judges(judges: &'a [Judge]) -> Self {
        let mut rosters = Self::default();

        for judge in judges {
            let by_court = if judge.is_circuit {
                &mut rosters.circuit
            } else {
                &mut rosters.district
            };
            by_court.entry(judge.court).or_default().push(judge);
        }

        log::info!(
            "Grouped {} judges into {} circuit and {} district rosters",
            judges.len(),
            rosters.circuit.len(),
            rosters.district.len()
        );

        rosters
    }

    /// Judges sitting on circuit `id`. Empty if there are none.
    #[must_use]
    pub fn circuit(&self, id: i64) -> &[&'a Judge] {
        self.circuit
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Judges sitting on district court `id`. An unresolved court (`None`)
    /// has no roster.
    #[must_use]
    pub fn district(&self, id: Option<i64>) -> &[&'a Judge] {
        id.and_then(|id| self.district.get(&id))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// District court ids that have judges but are not in `known`.
    ///
    /// These judges will not show up in any enriched output.
    #[must_use]
    pub fn orphaned_districts(&self, known: &[Option<i64>]) -> Vec<i64> {
        self.district
            .keys()
            .copied()
            .filter(|id| !known.contains(&Some(*id)))
            .collect()
    }
}
