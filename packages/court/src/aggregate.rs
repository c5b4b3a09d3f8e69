//! Court statistics derived from a judge roster.
//!
//! Each function here is pure: it reads a roster and returns the figure it
//! derives. [`aggregate`] assembles them into a [`CourtStats`] that callers
//! install with [`Court::apply_stats`], so a court is never left with half
//! of its statistics recomputed.
//!
//! Rosters are slices of anything that borrows as a [`Judge`], so both
//! `&[Judge]` and the `&[&Judge]` slices produced by
//! [`Rosters`](crate::roster::Rosters) work.

use std::borrow::Borrow;

use particourts_court_models::{Court, CourtStats};
use particourts_judge_models::{Judge, Partisanship};

/// Democratic and Republican appointee counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartyCounts {
    /// Judges appointed by Democratic presidents.
    pub dem_judges: i32,
    /// `active_judges` minus `dem_judges`.
    pub gop_judges: i32,
}

/// Retiring judges per party.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetiringCounts {
    /// Retiring Democratic appointees.
    pub dem_retiring: i32,
    /// Retiring Republican appointees.
    pub gop_retiring: i32,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn count_i32(count: usize) -> i32 {
    count as i32
}

/// Counts Democratic appointees in the roster and derives the Republican
/// count by subtraction from `active_judges`.
///
/// The Republican figure is not counted directly. If the roster length
/// differs from `active_judges` it will be off by the difference; keep the
/// two in sync (see [`refresh_court`]).
#[must_use]
pub fn partisanship_counts<J: Borrow<Judge>>(active_judges: i32, judges: &[J]) -> PartyCounts {
    let dem_judges = count_i32(
        judges
            .iter()
            .map(Borrow::<Judge>::borrow)
            .filter(|judge| judge.partisanship() == Partisanship::Democratic)
            .count(),
    );

    PartyCounts {
        dem_judges,
        gop_judges: active_judges - dem_judges,
    }
}

/// Name of the first judge in roster order flagged as chief, or an empty
/// string if none is.
#[must_use]
pub fn chief_judge<J: Borrow<Judge>>(judges: &[J]) -> String {
    judges
        .iter()
        .map(Borrow::<Judge>::borrow)
        .find(|judge| judge.is_chief)
        .map_or_else(String::new, |judge| judge.name.clone())
}

/// Number of judges eligible for senior status in `current_year`.
#[must_use]
pub fn senior_eligible_count<J: Borrow<Judge>>(judges: &[J], current_year: i32) -> i32 {
    count_i32(
        judges
            .iter()
            .map(Borrow::<Judge>::borrow)
            .filter(|judge| judge.is_senior_eligible(current_year))
            .count(),
    )
}

/// Retiring judges split by party. Always counts from zero.
#[must_use]
pub fn retiring_counts<J: Borrow<Judge>>(judges: &[J]) -> RetiringCounts {
    judges
        .iter()
        .map(Borrow::<Judge>::borrow)
        .filter(|judge| judge.is_retiring)
        .fold(RetiringCounts::default(), |mut counts, judge| {
            match judge.partisanship() {
                Partisanship::Democratic => counts.dem_retiring += 1,
                Partisanship::Republican => counts.gop_retiring += 1,
            }
            counts
        })
}

/// Computes every roster statistic for a court with `active_judges` seated
/// judges.
#[must_use]
pub fn aggregate<J: Borrow<Judge>>(
    active_judges: i32,
    judges: &[J],
    current_year: i32,
) -> CourtStats {
    let parties = partisanship_counts(active_judges, judges);
    let retiring = retiring_counts(judges);

    CourtStats {
        active_judges,
        chief_judge: chief_judge(judges),
        senior_eligible_judges: senior_eligible_count(judges, current_year),
        dem_judges: parties.dem_judges,
        gop_judges: parties.gop_judges,
        dem_retiring: retiring.dem_retiring,
        gop_retiring: retiring.gop_retiring,
    }
}

/// Recomputes a court's statistics from `judges`, keeping the court's
/// current `active_judges` as the authoritative seat count.
pub fn apply_roster<C, J>(court: &mut C, judges: &[J], current_year: i32)
where
    C: Court + ?Sized,
    J: Borrow<Judge>,
{
    let stats = aggregate(court.stats().active_judges, judges, current_year);
    court.apply_stats(stats);
}

/// Recomputes a court's statistics treating every judge in `judges` as an
/// active judge, so `active_judges` becomes the roster length.
pub fn refresh_court<C, J>(court: &mut C, judges: &[J], current_year: i32)
where
    C: Court + ?Sized,
    J: Borrow<Judge>,
{
    let active_judges = count_i32(judges.len());
    let stats = aggregate(active_judges, judges, current_year);

    log::debug!(
        "{}: {} active ({} D / {} R), {} senior-eligible, chief {:?}",
        court.name(),
        stats.active_judges,
        stats.dem_judges,
        stats.gop_judges,
        stats.senior_eligible_judges,
        stats.chief_judge,
    );

    court.apply_stats(stats);
}

#[cfg(test)]
mod tests {
    use particourts_court_models::{CircuitCourt, CourtLean, DistrictCourt};
    use particourts_judge_models::JudgeRecord;

    use super::*;

    const YEAR: i32 = 2025;

    fn judge(name: &str, appointed_by: &str) -> Judge {
        Judge::new(JudgeRecord {
            name: name.to_string(),
            is_circuit: false,
            court: 5,
            year_of_birth: 1970,
            title: "District Judge".to_string(),
            appointed_by: appointed_by.to_string(),
            appointment_year: 2015,
            is_chief: false,
            is_retiring: false,
        })
        .unwrap()
    }

    fn chief(name: &str, appointed_by: &str) -> Judge {
        let mut judge = judge(name, appointed_by);
        judge.is_chief = true;
        judge
    }

    fn retiring(name: &str, appointed_by: &str) -> Judge {
        let mut judge = judge(name, appointed_by);
        judge.is_retiring = true;
        judge
    }

    fn senior(name: &str, appointed_by: &str) -> Judge {
        let mut judge = judge(name, appointed_by);
        judge.year_of_birth = 1950;
        judge.appointment_year = 1995;
        judge
    }

    #[test]
    fn gop_count_is_derived_by_subtraction() {
        let roster = vec![
            judge("A", "Obama"),
            judge("B", "Biden"),
            judge("C", "Clinton"),
            judge("D", "Obama / Biden"),
            judge("E", "Trump"),
        ];
        assert_eq!(
            partisanship_counts(10, &roster),
            PartyCounts {
                dem_judges: 4,
                gop_judges: 6,
            }
        );
    }

    #[test]
    fn mismatched_roster_yields_inconsistent_gop_count() {
        // Three Republican appointees in the roster, but active_judges says 2.
        let roster = vec![
            judge("A", "Trump"),
            judge("B", "Reagan"),
            judge("C", "G.W. Bush"),
        ];
        let counts = partisanship_counts(2, &roster);
        assert_eq!(counts.dem_judges, 0);
        assert_eq!(counts.gop_judges, 2);
    }

    #[test]
    fn first_chief_in_roster_order_wins() {
        let roster = vec![
            judge("A", "Obama"),
            chief("B", "Trump"),
            chief("C", "Biden"),
        ];
        assert_eq!(chief_judge(&roster), "B");
        assert_eq!(chief_judge(&roster[..1]), "");
        assert_eq!(chief_judge::<Judge>(&[]), "");
    }

    #[test]
    fn counts_senior_eligible() {
        let roster = vec![
            senior("A", "Clinton"),
            senior("B", "G.H.W. Bush"),
            judge("C", "Obama"),
        ];
        assert_eq!(senior_eligible_count(&roster, YEAR), 2);
        assert_eq!(senior_eligible_count(&roster, 2010), 0);
    }

    #[test]
    fn retiring_counts_start_from_zero_each_call() {
        let roster = vec![
            retiring("A", "Obama"),
            retiring("B", "Trump"),
            retiring("C", "Reagan"),
            judge("D", "Biden"),
        ];

        let first = retiring_counts(&roster);
        assert_eq!(
            first,
            RetiringCounts {
                dem_retiring: 1,
                gop_retiring: 2,
            }
        );

        let second = retiring_counts(&roster[1..2]);
        assert_eq!(
            second,
            RetiringCounts {
                dem_retiring: 0,
                gop_retiring: 1,
            }
        );
    }

    #[test]
    fn apply_roster_twice_does_not_double_count() {
        let roster = vec![retiring("A", "Obama"), retiring("B", "Trump")];
        let mut court = CircuitCourt::new(1, "First Circuit", "Jackson", 6);
        court.stats.active_judges = 2;

        apply_roster(&mut court, &roster, YEAR);
        apply_roster(&mut court, &roster[..1], YEAR);

        assert_eq!(court.stats.dem_retiring, 1);
        assert_eq!(court.stats.gop_retiring, 0);
        assert_eq!(court.stats.active_judges, 2);
    }

    #[test]
    fn aggregate_assembles_every_statistic() {
        let roster = vec![
            chief("A", "Obama"),
            retiring("B", "Biden"),
            senior("C", "Reagan"),
        ];
        let stats = aggregate(3, &roster, YEAR);

        assert_eq!(stats.active_judges, 3);
        assert_eq!(stats.chief_judge, "A");
        assert_eq!(stats.dem_judges, 2);
        assert_eq!(stats.gop_judges, 1);
        assert_eq!(stats.senior_eligible_judges, 1);
        assert_eq!(stats.dem_retiring, 1);
        assert_eq!(stats.gop_retiring, 0);
        assert_eq!(stats.lean(), CourtLean::Democratic);
        assert_eq!(stats.dem_judges + stats.gop_judges, stats.active_judges);
    }

    #[test]
    fn refresh_court_uses_roster_length_for_active_judges() {
        let roster = vec![judge("A", "Trump"), judge("B", "Obama")];
        let refs: Vec<&Judge> = roster.iter().collect();
        let mut court = DistrictCourt::new(
            "Western District of Texas",
            "W.D. Tex.",
            "5th",
            13,
            "",
        )
        .unwrap();

        refresh_court(&mut court, &refs, YEAR);

        assert_eq!(court.stats.active_judges, 2);
        assert_eq!(court.stats.dem_judges, 1);
        assert_eq!(court.stats.gop_judges, 1);
        assert_eq!(court.lean(), CourtLean::Even);
        assert_eq!(court.vacancies(), 11);
    }
}
