//! Compile-time registry of the regional circuit courts.
//!
//! The circuits rarely change, so their supervising justices and authorized
//! seat counts live in `registry/circuits.toml`, embedded via `include_str!`.

use particourts_court_models::CircuitCourt;
use serde::Deserialize;

/// Number of regional circuits. Enforced by a test.
#[cfg(test)]
const EXPECTED_CIRCUIT_COUNT: usize = 12;

/// Embedded circuit definitions.
const CIRCUITS_TOML: &str = include_str!("../registry/circuits.toml");

#[derive(Deserialize)]
struct CircuitRegistry {
    circuit: Vec<CircuitCourt>,
}

/// Returns every registered circuit court with zeroed statistics, ordered
/// by circuit id.
///
/// # Panics
///
/// Panics if the embedded TOML fails to parse. Since it is a compile-time
/// constant, a parse failure is a development error caught by the tests.
#[must_use]
pub fn all_circuits() -> Vec<CircuitCourt> {
    let registry: CircuitRegistry = toml::de::from_str(CIRCUITS_TOML)
        .unwrap_or_else(|e| panic!("Failed to parse circuit registry: {e}"));

    let mut circuits = registry.circuit;
    circuits.sort_by_key(|circuit| circuit.id);
    circuits
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use particourts_court_models::circuit_name;

    use super::*;

    #[test]
    fn loads_all_circuits() {
        let circuits = all_circuits();
        assert_eq!(
            circuits.len(),
            EXPECTED_CIRCUIT_COUNT,
            "Expected {EXPECTED_CIRCUIT_COUNT} circuits, found {}. \
             Update EXPECTED_CIRCUIT_COUNT after adding/removing circuits.",
            circuits.len()
        );
    }

    #[test]
    fn circuit_ids_are_unique() {
        let mut seen = BTreeSet::new();
        for circuit in &all_circuits() {
            assert!(seen.insert(circuit.id), "Duplicate circuit id: {}", circuit.id);
        }
    }

    #[test]
    fn names_match_ordinal_table() {
        for circuit in &all_circuits() {
            assert_eq!(
                circuit_name(circuit.id).ok(),
                Some(circuit.name.as_str()),
                "circuit {} name does not match the ordinal table",
                circuit.id
            );
        }
    }

    #[test]
    fn all_circuits_have_required_fields() {
        for circuit in &all_circuits() {
            assert!(
                !circuit.supervising_justice.is_empty(),
                "circuit {} has no supervising justice",
                circuit.id
            );
            assert!(
                circuit.max_judges > 0,
                "circuit {} has no authorized seats",
                circuit.id
            );
            assert_eq!(circuit.stats.active_judges, 0);
        }
    }
}
