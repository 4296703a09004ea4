//! Ideal-gas-law derivation of one unknown property.
//!
//! The gas constant is not the universal R: it is inferred empirically from
//! the fully known reference state via `r = P*V / (n*T)`, so the reference
//! state always satisfies `P*V = n*r*T` exactly.

use crate::error::{StateError, StateResult};
use crate::state::{StateProperty, ThermoState};

/// Gas constant implied by a fully known reference state.
///
/// Permissive: a reference with zero moles or zero temperature produces a
/// non-finite constant, which then flows through [`solve_unknown`]. Callers
/// that want the hazard surfaced use [`try_gas_constant`].
pub fn gas_constant(reference: &ThermoState) -> f64 {
    (reference.pressure * reference.volume) / (reference.moles * reference.temperature)
}

/// Checked variant of [`gas_constant`].
pub fn try_gas_constant(reference: &ThermoState) -> StateResult<f64> {
    if reference.moles == 0.0 {
        return Err(StateError::DegenerateState {
            what: "reference moles is zero",
        });
    }
    if reference.temperature == 0.0 {
        return Err(StateError::DegenerateState {
            what: "reference temperature is zero",
        });
    }
    let r = gas_constant(reference);
    if !r.is_finite() {
        return Err(StateError::DegenerateState {
            what: "derived gas constant is non-finite",
        });
    }
    Ok(r)
}

/// Solve the designated unknown of `target` from `P*V = n*r*T`, with `r`
/// taken from `reference`.
///
/// Pure: returns a new snapshot with exactly the unknown field replaced; the
/// other three fields pass through unchanged. No bounds checking; zero
/// divisors propagate non-finite values.
pub fn solve_unknown(
    reference: &ThermoState,
    target: &ThermoState,
    unknown: StateProperty,
) -> ThermoState {
    let r = gas_constant(reference);
    let p = target.pressure;
    let t = target.temperature;
    let v = target.volume;
    let n = target.moles;
    let solved = match unknown {
        StateProperty::Volume => n * r * t / p,
        StateProperty::Temperature => p * v / (n * r),
        StateProperty::Pressure => n * r * t / v,
        StateProperty::Moles => p * v / (r * t),
    };
    target.with_property(unknown, solved)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use pv_core::{Tolerances, nearly_equal};

    proptest! {
        #[test]
        fn solved_states_satisfy_the_law(
            v0 in 0.1_f64..10.0,
            t0 in 100.0_f64..1000.0,
            p0 in 1e3_f64..1e6,
            n0 in 0.1_f64..100.0,
            v1 in 0.1_f64..10.0,
            t1 in 100.0_f64..1000.0,
            p1 in 1e3_f64..1e6,
            n1 in 0.1_f64..100.0,
            unknown_index in 0usize..4,
        ) {
            let initial = ThermoState::new(v0, t0, p0, n0);
            let target = ThermoState::new(v1, t1, p1, n1);
            let unknown = StateProperty::try_from(unknown_index).unwrap();
            let r = try_gas_constant(&initial).unwrap();
            let solved = solve_unknown(&initial, &target, unknown);
            let tol = Tolerances { abs: 1e-6, rel: 1e-9 };
            prop_assert!(nearly_equal(
                solved.pressure * solved.volume,
                solved.moles * r * solved.temperature,
                tol
            ));
        }
    }
}
