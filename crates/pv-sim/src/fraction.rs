//! Normalized visual-fraction derivation.

use pv_core::clamp01;

/// Derive the normalized `[0, 1]` fraction that drives a visual output.
///
/// The fraction sits at 0.5 while `current` equals `reference` and moves
/// toward 0 or 1 as the value deviates by up to `units_range` times the
/// reference. Values at or below machine epsilon collapse to 0 so an empty
/// cylinder renders empty.
///
/// A zero `reference` divides to a non-finite fraction, which is propagated
/// (the clamp keeps NaN) rather than masked.
pub fn deviation_fraction(current: f64, reference: f64, units_range: f64) -> f64 {
    if current <= f64::EPSILON {
        return 0.0;
    }
    let delta = ((current - reference) / reference) / units_range;
    clamp01(0.5 + delta)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fraction_is_bounded_for_nondegenerate_inputs(
            current in 1e-6_f64..1e9,
            reference in 1e-6_f64..1e9,
            units_range in 0.1_f64..10.0,
        ) {
            let f = deviation_fraction(current, reference, units_range);
            prop_assert!((0.0..=1.0).contains(&f));
        }
    }
}
