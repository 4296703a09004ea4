//! Simulation configuration.

use pv_core::MinMax;
use serde::{Deserialize, Serialize};

/// Tunables for the animation engine and its visual outputs.
///
/// The `*_units_range` scalars set how much fractional deviation from the
/// initial value spans the full visual range: a property that has moved by
/// `units_range` times its initial value pins the corresponding fraction at
/// 0 or 1 (see [`crate::fraction::deviation_fraction`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Piston height bounds [m] mapped from the volume fraction.
    pub piston_height: MinMax,
    /// Fractional volume deviation spanning the piston travel.
    pub volume_units_range: f64,
    /// Fractional temperature deviation spanning the particle speed range.
    pub temperature_units_range: f64,
    /// Fractional pressure deviation spanning the color gradient.
    pub pressure_units_range: f64,
    /// Rendered particles per mole of gas.
    pub particles_per_mole: f64,
    /// Moles beyond this are not rendered as additional particles.
    pub max_moles: f64,
    /// Animation duration [time-units] until `set_instant` overrides it.
    pub animation_duration: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            piston_height: MinMax::new(0.5, 3.5),
            volume_units_range: 2.0,
            temperature_units_range: 2.0,
            pressure_units_range: 2.0,
            particles_per_mole: 5.0,
            max_moles: 100.0,
            animation_duration: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let cfg = SimConfig::default();
        assert!(cfg.piston_height.min < cfg.piston_height.max);
        assert!(cfg.volume_units_range > 0.0);
        assert!(cfg.animation_duration > 0.0);
    }

    #[test]
    fn partial_deserialization_fills_defaults() {
        let cfg: SimConfig = serde_yaml::from_str("max_moles: 12.0").unwrap();
        assert_eq!(cfg.max_moles, 12.0);
        assert_eq!(cfg.particles_per_mole, SimConfig::default().particles_per_mole);
    }
}
