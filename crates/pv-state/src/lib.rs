//! pv-state: thermodynamic state model for pvlab.
//!
//! Contains:
//! - state (ThermoState snapshots + StateProperty selector)
//! - units (display-unit tables with exact to/from-SI formulas)
//! - solver (ideal-gas-law derivation of one unknown property)
//! - error (shared error types)

pub mod error;
pub mod solver;
pub mod state;
pub mod units;

pub use error::{StateError, StateResult};
pub use solver::{gas_constant, solve_unknown, try_gas_constant};
pub use state::{StateProperty, ThermoState};
pub use units::{PressureUnit, TemperatureUnit, Unit, VolumeUnit};
