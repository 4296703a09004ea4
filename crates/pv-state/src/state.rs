//! Thermodynamic state snapshots.

use crate::error::StateError;
use std::fmt;

/// One of the four ideal-gas state properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum StateProperty {
    Volume,
    Temperature,
    Pressure,
    Moles,
}

impl StateProperty {
    /// All properties in display order.
    pub const ALL: [StateProperty; 4] = [
        StateProperty::Volume,
        StateProperty::Temperature,
        StateProperty::Pressure,
        StateProperty::Moles,
    ];

    /// Position in the display order.
    pub fn index(&self) -> usize {
        match self {
            Self::Volume => 0,
            Self::Temperature => 1,
            Self::Pressure => 2,
            Self::Moles => 3,
        }
    }
}

impl TryFrom<usize> for StateProperty {
    type Error = StateError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Volume),
            1 => Ok(Self::Temperature),
            2 => Ok(Self::Pressure),
            3 => Ok(Self::Moles),
            _ => Err(StateError::UnknownProperty { index }),
        }
    }
}

impl fmt::Display for StateProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Volume => write!(f, "Volume"),
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Pressure"),
            Self::Moles => write!(f, "Moles"),
        }
    }
}

/// Full ideal-gas state in SI units: volume [m^3], temperature [K],
/// pressure [Pa], moles [mol].
///
/// Snapshots are plain `Copy` values; transitions produce a new snapshot via
/// [`ThermoState::with_property`] rather than mutating a shared one. Values
/// are not range-validated here: a zero-mole or zero-temperature state is
/// representable and yields non-finite results downstream (see the solver).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThermoState {
    pub volume: f64,
    pub temperature: f64,
    pub pressure: f64,
    pub moles: f64,
}

impl ThermoState {
    pub fn new(volume: f64, temperature: f64, pressure: f64, moles: f64) -> Self {
        Self {
            volume,
            temperature,
            pressure,
            moles,
        }
    }

    /// Read one property.
    pub fn property(&self, prop: StateProperty) -> f64 {
        match prop {
            StateProperty::Volume => self.volume,
            StateProperty::Temperature => self.temperature,
            StateProperty::Pressure => self.pressure,
            StateProperty::Moles => self.moles,
        }
    }

    /// New snapshot with one property replaced.
    pub fn with_property(&self, prop: StateProperty, value: f64) -> Self {
        let mut next = *self;
        match prop {
            StateProperty::Volume => next.volume = value,
            StateProperty::Temperature => next.temperature = value,
            StateProperty::Pressure => next.pressure = value,
            StateProperty::Moles => next.moles = value,
        }
        next
    }
}
