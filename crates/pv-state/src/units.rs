//! Display-unit tables.
//!
//! Each state property has a short, fixed list of display units with exact
//! forward/backward formulas to and from SI. The tables are enumerated
//! `match`es so a new unit cannot be added without covering both directions.
//!
//! The conversion constants are the demo's display conventions, not the
//! precise physical constants: the Celsius offset is 273 (not 273.15) and an
//! atmosphere is 100000 Pa (not 101325).

use crate::error::{StateError, StateResult};
use crate::state::StateProperty;

/// Rounded Celsius offset used by the display layer.
pub const CELSIUS_OFFSET_K: f64 = 273.0;
/// Rounded atmosphere in pascals used by the display layer.
pub const ATM_PA: f64 = 100_000.0;
/// Millimeters of mercury in pascals.
pub const MMHG_PA: f64 = 133.322;

/// Volume display units, in selector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeUnit {
    Liter,
    Milliliter,
    CubicMeter,
}

impl VolumeUnit {
    pub fn to_si(self, value: f64) -> f64 {
        match self {
            Self::Liter => value / 1000.0,
            Self::Milliliter => value / 1_000_000.0,
            Self::CubicMeter => value,
        }
    }

    pub fn from_si(self, si: f64) -> f64 {
        match self {
            Self::Liter => si * 1000.0,
            Self::Milliliter => si * 1_000_000.0,
            Self::CubicMeter => si,
        }
    }
}

/// Temperature display units, in selector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
}

impl TemperatureUnit {
    pub fn to_si(self, value: f64) -> f64 {
        match self {
            Self::Kelvin => value,
            Self::Celsius => value + CELSIUS_OFFSET_K,
        }
    }

    pub fn from_si(self, si: f64) -> f64 {
        match self {
            Self::Kelvin => si,
            Self::Celsius => si - CELSIUS_OFFSET_K,
        }
    }
}

/// Pressure display units, in selector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureUnit {
    Pascal,
    Atmosphere,
    MmHg,
}

impl PressureUnit {
    pub fn to_si(self, value: f64) -> f64 {
        match self {
            Self::Pascal => value,
            Self::Atmosphere => value * ATM_PA,
            Self::MmHg => value * MMHG_PA,
        }
    }

    pub fn from_si(self, si: f64) -> f64 {
        match self {
            Self::Pascal => si,
            Self::Atmosphere => si / ATM_PA,
            Self::MmHg => si / MMHG_PA,
        }
    }
}

/// A display unit for some state property.
///
/// Moles are unitless; their single "unit" is the identity at index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Volume(VolumeUnit),
    Temperature(TemperatureUnit),
    Pressure(PressureUnit),
    Moles,
}

impl Unit {
    /// Resolve a unit-selector index for a property.
    pub fn from_index(property: StateProperty, index: usize) -> StateResult<Self> {
        let unit = match (property, index) {
            (StateProperty::Volume, 0) => Self::Volume(VolumeUnit::Liter),
            (StateProperty::Volume, 1) => Self::Volume(VolumeUnit::Milliliter),
            (StateProperty::Volume, 2) => Self::Volume(VolumeUnit::CubicMeter),
            (StateProperty::Temperature, 0) => Self::Temperature(TemperatureUnit::Kelvin),
            (StateProperty::Temperature, 1) => Self::Temperature(TemperatureUnit::Celsius),
            (StateProperty::Pressure, 0) => Self::Pressure(PressureUnit::Pascal),
            (StateProperty::Pressure, 1) => Self::Pressure(PressureUnit::Atmosphere),
            (StateProperty::Pressure, 2) => Self::Pressure(PressureUnit::MmHg),
            (StateProperty::Moles, 0) => Self::Moles,
            _ => return Err(StateError::UnknownUnit { property, index }),
        };
        Ok(unit)
    }

    /// The unit a selector starts on (index 0).
    pub fn default_for(property: StateProperty) -> Self {
        match property {
            StateProperty::Volume => Self::Volume(VolumeUnit::Liter),
            StateProperty::Temperature => Self::Temperature(TemperatureUnit::Kelvin),
            StateProperty::Pressure => Self::Pressure(PressureUnit::Pascal),
            StateProperty::Moles => Self::Moles,
        }
    }

    /// Position of this unit in its property's selector.
    pub fn index(self) -> usize {
        match self {
            Self::Volume(VolumeUnit::Liter) => 0,
            Self::Volume(VolumeUnit::Milliliter) => 1,
            Self::Volume(VolumeUnit::CubicMeter) => 2,
            Self::Temperature(TemperatureUnit::Kelvin) => 0,
            Self::Temperature(TemperatureUnit::Celsius) => 1,
            Self::Pressure(PressureUnit::Pascal) => 0,
            Self::Pressure(PressureUnit::Atmosphere) => 1,
            Self::Pressure(PressureUnit::MmHg) => 2,
            Self::Moles => 0,
        }
    }

    /// Number of selectable units for a property.
    pub fn count(property: StateProperty) -> usize {
        match property {
            StateProperty::Volume => 3,
            StateProperty::Temperature => 2,
            StateProperty::Pressure => 3,
            StateProperty::Moles => 1,
        }
    }

    /// Convert a displayed value to SI.
    pub fn to_si(self, value: f64) -> f64 {
        match self {
            Self::Volume(u) => u.to_si(value),
            Self::Temperature(u) => u.to_si(value),
            Self::Pressure(u) => u.to_si(value),
            Self::Moles => value,
        }
    }

    /// Convert an SI value to its displayed magnitude.
    pub fn from_si(self, si: f64) -> f64 {
        match self {
            Self::Volume(u) => u.from_si(si),
            Self::Temperature(u) => u.from_si(si),
            Self::Pressure(u) => u.from_si(si),
            Self::Moles => si,
        }
    }

    /// Selector label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Volume(VolumeUnit::Liter) => "L",
            Self::Volume(VolumeUnit::Milliliter) => "mL",
            Self::Volume(VolumeUnit::CubicMeter) => "m^3",
            Self::Temperature(TemperatureUnit::Kelvin) => "K",
            Self::Temperature(TemperatureUnit::Celsius) => "C",
            Self::Pressure(PressureUnit::Pascal) => "Pa",
            Self::Pressure(PressureUnit::Atmosphere) => "atm",
            Self::Pressure(PressureUnit::MmHg) => "mmHg",
            Self::Moles => "mol",
        }
    }
}
