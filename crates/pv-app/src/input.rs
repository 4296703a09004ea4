//! Text/unit input slots.
//!
//! One slot per state property, holding exactly what a widget would: the
//! committed display text and the selected display unit. Parsed SI values
//! are never stored here; they go straight into the controller.

use crate::error::{AppError, AppResult};
use pv_state::{StateProperty, Unit};

/// Display marker for the solver-derived property.
pub const UNKNOWN_SENTINEL: &str = "----";

#[derive(Debug, Clone)]
struct InputSlot {
    unit: Unit,
    text: String,
}

/// The four input slots of the demonstration.
#[derive(Debug, Clone)]
pub struct InputPanel {
    slots: [InputSlot; 4],
}

impl Default for InputPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPanel {
    pub fn new() -> Self {
        Self {
            slots: StateProperty::ALL.map(|prop| InputSlot {
                unit: Unit::default_for(prop),
                text: String::new(),
            }),
        }
    }

    /// Currently selected display unit for a property.
    pub fn unit(&self, prop: StateProperty) -> Unit {
        self.slots[prop.index()].unit
    }

    /// Select a display unit by selector index.
    pub fn set_unit(&mut self, prop: StateProperty, unit_index: usize) -> AppResult<Unit> {
        let unit = Unit::from_index(prop, unit_index)?;
        self.slots[prop.index()].unit = unit;
        Ok(unit)
    }

    /// The text currently displayed for a property.
    pub fn display_text(&self, prop: StateProperty) -> &str {
        &self.slots[prop.index()].text
    }

    /// Store committed text verbatim (the widget keeps showing what the user
    /// typed even if it fails to parse).
    pub fn set_text(&mut self, prop: StateProperty, text: impl Into<String>) {
        self.slots[prop.index()].text = text.into();
    }

    /// Render a stored SI value through the selected unit, 3 decimals.
    pub fn show_value(&mut self, prop: StateProperty, si_value: f64) {
        let slot = &mut self.slots[prop.index()];
        slot.text = format!("{:.3}", slot.unit.from_si(si_value));
    }

    /// Blank a slot with the unknown sentinel.
    pub fn mark_unknown(&mut self, prop: StateProperty) {
        self.slots[prop.index()].text = UNKNOWN_SENTINEL.to_string();
    }
}

/// Parse committed input text as a number.
pub fn parse_value(text: &str) -> AppResult<f64> {
    text.trim().parse().map_err(|_| AppError::Parse {
        text: text.to_string(),
    })
}
