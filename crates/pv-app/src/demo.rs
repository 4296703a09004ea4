//! Demonstration facade.
//!
//! Binds an [`InputPanel`] to a [`Simulator`] and exposes the surfaces a
//! frontend drives: `on_text_committed` / `on_unit_changed` /
//! `display_text` on the input side, and `set_phase` / `select_unknown` /
//! `start_simulating` / `set_instant` / `tick` on the phase-control side.
//! Indices arriving from widgets are validated at this boundary.

use crate::error::AppResult;
use crate::input::{self, InputPanel};
use pv_sim::{Phase, SimConfig, Simulator, VisualSink};
use pv_state::{StateProperty, ThermoState};
use tracing::debug;

pub struct GasDemo<S: VisualSink> {
    sim: Simulator<S>,
    panel: InputPanel,
}

impl<S: VisualSink> GasDemo<S> {
    /// Build the demo around a default initial state; the sink and the
    /// displays are both brought in sync with it immediately.
    pub fn new(config: SimConfig, initial: ThermoState, sink: S) -> Self {
        let mut demo = Self {
            sim: Simulator::new(config, initial, sink),
            panel: InputPanel::new(),
        };
        demo.refresh_displays();
        demo
    }

    pub fn phase(&self) -> Phase {
        self.sim.phase()
    }

    pub fn unknown(&self) -> StateProperty {
        self.sim.unknown()
    }

    pub fn initial_state(&self) -> ThermoState {
        self.sim.initial_state()
    }

    pub fn final_state(&self) -> ThermoState {
        self.sim.final_state()
    }

    pub fn current_state(&self) -> ThermoState {
        self.sim.current_state()
    }

    pub fn simulator(&self) -> &Simulator<S> {
        &self.sim
    }

    pub fn simulator_mut(&mut self) -> &mut Simulator<S> {
        &mut self.sim
    }

    /// The text currently shown for a property.
    pub fn display_text(&self, prop: StateProperty) -> &str {
        self.panel.display_text(prop)
    }

    /// Switch phase by selector index. Entering the final phase blanks the
    /// selected unknown and refreshes the other displays from the initial
    /// state.
    pub fn set_phase(&mut self, phase_index: usize) -> AppResult<()> {
        let phase = Phase::try_from(phase_index)?;
        self.sim.set_phase(phase);
        if phase == Phase::Final {
            self.refresh_displays();
        }
        Ok(())
    }

    /// Designate the solver-derived property by selector index and re-render
    /// the displays (the selected one blanked, the rest from the initial
    /// state).
    pub fn select_unknown(&mut self, property_index: usize) -> AppResult<()> {
        let prop = StateProperty::try_from(property_index)?;
        self.sim.select_unknown(prop);
        self.refresh_displays();
        Ok(())
    }

    /// Solve the unknown and start the animation.
    pub fn start_simulating(&mut self) {
        self.sim.start_simulating();
    }

    /// Toggle the instant/normal animation-duration preset.
    pub fn set_instant(&mut self, instant: bool) {
        self.sim.set_instant(instant);
    }

    /// Commit pipeline with the parse failure surfaced. Text is kept on the
    /// slot either way; only the model write is skipped on failure.
    pub fn try_commit_text(&mut self, prop: StateProperty, text: &str) -> AppResult<()> {
        self.panel.set_text(prop, text);
        let value = input::parse_value(text)?;
        let si = self.panel.unit(prop).to_si(value);
        match self.sim.phase() {
            Phase::Initial => self.sim.write_initial(prop, si),
            Phase::Final => self.sim.write_final(prop, si),
            Phase::Simulating => {
                debug!(%prop, "text commit ignored while simulating");
            }
        }
        Ok(())
    }

    /// Input-surface entry point: unparsable text is swallowed silently.
    pub fn on_text_committed(&mut self, prop: StateProperty, text: &str) {
        if let Err(err) = self.try_commit_text(prop, text) {
            debug!(%prop, %err, "input left the model unchanged");
        }
    }

    /// Input-surface entry point: switch a slot's display unit, then
    /// reinterpret the displayed numeral under the new unit.
    pub fn on_unit_changed(&mut self, prop: StateProperty, unit_index: usize) -> AppResult<()> {
        self.panel.set_unit(prop, unit_index)?;
        self.reapply(prop);
        Ok(())
    }

    /// Advance the animation one frame and mirror the interpolated state
    /// into all four displays.
    pub fn tick(&mut self, frame_delta: f64) -> Option<ThermoState> {
        let current = self.sim.step(frame_delta)?;
        for prop in StateProperty::ALL {
            self.panel.show_value(prop, current.property(prop));
        }
        Some(current)
    }

    /// Re-run the commit pipeline on whatever text a slot currently shows.
    fn reapply(&mut self, prop: StateProperty) {
        let text = self.panel.display_text(prop).to_owned();
        self.on_text_committed(prop, &text);
    }

    fn refresh_displays(&mut self) {
        let initial = self.sim.initial_state();
        let blank = if self.sim.phase() == Phase::Final {
            Some(self.sim.unknown())
        } else {
            None
        };
        for prop in StateProperty::ALL {
            if blank == Some(prop) {
                self.panel.mark_unknown(prop);
            } else {
                self.panel.show_value(prop, initial.property(prop));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::input::UNKNOWN_SENTINEL;
    use pv_sim::NullSink;

    const PHASE_INITIAL: usize = 0;
    const PHASE_FINAL: usize = 1;

    fn demo() -> GasDemo<NullSink> {
        GasDemo::new(
            SimConfig::default(),
            ThermoState::new(1.0, 300.0, 100_000.0, 40.09),
            NullSink,
        )
    }

    #[test]
    fn construction_renders_initial_values() {
        let demo = demo();
        assert_eq!(demo.display_text(StateProperty::Volume), "1000.000"); // liters
        assert_eq!(demo.display_text(StateProperty::Temperature), "300.000");
        assert_eq!(demo.display_text(StateProperty::Pressure), "100000.000");
        assert_eq!(demo.display_text(StateProperty::Moles), "40.090");
    }

    #[test]
    fn celsius_commit_stores_si_and_redisplays_in_kelvin() {
        let mut demo = demo();
        demo.set_phase(PHASE_INITIAL).unwrap();
        demo.on_unit_changed(StateProperty::Temperature, 1).unwrap(); // Celsius
        demo.on_text_committed(StateProperty::Temperature, "25");
        assert_eq!(demo.initial_state().temperature, 298.0);

        demo.on_unit_changed(StateProperty::Temperature, 0).unwrap(); // Kelvin
        demo.panel.show_value(StateProperty::Temperature, demo.initial_state().temperature);
        assert_eq!(demo.display_text(StateProperty::Temperature), "298.000");
    }

    #[test]
    fn unit_change_reinterprets_displayed_numeral() {
        let mut demo = demo();
        demo.on_text_committed(StateProperty::Pressure, "1");
        assert_eq!(demo.initial_state().pressure, 1.0); // 1 Pa

        // switching the selector to atm re-reads "1" as one atmosphere
        demo.on_unit_changed(StateProperty::Pressure, 1).unwrap();
        assert_eq!(demo.initial_state().pressure, 100_000.0);
    }

    #[test]
    fn parse_failure_is_surfaced_but_leaves_model_unchanged() {
        let mut demo = demo();
        let before = demo.initial_state();
        let err = demo.try_commit_text(StateProperty::Volume, "not a number");
        assert!(matches!(err, Err(AppError::Parse { .. })));
        assert_eq!(demo.initial_state(), before);
        // the swallowing surface also leaves the model alone
        demo.on_text_committed(StateProperty::Volume, "1e");
        assert_eq!(demo.initial_state(), before);
    }

    #[test]
    fn entering_final_blanks_the_default_unknown() {
        let mut demo = demo();
        demo.set_phase(PHASE_FINAL).unwrap();
        assert_eq!(demo.unknown(), StateProperty::Volume);
        assert_eq!(demo.display_text(StateProperty::Volume), UNKNOWN_SENTINEL);
        assert_eq!(demo.display_text(StateProperty::Temperature), "300.000");
        assert_eq!(demo.display_text(StateProperty::Pressure), "100000.000");
        assert_eq!(demo.display_text(StateProperty::Moles), "40.090");
    }

    #[test]
    fn selecting_a_new_unknown_moves_the_blank() {
        let mut demo = demo();
        demo.set_phase(PHASE_FINAL).unwrap();
        demo.select_unknown(StateProperty::Pressure.index()).unwrap();
        assert_eq!(demo.display_text(StateProperty::Pressure), UNKNOWN_SENTINEL);
        // volume display comes back from the initial state, not the final
        assert_eq!(demo.display_text(StateProperty::Volume), "1000.000");
    }

    #[test]
    fn final_phase_commits_do_not_touch_the_initial_state() {
        let mut demo = demo();
        demo.set_phase(PHASE_FINAL).unwrap();
        demo.on_unit_changed(StateProperty::Volume, 2).unwrap(); // m^3
        demo.on_text_committed(StateProperty::Volume, "2.0");
        assert_eq!(demo.final_state().volume, 2.0);
        assert_eq!(demo.initial_state().volume, 1.0);
    }

    #[test]
    fn commits_while_simulating_are_ignored() {
        let mut demo = demo();
        demo.set_phase(PHASE_FINAL).unwrap();
        demo.start_simulating();
        demo.on_unit_changed(StateProperty::Volume, 2).unwrap();
        demo.on_text_committed(StateProperty::Volume, "9.0");
        // still the solved value (the seeded volume), not the ignored commit
        assert!((demo.final_state().volume - 1.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_indices_are_rejected() {
        let mut demo = demo();
        assert!(demo.set_phase(3).is_err());
        assert!(demo.select_unknown(4).is_err());
        assert!(demo.on_unit_changed(StateProperty::Moles, 1).is_err());
    }

    #[test]
    fn tick_mirrors_the_interpolated_state_into_displays() {
        let mut demo = demo();
        demo.set_phase(PHASE_FINAL).unwrap();
        demo.select_unknown(StateProperty::Pressure.index()).unwrap();
        demo.on_unit_changed(StateProperty::Volume, 2).unwrap();
        demo.on_text_committed(StateProperty::Volume, "2.0");
        demo.set_instant(true);
        demo.start_simulating();

        // first frame shows the initial state again, unknown included
        demo.tick(0.5).unwrap();
        assert_eq!(demo.display_text(StateProperty::Pressure), "100000.000");
        demo.tick(0.5).unwrap();
        demo.tick(0.5).unwrap();
        assert_eq!(demo.display_text(StateProperty::Volume), "2.000");
        assert_eq!(demo.display_text(StateProperty::Pressure), "50000.000");
    }
}
