//! Scripted demonstration scenarios.
//!
//! A scenario file replays a user session against the input and
//! phase-control surfaces: initial-state entries as text+unit pairs, the
//! unknown selection, the final-state entries, and the animation settings.
//! Frontends load one and stage it; the tick/render loop stays theirs.

use crate::demo::GasDemo;
use crate::error::{AppError, AppResult};
use pv_sim::{SimConfig, VisualSink};
use pv_state::{StateProperty, ThermoState};
use serde::Deserialize;
use std::path::Path;

fn default_seed() -> ThermoState {
    ThermoState::new(1.0, 300.0, 100_000.0, 40.09)
}

fn default_frame_delta() -> f64 {
    0.25
}

fn default_frames() -> u32 {
    48
}

/// One text entry for a state property.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldInput {
    /// Text exactly as a user would commit it.
    pub text: String,
    /// Display-unit selector index (defaults to the property's first unit).
    #[serde(default)]
    pub unit: usize,
}

/// Per-property text entries; omitted properties keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateInputs {
    pub volume: Option<FieldInput>,
    pub temperature: Option<FieldInput>,
    pub pressure: Option<FieldInput>,
    pub moles: Option<FieldInput>,
}

impl StateInputs {
    pub fn get(&self, prop: StateProperty) -> Option<&FieldInput> {
        match prop {
            StateProperty::Volume => self.volume.as_ref(),
            StateProperty::Temperature => self.temperature.as_ref(),
            StateProperty::Pressure => self.pressure.as_ref(),
            StateProperty::Moles => self.moles.as_ref(),
        }
    }
}

/// A full scripted session.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Engine configuration; defaults apply to missing keys.
    #[serde(default)]
    pub config: SimConfig,
    /// State the demo opens on before any entries are applied.
    #[serde(default = "default_seed")]
    pub seed: ThermoState,
    /// Entries applied during the initial phase.
    #[serde(default)]
    pub initial: StateInputs,
    /// The solver-derived property of the final state.
    pub unknown: StateProperty,
    /// Entries applied during the final phase.
    #[serde(rename = "final", default)]
    pub final_inputs: StateInputs,
    /// Use the instant animation-duration preset.
    #[serde(default)]
    pub instant: bool,
    /// Frame delta handed to each tick [time-units].
    #[serde(default = "default_frame_delta")]
    pub frame_delta: f64,
    /// Number of frames to render.
    #[serde(default = "default_frames")]
    pub frames: u32,
}

impl Scenario {
    /// Replay everything up to (and including) the start action. The caller
    /// then owns the tick loop.
    pub fn stage<S: VisualSink>(&self, demo: &mut GasDemo<S>) -> AppResult<()> {
        demo.set_phase(0)?;
        self.apply_inputs(demo, &self.initial)?;

        demo.set_phase(1)?;
        demo.select_unknown(self.unknown.index())?;
        self.apply_inputs(demo, &self.final_inputs)?;

        demo.set_instant(self.instant);
        demo.start_simulating();
        Ok(())
    }

    fn apply_inputs<S: VisualSink>(
        &self,
        demo: &mut GasDemo<S>,
        inputs: &StateInputs,
    ) -> AppResult<()> {
        for prop in StateProperty::ALL {
            if let Some(input) = inputs.get(prop) {
                demo.on_unit_changed(prop, input.unit)?;
                demo.on_text_committed(prop, &input.text);
            }
        }
        Ok(())
    }
}

/// Load a scenario from a YAML file.
pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::ScenarioFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let scenario: Scenario = serde_yaml::from_str(&text)?;
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pv_sim::NullSink;

    const DOUBLED_VOLUME: &str = r#"
initial:
  temperature: { text: "27", unit: 1 }
unknown: pressure
final:
  volume: { text: "2.0", unit: 2 }
instant: true
frames: 8
frame_delta: 0.125
"#;

    #[test]
    fn parses_with_defaults() {
        let scenario: Scenario = serde_yaml::from_str(DOUBLED_VOLUME).unwrap();
        assert_eq!(scenario.unknown, StateProperty::Pressure);
        assert_eq!(scenario.seed, ThermoState::new(1.0, 300.0, 100_000.0, 40.09));
        assert_eq!(scenario.frames, 8);
        assert!(scenario.initial.pressure.is_none());
        assert_eq!(scenario.final_inputs.volume.as_ref().unwrap().unit, 2);
    }

    #[test]
    fn staging_reaches_the_simulating_phase() {
        let scenario: Scenario = serde_yaml::from_str(DOUBLED_VOLUME).unwrap();
        let mut demo = GasDemo::new(scenario.config.clone(), scenario.seed, NullSink);
        scenario.stage(&mut demo).unwrap();

        assert_eq!(demo.phase(), pv_sim::Phase::Simulating);
        // 27 C entry replaced the seed temperature
        assert_eq!(demo.initial_state().temperature, 300.0);
        // solved: doubled volume at fixed T and n halves the pressure
        assert!((demo.final_state().pressure - 50_000.0).abs() < 1e-6);
    }

    #[test]
    fn missing_unknown_is_a_parse_error() {
        let err = serde_yaml::from_str::<Scenario>("instant: true").unwrap_err();
        assert!(err.to_string().contains("unknown"));
    }
}
