//! Integration test: the full demonstration flow through the facade.
//!
//! Mirrors a user session: type the initial state in mixed display units,
//! move to the final phase, pick pressure as the unknown, double the volume,
//! and run the animation to saturation.

use pv_app::{GasDemo, UNKNOWN_SENTINEL};
use pv_sim::{SimConfig, VisualSink};
use pv_state::{StateProperty, ThermoState};

#[derive(Debug, Default)]
struct LastValueSink {
    piston: f64,
    speed: f64,
    color: f64,
    particles: u32,
}

impl VisualSink for LastValueSink {
    fn set_piston_fraction(&mut self, fraction: f64) {
        self.piston = fraction;
    }
    fn set_particle_speed_fraction(&mut self, fraction: f64) {
        self.speed = fraction;
    }
    fn set_pressure_color_fraction(&mut self, fraction: f64) {
        self.color = fraction;
    }
    fn set_target_particle_count(&mut self, count: u32) {
        self.particles = count;
    }
}

#[test]
fn typed_session_reaches_the_solved_state() {
    let seed = ThermoState::new(1.0, 300.0, 100_000.0, 40.09);
    let mut demo = GasDemo::new(SimConfig::default(), seed, LastValueSink::default());

    // Initial phase: volume in m^3, temperature typed in Celsius
    demo.set_phase(0).unwrap();
    demo.on_unit_changed(StateProperty::Volume, 2).unwrap();
    demo.on_text_committed(StateProperty::Volume, "1.0");
    demo.on_unit_changed(StateProperty::Temperature, 1).unwrap();
    demo.on_text_committed(StateProperty::Temperature, "27");
    demo.on_text_committed(StateProperty::Pressure, "100000");
    demo.on_text_committed(StateProperty::Moles, "40.09");

    let initial = demo.initial_state();
    assert_eq!(initial.temperature, 300.0); // 27 C + 273
    assert_eq!(initial.volume, 1.0);

    // editing the initial state keeps every fraction on its midpoint
    assert_eq!(demo.simulator().sink().piston, 0.5);
    assert_eq!(demo.simulator().sink().speed, 0.5);

    // Final phase: pressure is the unknown, volume doubles
    demo.set_phase(1).unwrap();
    demo.select_unknown(StateProperty::Pressure.index()).unwrap();
    assert_eq!(demo.display_text(StateProperty::Pressure), UNKNOWN_SENTINEL);
    demo.on_text_committed(StateProperty::Volume, "2.0");

    demo.set_instant(true);
    demo.start_simulating();
    assert!((demo.final_state().pressure - 50_000.0).abs() < 1e-6);

    // run to saturation: progress evaluates at 0, 0.25, ... 1.0
    let mut last = None;
    for _ in 0..5 {
        last = demo.tick(0.25);
    }
    let last = last.unwrap();
    assert!((last.volume - 2.0).abs() < 1e-9);
    assert!((last.pressure - 50_000.0).abs() < 1e-6);

    // displays mirror the saturated state; the sink sits on its endpoints
    assert_eq!(demo.display_text(StateProperty::Volume), "2.000");
    assert_eq!(demo.display_text(StateProperty::Pressure), "50000.000");
    let sink = demo.simulator().sink();
    assert!((sink.piston - 0.75).abs() < 1e-9);
    assert!((sink.color - 0.25).abs() < 1e-9);
    assert_eq!(sink.particles, 200);
}
