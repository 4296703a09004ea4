//! The simulation controller.
//!
//! Owns the canonical initial/final/current state snapshots and the phase
//! machine, and republishes visual fractions on every change. Input layers
//! never hold state themselves; they request writes through the phase-gated
//! entry points here.

use crate::config::SimConfig;
use crate::fraction::deviation_fraction;
use crate::phase::Phase;
use crate::sink::{VisualSink, target_particle_count};
use pv_core::smooth_step;
use pv_state::{StateProperty, ThermoState, solve_unknown, try_gas_constant};
use tracing::{debug, warn};

/// Animation duration preset for instant mode [time-units].
pub const INSTANT_ANIMATION_DURATION: f64 = 1.0;
/// Animation duration preset for normal mode [time-units].
pub const NORMAL_ANIMATION_DURATION: f64 = 10.0;

/// Frame-driven controller interpolating between two thermodynamic states.
///
/// Single-threaded and cooperative: `Simulating` progress persists across
/// ticks and advances once per externally supplied frame delta. There is no
/// automatic termination once progress reaches 1; the interpolation simply
/// saturates (and, past 1, follows the unclamped smooth-step back toward the
/// initial values; tests pin that shape).
pub struct Simulator<S: VisualSink> {
    config: SimConfig,
    sink: S,
    phase: Phase,
    unknown: StateProperty,
    initial: ThermoState,
    final_state: ThermoState,
    current: ThermoState,
    sim_t: f64,
    animation_duration: f64,
}

impl<S: VisualSink> Simulator<S> {
    /// Create a controller seeded with a default initial state. The state is
    /// published immediately, so the sink starts out consistent.
    pub fn new(config: SimConfig, initial: ThermoState, sink: S) -> Self {
        let animation_duration = config.animation_duration;
        let mut sim = Self {
            config,
            sink,
            phase: Phase::default(),
            unknown: StateProperty::Volume,
            initial,
            final_state: initial,
            current: initial,
            sim_t: 0.0,
            animation_duration,
        };
        sim.set_initial_state(initial);
        sim
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn unknown(&self) -> StateProperty {
        self.unknown
    }

    pub fn initial_state(&self) -> ThermoState {
        self.initial
    }

    pub fn final_state(&self) -> ThermoState {
        self.final_state
    }

    pub fn current_state(&self) -> ThermoState {
        self.current
    }

    /// Raw interpolation progress (not a visual fraction).
    pub fn progress(&self) -> f64 {
        self.sim_t
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Switch phase. Entering `Final` seeds the final state as a copy of the
    /// initial state and resets the selected unknown to volume.
    pub fn set_phase(&mut self, phase: Phase) {
        debug!(?phase, "phase change");
        self.phase = phase;
        if phase == Phase::Final {
            self.final_state = self.initial;
            self.unknown = StateProperty::Volume;
        }
    }

    /// Designate which final-state property the solver derives.
    pub fn select_unknown(&mut self, unknown: StateProperty) {
        debug!(%unknown, "unknown selected");
        self.unknown = unknown;
    }

    /// Replace the initial state wholesale and republish all four visual
    /// outputs from it. With current == initial every deviation fraction
    /// lands on its 0.5 midpoint.
    pub fn set_initial_state(&mut self, state: ThermoState) {
        self.initial = state;
        self.current = state;
        self.publish(state);
    }

    /// Snapshot-replace one field of the initial state (full republish).
    pub fn write_initial(&mut self, prop: StateProperty, si_value: f64) {
        let next = self.initial.with_property(prop, si_value);
        self.set_initial_state(next);
    }

    /// Snapshot-replace one field of the final state. No visual effect until
    /// the run starts.
    pub fn write_final(&mut self, prop: StateProperty, si_value: f64) {
        self.final_state = self.final_state.with_property(prop, si_value);
    }

    /// Solve the final state's unknown from the ideal gas law and begin
    /// animating toward it.
    pub fn start_simulating(&mut self) {
        if let Err(err) = try_gas_constant(&self.initial) {
            // Preserved permissive behavior: the solve still runs and
            // produces non-finite values that flow to the sink.
            warn!(%err, "starting from a degenerate reference state");
        }
        self.final_state = solve_unknown(&self.initial, &self.final_state, self.unknown);
        debug!(
            unknown = %self.unknown,
            solved = self.final_state.property(self.unknown),
            "run started"
        );
        self.phase = Phase::Simulating;
        self.sim_t = 0.0;
    }

    /// Advance one frame while `Simulating`.
    ///
    /// Evaluates the interpolation at the current progress before advancing
    /// it, so the first tick reproduces the initial state exactly. Returns
    /// the freshly published snapshot, or `None` outside the simulating
    /// phase.
    pub fn step(&mut self, frame_delta: f64) -> Option<ThermoState> {
        if self.phase != Phase::Simulating {
            return None;
        }
        let t = self.sim_t;
        let current = ThermoState::new(
            smooth_step(self.initial.volume, self.final_state.volume, t),
            smooth_step(self.initial.temperature, self.final_state.temperature, t),
            smooth_step(self.initial.pressure, self.final_state.pressure, t),
            smooth_step(self.initial.moles, self.final_state.moles, t),
        );
        self.current = current;
        self.publish(current);
        self.sim_t += frame_delta / self.animation_duration;
        Some(current)
    }

    /// Toggle between the instant and normal animation-duration presets.
    pub fn set_instant(&mut self, instant: bool) {
        self.animation_duration = if instant {
            INSTANT_ANIMATION_DURATION
        } else {
            NORMAL_ANIMATION_DURATION
        };
    }

    fn publish(&mut self, state: ThermoState) {
        let piston = deviation_fraction(
            state.volume,
            self.initial.volume,
            self.config.volume_units_range,
        );
        let speed = deviation_fraction(
            state.temperature,
            self.initial.temperature,
            self.config.temperature_units_range,
        );
        let color = deviation_fraction(
            state.pressure,
            self.initial.pressure,
            self.config.pressure_units_range,
        );
        let particles =
            target_particle_count(state.moles, self.config.max_moles, self.config.particles_per_mole);
        self.sink.set_piston_fraction(piston);
        self.sink.set_particle_speed_fraction(speed);
        self.sink.set_pressure_color_fraction(color);
        self.sink.set_target_particle_count(particles);
    }
}
