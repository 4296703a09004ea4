use clap::{Parser, Subcommand};
use pv_app::{AppError, AppResult, GasDemo, load_scenario};
use pv_core::MinMax;
use pv_sim::{SimConfig, VisualSink};
use pv_state::{StateProperty, ThermoState, Unit, solve_unknown, try_gas_constant};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pv-cli")]
#[command(about = "PVLab CLI - ideal-gas-law demonstration driver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scenario file and render the animation as text frames
    Run {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Solve one unknown of a final state from the ideal gas law
    Solve {
        /// Unknown property: volume | temperature | pressure | moles
        #[arg(long)]
        unknown: String,
        /// Initial volume [m^3]
        #[arg(long, default_value_t = 1.0)]
        v0: f64,
        /// Initial temperature [K]
        #[arg(long, default_value_t = 300.0)]
        t0: f64,
        /// Initial pressure [Pa]
        #[arg(long, default_value_t = 100_000.0)]
        p0: f64,
        /// Initial moles [mol]
        #[arg(long, default_value_t = 40.09)]
        n0: f64,
        /// Final volume [m^3] (defaults to the initial value)
        #[arg(long)]
        v: Option<f64>,
        /// Final temperature [K] (defaults to the initial value)
        #[arg(long)]
        t: Option<f64>,
        /// Final pressure [Pa] (defaults to the initial value)
        #[arg(long)]
        p: Option<f64>,
        /// Final moles [mol] (defaults to the initial value)
        #[arg(long)]
        n: Option<f64>,
    },
    /// List the display-unit tables
    Units,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { scenario_path } => cmd_run(&scenario_path),
        Commands::Solve {
            unknown,
            v0,
            t0,
            p0,
            n0,
            v,
            t,
            p,
            n,
        } => cmd_solve(&unknown, [v0, t0, p0, n0], [v, t, p, n]),
        Commands::Units => cmd_units(),
    }
}

/// Sink that keeps the latest visual outputs for rendering.
#[derive(Debug, Default)]
struct ConsoleSink {
    piston: f64,
    speed: f64,
    color: f64,
    particles: u32,
}

impl VisualSink for ConsoleSink {
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

/// Particle speed bounds [m/s] the speed fraction maps onto.
const PARTICLE_SPEED_RANGE: MinMax = MinMax { min: 0.4, max: 3.0 };
/// Width of the pressure tint bar in characters.
const TINT_BAR: MinMax = MinMax {
    min: 0.0,
    max: 24.0,
};
/// Fraction domain for bar scaling.
const UNIT_RANGE: MinMax = MinMax { min: 0.0, max: 1.0 };

fn cmd_run(scenario_path: &Path) -> AppResult<()> {
    let scenario = load_scenario(scenario_path)?;
    println!("Scenario: {}", scenario_path.display());

    let config = scenario.config.clone();
    let mut demo = GasDemo::new(config.clone(), scenario.seed, ConsoleSink::default());
    scenario.stage(&mut demo)?;

    let initial = demo.initial_state();
    let final_state = demo.final_state();
    println!(
        "Initial: V={:.4} m^3  T={:.2} K  P={:.1} Pa  n={:.3} mol",
        initial.volume, initial.temperature, initial.pressure, initial.moles
    );
    println!(
        "Final:   V={:.4} m^3  T={:.2} K  P={:.1} Pa  n={:.3} mol  (solved: {})",
        final_state.volume,
        final_state.temperature,
        final_state.pressure,
        final_state.moles,
        demo.unknown()
    );

    for frame in 0..scenario.frames {
        let Some(current) = demo.tick(scenario.frame_delta) else {
            break;
        };
        render_frame(frame, &current, &config, demo.simulator().sink());
    }

    println!("✓ Run complete");
    Ok(())
}

fn render_frame(frame: u32, current: &ThermoState, config: &SimConfig, sink: &ConsoleSink) {
    let height = config.piston_height.lerp(sink.piston);
    let speed = PARTICLE_SPEED_RANGE.lerp(sink.speed);
    let filled = (TINT_BAR.corresponding_value(&UNIT_RANGE, sink.color).round() as usize)
        .min(TINT_BAR.max as usize);
    let bar = format!(
        "{}{}",
        "#".repeat(filled),
        "-".repeat(TINT_BAR.max as usize - filled)
    );
    println!(
        "[{:>3}] V={:>8.4}  T={:>7.2}  P={:>9.1}  n={:>7.3}  piston={:.2}m  speed={:.2}  tint=[{}]  particles={}",
        frame,
        current.volume,
        current.temperature,
        current.pressure,
        current.moles,
        height,
        speed,
        bar,
        sink.particles
    );
}

fn cmd_solve(unknown: &str, initial: [f64; 4], final_overrides: [Option<f64>; 4]) -> AppResult<()> {
    let unknown = parse_property(unknown)?;
    let [v0, t0, p0, n0] = initial;
    let initial = ThermoState::new(v0, t0, p0, n0);

    let mut target = initial;
    for (prop, value) in StateProperty::ALL.iter().zip(final_overrides) {
        if let Some(value) = value {
            target = target.with_property(*prop, value);
        }
    }

    match try_gas_constant(&initial) {
        Ok(r) => println!("Gas constant r = {:.6}", r),
        Err(err) => println!("⚠ {err} - results will be non-finite"),
    }

    let solved = solve_unknown(&initial, &target, unknown);
    println!("Solved {}:", unknown);
    println!("  V = {:.6} m^3", solved.volume);
    println!("  T = {:.6} K", solved.temperature);
    println!("  P = {:.6} Pa", solved.pressure);
    println!("  n = {:.6} mol", solved.moles);
    Ok(())
}

fn cmd_units() -> AppResult<()> {
    for property in StateProperty::ALL {
        println!("{}:", property);
        for index in 0..Unit::count(property) {
            let unit = Unit::from_index(property, index)?;
            println!("  [{}] {}", index, unit.label());
        }
    }
    Ok(())
}

fn parse_property(name: &str) -> AppResult<StateProperty> {
    match name.to_lowercase().as_str() {
        "volume" | "v" => Ok(StateProperty::Volume),
        "temperature" | "t" => Ok(StateProperty::Temperature),
        "pressure" | "p" => Ok(StateProperty::Pressure),
        "moles" | "n" => Ok(StateProperty::Moles),
        _ => Err(AppError::InvalidInput(format!(
            "unknown property '{}': expected volume | temperature | pressure | moles",
            name
        ))),
    }
}
