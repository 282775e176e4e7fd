use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use orbit_sim::config;
use orbit_sim::io::csv::write_trajectory_file;
use orbit_sim::io::json::{write_summary_file, FlightSummary};
use orbit_sim::orbital::compute_orbit;
use orbit_sim::sim::{presets, simulate, EventKind, FlightLog, Scenario, SimConfig};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // -----------------------------------------------------------------------
    // Arguments: [scenario.toml] [--csv PATH] [--json PATH]
    // -----------------------------------------------------------------------
    let mut scenario_path = None;
    let mut csv_path = None;
    let mut json_path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--csv" => csv_path = args.next(),
            "--json" => json_path = args.next(),
            "--help" | "-h" => {
                eprintln!("usage: orbit-sim [scenario.toml] [--csv PATH] [--json PATH]");
                return ExitCode::SUCCESS;
            }
            _ => scenario_path = Some(arg),
        }
    }

    let scenario = match scenario_path {
        Some(path) => match config::load_scenario(&path) {
            Ok(s) => s,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => presets::orbit_insertion(),
    };

    // -----------------------------------------------------------------------
    // Run
    // -----------------------------------------------------------------------
    let sim_config = SimConfig::default();
    let log = simulate(&scenario, &sim_config);
    let summary = FlightSummary::from_log(&log, &scenario);

    print_report(&scenario, &sim_config, &log, &summary);

    if let Some(path) = csv_path {
        if let Err(err) = write_trajectory_file(&path, &log.samples) {
            eprintln!("error: writing {path}: {err}");
            return ExitCode::FAILURE;
        }
        println!("  Trajectory CSV written to {path}");
    }
    if let Some(path) = json_path {
        if let Err(err) = write_summary_file(&path, &scenario, &summary) {
            eprintln!("error: writing {path}: {err}");
            return ExitCode::FAILURE;
        }
        println!("  Summary JSON written to {path}");
    }

    ExitCode::SUCCESS
}

fn print_report(scenario: &Scenario, config: &SimConfig, log: &FlightLog, summary: &FlightSummary) {
    let planet = &scenario.planet;
    let rocket = &scenario.rocket;

    println!();
    println!("====================================================================");
    println!("  ROCKET FLIGHT — {}", scenario.name);
    println!("====================================================================");
    println!();
    println!("  Craft");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Dry mass:      {:>10.1} kg    Fuel:         {:>10.1} kg",
        rocket.dry_mass, rocket.max_fuel
    );
    println!(
        "  Thrust:        {:>10.0} N     TWR (pad):    {:>10.2}",
        rocket.thrust_power,
        rocket.twr(planet)
    );
    println!(
        "  Burn time:     {:>10.1} s     Delta-v:      {:>10.0} m/s",
        rocket.burn_time(),
        rocket.delta_v()
    );
    println!();

    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    if log.events.is_empty() {
        println!("  (none)");
    }
    for event in &log.events {
        let label = match &event.kind {
            EventKind::Liftoff => "LIFTOFF".to_string(),
            EventKind::Touchdown => "TOUCHDOWN".to_string(),
            EventKind::FuelExhausted => "FUEL OUT".to_string(),
            EventKind::Apoapsis => "APOAPSIS".to_string(),
            EventKind::Custom(s) => s.clone(),
        };
        println!(
            "  {:<10} t={:>7.1}s   alt={:>9.0}m   vel={:>7.1}m/s   fuel={:>7.1}",
            label,
            event.time,
            event.state.altitude(planet),
            event.state.speed(),
            event.state.fuel,
        );
    }
    println!();

    println!("  Performance");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Apoapsis:      {:>10.0} m   ({:.2} km at t={:.1}s)",
        summary.apoapsis_altitude_m,
        summary.apoapsis_altitude_m / 1000.0,
        summary.apoapsis_time_s
    );
    println!("  Max speed:     {:>10.1} m/s", summary.max_speed_ms);
    println!("  Fuel used:     {:>10.1} kg", summary.fuel_used_kg);
    println!("  Flight time:   {:>10.1} s", summary.flight_time_s);
    println!();

    println!("  Final Orbit");
    println!("  ──────────────────────────────────────────────────────────────────");
    let orbit = &summary.final_orbit;
    println!("  Class:         {:>12}   Eccentricity: {:>10.4}", summary.final_orbit_class, orbit.eccentricity);
    if orbit.is_ellipse() && orbit.semi_major_axis.is_finite() {
        println!(
            "  Semi-major:    {:>10.0} m   Semi-minor:   {:>10.0} m",
            orbit.semi_major_axis, orbit.semi_minor_axis
        );
        println!(
            "  Periapsis alt: {:>10.0} m   Apoapsis alt: {:>10.0} m",
            orbit.periapsis_radius() - planet.radius,
            orbit.apoapsis_radius() - planet.radius
        );
        println!("  Period:        {:>10.0} s", orbit.period_mu(planet.mu()));
    } else {
        println!("  (no closed orbit)");
    }
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>10}  {:>9}  {:>9}  {:>8}  {:>10}",
        "t (s)", "alt (m)", "vel (m/s)", "fuel (kg)", "ecc", "class"
    );
    println!("  {}", "─".repeat(62));

    let sample_interval = (log.samples.len() / 25).max(1);
    for (i, sample) in log.samples.iter().enumerate() {
        if i % sample_interval != 0 && i != log.samples.len() - 1 {
            continue;
        }
        let s = &sample.state;
        let orbit = compute_orbit(&(s.position - planet.center), &s.velocity, planet.mass);
        println!(
            "  {:>7.1}  {:>10.0}  {:>9.1}  {:>9.1}  {:>8.4}  {:>10}",
            sample.time,
            s.altitude(planet),
            s.speed(),
            s.fuel,
            orbit.eccentricity,
            orbit.class(),
        );
    }

    println!();
    println!("  Simulation: {} steps, dt={:.4} s", log.samples.len() - 1, config.dt);
    println!("====================================================================");
    println!();
}
