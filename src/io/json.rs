use std::io::{self, Write};

use crate::orbital::{compute_orbit, OrbitClass, OrbitElements};
use crate::sim::runner::FlightLog;
use crate::sim::scenario::Scenario;

/// Summary statistics computed from a flight log.
#[derive(Debug, Clone)]
pub struct FlightSummary {
    pub apoapsis_altitude_m: f64,
    pub apoapsis_time_s: f64,
    pub max_speed_ms: f64,
    pub fuel_used_kg: f64,
    pub flight_time_s: f64,
    pub final_speed_ms: f64,
    pub final_orbit: OrbitElements,
    pub final_orbit_class: OrbitClass,
}

impl FlightSummary {
    /// Compute summary statistics from a run.
    pub fn from_log(log: &FlightLog, scenario: &Scenario) -> Self {
        let planet = &scenario.planet;

        let highest = log
            .samples
            .iter()
            .max_by(|a, b| {
                a.state
                    .altitude(planet)
                    .partial_cmp(&b.state.altitude(planet))
                    .unwrap()
            })
            .expect("a flight log always holds the initial sample");

        let max_speed = log
            .samples
            .iter()
            .map(|s| s.state.speed())
            .fold(0.0_f64, f64::max);

        let last = log.samples.last().expect("non-empty log");
        let fuel_used = scenario.rocket.max_fuel - last.state.fuel;

        let final_orbit = compute_orbit(
            &(last.state.position - planet.center),
            &last.state.velocity,
            planet.mass,
        );

        FlightSummary {
            apoapsis_altitude_m: highest.state.altitude(planet),
            apoapsis_time_s: highest.time,
            max_speed_ms: max_speed,
            fuel_used_kg: fuel_used,
            flight_time_s: last.time,
            final_speed_ms: last.state.speed(),
            final_orbit_class: final_orbit.class(),
            final_orbit,
        }
    }
}

/// Write a flight summary as JSON to a writer.
pub fn write_summary<W: Write>(
    writer: &mut W,
    scenario: &Scenario,
    summary: &FlightSummary,
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"scenario\": {{")?;
    writeln!(writer, "    \"name\": \"{}\",", scenario.name)?;
    writeln!(writer, "    \"planet_mass_kg\": {:e},", scenario.planet.mass)?;
    writeln!(writer, "    \"planet_radius_m\": {:.0}", scenario.planet.radius)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"performance\": {{")?;
    writeln!(writer, "    \"apoapsis_altitude_m\": {:.2},", summary.apoapsis_altitude_m)?;
    writeln!(writer, "    \"apoapsis_time_s\": {:.2},", summary.apoapsis_time_s)?;
    writeln!(writer, "    \"max_speed_ms\": {:.2},", summary.max_speed_ms)?;
    writeln!(writer, "    \"fuel_used_kg\": {:.2},", summary.fuel_used_kg)?;
    writeln!(writer, "    \"flight_time_s\": {:.2},", summary.flight_time_s)?;
    writeln!(writer, "    \"final_speed_ms\": {:.2}", summary.final_speed_ms)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"orbit\": {{")?;
    writeln!(writer, "    \"class\": \"{}\",", summary.final_orbit_class)?;
    writeln!(writer, "    \"eccentricity\": {:.6},", summary.final_orbit.eccentricity)?;
    writeln!(writer, "    \"semi_major_axis_m\": {},", json_num(summary.final_orbit.semi_major_axis))?;
    writeln!(writer, "    \"semi_minor_axis_m\": {}", json_num(summary.final_orbit.semi_minor_axis))?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Degenerate conics carry NaN axes; JSON has no NaN, so those become null.
fn json_num(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        "null".to_string()
    }
}

/// Write a flight summary JSON to a file.
pub fn write_summary_file(
    path: &str,
    scenario: &Scenario,
    summary: &FlightSummary,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, scenario, summary)
}
