use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::physics::planet::Planet;
use crate::sim::pilot::Phase;
use crate::sim::scenario::Scenario;
use crate::dynamics::state::Controls;
use crate::vehicle::RocketProperties;

use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Scenario files (TOML)
// ---------------------------------------------------------------------------

/// Errors raised while loading or validating a scenario file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid scenario: {0}")]
    Invalid(String),
}

/// On-disk scenario layout.
#[derive(Debug, Deserialize)]
pub struct ScenarioFile {
    pub name: String,
    pub planet: PlanetSection,
    pub rocket: RocketSection,
    #[serde(default)]
    pub initial_altitude_m: f64,
    #[serde(default)]
    pub program: Vec<PhaseSection>,
}

#[derive(Debug, Deserialize)]
pub struct PlanetSection {
    pub mass_kg: f64,
    pub radius_m: f64,
}

#[derive(Debug, Deserialize)]
pub struct RocketSection {
    pub thrust_newtons: f64,
    pub max_fuel_kg: f64,
    pub fuel_burn_rate_kg_s: f64,
    pub dry_mass_kg: f64,
}

#[derive(Debug, Deserialize)]
pub struct PhaseSection {
    pub duration_s: f64,
    #[serde(default)]
    pub thrust: bool,
    #[serde(default)]
    pub rotate_left: bool,
    #[serde(default)]
    pub rotate_right: bool,
}

/// Parse and validate a scenario from TOML text.
pub fn scenario_from_str(text: &str) -> Result<Scenario, ConfigError> {
    let file: ScenarioFile = toml::from_str(text)?;
    validate(&file)?;

    let planet = Planet::new(file.planet.mass_kg, file.planet.radius_m, Vector2::zeros());
    let rocket = RocketProperties {
        thrust_power: file.rocket.thrust_newtons,
        max_fuel: file.rocket.max_fuel_kg,
        fuel_burn_rate: file.rocket.fuel_burn_rate_kg_s,
        dry_mass: file.rocket.dry_mass_kg,
    };
    let program = file
        .program
        .iter()
        .map(|p| {
            Phase::new(
                p.duration_s,
                Controls {
                    rotate_left: p.rotate_left,
                    rotate_right: p.rotate_right,
                    thrust: p.thrust,
                },
            )
        })
        .collect();

    Ok(Scenario {
        name: file.name,
        initial_position: Scenario::pad_position(&planet, file.initial_altitude_m),
        planet,
        rocket,
        program,
    })
}

/// Load and validate a scenario from a TOML file.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    scenario_from_str(&text)
}

fn validate(file: &ScenarioFile) -> Result<(), ConfigError> {
    let invalid = |msg: String| Err(ConfigError::Invalid(msg));

    if !(file.planet.mass_kg > 0.0) {
        return invalid(format!("planet mass must be positive, got {}", file.planet.mass_kg));
    }
    if !(file.planet.radius_m > 0.0) {
        return invalid(format!("planet radius must be positive, got {}", file.planet.radius_m));
    }
    if !(file.rocket.dry_mass_kg > 0.0) {
        return invalid(format!("dry mass must be positive, got {}", file.rocket.dry_mass_kg));
    }
    if file.rocket.thrust_newtons < 0.0 {
        return invalid("thrust must not be negative".into());
    }
    if file.rocket.max_fuel_kg < 0.0 {
        return invalid("fuel capacity must not be negative".into());
    }
    if file.rocket.fuel_burn_rate_kg_s < 0.0 {
        return invalid("fuel burn rate must not be negative".into());
    }
    if file.initial_altitude_m < 0.0 {
        return invalid("initial altitude must not be negative".into());
    }
    for (i, phase) in file.program.iter().enumerate() {
        if !(phase.duration_s > 0.0) {
            return invalid(format!("program phase {} must have a positive duration", i));
        }
    }
    Ok(())
}
