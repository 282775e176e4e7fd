use nalgebra::Vector2;

use crate::physics::planet::Planet;
use crate::sim::pilot::{Phase, ScriptedPilot};
use crate::vehicle::RocketProperties;

// ---------------------------------------------------------------------------
// Scenario: everything a run needs
// ---------------------------------------------------------------------------

/// A complete simulation setup: world, craft, pad position and control
/// program.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub planet: Planet,
    pub rocket: RocketProperties,
    pub initial_position: Vector2<f64>,
    pub program: Vec<Phase>,
}

impl Scenario {
    /// Pad straight "up" (+Y) from the planet center at the given altitude.
    pub fn pad_position(planet: &Planet, altitude: f64) -> Vector2<f64> {
        planet.center + Vector2::new(0.0, planet.radius + altitude)
    }

    /// Scripted pilot for this scenario's control program.
    pub fn pilot(&self) -> ScriptedPilot {
        ScriptedPilot::new(self.program.clone())
    }
}

// ---------------------------------------------------------------------------
// Preset scenarios
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// Vertical hop: short full burn straight up, then coast back to the pad.
    pub fn hopper() -> Scenario {
        let planet = Planet::earth();
        Scenario {
            name: "Hopper".into(),
            initial_position: Scenario::pad_position(&planet, 0.0),
            planet,
            rocket: RocketProperties::default(),
            program: vec![Phase::burn(5.0)],
        }
    }

    /// Ascent with a pitch-over: climb vertically, tip over to the horizontal,
    /// then burn prograde toward orbital speed.
    pub fn orbit_insertion() -> Scenario {
        let planet = Planet::earth();
        Scenario {
            name: "Orbit insertion".into(),
            initial_position: Scenario::pad_position(&planet, 0.0),
            planet,
            rocket: RocketProperties::default(),
            program: vec![
                Phase::burn(12.0),
                Phase::burn_turning_right(1.0),
                Phase::burn(25.0),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pad_sits_on_the_surface() {
        let planet = Planet::earth();
        let pad = Scenario::pad_position(&planet, 0.0);
        assert_relative_eq!(planet.altitude_of(&pad), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn presets_are_flyable() {
        for scenario in [presets::hopper(), presets::orbit_insertion()] {
            assert!(scenario.rocket.twr(&scenario.planet) > 1.0, "{} cannot lift off", scenario.name);
            assert!(!scenario.program.is_empty());
            // The program fits in the tank
            let commanded_burn: f64 = scenario
                .program
                .iter()
                .filter(|p| p.controls.thrust)
                .map(|p| p.duration)
                .sum();
            assert!(commanded_burn <= scenario.rocket.burn_time());
        }
    }
}
