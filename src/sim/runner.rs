use tracing::info;

use crate::dynamics::state::RocketState;
use crate::dynamics::step::step;
use crate::sim::event::{
    ApoapsisDetector, EventDetector, FuelExhaustedDetector, LiftoffDetector, SimEvent,
    TouchdownDetector,
};
use crate::sim::pilot::Pilot;
use crate::sim::scenario::Scenario;

// ---------------------------------------------------------------------------
// Batch frame driver
// ---------------------------------------------------------------------------

/// Fixed-step run configuration.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub dt: f64,       // s per tick
    pub max_time: f64, // hard stop, s
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0, // frame-locked 60 Hz
            max_time: 600.0,
        }
    }
}

/// One recorded tick.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub time: f64,
    pub state: RocketState,
}

/// Everything a run produced: the sampled trajectory and the discrete events.
#[derive(Debug, Clone)]
pub struct FlightLog {
    pub samples: Vec<Sample>,
    pub events: Vec<SimEvent>,
}

impl FlightLog {
    /// Wall-clock length of the run, s.
    pub fn duration(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.time)
    }
}

/// Run a scenario with a custom pilot.
///
/// Steps the integrator at `config.dt` until `max_time`, or until the rocket
/// has flown and then been clamped back onto the surface.
pub fn simulate_with(scenario: &Scenario, config: &SimConfig, pilot: &mut dyn Pilot) -> FlightLog {
    let planet = scenario.planet;
    let mut state = RocketState::new(scenario.initial_position, &scenario.rocket);
    let mut time = 0.0;

    let capacity = (config.max_time / config.dt) as usize + 1;
    let mut samples = Vec::with_capacity(capacity.min(200_000));
    samples.push(Sample { time, state });
    let mut events = Vec::new();

    let mut detectors: Vec<Box<dyn EventDetector>> = vec![
        Box::new(LiftoffDetector::new()),
        Box::new(TouchdownDetector),
        Box::new(FuelExhaustedDetector::new()),
        Box::new(ApoapsisDetector),
    ];

    info!(scenario = %scenario.name, pilot = pilot.name(), "starting run");

    let mut launched = false;

    while time < config.max_time {
        let controls = pilot.control(&state, &planet, config.dt);
        let prev = state;
        step(&mut state, &scenario.rocket, &planet, controls, config.dt);
        time += config.dt;

        for detector in detectors.iter_mut() {
            if let Some(kind) = detector.check(&prev, &state, &planet) {
                info!(time, event = ?kind, "flight event");
                events.push(SimEvent { time, kind, state });
            }
        }

        if state.altitude(&planet) > 1.0 {
            launched = true;
        }

        samples.push(Sample { time, state });

        // Clamped back onto the surface after flying: the run is over
        if launched && planet.contains(&state.position) && state.speed() < 1e-9 {
            break;
        }
    }

    FlightLog { samples, events }
}

/// Run a scenario with its own scripted program (convenience wrapper).
pub fn simulate(scenario: &Scenario, config: &SimConfig) -> FlightLog {
    let mut pilot = scenario.pilot();
    simulate_with(scenario, config, &mut pilot)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::event::EventKind;
    use crate::sim::pilot::Phase;
    use crate::sim::scenario::presets;
    use crate::vehicle::PropertiesBuilder;
    use crate::physics::planet::Planet;

    fn has_event(log: &FlightLog, kind: &EventKind) -> bool {
        log.events.iter().any(|e| e.kind == *kind)
    }

    #[test]
    fn hopper_flies_and_comes_back() {
        let scenario = presets::hopper();
        let log = simulate(&scenario, &SimConfig::default());

        assert!(has_event(&log, &EventKind::Liftoff));
        assert!(has_event(&log, &EventKind::Apoapsis));
        assert!(has_event(&log, &EventKind::Touchdown));

        let apogee = log
            .samples
            .iter()
            .map(|s| s.state.altitude(&scenario.planet))
            .fold(0.0_f64, f64::max);
        assert!(apogee > 1_000.0, "hop should clear 1 km, got {:.0} m", apogee);

        // Back on the pad, at rest, before the hard stop
        let last = log.samples.last().unwrap();
        assert!(scenario.planet.contains(&last.state.position));
        assert_eq!(last.state.speed(), 0.0);
        assert!(log.duration() < SimConfig::default().max_time);
    }

    #[test]
    fn tank_runs_dry_when_overcommanded() {
        let planet = Planet::earth();
        let scenario = Scenario {
            name: "Dry run".into(),
            initial_position: Scenario::pad_position(&planet, 0.0),
            planet,
            rocket: PropertiesBuilder::new()
                .thrust_power(100_000.0)
                .max_fuel(10.0)
                .fuel_burn_rate(20.0)
                .dry_mass(1_000.0)
                .build(),
            program: vec![Phase::burn(5.0)],
        };

        let log = simulate(&scenario, &SimConfig::default());
        assert!(has_event(&log, &EventKind::FuelExhausted));
        assert_eq!(log.samples.last().unwrap().state.fuel, 0.0);
    }

    #[test]
    fn time_is_monotonic_and_bounded() {
        let scenario = presets::hopper();
        let config = SimConfig { dt: 1.0 / 30.0, max_time: 30.0 };
        let log = simulate(&scenario, &config);

        assert!(!log.samples.is_empty());
        for pair in log.samples.windows(2) {
            assert!(pair[1].time > pair[0].time);
        }
        assert!(log.duration() <= config.max_time + config.dt);
    }

    #[test]
    fn idle_scenario_never_launches() {
        let planet = Planet::earth();
        let scenario = Scenario {
            name: "Pad sit".into(),
            initial_position: Scenario::pad_position(&planet, 0.0),
            planet,
            rocket: PropertiesBuilder::new().build(),
            program: vec![],
        };

        let config = SimConfig { dt: 1.0 / 60.0, max_time: 5.0 };
        let log = simulate(&scenario, &config);
        assert!(log.events.is_empty());
        let last = log.samples.last().unwrap();
        assert_eq!(last.state.speed(), 0.0);
    }
}
