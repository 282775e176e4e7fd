use crate::dynamics::state::{Controls, RocketState};
use crate::physics::planet::Planet;

// ---------------------------------------------------------------------------
// Pilot: per-tick control source
// ---------------------------------------------------------------------------

/// Source of per-tick control input.
///
/// Implement this to plug a custom control law (or a live input feed) into
/// the simulation loop.
pub trait Pilot {
    /// Produce the control flags for the upcoming tick.
    fn control(&mut self, state: &RocketState, planet: &Planet, dt: f64) -> Controls;

    /// Reset internal state (e.g., phase timers).
    fn reset(&mut self) {}

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}

/// Hands-off pilot: the rocket coasts ballistically.
#[derive(Debug, Clone, Copy, Default)]
pub struct Idle;

impl Pilot for Idle {
    fn control(&mut self, _state: &RocketState, _planet: &Planet, _dt: f64) -> Controls {
        Controls::IDLE
    }

    fn name(&self) -> &str {
        "idle"
    }
}

// ---------------------------------------------------------------------------
// Scripted pilot: a timed control program
// ---------------------------------------------------------------------------

/// One leg of a control program: hold these flags for `duration` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    pub duration: f64, // s
    pub controls: Controls,
}

impl Phase {
    pub fn new(duration: f64, controls: Controls) -> Self {
        Self { duration, controls }
    }

    pub fn coast(duration: f64) -> Self {
        Self::new(duration, Controls::IDLE)
    }

    pub fn burn(duration: f64) -> Self {
        Self::new(duration, Controls { thrust: true, ..Controls::IDLE })
    }

    pub fn turn_left(duration: f64) -> Self {
        Self::new(duration, Controls { rotate_left: true, ..Controls::IDLE })
    }

    pub fn turn_right(duration: f64) -> Self {
        Self::new(duration, Controls { rotate_right: true, ..Controls::IDLE })
    }

    /// Keep burning while rotating right (a crude pitch-over).
    pub fn burn_turning_right(duration: f64) -> Self {
        Self::new(duration, Controls { rotate_right: true, thrust: true, rotate_left: false })
    }
}

/// Replays a fixed sequence of phases against the simulation clock, then
/// goes hands-off.
#[derive(Debug, Clone)]
pub struct ScriptedPilot {
    phases: Vec<Phase>,
    elapsed: f64,
}

impl ScriptedPilot {
    pub fn new(phases: Vec<Phase>) -> Self {
        Self { phases, elapsed: 0.0 }
    }

    /// Total scripted duration, s.
    pub fn program_length(&self) -> f64 {
        self.phases.iter().map(|p| p.duration).sum()
    }
}

impl Pilot for ScriptedPilot {
    fn control(&mut self, _state: &RocketState, _planet: &Planet, dt: f64) -> Controls {
        let t = self.elapsed;
        self.elapsed += dt;

        let mut phase_start = 0.0;
        for phase in &self.phases {
            if t < phase_start + phase.duration {
                return phase.controls;
            }
            phase_start += phase.duration;
        }
        Controls::IDLE
    }

    fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::RocketProperties;
    use nalgebra::Vector2;

    fn probe(pilot: &mut dyn Pilot, dt: f64, ticks: usize) -> Vec<Controls> {
        let planet = Planet::earth();
        let props = RocketProperties::default();
        let state = RocketState::new(Vector2::new(0.0, planet.radius), &props);
        (0..ticks).map(|_| pilot.control(&state, &planet, dt)).collect()
    }

    #[test]
    fn phases_replay_in_order() {
        let mut pilot = ScriptedPilot::new(vec![Phase::burn(1.0), Phase::turn_right(1.0)]);
        let seq = probe(&mut pilot, 0.5, 6);

        assert!(seq[0].thrust && seq[1].thrust);
        assert!(seq[2].rotate_right && seq[3].rotate_right);
        assert!(!seq[2].thrust);
        // Past the program: hands off
        assert_eq!(seq[4], Controls::IDLE);
        assert_eq!(seq[5], Controls::IDLE);
    }

    #[test]
    fn reset_rewinds_the_program() {
        let mut pilot = ScriptedPilot::new(vec![Phase::burn(1.0)]);
        let _ = probe(&mut pilot, 1.0, 2);
        pilot.reset();
        let seq = probe(&mut pilot, 1.0, 1);
        assert!(seq[0].thrust);
    }

    #[test]
    fn idle_pilot_never_commands() {
        let mut pilot = Idle;
        for c in probe(&mut pilot, 1.0, 5) {
            assert_eq!(c, Controls::IDLE);
        }
    }

    #[test]
    fn program_length_sums_phases() {
        let pilot = ScriptedPilot::new(vec![Phase::burn(12.0), Phase::coast(3.5)]);
        assert!((pilot.program_length() - 15.5).abs() < 1e-12);
    }
}
