use nalgebra::Vector2;

use crate::physics::planet::Planet;
use crate::vehicle::RocketProperties;

// ---------------------------------------------------------------------------
// Per-tick control input
// ---------------------------------------------------------------------------

/// Player/pilot input flags for one tick (the keyboard stand-in).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
}

impl Controls {
    pub const IDLE: Controls = Controls {
        rotate_left: false,
        rotate_right: false,
        thrust: false,
    };
}

// ---------------------------------------------------------------------------
// Rocket kinematic state
// ---------------------------------------------------------------------------

/// Full kinematic state of the rocket in the world frame.
///
/// `acceleration` is a per-tick cache, not integrated state: the ground clamp
/// zeroes it, gravity overwrites it outside ground contact, thrust adds onto
/// it. `fuel` stays within `[0, max_fuel]`.
#[derive(Debug, Clone, Copy)]
pub struct RocketState {
    pub position: Vector2<f64>,     // m
    pub velocity: Vector2<f64>,     // m/s
    pub acceleration: Vector2<f64>, // m/s^2
    pub rotation: f64,              // rad, unbounded; 0 points +Y
    pub fuel: f64,                  // kg
}

impl RocketState {
    /// Fresh state on the pad: at rest, upright, full tank.
    pub fn new(initial_position: Vector2<f64>, props: &RocketProperties) -> Self {
        Self {
            position: initial_position,
            velocity: Vector2::zeros(),
            acceleration: Vector2::zeros(),
            rotation: 0.0,
            fuel: props.max_fuel,
        }
    }

    /// Put the rocket back on the pad. Idempotent.
    pub fn reset_to_initial(&mut self, initial_position: Vector2<f64>, props: &RocketProperties) {
        *self = Self::new(initial_position, props);
    }

    /// Dry mass plus remaining fuel, kg. Always positive for a valid craft.
    pub fn total_mass(&self, props: &RocketProperties) -> f64 {
        props.dry_mass + self.fuel
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn altitude(&self, planet: &Planet) -> f64 {
        planet.altitude_of(&self.position)
    }

    /// Velocity component along the outward surface normal; positive when
    /// climbing. Zero when sitting at the gravitational center.
    pub fn radial_velocity(&self, planet: &Planet) -> f64 {
        let rel = self.position - planet.center;
        let dist = rel.norm();
        if dist > 0.0 {
            self.velocity.dot(&rel) / dist
        } else {
            0.0
        }
    }
}
