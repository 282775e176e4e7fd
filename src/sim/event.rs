use crate::dynamics::state::RocketState;
use crate::physics::planet::Planet;

// ---------------------------------------------------------------------------
// Flight events
// ---------------------------------------------------------------------------

/// Kinds of discrete flight events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Liftoff,
    Touchdown,
    FuelExhausted,
    Apoapsis,
    Custom(String),
}

/// A discrete event with the state it was observed at.
#[derive(Debug, Clone)]
pub struct SimEvent {
    pub time: f64,
    pub kind: EventKind,
    pub state: RocketState,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive states and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &RocketState, current: &RocketState, planet: &Planet)
        -> Option<EventKind>;
}

/// Fires once when the rocket first clears the surface.
pub struct LiftoffDetector {
    fired: bool,
}

impl LiftoffDetector {
    pub fn new() -> Self {
        Self { fired: false }
    }
}

impl Default for LiftoffDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDetector for LiftoffDetector {
    fn check(
        &mut self,
        prev: &RocketState,
        current: &RocketState,
        planet: &Planet,
    ) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        if prev.altitude(planet) <= 1.0 && current.altitude(planet) > 1.0 {
            self.fired = true;
            Some(EventKind::Liftoff)
        } else {
            None
        }
    }
}

/// Fires whenever the rocket comes back into ground contact from flight.
pub struct TouchdownDetector;

impl EventDetector for TouchdownDetector {
    fn check(
        &mut self,
        prev: &RocketState,
        current: &RocketState,
        planet: &Planet,
    ) -> Option<EventKind> {
        if !planet.contains(&prev.position) && planet.contains(&current.position) {
            Some(EventKind::Touchdown)
        } else {
            None
        }
    }
}

/// Fires once when the tank runs dry.
pub struct FuelExhaustedDetector {
    fired: bool,
}

impl FuelExhaustedDetector {
    pub fn new() -> Self {
        Self { fired: false }
    }
}

impl Default for FuelExhaustedDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDetector for FuelExhaustedDetector {
    fn check(
        &mut self,
        prev: &RocketState,
        current: &RocketState,
        _planet: &Planet,
    ) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        if prev.fuel > 0.0 && current.fuel <= 0.0 {
            self.fired = true;
            Some(EventKind::FuelExhausted)
        } else {
            None
        }
    }
}

/// Detects apoapsis passage: radial velocity flipping from climbing to
/// falling, well clear of the surface.
pub struct ApoapsisDetector;

impl EventDetector for ApoapsisDetector {
    fn check(
        &mut self,
        prev: &RocketState,
        current: &RocketState,
        planet: &Planet,
    ) -> Option<EventKind> {
        if prev.radial_velocity(planet) > 0.0
            && current.radial_velocity(planet) <= 0.0
            && current.altitude(planet) > 100.0
        {
            Some(EventKind::Apoapsis)
        } else {
            None
        }
    }
}
