use crate::physics::planet::Planet;

// ---------------------------------------------------------------------------
// Rocket definition (single stage, single tank)
// ---------------------------------------------------------------------------

/// Static craft parameters. Edited between runs (the properties editor), read
/// only while a run is live.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocketProperties {
    pub thrust_power: f64,   // N
    pub max_fuel: f64,       // kg
    pub fuel_burn_rate: f64, // kg/s
    pub dry_mass: f64,       // kg
}

impl RocketProperties {
    /// Total mass with a full tank.
    pub fn wet_mass(&self) -> f64 {
        self.dry_mass + self.max_fuel
    }

    /// Seconds of continuous thrust on a full tank.
    pub fn burn_time(&self) -> f64 {
        if self.fuel_burn_rate > 0.0 {
            self.max_fuel / self.fuel_burn_rate
        } else {
            0.0
        }
    }

    /// Effective exhaust velocity implied by thrust and burn rate, m/s.
    pub fn exhaust_velocity(&self) -> f64 {
        if self.fuel_burn_rate > 0.0 {
            self.thrust_power / self.fuel_burn_rate
        } else {
            0.0
        }
    }

    /// Ideal delta-v on a full tank (Tsiolkovsky rocket equation).
    pub fn delta_v(&self) -> f64 {
        self.exhaust_velocity() * (self.wet_mass() / self.dry_mass).ln()
    }

    /// Thrust-to-weight ratio on the pad of the given planet, full tank.
    pub fn twr(&self, planet: &Planet) -> f64 {
        self.thrust_power / (self.wet_mass() * planet.surface_gravity())
    }
}

impl Default for RocketProperties {
    /// A deliberately overpowered test craft that can reach orbit in a couple
    /// of minutes of play.
    fn default() -> Self {
        Self {
            thrust_power: 400_000.0,
            max_fuel: 1_000.0,
            fuel_burn_rate: 20.0,
            dry_mass: 1_000.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

pub struct PropertiesBuilder {
    props: RocketProperties,
}

impl PropertiesBuilder {
    pub fn new() -> Self {
        Self { props: RocketProperties::default() }
    }

    pub fn thrust_power(mut self, v: f64) -> Self { self.props.thrust_power = v; self }
    pub fn max_fuel(mut self, v: f64) -> Self { self.props.max_fuel = v; self }
    pub fn fuel_burn_rate(mut self, v: f64) -> Self { self.props.fuel_burn_rate = v; self }
    pub fn dry_mass(mut self, v: f64) -> Self { self.props.dry_mass = v; self }

    pub fn build(self) -> RocketProperties {
        self.props
    }
}

impl Default for PropertiesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
