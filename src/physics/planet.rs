use nalgebra::Vector2;

use crate::physics::constants::{EARTH_MASS, EARTH_RADIUS, G};

/// Central body of the two-body problem. Built once per session, never
/// mutated afterward.
#[derive(Debug, Clone, Copy)]
pub struct Planet {
    pub mass: f64,              // kg
    pub radius: f64,            // m
    pub center: Vector2<f64>,   // m, world frame
}

impl Planet {
    pub fn new(mass: f64, radius: f64, center: Vector2<f64>) -> Self {
        Self { mass, radius, center }
    }

    /// Earth-sized default, centered at the world origin.
    pub fn earth() -> Self {
        Self::new(EARTH_MASS, EARTH_RADIUS, Vector2::zeros())
    }

    /// Standard gravitational parameter μ = G·M, m^3/s^2.
    pub fn mu(&self) -> f64 {
        G * self.mass
    }

    pub fn distance_from_center(&self, position: &Vector2<f64>) -> f64 {
        (position - self.center).norm()
    }

    /// Height above the surface sphere; negative inside it.
    pub fn altitude_of(&self, position: &Vector2<f64>) -> f64 {
        self.distance_from_center(position) - self.radius
    }

    /// True when the point is on or below the surface.
    pub fn contains(&self, position: &Vector2<f64>) -> bool {
        self.distance_from_center(position) <= self.radius
    }

    /// Gravitational acceleration magnitude at the surface, m/s^2.
    pub fn surface_gravity(&self) -> f64 {
        self.mu() / (self.radius * self.radius)
    }
}

impl Default for Planet {
    fn default() -> Self {
        Self::earth()
    }
}
