use nalgebra::Vector2;

use crate::physics::constants::MIN_GRAVITY_RADIUS;
use crate::physics::planet::Planet;

/// Inverse-square gravitational acceleration toward the planet center.
///
/// Returns the zero vector within `MIN_GRAVITY_RADIUS` of the center, where
/// the field direction is undefined.
pub fn accel(planet: &Planet, position: &Vector2<f64>) -> Vector2<f64> {
    let to_center = planet.center - position;
    let dist = to_center.norm();
    if dist < MIN_GRAVITY_RADIUS {
        return Vector2::zeros();
    }
    // Newton's law: a = G * M / r^2
    let magnitude = planet.mu() / (dist * dist);
    to_center / dist * magnitude
}
