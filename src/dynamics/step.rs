use nalgebra::Vector2;

use crate::dynamics::state::{Controls, RocketState};
use crate::physics::constants::{MIN_GRAVITY_RADIUS, ROTATION_RATE};
use crate::physics::gravity;
use crate::physics::planet::Planet;
use crate::vehicle::RocketProperties;

/// Advance the rocket by one tick of `dt` seconds.
///
/// Order of effects: commanded rotation, ground-contact resolution, gravity
/// (outside contact only), thrust with fuel drain, semi-implicit Euler
/// integration. `dt` must be positive; the caller guards paused frames.
pub fn step(
    state: &mut RocketState,
    props: &RocketProperties,
    planet: &Planet,
    controls: Controls,
    dt: f64,
) {
    // Commanded rotation, a free angle
    if controls.rotate_left {
        state.rotation -= ROTATION_RATE * dt;
    }
    if controls.rotate_right {
        state.rotation += ROTATION_RATE * dt;
    }

    let rel = state.position - planet.center;
    let dist = rel.norm();
    if dist <= planet.radius {
        if dist < MIN_GRAVITY_RADIUS {
            // At the gravitational center there is no surface normal to clamp
            // against; just kill any motion.
            state.velocity = Vector2::zeros();
            state.acceleration = Vector2::zeros();
        } else {
            let outward = rel / dist;
            // Moving into the surface: snap radially onto it and stop.
            // Outward motion is left alone so a liftoff can separate.
            if state.velocity.dot(&outward) < 0.0 {
                state.position = planet.center + outward * planet.radius;
                state.velocity = Vector2::zeros();
                state.acceleration = Vector2::zeros();
            }
        }
    } else {
        state.acceleration = gravity::accel(planet, &state.position);
    }

    // Thrust applies on the ground as well as in flight
    if controls.thrust && state.fuel > 0.0 {
        let thrust = Vector2::new(state.rotation.sin(), state.rotation.cos()) * props.thrust_power;
        state.acceleration += thrust / state.total_mass(props);
        state.fuel = (state.fuel - props.fuel_burn_rate * dt).max(0.0);
    }

    // Semi-implicit Euler: the new velocity feeds the position update
    state.velocity += state.acceleration * dt;
    state.position += state.velocity * dt;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
//
// Ground-contact policy pinned here: the contact test is `dist <= radius`
// against the surface circle, the clamp fires only on inward motion, and the
// snap is a radial projection onto the surface. One consequence is that a
// rocket resting exactly on the surface is in contact and feels no gravity,
// so free-fall checks start from just above the surface.
