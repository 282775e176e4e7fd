use std::f64::consts::FRAC_PI_2;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G: f64 = 6.67430e-11; // gravitational constant, m^3 kg^-1 s^-2

pub const EARTH_MASS: f64 = 5.972e24; // kg
pub const EARTH_RADIUS: f64 = 6_371_000.0; // mean radius, m

/// Commanded turn rate, rad/s (a quarter turn per second).
pub const ROTATION_RATE: f64 = FRAC_PI_2;

/// Below this distance from the gravitational center the field is treated as
/// zero — there is no meaningful direction to pull toward.
pub const MIN_GRAVITY_RADIUS: f64 = 1.0; // m

// ---------------------------------------------------------------------------
// Conic-section tolerances
// ---------------------------------------------------------------------------

/// Speeds below this are treated as stationary relative to the focus; the
/// orbit solver returns its degenerate sentinel instead of dividing by ~0.
pub const VELOCITY_TOLERANCE: f64 = 1e-3; // m/s

/// Eccentricities below this count as circular (no preferred apsis axis).
pub const ECC_CIRCULAR: f64 = 1e-6;

/// Band around e = 1 that counts as parabolic.
pub const ECC_PARABOLIC: f64 = 1e-3;
