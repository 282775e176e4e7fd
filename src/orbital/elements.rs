use std::f64::consts::TAU;
use std::fmt;

use nalgebra::Vector2;

use crate::physics::constants::{ECC_CIRCULAR, ECC_PARABOLIC, G, VELOCITY_TOLERANCE};

// ---------------------------------------------------------------------------
// Instantaneous two-body conic from a planar state vector
// ---------------------------------------------------------------------------

/// Keplerian elements of the conic the craft is on right now, as if gravity
/// were the only force from this instant onward.
///
/// Degenerate cases carry sentinels instead of errors: a near-stationary
/// state reports eccentricity 1 with NaN axes, a non-ellipse has a NaN
/// semi-minor axis, and the apsis vectors are zero whenever there is no
/// preferred axis (circular) or the conic is ill-posed. Callers check
/// `is_ellipse`/`class` before trusting the elliptical fields.
#[derive(Debug, Clone, Copy)]
pub struct OrbitElements {
    pub eccentricity_vec: Vector2<f64>, // dimensionless, points toward periapsis
    pub eccentricity: f64,
    pub semi_major_axis: f64,  // m, negative for hyperbolic, NaN when degenerate
    pub semi_minor_axis: f64,  // m, NaN when e >= 1
    pub periapsis: Vector2<f64>, // m, relative to the focus
    pub apoapsis: Vector2<f64>,  // m, relative to the focus, ellipses only
}

/// Conic-section shape classes, by eccentricity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitClass {
    Circular,
    Elliptical,
    Parabolic,
    Hyperbolic,
}

impl fmt::Display for OrbitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrbitClass::Circular => "Circular",
            OrbitClass::Elliptical => "Elliptical",
            OrbitClass::Parabolic => "Parabolic",
            OrbitClass::Hyperbolic => "Hyperbolic",
        };
        f.write_str(name)
    }
}

pub fn is_ellipse(eccentricity: f64) -> bool {
    eccentricity < 1.0
}

/// Total over all inputs, including NaN (which lands in Hyperbolic).
pub fn classify(eccentricity: f64) -> OrbitClass {
    if eccentricity < ECC_CIRCULAR {
        OrbitClass::Circular
    } else if eccentricity < 1.0 {
        OrbitClass::Elliptical
    } else if (eccentricity - 1.0).abs() < ECC_PARABOLIC {
        OrbitClass::Parabolic
    } else {
        OrbitClass::Hyperbolic
    }
}

/// Compute the instantaneous orbit from a focus-relative state vector.
///
/// `position` and `velocity` are relative to the gravitational center; the
/// caller subtracts the planet center first.
pub fn compute_orbit(
    position: &Vector2<f64>,
    velocity: &Vector2<f64>,
    central_mass: f64,
) -> OrbitElements {
    compute_orbit_mu(position, velocity, G * central_mass)
}

/// Compute with an explicit gravitational parameter (scaled-gravity demos and
/// tests go through here).
pub fn compute_orbit_mu(
    position: &Vector2<f64>,
    velocity: &Vector2<f64>,
    mu: f64,
) -> OrbitElements {
    let r = position.norm();
    let v = velocity.norm();

    // Near-stationary relative to the focus: the conic degenerates to a
    // radial fall line. Report it as such rather than dividing by ~0.
    if v < VELOCITY_TOLERANCE {
        let e_vec = if r > 0.0 { -position / r } else { Vector2::zeros() };
        return OrbitElements {
            eccentricity_vec: e_vec,
            eccentricity: 1.0,
            semi_major_axis: f64::NAN,
            semi_minor_axis: f64::NAN,
            periapsis: Vector2::zeros(),
            apoapsis: Vector2::zeros(),
        };
    }

    let rv = position.dot(velocity);
    let e_vec = ((v * v - mu / r) * position - rv * velocity) / mu;
    let e = e_vec.norm();

    // Vis-viva, signed: negative for hyperbolic trajectories
    let a = 1.0 / (2.0 / r - v * v / mu);
    let b = a * (1.0 - e * e).sqrt();
    let (periapsis, apoapsis) = apsides(&e_vec, a, e);

    OrbitElements {
        eccentricity_vec: e_vec,
        eccentricity: e,
        semi_major_axis: a,
        semi_minor_axis: b,
        periapsis,
        apoapsis,
    }
}

/// Apsis vectors along the eccentricity axis, or zero when there is no
/// preferred axis (circular) or the conic is ill-posed.
fn apsides(e_vec: &Vector2<f64>, a: f64, e: f64) -> (Vector2<f64>, Vector2<f64>) {
    if e < ECC_CIRCULAR || a <= 0.0 || e.is_nan() || a.is_nan() {
        return (Vector2::zeros(), Vector2::zeros());
    }
    let axis = e_vec / e;
    (axis * (a * (1.0 - e)), axis * (a * (1.0 + e)))
}

impl OrbitElements {
    pub fn is_ellipse(&self) -> bool {
        is_ellipse(self.eccentricity)
    }

    pub fn class(&self) -> OrbitClass {
        classify(self.eccentricity)
    }

    /// Closest-approach distance from the focus, m.
    pub fn periapsis_radius(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance from the focus, m. Meaningful for ellipses only.
    pub fn apoapsis_radius(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Orbital period for an elliptical orbit, s. NaN otherwise.
    pub fn period_mu(&self, mu: f64) -> f64 {
        TAU * (self.semi_major_axis.powi(3) / mu).sqrt()
    }

    /// Sample the ellipse as a closed polyline around the focus, for map-view
    /// consumers. `None` unless the conic is a finite ellipse.
    pub fn ellipse_path(&self, samples: usize) -> Option<Vec<Vector2<f64>>> {
        let a = self.semi_major_axis;
        let b = self.semi_minor_axis;
        if !self.is_ellipse() || !a.is_finite() || !b.is_finite() || a <= 0.0 || samples == 0 {
            return None;
        }
        // A near-circular conic has no apsis axis; any orientation draws the
        // same circle.
        let major = if self.eccentricity < ECC_CIRCULAR {
            Vector2::x()
        } else {
            self.eccentricity_vec / self.eccentricity
        };
        let minor = Vector2::new(-major.y, major.x);
        let center = -major * (a * self.eccentricity);

        Some(
            (0..=samples)
                .map(|i| {
                    let t = TAU * i as f64 / samples as f64;
                    center + major * (a * t.cos()) + minor * (b * t.sin())
                })
                .collect(),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::constants::{EARTH_MASS, EARTH_RADIUS};
    use crate::physics::planet::Planet;
    use approx::assert_relative_eq;

    fn circular_state(r: f64, mu: f64) -> (Vector2<f64>, Vector2<f64>) {
        let v = (mu / r).sqrt();
        (Vector2::new(r, 0.0), Vector2::new(0.0, v))
    }

    #[test]
    fn circular_low_orbit_roundtrip() {
        let mu = Planet::earth().mu();
        let r = EARTH_RADIUS + 400_000.0;
        let (pos, vel) = circular_state(r, mu);

        let orbit = compute_orbit_mu(&pos, &vel, mu);
        assert!(orbit.eccentricity < 1e-6, "should be circular, e = {}", orbit.eccentricity);
        assert_relative_eq!(orbit.semi_major_axis, r, epsilon = 1.0);
        assert_relative_eq!(orbit.semi_minor_axis, r, epsilon = 1.0);
        assert_eq!(orbit.class(), OrbitClass::Circular);
        // No preferred axis: apsis vectors collapse to zero
        assert_eq!(orbit.periapsis, Vector2::zeros());
        assert_eq!(orbit.apoapsis, Vector2::zeros());
    }

    #[test]
    fn near_circular_launch_scenario() {
        // 7.9 km/s tangential at the surface radius is almost exactly the
        // local circular speed.
        let pos = Vector2::new(0.0, EARTH_RADIUS);
        let vel = Vector2::new(7_900.0, 0.0);

        let orbit = compute_orbit(&pos, &vel, EARTH_MASS);
        assert!(orbit.eccentricity < 0.05, "e = {}", orbit.eccentricity);
        assert!(orbit.is_ellipse());
        assert!(matches!(orbit.class(), OrbitClass::Circular | OrbitClass::Elliptical));
        assert_relative_eq!(orbit.semi_major_axis, EARTH_RADIUS, max_relative = 0.01);
    }

    #[test]
    fn elliptical_apsis_geometry() {
        let mu = Planet::earth().mu();
        let r = EARTH_RADIUS + 300_000.0;
        // Faster than circular, slower than escape: ellipse with periapsis here
        let v_circ = (mu / r).sqrt();
        let pos = Vector2::new(r, 0.0);
        let vel = Vector2::new(0.0, v_circ * 1.2);

        let orbit = compute_orbit_mu(&pos, &vel, mu);
        assert!(orbit.eccentricity > 1e-3 && orbit.eccentricity < 1.0);
        assert_eq!(orbit.class(), OrbitClass::Elliptical);

        let a = orbit.semi_major_axis;
        let e = orbit.eccentricity;
        assert_relative_eq!(orbit.periapsis.norm(), a * (1.0 - e), max_relative = 1e-9);
        assert_relative_eq!(orbit.apoapsis.norm(), a * (1.0 + e), max_relative = 1e-9);
        // Burning prograde at periapsis: the current radius is the low point
        assert_relative_eq!(orbit.periapsis_radius(), r, max_relative = 1e-6);
        assert!(orbit.apoapsis_radius() > r);
        // b = a * sqrt(1 - e^2)
        assert_relative_eq!(
            orbit.semi_minor_axis,
            a * (1.0 - e * e).sqrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn hyperbolic_above_escape_speed() {
        let mu = Planet::earth().mu();
        let r = EARTH_RADIUS + 300_000.0;
        let v_escape = (2.0 * mu / r).sqrt();
        let pos = Vector2::new(r, 0.0);
        let vel = Vector2::new(0.0, v_escape * 1.1);

        let orbit = compute_orbit_mu(&pos, &vel, mu);
        assert!(orbit.eccentricity > 1.0);
        assert!(!orbit.is_ellipse());
        assert_eq!(orbit.class(), OrbitClass::Hyperbolic);
        assert!(orbit.semi_major_axis < 0.0);
        assert!(orbit.semi_minor_axis.is_nan());
        assert_eq!(orbit.periapsis, Vector2::zeros());
        assert_eq!(orbit.apoapsis, Vector2::zeros());
    }

    #[test]
    fn degenerate_when_nearly_stationary() {
        let pos = Vector2::new(0.0, EARTH_RADIUS + 1_000.0);
        let vel = Vector2::new(0.0, 1e-4);

        let orbit = compute_orbit(&pos, &vel, EARTH_MASS);
        assert_eq!(orbit.eccentricity, 1.0);
        assert!(orbit.semi_major_axis.is_nan());
        assert!(orbit.semi_minor_axis.is_nan());
        assert_eq!(orbit.periapsis, Vector2::zeros());
        assert_eq!(orbit.apoapsis, Vector2::zeros());
        // Points from the craft toward the focus
        assert_relative_eq!(orbit.eccentricity_vec.y, -1.0, epsilon = 1e-12);
        assert_relative_eq!(orbit.eccentricity_vec.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_at_the_focus_itself() {
        let orbit = compute_orbit(&Vector2::zeros(), &Vector2::zeros(), EARTH_MASS);
        assert_eq!(orbit.eccentricity, 1.0);
        assert_eq!(orbit.eccentricity_vec, Vector2::zeros());
    }

    #[test]
    fn classification_bands() {
        assert_eq!(classify(0.0), OrbitClass::Circular);
        assert_eq!(classify(5e-7), OrbitClass::Circular);
        assert_eq!(classify(1e-5), OrbitClass::Elliptical);
        assert_eq!(classify(0.5), OrbitClass::Elliptical);
        assert_eq!(classify(0.9999), OrbitClass::Elliptical);
        assert_eq!(classify(1.0), OrbitClass::Parabolic);
        assert_eq!(classify(1.0009), OrbitClass::Parabolic);
        assert_eq!(classify(1.01), OrbitClass::Hyperbolic);
        assert_eq!(classify(f64::NAN), OrbitClass::Hyperbolic);

        assert!(is_ellipse(0.3));
        assert!(!is_ellipse(1.0));
    }

    #[test]
    fn leo_period() {
        let mu = Planet::earth().mu();
        let r = EARTH_RADIUS + 400_000.0;
        let (pos, vel) = circular_state(r, mu);
        let orbit = compute_orbit_mu(&pos, &vel, mu);
        // ISS-ish period, ~92 min
        let period = orbit.period_mu(mu);
        assert!(period > 5_400.0 && period < 5_700.0, "got {:.0} s", period);
    }

    #[test]
    fn scaled_mu_shrinks_the_orbit() {
        let r = EARTH_RADIUS + 400_000.0;
        let mu = Planet::earth().mu();
        let (pos, vel) = circular_state(r, mu);
        // Same state under a heavier central body: the conic tightens
        let orbit = compute_orbit_mu(&pos, &vel, mu * 2.0);
        assert!(orbit.semi_major_axis < r);
        assert!(orbit.is_ellipse());
    }

    #[test]
    fn ellipse_path_traces_the_conic() {
        let mu = Planet::earth().mu();
        let r = EARTH_RADIUS + 400_000.0;
        let (pos, vel) = circular_state(r, mu);

        let orbit = compute_orbit_mu(&pos, &vel, mu);
        let path = orbit.ellipse_path(64).expect("circular orbit has a path");
        assert_eq!(path.len(), 65);
        for p in &path {
            assert_relative_eq!(p.norm(), r, max_relative = 1e-6);
        }

        // First and last samples close the loop
        let first = path.first().unwrap();
        let last = path.last().unwrap();
        assert_relative_eq!(first.x, last.x, epsilon = 1e-3);
        assert_relative_eq!(first.y, last.y, epsilon = 1e-3);
    }

    #[test]
    fn no_path_for_non_ellipses() {
        let pos = Vector2::new(0.0, EARTH_RADIUS + 1_000.0);
        let stationary = compute_orbit(&pos, &Vector2::zeros(), EARTH_MASS);
        assert!(stationary.ellipse_path(64).is_none());

        let mu = Planet::earth().mu();
        let v_escape = (2.0 * mu / pos.norm()).sqrt();
        let hyper = compute_orbit_mu(&pos, &Vector2::new(v_escape * 1.5, 0.0), mu);
        assert!(hyper.ellipse_path(64).is_none());
    }
}
