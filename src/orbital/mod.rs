pub mod elements;

pub use elements::{classify, compute_orbit, compute_orbit_mu, is_ellipse, OrbitClass, OrbitElements};
