pub mod config;
pub mod dynamics;
pub mod io;
pub mod orbital;
pub mod physics;
pub mod sim;
pub mod vehicle;

// Commonly used items at the crate root
pub use dynamics::state::{Controls, RocketState};
pub use dynamics::step::step;
pub use orbital::{compute_orbit, compute_orbit_mu, OrbitClass, OrbitElements};
pub use physics::planet::Planet;
pub use sim::{presets, simulate, simulate_with, FlightLog, Phase, Pilot, Scenario, SimConfig};
pub use vehicle::{PropertiesBuilder, RocketProperties};
