pub mod state;
pub mod step;

pub use state::{Controls, RocketState};
pub use step::step;
