pub mod properties;

pub use properties::{PropertiesBuilder, RocketProperties};
