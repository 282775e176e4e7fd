pub mod constants;
pub mod gravity;
pub mod planet;

pub use planet::Planet;
