pub mod event;
pub mod pilot;
pub mod runner;
pub mod scenario;

pub use event::{EventDetector, EventKind, SimEvent};
pub use pilot::{Idle, Phase, Pilot, ScriptedPilot};
pub use runner::{simulate, simulate_with, FlightLog, Sample, SimConfig};
pub use scenario::{presets, Scenario};
