pub mod sample;
pub mod flight_profile;
pub mod history;
pub mod generator;

pub use sample::{FlightPhase, Sample};
pub use flight_profile::{DescentRate, FlightProfile};
pub use history::{series::trend, TelemetryHistory};
pub use generator::TelemetryGenerator;

/// Number of samples kept on screen.
pub const HISTORY_CAPACITY: usize = 100;
