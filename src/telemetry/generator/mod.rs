mod generate_next;

use super::{FlightProfile, TelemetryHistory};

/// Produces one synthetic sample per tick and keeps the on-screen history.
#[derive(Debug, Clone)]
pub struct TelemetryGenerator {
    profile: FlightProfile,
    history: TelemetryHistory,
}

impl Default for TelemetryGenerator {
    fn default() -> Self {
        Self::new(FlightProfile::default(), TelemetryHistory::default())
    }
}

impl TelemetryGenerator {
    pub fn new(profile: FlightProfile, history: TelemetryHistory) -> Self {
        Self { profile, history }
    }

    pub fn profile(&self) -> &FlightProfile {
        &self.profile
    }

    pub fn history(&self) -> &TelemetryHistory {
        &self.history
    }
}
