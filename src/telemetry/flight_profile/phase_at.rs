use crate::telemetry::FlightPhase;

use super::FlightProfile;

impl FlightProfile {
    pub fn phase_at(&self, t: u64) -> FlightPhase {
        if t <= self.ascent_duration {
            FlightPhase::Ascent
        } else if self.altitude_at(t) > self.altitude_baseline {
            FlightPhase::Descent
        } else {
            FlightPhase::Landed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases() {
        let profile = FlightProfile::default();
        assert_eq!(profile.phase_at(0), FlightPhase::Ascent);
        assert_eq!(profile.phase_at(40), FlightPhase::Ascent);
        assert_eq!(profile.phase_at(41), FlightPhase::Descent);
        assert_eq!(profile.phase_at(59), FlightPhase::Descent);
        assert_eq!(profile.phase_at(60), FlightPhase::Landed);
        assert_eq!(profile.phase_at(1000), FlightPhase::Landed);
    }
}
