use super::FlightProfile;

impl FlightProfile {
    pub fn temperature_at(&self, altitude: f64) -> f64 {
        self.temperature_baseline
            - ((altitude - self.altitude_baseline) / 100.0) * self.temperature_lapse
    }
}
