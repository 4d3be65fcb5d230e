use super::FlightProfile;

impl FlightProfile {
    /// Altitude at tick `t`: linear climb to the peak, then a linear fall
    /// clamped at the baseline.
    pub fn altitude_at(&self, t: u64) -> f64 {
        if t <= self.ascent_duration {
            let progress = t as f64 / self.ascent_duration as f64;
            return self.altitude_baseline
                + progress * (self.altitude_peak - self.altitude_baseline);
        }

        let since_peak = (t - self.ascent_duration) as f64;
        let altitude = self.altitude_peak - self.descent_per_tick() * since_peak;

        altitude.max(self.altitude_baseline)
    }
}
