use crate::{log_debug, telemetry::Sample};

use super::TelemetryGenerator;

impl TelemetryGenerator {
    /// Advance the clock by one tick, append the new sample and return it.
    pub fn generate_next(&mut self) -> Sample {
        let time = self.history.last_time().map_or(0, |t| t + 1);
        let altitude = self.profile.altitude_at(time);
        let temperature = self.profile.temperature_at(altitude);

        let sample = Sample { time, altitude, temperature };
        self.history.push(sample);

        log_debug!("t={} altitude={:.1} temperature={:.2} buffered={}",
            time, altitude, temperature, self.history.len());

        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::{FlightProfile, TelemetryHistory};

    #[test]
    fn test_clock_counts_calls() {
        let mut generator = TelemetryGenerator::default();
        let times: Vec<u64> = (0..=30).map(|_| generator.generate_next().time).collect();
        assert_eq!(times, (0..=30).collect::<Vec<_>>());
    }

    #[test]
    fn test_full_flight_profile() {
        let mut generator = TelemetryGenerator::default();
        let samples: Vec<Sample> = (0..61).map(|_| generator.generate_next()).collect();

        assert_eq!(samples[0].altitude, 653.0);
        assert_eq!(samples[40].altitude, 1653.0);
        assert_eq!(samples[60].altitude, 653.0);
        assert_eq!(samples[60].temperature, 22.0);

        for i in 0..40 {
            assert!(samples[i + 1].altitude >= samples[i].altitude);
        }
        for i in 40..60 {
            assert!(samples[i + 1].altitude <= samples[i].altitude);
        }

        for _ in 0..20 {
            let sample = generator.generate_next();
            assert_eq!(sample.altitude, 653.0);
            assert_eq!(sample.temperature, 22.0);
        }
    }

    #[test]
    fn test_clock_survives_eviction() {
        let mut generator = TelemetryGenerator::new(
            FlightProfile::default(),
            TelemetryHistory::with_capacity(3),
        );
        for _ in 0..10 {
            generator.generate_next();
        }
        let times: Vec<u64> = generator.history().samples().map(|s| s.time).collect();
        assert_eq!(times, vec![7, 8, 9]);
        assert_eq!(generator.generate_next().time, 10);
    }
}
