use crate::telemetry::Sample;

use super::TelemetryHistory;

impl TelemetryHistory {
    /// Append a sample, evicting the oldest entries once over capacity.
    pub fn push(&mut self, sample: Sample) {
        self.time.push_back(sample.time);
        self.altitude.push_back(sample.altitude);
        self.temperature.push_back(sample.temperature);

        while self.time.len() > self.capacity {
            self.time.pop_front();
            self.altitude.pop_front();
            self.temperature.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(time: u64) -> Sample {
        Sample { time, altitude: time as f64 * 10.0, temperature: -(time as f64) }
    }

    #[test]
    fn test_push_keeps_columns_aligned() {
        let mut history = TelemetryHistory::with_capacity(5);
        for t in 0..3 {
            history.push(sample(t));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.get(1), Some(sample(1)));
        assert_eq!(history.last(), Some(sample(2)));
    }

    #[test]
    fn test_push_evicts_from_front() {
        let mut history = TelemetryHistory::default();
        for t in 0..100 {
            history.push(sample(t));
        }
        assert_eq!(history.len(), 100);
        let second = history.get(1);

        history.push(sample(100));

        assert_eq!(history.len(), 100);
        assert_eq!(history.first(), second);
        assert_eq!(history.last(), Some(sample(100)));
    }

    #[test]
    fn test_len_never_exceeds_capacity() {
        let mut history = TelemetryHistory::with_capacity(10);
        for t in 0..250 {
            history.push(sample(t));
            assert!(history.len() <= 10);
        }
        let times: Vec<u64> = history.samples().map(|s| s.time).collect();
        assert_eq!(times, (240..250).collect::<Vec<_>>());
    }

    #[test]
    fn test_huge_capacity_does_not_preallocate() {
        let mut history = TelemetryHistory::with_capacity(usize::MAX);
        assert_eq!(history.capacity(), usize::MAX);
        for t in 0..3 {
            history.push(sample(t));
        }
        assert_eq!(history.len(), 3);
    }
}
