use super::TelemetryHistory;

impl TelemetryHistory {
    /// `(time, altitude)` points ready for plotting.
    pub fn altitude_series(&self) -> Vec<(f64, f64)> {
        self.time
            .iter()
            .zip(&self.altitude)
            .map(|(&t, &a)| (t as f64, a))
            .collect()
    }

    /// `(time, temperature)` points ready for plotting.
    pub fn temperature_series(&self) -> Vec<(f64, f64)> {
        self.time
            .iter()
            .zip(&self.temperature)
            .map(|(&t, &c)| (t as f64, c))
            .collect()
    }
}

/// Second-to-last and last point of a series, if there are at least two.
pub fn trend(series: &[(f64, f64)]) -> Option<((f64, f64), (f64, f64))> {
    match series {
        [.., from, to] => Some((*from, *to)),
        _ => None,
    }
}
