mod altitude_at;
mod temperature_at;
mod phase_at;

use serde::{Deserialize, Serialize};

/// How fast the probe falls once it passes the peak.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DescentRate {
    /// Constant meters per tick, independent of the peak/baseline gap.
    Fixed { rate: f64 },
    /// `(peak - baseline) / descent_duration`, so the fall always lands on time.
    Derived,
}

impl Default for DescentRate {
    fn default() -> Self {
        DescentRate::Fixed { rate: 1000.0 / 20.0 }
    }
}

/// Fixed parameters of the simulated flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightProfile {
    pub altitude_baseline: f64,
    pub altitude_peak: f64,
    /// Seconds from launch to peak.
    pub ascent_duration: u64,
    /// Seconds from peak back to baseline.
    pub descent_duration: u64,
    pub temperature_baseline: f64,
    /// Degrees lost per 100 m above baseline.
    pub temperature_lapse: f64,
    pub descent_rate: DescentRate,
}

impl Default for FlightProfile {
    fn default() -> Self {
        Self {
            altitude_baseline: 653.0,
            altitude_peak: 1653.0,
            ascent_duration: 40,
            descent_duration: 20,
            temperature_baseline: 22.0,
            temperature_lapse: 5.0,
            descent_rate: DescentRate::default(),
        }
    }
}

impl FlightProfile {
    /// Meters lost per tick after the peak.
    pub fn descent_per_tick(&self) -> f64 {
        match self.descent_rate {
            DescentRate::Fixed { rate } => rate,
            DescentRate::Derived => {
                (self.altitude_peak - self.altitude_baseline) / self.descent_duration as f64
            }
        }
    }
}
