use crate::telemetry::DescentRate;

use super::DashboardConfig;

/// Upper bound on buffered samples; the chart never shows more than a few hundred.
pub const MAX_HISTORY_CAPACITY: usize = 100_000;

#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub error: String,
}

impl ValidationError {
    fn new(field: &str, error: impl Into<String>) -> Self {
        Self { field: field.to_string(), error: error.into() }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

impl std::error::Error for ValidationError {}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let profile = &self.profile;

        let finite = [
            ("profile.altitude_baseline", profile.altitude_baseline),
            ("profile.altitude_peak", profile.altitude_peak),
            ("profile.temperature_baseline", profile.temperature_baseline),
            ("profile.temperature_lapse", profile.temperature_lapse),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ValidationError::new(field, format!("must be a finite number, got {}", value)));
            }
        }

        if profile.altitude_peak <= profile.altitude_baseline {
            return Err(ValidationError::new(
                "profile.altitude_peak",
                format!("must be above altitude_baseline ({})", profile.altitude_baseline),
            ));
        }
        if profile.ascent_duration == 0 {
            return Err(ValidationError::new("profile.ascent_duration", "must be at least 1 second"));
        }
        if profile.descent_duration == 0 {
            return Err(ValidationError::new("profile.descent_duration", "must be at least 1 second"));
        }
        if let DescentRate::Fixed { rate } = profile.descent_rate {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(ValidationError::new("profile.descent_rate.rate", "must be positive"));
            }
        }

        if self.timers.chart_tick_ms == 0 {
            return Err(ValidationError::new("timers.chart_tick_ms", "must be non-zero"));
        }
        if self.timers.map_refresh_ms == 0 {
            return Err(ValidationError::new("timers.map_refresh_ms", "must be non-zero"));
        }

        if self.history_capacity == 0 {
            return Err(ValidationError::new("history_capacity", "must keep at least one sample"));
        }
        if self.history_capacity > MAX_HISTORY_CAPACITY {
            return Err(ValidationError::new(
                "history_capacity",
                format!("must not exceed {}", MAX_HISTORY_CAPACITY),
            ));
        }

        if !(1..=21).contains(&self.map.zoom) {
            return Err(ValidationError::new("map.zoom", "must be between 1 and 21"));
        }
        let bounds = &self.map.bounds;
        if !(bounds.lat_min <= bounds.lat_max) || !(bounds.lon_min <= bounds.lon_max) {
            return Err(ValidationError::new("map.bounds", "min must not exceed max"));
        }
        if bounds.lat_min < -90.0 || bounds.lat_max > 90.0
            || bounds.lon_min < -180.0 || bounds.lon_max > 180.0 {
            return Err(ValidationError::new("map.bounds", "outside valid latitude/longitude"));
        }

        Ok(())
    }
}
