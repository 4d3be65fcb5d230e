use crate::{
    config::DashboardConfig,
    map::{CoordinateSampler, MapRefresher, MapView},
    telemetry::{Sample, TelemetryGenerator, TelemetryHistory},
};

/// Everything the two timers mutate. The telemetry path and the map never
/// share data.
#[derive(Debug, Clone)]
pub struct Session {
    telemetry: TelemetryGenerator,
    map: MapRefresher,
}

impl Session {
    pub fn new(telemetry: TelemetryGenerator, map: MapRefresher) -> Self {
        Self { telemetry, map }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        let telemetry = TelemetryGenerator::new(
            config.profile.clone(),
            TelemetryHistory::with_capacity(config.history_capacity),
        );
        let map = MapRefresher::new(
            CoordinateSampler::new(config.map.bounds),
            config.map.base_url.clone(),
            config.map.zoom,
        );
        Self::new(telemetry, map)
    }

    /// Chart timer: one new sample.
    pub fn chart_tick(&mut self) -> Sample {
        self.telemetry.generate_next()
    }

    /// Map timer: one new coordinate.
    pub fn map_refresh(&mut self) -> &MapView {
        self.map.refresh()
    }

    pub fn telemetry(&self) -> &TelemetryGenerator {
        &self.telemetry
    }

    pub fn map(&self) -> &MapRefresher {
        &self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::BoundingBox;

    #[test]
    fn test_timers_are_independent() {
        let mut session = Session::from_config(&DashboardConfig::default());

        for _ in 0..5 {
            session.chart_tick();
        }
        assert_eq!(session.telemetry().history().len(), 5);
        assert!(session.map().current().is_none());

        session.map_refresh();
        assert_eq!(session.telemetry().history().len(), 5);
        assert_eq!(session.telemetry().history().last_time(), Some(4));
        assert_eq!(session.map().refresh_count(), 1);
    }

    #[test]
    fn test_from_config_applies_settings() {
        let mut config = DashboardConfig::default();
        config.history_capacity = 3;
        config.map.zoom = 9;
        config.map.bounds = BoundingBox { lat_min: 40.0, lat_max: 41.0, lon_min: -4.0, lon_max: -3.0 };

        let mut session = Session::from_config(&config);
        for _ in 0..10 {
            session.chart_tick();
        }
        assert_eq!(session.telemetry().history().len(), 3);

        let view = session.map_refresh();
        assert!(config.map.bounds.contains(view.coordinate));
        assert!(view.url.ends_with(",9z"));
    }
}
