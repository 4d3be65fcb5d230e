mod load;
mod validate;

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    map::{BoundingBox, DEFAULT_MAP_BASE_URL, DEFAULT_ZOOM},
    telemetry::{FlightProfile, HISTORY_CAPACITY},
};

pub use validate::{ValidationError, MAX_HISTORY_CAPACITY};

/// Looked up in the working directory at startup.
pub const CONFIG_FILE_NAME: &str = "dashboard.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub profile: FlightProfile,
    pub timers: TimerConfig,
    pub map: MapConfig,
    pub history_capacity: usize,
    pub log_dir: PathBuf,
    pub debug_logging: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub chart_tick_ms: u64,
    pub map_refresh_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub base_url: String,
    pub zoom: u8,
    pub bounds: BoundingBox,
    /// Also hand every refreshed map to the system browser.
    pub open_browser: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            profile: FlightProfile::default(),
            timers: TimerConfig::default(),
            map: MapConfig::default(),
            history_capacity: HISTORY_CAPACITY,
            log_dir: PathBuf::from("./logs"),
            debug_logging: false,
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            chart_tick_ms: 1000,
            map_refresh_ms: 5000,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MAP_BASE_URL.to_string(),
            zoom: DEFAULT_ZOOM,
            bounds: BoundingBox::SPAIN,
            open_browser: false,
        }
    }
}

impl TimerConfig {
    pub fn chart_tick(&self) -> Duration {
        Duration::from_millis(self.chart_tick_ms)
    }

    pub fn map_refresh(&self) -> Duration {
        Duration::from_millis(self.map_refresh_ms)
    }
}
