mod refresh;

use chrono::{DateTime, Local};

use super::{Coordinate, CoordinateSampler};

/// What the map panel currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub coordinate: Coordinate,
    pub url: String,
    pub refreshed_at: DateTime<Local>,
}

/// Picks a fresh coordinate on every refresh and builds the map address for it.
#[derive(Debug, Clone)]
pub struct MapRefresher {
    sampler: CoordinateSampler,
    base_url: String,
    zoom: u8,
    current: Option<MapView>,
    refresh_count: u64,
}

impl MapRefresher {
    pub fn new(sampler: CoordinateSampler, base_url: impl Into<String>, zoom: u8) -> Self {
        Self {
            sampler,
            base_url: base_url.into(),
            zoom,
            current: None,
            refresh_count: 0,
        }
    }

    pub fn current(&self) -> Option<&MapView> {
        self.current.as_ref()
    }

    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }
}
