pub mod coordinate_sampler;
pub mod map_url;
pub mod refresher;
pub mod viewer;

use serde::{Deserialize, Serialize};

pub use coordinate_sampler::CoordinateSampler;
pub use map_url::map_url;
pub use refresher::{MapRefresher, MapView};
pub use viewer::MapViewer;

pub const DEFAULT_MAP_BASE_URL: &str = "https://www.google.com/maps";
pub const DEFAULT_ZOOM: u8 = 15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Inclusive latitude/longitude box that coordinates are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    /// Mainland Spain plus the Balearic longitude spread.
    pub const SPAIN: BoundingBox = BoundingBox {
        lat_min: 36.0,
        lat_max: 43.8,
        lon_min: -9.5,
        lon_max: 3.0,
    };

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        (self.lat_min..=self.lat_max).contains(&coordinate.latitude)
            && (self.lon_min..=self.lon_max).contains(&coordinate.longitude)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::SPAIN
    }
}
