use chrono::Local;

use crate::{
    log_info,
    map::map_url,
};

use super::{MapRefresher, MapView};

impl MapRefresher {
    /// Replace the current view with one at a newly sampled coordinate.
    pub fn refresh(&mut self) -> &MapView {
        let coordinate = self.sampler.sample();
        let url = map_url(&self.base_url, coordinate, self.zoom);
        self.refresh_count += 1;

        log_info!("Map refresh #{}: {}", self.refresh_count, url);

        self.current.insert(MapView {
            coordinate,
            url,
            refreshed_at: Local::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{BoundingBox, CoordinateSampler, DEFAULT_MAP_BASE_URL, DEFAULT_ZOOM};

    fn refresher() -> MapRefresher {
        MapRefresher::new(
            CoordinateSampler::seeded(BoundingBox::SPAIN, 3),
            DEFAULT_MAP_BASE_URL,
            DEFAULT_ZOOM,
        )
    }

    #[test]
    fn test_starts_without_view() {
        let refresher = refresher();
        assert!(refresher.current().is_none());
        assert_eq!(refresher.refresh_count(), 0);
    }

    #[test]
    fn test_refresh_replaces_view() {
        let mut refresher = refresher();
        let first = refresher.refresh().clone();
        let second = refresher.refresh().clone();

        assert_eq!(refresher.refresh_count(), 2);
        assert_eq!(refresher.current(), Some(&second));
        assert_ne!(first.coordinate, second.coordinate);
        assert!(BoundingBox::SPAIN.contains(second.coordinate));
    }

    #[test]
    fn test_url_addresses_sampled_coordinate() {
        let mut refresher = refresher();
        let view = refresher.refresh();
        let c = view.coordinate;
        let expected = format!(
            "https://www.google.com/maps/place/{},{}/@{},{},15z",
            c.latitude, c.longitude, c.latitude, c.longitude
        );
        assert_eq!(view.url, expected);
    }
}
