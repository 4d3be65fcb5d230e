use super::Coordinate;

/// Place view centred on `coordinate`:
/// `{base}/place/{lat},{lon}/@{lat},{lon},{zoom}z`.
pub fn map_url(base_url: &str, coordinate: Coordinate, zoom: u8) -> String {
    let Coordinate { latitude, longitude } = coordinate;
    format!(
        "{}/place/{},{}/@{},{},{}z",
        base_url.trim_end_matches('/'),
        latitude, longitude, latitude, longitude, zoom
    )
}
