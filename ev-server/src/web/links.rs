//! Outbound map-service direction links.
//!
//! Link generation only; route computation stays with the map services.

use crate::domain::Coordinate;

/// Kakao Map "directions to" link for a station.
pub fn kakao_directions_url(name: &str, station: Coordinate) -> String {
    format!(
        "https://map.kakao.com/link/to/{},{},{}",
        name,
        station.latitude(),
        station.longitude()
    )
}

/// Naver Map directions link from the reference point to a station.
pub fn naver_directions_url(from: Coordinate, to: Coordinate) -> String {
    format!(
        "https://map.naver.com/v5/directions/{},{}/{},{}",
        from.latitude(),
        from.longitude(),
        to.latitude(),
        to.longitude()
    )
}
