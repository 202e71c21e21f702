use super::*;
use geospat_core::Coordinate;
use geospat_core::Distance;
use geospat_core::EARTH_RADIUS_KM;

/// Great-circle distance in kilometres between two lat/lon pairs given in degrees.
///
/// `a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)`,
/// `d = 2·R·atan2(√a, √(1−a))` with the mean Earth radius.
///
/// Rounding can push `a` past 1 near antipodes, so it is clamped to `[0, 1]`.
pub fn haversine(
    lat1: Coordinate,
    lon1: Coordinate,
    lat2: Coordinate,
    lon2: Coordinate,
) -> Distance {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let a = (dlat / 2.).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.).sin().powi(2);
    let a = a.clamp(0., 1.);
    2. * EARTH_RADIUS_KM * a.sqrt().atan2((1. - a).sqrt())
}

/// Straight-line distance between two planar points.
pub fn euclidean(a: &Point, b: &Point) -> Distance {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    (dx * dx + dy * dy).sqrt()
}
