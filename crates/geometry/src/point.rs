use super::*;
use geospat_core::Arbitrary;
use geospat_core::Coordinate;
use geospat_core::Distance;
use serde::Deserialize;
use serde::Serialize;

/// An immutable coordinate pair.
///
/// Planar points use `x`/`y` directly. Geographic points store longitude in
/// `x` and latitude in `y`, the GeoJSON axis order, so a point read from a
/// feature file can be handed over without swapping.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Point {
    x: Coordinate,
    y: Coordinate,
}

impl Point {
    /// Planar point.
    pub const fn new(x: Coordinate, y: Coordinate) -> Self {
        Self { x, y }
    }
    /// Geographic point from latitude and longitude in degrees.
    pub const fn geodetic(lat: Coordinate, lon: Coordinate) -> Self {
        Self { x: lon, y: lat }
    }
    pub fn x(&self) -> Coordinate {
        self.x
    }
    pub fn y(&self) -> Coordinate {
        self.y
    }
    pub fn lat(&self) -> Coordinate {
        self.y
    }
    pub fn lon(&self) -> Coordinate {
        self.x
    }
    /// Both coordinates are finite (no NaN, no infinities).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
    /// Straight-line distance to another planar point.
    pub fn euclidean(&self, other: &Self) -> Distance {
        euclidean(self, other)
    }
    /// Great-circle distance in kilometres to another geographic point.
    pub fn haversine(&self, other: &Self) -> Distance {
        haversine(self.lat(), self.lon(), other.lat(), other.lon())
    }
}

impl From<(Coordinate, Coordinate)> for Point {
    fn from((x, y): (Coordinate, Coordinate)) -> Self {
        Self::new(x, y)
    }
}
impl From<[Coordinate; 2]> for Point {
    fn from([x, y]: [Coordinate; 2]) -> Self {
        Self::new(x, y)
    }
}
impl From<Point> for (Coordinate, Coordinate) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

/// Uniform over the valid lon/lat rectangle, which doubles as a planar box.
impl Arbitrary for Point {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        Self::geodetic(rng.random_range(-90.0..90.0), rng.random_range(-180.0..180.0))
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
