use geospat_core::Coordinate;
use geospat_geometry::Point;
use serde::Deserialize;
use serde::Serialize;

/// A graph vertex: where it is, and optionally what the caller calls it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    point: Point,
    label: Option<String>,
}

impl Node {
    pub fn new(point: Point) -> Self {
        Self { point, label: None }
    }
    pub fn labelled(point: Point, label: impl Into<String>) -> Self {
        Self {
            point,
            label: Some(label.into()),
        }
    }
    pub fn point(&self) -> &Point {
        &self.point
    }
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl From<Point> for Node {
    fn from(point: Point) -> Self {
        Self::new(point)
    }
}
impl From<(Coordinate, Coordinate)> for Node {
    fn from(xy: (Coordinate, Coordinate)) -> Self {
        Self::new(Point::from(xy))
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{} {}", label, self.point),
            None => write!(f, "{}", self.point),
        }
    }
}
