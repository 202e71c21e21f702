use super::*;
use geospat_core::Distance;

/// Ground distance between two points.
///
/// Defines what "far" means for edge weights, heuristics, and cluster
/// assignment. Implementations must be symmetric, non-negative, and zero on
/// identical points; A* additionally relies on the triangle inequality when a
/// `Measure` doubles as its heuristic.
///
/// # Implementations
///
/// - [`Metric`]: Euclidean or haversine
/// - Any `Fn(&Point, &Point) -> Distance` closure
pub trait Measure {
    /// Returns the distance from `a` to `b`.
    fn distance(&self, a: &Point, b: &Point) -> Distance;
}

impl<F> Measure for F
where
    F: Fn(&Point, &Point) -> Distance,
{
    fn distance(&self, a: &Point, b: &Point) -> Distance {
        self(a, b)
    }
}
