use super::*;
use geospat_core::Distance;
use serde::Deserialize;
use serde::Serialize;

/// Which distance primitive a graph or heuristic measures with.
///
/// - `Euclidean` treats points as planar `x`/`y`
/// - `Haversine` treats points as lon/lat degrees and returns kilometres
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[default]
    Euclidean,
    Haversine,
}

impl Measure for Metric {
    fn distance(&self, a: &Point, b: &Point) -> Distance {
        match self {
            Metric::Euclidean => a.euclidean(b),
            Metric::Haversine => a.haversine(b),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Euclidean => write!(f, "euclidean"),
            Metric::Haversine => write!(f, "haversine"),
        }
    }
}
