use geospat_core::Distance;
use serde::Deserialize;
use serde::Serialize;

/// A directed connection between two nodes, addressed by their position in
/// the node list.
///
/// The weight is either supplied by the caller or, when absent, measured with
/// the graph's metric at build time. Supplied weights must be finite and
/// non-negative; [`crate::Graph::build`] rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    from: usize,
    to: usize,
    weight: Option<Distance>,
}

impl Edge {
    /// Edge with an explicit weight.
    pub fn weighted(from: usize, to: usize, weight: Distance) -> Self {
        Self {
            from,
            to,
            weight: Some(weight),
        }
    }
    /// Edge whose weight is the metric distance between its endpoints.
    pub fn measured(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            weight: None,
        }
    }
    pub fn source(&self) -> usize {
        self.from
    }
    pub fn target(&self) -> usize {
        self.to
    }
    pub fn weight(&self) -> Option<Distance> {
        self.weight
    }
    /// Same edge, opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }
}

impl From<(usize, usize, Distance)> for Edge {
    fn from((from, to, weight): (usize, usize, Distance)) -> Self {
        Self::weighted(from, to, weight)
    }
}
impl From<(usize, usize)> for Edge {
    fn from((from, to): (usize, usize)) -> Self {
        Self::measured(from, to)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.weight {
            Some(w) => write!(f, "{} -> {} ({})", self.from, self.to, w),
            None => write!(f, "{} -> {}", self.from, self.to),
        }
    }
}
