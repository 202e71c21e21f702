use geospat_core::Distance;
use geospat_geometry::Point;
use geospat_graph::Graph;
use geospat_graph::NodeId;
use serde::Deserialize;
use serde::Serialize;

/// A start-to-goal node sequence, both ends inclusive, and its total weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    nodes: Vec<NodeId>,
    cost: Distance,
}

impl Route {
    pub(crate) fn new(nodes: Vec<NodeId>, cost: Distance) -> Self {
        debug_assert!(!nodes.is_empty());
        Self { nodes, cost }
    }
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }
    pub fn cost(&self) -> Distance {
        self.cost
    }
    /// Number of nodes, endpoints included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.len().saturating_sub(1)
    }
    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }
    pub fn goal(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }
    /// Coordinates along the route, for renderers.
    pub fn points(&self, graph: &Graph) -> Vec<Point> {
        self.nodes
            .iter()
            .filter_map(|id| graph.point(*id))
            .copied()
            .collect()
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hops = self
            .nodes
            .iter()
            .map(|id| id.index().to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        write!(f, "{} ({:.3})", hops, self.cost)
    }
}

impl From<Route> for Vec<NodeId> {
    fn from(route: Route) -> Self {
        route.nodes
    }
}
