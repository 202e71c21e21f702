use geospat_core::Distance;
use geospat_geometry::Measure;
use geospat_graph::Graph;
use geospat_graph::NodeId;

/// Estimate of the remaining cost from a node to the goal.
///
/// A* returns optimal routes only when the estimate is admissible (never
/// exceeds the true remaining cost) and consistent
/// (`h(a) <= w(a, b) + h(b)` for every edge). [`Straight`] satisfies both on
/// every graph [`Graph`] accepts. [`Zero`] turns A* into Dijkstra.
///
/// Any [`Measure`] (a [`geospat_geometry::Metric`] or a closure over two
/// points) is also a heuristic, used as is; it is up to the caller that it
/// never overestimates.
pub trait Heuristic {
    fn estimate(&self, graph: &Graph, node: NodeId, goal: NodeId) -> Distance;
}

/// Metric distance to the goal, using the graph's own metric, shrunk by
/// [`Graph::scale`] so that no edge weight is ever undercut.
#[derive(Debug, Default, Clone, Copy)]
pub struct Straight;

/// No estimate at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct Zero;

impl Heuristic for Straight {
    fn estimate(&self, graph: &Graph, node: NodeId, goal: NodeId) -> Distance {
        graph.distance(node, goal).map_or(0., |d| d * graph.scale())
    }
}

impl Heuristic for Zero {
    fn estimate(&self, _: &Graph, _: NodeId, _: NodeId) -> Distance {
        0.
    }
}

impl<M> Heuristic for M
where
    M: Measure,
{
    fn estimate(&self, graph: &Graph, node: NodeId, goal: NodeId) -> Distance {
        match (graph.point(node), graph.point(goal)) {
            (Some(a), Some(b)) => self.distance(a, b),
            _ => 0.,
        }
    }
}
