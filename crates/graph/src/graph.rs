use super::*;
use geospat_core::Distance;
use geospat_core::Error;
use geospat_core::Result;
use geospat_geometry::Measure;
use geospat_geometry::Metric;
use geospat_geometry::Point;
use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;

/// A validated, immutable routing topology.
///
/// Nodes keep the position they had in the caller's list as their [`NodeId`],
/// so callers can refer to them without holding on to the graph. Every stored
/// edge references two existing nodes and carries a finite, non-negative
/// weight. The graph is `Send + Sync` and has no interior mutability, so one
/// instance can serve concurrent searches.
///
/// While connecting edges the graph also records [`Graph::scale`], the
/// largest factor by which metric distance can be shrunk so that it never
/// exceeds any edge weight. Scaled that way, straight-line estimates stay
/// admissible even when explicit weights undercut the metric.
#[derive(Debug, Clone)]
pub struct Graph {
    inner: DiGraph<Node, Distance>,
    metric: Metric,
    scale: Distance,
}

impl Graph {
    /// Validates nodes and adjacency and assembles the topology.
    ///
    /// Fails with [`Error::EmptyInput`] on an empty node list and with
    /// [`Error::InvalidGraph`] when a node has non-finite coordinates, an
    /// edge references an unknown node, or a supplied weight is negative or
    /// not finite.
    pub fn build(nodes: Vec<Node>, topology: Topology, metric: Metric) -> Result<Self> {
        if nodes.is_empty() {
            return Err(Error::EmptyInput);
        }
        if let Some((i, node)) = nodes.iter().enumerate().find(|(_, n)| !n.point().is_finite()) {
            return Err(Error::InvalidGraph(format!(
                "node {} has non-finite coordinates {}",
                i,
                node.point()
            )));
        }
        let n = nodes.len();
        let edges = topology.edges(n);
        let mut inner = DiGraph::with_capacity(n, edges.len());
        nodes.into_iter().for_each(|node| {
            inner.add_node(node);
        });
        let mut graph = Self {
            inner,
            metric,
            scale: 1.,
        };
        // petgraph walks outgoing edges newest-first, so insert back to front
        // to have neighbors() follow the caller's order.
        for edge in edges.iter().rev() {
            graph.connect(edge)?;
        }
        log::debug!(
            "{:<32}{:<32}",
            "graph built",
            format!(
                "{} nodes {} edges {} scale {}",
                graph.node_count(),
                graph.edge_count(),
                metric,
                graph.scale
            )
        );
        Ok(graph)
    }

    /// Every node reaches every other node directly, weighted by `metric`.
    pub fn complete(nodes: Vec<Node>, metric: Metric) -> Result<Self> {
        Self::build(nodes, Topology::Complete, metric)
    }

    /// Exactly the given directed edges.
    pub fn sparse(nodes: Vec<Node>, edges: Vec<Edge>, metric: Metric) -> Result<Self> {
        Self::build(nodes, Topology::Directed(edges), metric)
    }

    fn connect(&mut self, edge: &Edge) -> Result<()> {
        let n = self.node_count();
        let unknown = [edge.source(), edge.target()].into_iter().find(|&i| i >= n);
        if let Some(i) = unknown {
            return Err(Error::InvalidGraph(format!(
                "edge {} references unknown node {}",
                edge, i
            )));
        }
        let a = NodeId::new(edge.source());
        let b = NodeId::new(edge.target());
        let metric = self.metric.distance(self.inner[a].point(), self.inner[b].point());
        let weight = edge.weight().unwrap_or(metric);
        if !weight.is_finite() || weight < 0. {
            return Err(Error::InvalidGraph(format!(
                "edge {} must have a finite non-negative weight, got {}",
                edge, weight
            )));
        }
        if metric > 0. {
            self.scale = self.scale.min(weight / metric);
        }
        self.inner.add_edge(a, b, weight);
        Ok(())
    }
}

impl Graph {
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }
    pub fn metric(&self) -> Metric {
        self.metric
    }
    /// Largest `r` in `[0, 1]` with `r * distance(a, b) <= weight` for every
    /// edge `a -> b`. Exactly 1 when no edge undercuts the metric.
    pub fn scale(&self) -> Distance {
        self.scale
    }
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.node_count()
    }
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.inner.node_weight(id)
    }
    pub fn point(&self, id: NodeId) -> Option<&Point> {
        self.node(id).map(Node::point)
    }
    /// All nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.inner.node_indices().map(|id| (id, &self.inner[id]))
    }
    /// Outgoing `(neighbor, weight)` pairs, in the order the edges were given.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, Distance)> + '_ {
        self.inner.edges(id).map(|e| (e.target(), *e.weight()))
    }
    /// Metric distance between two nodes' points, regardless of adjacency.
    pub fn distance(&self, a: NodeId, b: NodeId) -> Option<Distance> {
        Some(self.metric.distance(self.point(a)?, self.point(b)?))
    }
    /// Cheapest direct edge from `a` to `b`, if any.
    pub fn weight(&self, a: NodeId, b: NodeId) -> Option<Distance> {
        self.neighbors(a)
            .filter(|(n, _)| *n == b)
            .map(|(_, w)| w)
            .reduce(Distance::min)
    }
    /// Total weight along `path`, taking the cheapest edge for each hop.
    /// `None` if some consecutive pair is not connected.
    pub fn cost(&self, path: &[NodeId]) -> Option<Distance> {
        path.windows(2)
            .map(|hop| self.weight(hop[0], hop[1]))
            .sum()
    }
    /// The underlying petgraph, for algorithms that want to walk it directly.
    pub fn inner(&self) -> &DiGraph<Node, Distance> {
        &self.inner
    }
}
