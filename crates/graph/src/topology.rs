use super::*;
use serde::Deserialize;
use serde::Serialize;

/// How the nodes of a graph are connected.
///
/// `Complete` reproduces the all-pairs model where every node reaches every
/// other node directly. On a complete graph whose weights obey the triangle
/// inequality the direct edge is always optimal, so real routing problems
/// should describe their adjacency explicitly.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub enum Topology {
    /// Every ordered pair of distinct nodes, weighted by the metric.
    #[default]
    Complete,
    /// Exactly the given edges, one direction each.
    Directed(Vec<Edge>),
    /// The given edges in both directions.
    Undirected(Vec<Edge>),
}

impl Topology {
    /// Expand into the directed edge list over `n` nodes, in caller order.
    pub fn edges(&self, n: usize) -> Vec<Edge> {
        match self {
            Topology::Complete => (0..n)
                .flat_map(|i| (0..n).filter(move |&j| j != i).map(move |j| Edge::measured(i, j)))
                .collect(),
            Topology::Directed(edges) => edges.clone(),
            Topology::Undirected(edges) => edges
                .iter()
                .flat_map(|e| [*e, e.reversed()])
                .collect(),
        }
    }
}

impl From<Option<Vec<Edge>>> for Topology {
    fn from(edges: Option<Vec<Edge>>) -> Self {
        match edges {
            Some(edges) => Topology::Directed(edges),
            None => Topology::Complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_expansion() {
        let edges = Topology::Complete.edges(4);
        assert_eq!(edges.len(), 12);
        assert!(edges.iter().all(|e| e.source() != e.target()));
        assert_eq!(edges[0], Edge::measured(0, 1));
        assert_eq!(edges[11], Edge::measured(3, 2));
    }

    #[test]
    fn undirected_expansion() {
        let edges = Topology::Undirected(vec![Edge::weighted(0, 1, 2.)]).edges(2);
        assert_eq!(edges, vec![Edge::weighted(0, 1, 2.), Edge::weighted(1, 0, 2.)]);
    }

    #[test]
    fn omitted_edges_mean_complete() {
        assert_eq!(Topology::from(None), Topology::Complete);
        assert_eq!(Topology::from(Some(vec![])), Topology::Directed(vec![]));
    }
}
