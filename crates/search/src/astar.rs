use super::*;
use geospat_core::Error;
use geospat_core::Interrupt;
use geospat_core::Result;
use geospat_graph::Graph;
use geospat_graph::NodeId;

/// A* search over a shared graph.
///
/// Expands nodes in order of `f = g + h`, where `g` is the best known cost
/// from the start and `h` the [`Heuristic`] estimate to the goal. Each node is
/// expanded at most once (closed set), and superseded frontier entries are
/// skipped, so the search terminates on graphs with cycles and runs in
/// O((V + E) log V).
///
/// # Usage
///
/// ```ignore
/// let route = AStar::new(&graph).heuristic(Zero).find(start, goal)?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AStar<'g, H = Straight> {
    graph: &'g Graph,
    heuristic: H,
}

impl<'g> AStar<'g> {
    /// Search `graph` with the straight-line heuristic.
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            heuristic: Straight,
        }
    }
}

impl<'g, H> AStar<'g, H>
where
    H: Heuristic,
{
    /// Swap in a different remaining-cost estimate.
    pub fn heuristic<G>(self, heuristic: G) -> AStar<'g, G>
    where
        G: Heuristic,
    {
        AStar {
            graph: self.graph,
            heuristic,
        }
    }

    /// Minimum-cost route from `start` to `goal`.
    pub fn find(&self, start: NodeId, goal: NodeId) -> Result<Route> {
        self.find_within(start, goal, &())
    }

    /// Minimum-cost route from `start` to `goal`, giving up with
    /// [`Error::Cancelled`] as soon as `interrupt` fires. The signal is polled
    /// once per frontier extraction.
    pub fn find_within<I>(&self, start: NodeId, goal: NodeId, interrupt: &I) -> Result<Route>
    where
        I: Interrupt + ?Sized,
    {
        for id in [start, goal] {
            if !self.graph.contains(id) {
                return Err(Error::InvalidParameter(format!(
                    "node {} is not in a graph of {} nodes",
                    id.index(),
                    self.graph.node_count()
                )));
            }
        }
        if start == goal {
            return Ok(Route::new(vec![start], 0.));
        }
        let ref mut state = SearchState::new(self.graph.node_count());
        let ref mut frontier = Frontier::default();
        state.open(start, 0., self.estimate(start, goal), None);
        frontier.push(start, state.f(start));
        while let Some((current, _)) = frontier.pop() {
            if interrupt.interrupted() {
                log::debug!("{:<32}{:<32}", "search cancelled", state.expanded());
                return Err(Error::Cancelled);
            }
            if current == goal {
                let route = Route::new(state.path(goal), state.g(goal));
                log::debug!("{:<32}{:<32}", "search expanded", state.expanded());
                return Ok(route);
            }
            if !state.close(current) {
                continue;
            }
            let g = state.g(current);
            for (neighbor, weight) in self.graph.neighbors(current) {
                if state.is_closed(neighbor) {
                    continue;
                }
                let tentative = g + weight;
                if tentative < state.g(neighbor) {
                    let h = self.estimate(neighbor, goal);
                    state.open(neighbor, tentative, h, Some(current));
                    frontier.push(neighbor, state.f(neighbor));
                }
            }
        }
        log::debug!("{:<32}{:<32}", "search exhausted", state.expanded());
        Err(Error::NoPathFound {
            start: start.index(),
            goal: goal.index(),
        })
    }

    fn estimate(&self, node: NodeId, goal: NodeId) -> geospat_core::Distance {
        self.heuristic.estimate(self.graph, node, goal)
    }
}

/// Minimum-cost route between two nodes using the straight-line heuristic.
pub fn find_path(graph: &Graph, start: NodeId, goal: NodeId) -> Result<Route> {
    AStar::new(graph).find(start, goal)
}
