use geospat_core::Distance;
use geospat_graph::NodeId;

/// Per-node search bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Slot {
    /// Best known cost from the start.
    g: Distance,
    /// `g` plus the heuristic estimate to the goal.
    f: Distance,
    /// Predecessor on the best known path.
    parent: Option<NodeId>,
    /// Expanded and final.
    closed: bool,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            g: Distance::INFINITY,
            f: Distance::INFINITY,
            parent: None,
            closed: false,
        }
    }
}

/// Scratch arena for one search, indexed by [`NodeId`].
///
/// Lives exactly as long as a single search call. Keeping it apart from the
/// graph is what lets one graph serve concurrent searches.
#[derive(Debug, Clone)]
pub struct SearchState {
    slots: Vec<Slot>,
}

impl SearchState {
    /// Fresh state for a graph of `n` nodes: every cost infinite, nothing closed.
    pub fn new(n: usize) -> Self {
        Self {
            slots: vec![Slot::default(); n],
        }
    }
    pub fn g(&self, id: NodeId) -> Distance {
        self.slots.get(id.index()).map_or(Distance::INFINITY, |s| s.g)
    }
    pub fn f(&self, id: NodeId) -> Distance {
        self.slots.get(id.index()).map_or(Distance::INFINITY, |s| s.f)
    }
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.index()).and_then(|s| s.parent)
    }
    pub fn is_closed(&self, id: NodeId) -> bool {
        self.slots.get(id.index()).is_some_and(|s| s.closed)
    }
    /// Record a better path to `id`: cost `g`, estimate `h`, reached from `parent`.
    pub fn open(&mut self, id: NodeId, g: Distance, h: Distance, parent: Option<NodeId>) {
        let slot = &mut self.slots[id.index()];
        slot.g = g;
        slot.f = g + h;
        slot.parent = parent;
    }
    /// Mark `id` expanded. Returns false if it already was.
    pub fn close(&mut self, id: NodeId) -> bool {
        let slot = &mut self.slots[id.index()];
        !std::mem::replace(&mut slot.closed, true)
    }
    /// Number of nodes expanded so far.
    pub fn expanded(&self) -> usize {
        self.slots.iter().filter(|s| s.closed).count()
    }
    /// Walk parent links back from `goal` and return the path start-first.
    pub fn path(&self, goal: NodeId) -> Vec<NodeId> {
        let mut path = std::iter::successors(Some(goal), |&id| self.parent(id))
            .take(self.slots.len())
            .collect::<Vec<_>>();
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_unreached() {
        let state = SearchState::new(3);
        let id = NodeId::new(1);
        assert_eq!(state.g(id), Distance::INFINITY);
        assert_eq!(state.parent(id), None);
        assert!(!state.is_closed(id));
        assert_eq!(state.expanded(), 0);
    }

    #[test]
    fn close_once() {
        let mut state = SearchState::new(2);
        assert!(state.close(NodeId::new(0)));
        assert!(!state.close(NodeId::new(0)));
        assert_eq!(state.expanded(), 1);
    }

    #[test]
    fn open_records_f() {
        let mut state = SearchState::new(2);
        state.open(NodeId::new(1), 2., 3., Some(NodeId::new(0)));
        assert_eq!(state.g(NodeId::new(1)), 2.);
        assert_eq!(state.f(NodeId::new(1)), 5.);
        assert_eq!(state.parent(NodeId::new(1)), Some(NodeId::new(0)));
    }

    #[test]
    fn path_follows_parents() {
        let mut state = SearchState::new(4);
        let ids = (0..4).map(NodeId::new).collect::<Vec<_>>();
        state.open(ids[0], 0., 0., None);
        state.open(ids[2], 1., 0., Some(ids[0]));
        state.open(ids[1], 2., 0., Some(ids[2]));
        state.open(ids[3], 3., 0., Some(ids[1]));
        assert_eq!(state.path(ids[3]), vec![ids[0], ids[2], ids[1], ids[3]]);
        assert_eq!(state.path(ids[0]), vec![ids[0]]);
    }

    #[test]
    fn out_of_range_is_unreached() {
        let state = SearchState::new(1);
        assert_eq!(state.g(NodeId::new(5)), Distance::INFINITY);
        assert!(!state.is_closed(NodeId::new(5)));
    }
}
