//! Immutable graph topology for route search.
//!
//! A [`Graph`] is built once from caller-supplied nodes and an adjacency rule,
//! validated, and then shared read-only by any number of searches. Nothing in
//! here is mutated after construction; per-search bookkeeping lives with the
//! search itself.
//!
//! ## Core Types
//!
//! - [`Node`] — A point plus an optional opaque label
//! - [`Edge`] — A directed connection with a supplied or measured weight
//! - [`Topology`] — Complete, directed, or undirected adjacency
//! - [`Graph`] — The validated, petgraph-backed topology
mod edge;
mod graph;
mod node;
mod topology;

pub use edge::*;
pub use graph::*;
pub use node::*;
pub use topology::*;

/// Stable node identifier: the node's position in the list it was built from.
pub type NodeId = petgraph::graph::NodeIndex;
