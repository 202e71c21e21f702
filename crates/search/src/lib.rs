//! Best-first shortest-path search.
//!
//! [`AStar`] finds a minimum-cost route between two nodes of a shared,
//! immutable [`Graph`](geospat_graph::Graph). All mutable bookkeeping (tentative
//! costs, parents, the closed set) lives in a [`SearchState`] allocated per
//! call, so one graph can serve any number of concurrent searches.
//!
//! ## Core Types
//!
//! - [`Frontier`] — Min-priority queue with FIFO ties and lazy decrease-key
//! - [`SearchState`] — Per-search scratch arena keyed by node id
//! - [`Heuristic`] — Remaining-cost estimate (straight line, zero, or custom)
//! - [`Route`] — The node sequence found and its total cost
mod astar;
mod frontier;
mod heuristic;
mod route;
mod state;

pub use astar::*;
pub use frontier::*;
pub use heuristic::*;
pub use route::*;
pub use state::*;
