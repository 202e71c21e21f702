//! Geospatial pathfinding and clustering.
//!
//! This facade crate re-exports all public geospat crates for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Type aliases, constants, errors, and cancellation
//! - [`geometry`] — Points, haversine and euclidean distance
//! - [`graph`] — Immutable complete or sparse graph topology
//! - [`search`] — A* shortest-path search
//! - [`clustering`] — Seeded k-means

pub use geospat_core        as core;
pub use geospat_geometry    as geometry;
pub use geospat_graph       as graph;
pub use geospat_search      as search;
pub use geospat_clustering  as clustering;

// Re-export commonly used types at the root
pub use geospat_core::*;
