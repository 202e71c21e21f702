//! Seeded, deterministic k-means over planar points.
//!
//! [`KMeans`] runs Lloyd's algorithm from sampled or caller-supplied
//! centroids and reports a [`ClusterResult`]. Assignment is parallel over
//! points; every other step is sequential, so results are reproducible
//! regardless of thread count.
//!
//! ## Core Types
//!
//! - [`KMeans`] — Builder and driver for one clustering run
//! - [`Seeding`] — Where initial centroids come from
//! - [`Absorb`] / [`Centroid`] — Incremental mean accumulation
//! - [`ClusterResult`] — Centroids, labels, iterations, convergence
mod absorb;
mod kmeans;
mod result;
mod seeding;

pub use absorb::*;
pub use kmeans::*;
pub use result::*;
pub use seeding::*;
