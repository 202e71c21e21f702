//! Points and distance primitives.
//!
//! Everything downstream measures space through this crate: graph edge weights
//! when the caller omits them, A* heuristics, and k-means assignment.
//!
//! ## Core Types
//!
//! - [`Point`] — An immutable coordinate pair, planar or lon/lat
//! - [`Metric`] — Euclidean or haversine ground distance
//! - [`Measure`] — Anything that can measure the distance between two points
//!
//! ## Primitives
//!
//! - [`haversine`] — Great-circle distance in kilometres
//! - [`euclidean`] — Straight-line planar distance
mod distance;
mod measure;
mod metric;
mod point;

pub use distance::*;
pub use measure::*;
pub use metric::*;
pub use point::*;
