//! Core type aliases, traits, and constants for geospat.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the geospat workspace: the numeric aliases every engine
//! speaks, the shared [`Error`] taxonomy, and the [`Interrupt`] seam through
//! which long-running searches observe deadlines and cancellation.
mod error;
mod interrupt;

pub use error::*;
pub use interrupt::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Planar coordinates, or latitude/longitude in degrees.
pub type Coordinate = f64;
/// Distances, edge weights, path costs, and heuristic estimates.
/// Kilometres under the haversine metric, coordinate units otherwise.
pub type Distance = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// GEODESY
// ============================================================================
/// Mean Earth radius in kilometres (IUGG).
pub const EARTH_RADIUS_KM: Distance = 6371.0;

// ============================================================================
// K-MEANS CLUSTERING
// Lloyd's algorithm with farthest-point healing of empty clusters.
// ============================================================================
/// Default upper bound on Lloyd iterations.
pub const KMEANS_ITERATIONS: usize = 256;
/// Default convergence threshold on the largest centroid displacement.
pub const KMEANS_EPSILON: Distance = 1e-9;
/// Default seed for centroid sampling.
pub const KMEANS_SEED: u64 = 0x5EED;

// ============================================================================
// RUNTIME CONFIGURATION
// ============================================================================
/// Environment variable holding an optional computation budget ("30s", "5m", "2h", "1d").
pub const DEADLINE_ENV: &str = "GEOSPAT_DEADLINE";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
