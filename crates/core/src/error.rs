//! Error taxonomy shared by every geospat engine.

use thiserror::Error;

/// Errors that graph construction, search, and clustering can return.
///
/// None of these are fatal to the caller. [`Error::NoPathFound`] in particular
/// is an ordinary outcome of searching a disconnected graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An edge references an unknown node or carries an invalid weight.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// A call argument is out of range (k, epsilon, node id, coordinates).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// No points or nodes were supplied.
    #[error("empty input")]
    EmptyInput,

    /// The search frontier emptied before the goal was reached.
    #[error("no path from node {start} to node {goal}")]
    NoPathFound { start: usize, goal: usize },

    /// A deadline or cancellation signal was observed mid-computation.
    #[error("computation cancelled")]
    Cancelled,
}

/// Result alias over [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
