//! Errors raised while constructing a graph.
//!
//! Traversal itself never fails; only decoding external input can.

/// Errors produced when loading a [`Graph`](super::Graph).
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The input was not a JSON object mapping identifiers to arrays of
    /// identifiers.
    #[error("invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),
}
