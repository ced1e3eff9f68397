//! Reachability Traversal
//!
//! This module answers "what does this node transitively depend on?" for a
//! [`Graph`](crate::graph::Graph).
//!
//! # Overview
//!
//! A traversal owns two pieces of per-run state:
//!
//! - A visited set, which only grows and becomes the result.
//! - A frontier of discovered nodes waiting to be expanded.
//!
//! Both live for exactly one call. Nothing is cached on the graph or shared
//! between calls, so any number of traversals can read the same graph.
//!
//! # Order
//!
//! The frontier can behave as a stack ([`Order::DepthFirst`]) or a queue
//! ([`Order::BreadthFirst`]). The reachable set is the same either way; only
//! the expansion sequence observed by a [`Visitor`] changes. Depth-first is
//! the default because it keeps fewer pending entries on wide graphs.
//!
//! # Termination
//!
//! Cycles, self-loops and repeated edges are ordinary input. A node is
//! checked against the visited set before it is expanded, so each reachable
//! node is expanded once and the loop ends after at most one step per
//! frontier entry.

mod distance;
mod frontier;
mod order;
mod visitor;
mod walker;

pub use distance::distances;
pub use frontier::Frontier;
pub use order::{ConfigError, Order, ParseOrderError, TraversalConfig};
pub use visitor::{VisitLog, Visitor};
pub use walker::{Reachable, Traversal, TraversalStats};

use crate::graph::Graph;

/// Collect every node reachable from `root`, depth-first.
///
/// `root` itself is always part of the result, even if it is not a key of
/// `graph`.
pub fn reachable(graph: &Graph, root: &str) -> Reachable {
    Traversal::new(graph).run(root)
}

/// Collect every node reachable from `root` using the given frontier order.
pub fn reachable_with(graph: &Graph, root: &str, order: Order) -> Reachable {
    Traversal::with_config(graph, TraversalConfig::new().with_order(order)).run(root)
}
