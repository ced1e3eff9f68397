//! Dependency Graph
//!
//! This module implements the directed graph that traversals read from.
//!
//! # Overview
//!
//! The graph maps a node identifier to the ordered list of identifiers it
//! depends on:
//!
//! - Nodes are opaque strings (module names, package names, file paths).
//! - An edge from A to B means "A depends on B".
//!
//! # Design Decisions
//!
//! 1. The graph is immutable once built. All mutation happens on a
//!    [`GraphBuilder`], so a `&Graph` can be shared freely.
//!
//! 2. Lookups of undeclared nodes are not errors. A node that only appears
//!    as someone's neighbor simply has no neighbors of its own.
//!
//! 3. Only forward edges are stored. Reachability never needs to walk
//!    dependents.

mod adjacency;
mod error;
mod node;

pub use adjacency::{Graph, GraphBuilder, Neighbors};
pub use error::GraphError;
pub use node::NodeId;
