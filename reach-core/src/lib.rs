//! Reach Core
//!
//! This crate computes transitive dependency closures over directed graphs
//! keyed by string identifiers. It implements:
//!
//! - An immutable adjacency graph with a builder and JSON loading
//! - Reachability traversal with depth-first or breadth-first frontiers
//! - Visitation hooks and per-run statistics for instrumentation
//! - Breadth-first shortest distances from a root
//!
//! # Architecture
//!
//! The crate is organized into two modules:
//!
//! - `graph`: Node identifiers and the adjacency graph
//! - `traversal`: The reachability walk and its configuration
//!
//! # Example
//!
//! ```rust
//! use reach_core::graph::Graph;
//! use reach_core::traversal::{reachable_with, Order};
//!
//! let graph = Graph::from_json(r#"{
//!     "app":    ["http", "json"],
//!     "http":   ["io"],
//!     "json":   ["io"],
//!     "io":     []
//! }"#)?;
//!
//! let deps = reachable_with(&graph, "app", Order::BreadthFirst);
//! assert_eq!(deps.len(), 4);
//! assert!(deps.contains("io"));
//! # Ok::<(), reach_core::graph::GraphError>(())
//! ```

pub mod graph;
pub mod traversal;

pub use graph::{Graph, GraphError, NodeId};
pub use traversal::{reachable, reachable_with, Order, Reachable, Traversal, TraversalConfig};
