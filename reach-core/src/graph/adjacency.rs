//! Adjacency Graph
//!
//! The graph maps each node to the ordered sequence of nodes it depends on.
//! It is assembled with a [`GraphBuilder`] and frozen by [`GraphBuilder::build`];
//! after that it is only ever read.
//!
//! # Lookup Semantics
//!
//! A node that was never declared is indistinguishable from a node with no
//! neighbors: [`Graph::neighbors`] returns an empty slice for it. Neighbor
//! references are not required to name declared nodes, and duplicate edges
//! are kept as supplied.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::GraphError;
use super::node::NodeId;

/// Neighbor sequence of a single node. Most modules depend on a handful of
/// others, so short lists stay inline.
pub type Neighbors = SmallVec<[NodeId; 4]>;

/// An immutable directed graph keyed by [`NodeId`].
///
/// Keys iterate in insertion order, which keeps traversals over the same
/// input deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph {
    adjacency: IndexMap<NodeId, Neighbors>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a graph.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Parse a graph from a JSON object such as `{"a": ["b"], "b": []}`.
    ///
    /// Key order is preserved. If a key is repeated the last occurrence wins.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        let graph = serde_json::from_str(json)?;
        Ok(graph)
    }

    /// Get the direct neighbors of a node.
    ///
    /// Returns an empty slice for nodes that are not keys of the graph.
    pub fn neighbors(&self, id: &str) -> &[NodeId] {
        self.adjacency
            .get(id)
            .map(|neighbors| neighbors.as_slice())
            .unwrap_or(&[])
    }

    /// Check whether a node is a key of the graph.
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Iterate over the declared nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.adjacency.keys()
    }

    /// Iterate over `(node, neighbors)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &[NodeId])> {
        self.adjacency
            .iter()
            .map(|(id, neighbors)| (id, neighbors.as_slice()))
    }

    /// Get the number of declared nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get the total number of edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|neighbors| neighbors.len()).sum()
    }

    /// Check whether the graph has no declared nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<K, I> FromIterator<(K, I)> for Graph
where
    K: Into<NodeId>,
    I: IntoIterator,
    I::Item: Into<NodeId>,
{
    /// Build a graph from `(node, neighbors)` pairs. Repeated keys append to
    /// the neighbors already collected.
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut builder = GraphBuilder::new();
        for (id, neighbors) in iter {
            builder = builder.edges(id, neighbors);
        }
        builder.build()
    }
}

/// Incrementally assembles a [`Graph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    adjacency: IndexMap<NodeId, Neighbors>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node. Does nothing if the node is already declared.
    pub fn node(mut self, id: impl Into<NodeId>) -> Self {
        self.adjacency.entry(id.into()).or_default();
        self
    }

    /// Add a dependency edge: `from` depends on `to`.
    ///
    /// Declares `from` if needed. `to` is not declared.
    pub fn edge(mut self, from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        self.adjacency
            .entry(from.into())
            .or_default()
            .push(to.into());
        self
    }

    /// Append several dependency edges out of `from`, in order.
    pub fn edges<I>(mut self, from: impl Into<NodeId>, to: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<NodeId>,
    {
        self.adjacency
            .entry(from.into())
            .or_default()
            .extend(to.into_iter().map(Into::into));
        self
    }

    /// Freeze the adjacency into a read-only graph.
    pub fn build(self) -> Graph {
        Graph {
            adjacency: self.adjacency,
        }
    }
}
