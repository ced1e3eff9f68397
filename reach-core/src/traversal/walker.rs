//! Reachability Walker
//!
//! Computes the set of nodes reachable from a root by following dependency
//! edges zero or more times.
//!
//! # Algorithm
//!
//! 1. Seed the frontier with the root.
//! 2. Pop a node. If it is already visited, discard it.
//! 3. Otherwise mark it visited, notify the visitor, and push its neighbors
//!    (none if the node is not a key of the graph).
//! 4. Repeat until the frontier is empty.
//!
//! The visited check in step 2 is what makes cyclic graphs terminate: a node
//! is expanded at most once, so the loop performs one expansion per
//! reachable node and one skip per redundant frontier entry.

use std::collections::HashSet;

use indexmap::IndexSet;
use serde::Serialize;
use tracing::{debug, trace};

use super::frontier::Frontier;
use super::order::{Order, TraversalConfig};
use super::visitor::Visitor;
use crate::graph::{Graph, NodeId};

/// The nodes reachable from a root, root included.
///
/// Iteration yields nodes in the order they were expanded, but equality is
/// set equality: two results with the same members compare equal whatever
/// order produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Reachable {
    nodes: IndexSet<NodeId>,
}

impl Reachable {
    /// Check whether `node` was reached.
    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }

    /// Get the number of reached nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a finished traversal, since the root is reached.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over the reached nodes in expansion order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, NodeId> {
        self.nodes.iter()
    }

    /// Convert into an unordered set.
    pub fn into_set(self) -> HashSet<NodeId> {
        self.nodes.into_iter().collect()
    }
}

impl IntoIterator for Reachable {
    type Item = NodeId;
    type IntoIter = indexmap::set::IntoIter<NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Reachable {
    type Item = &'a NodeId;
    type IntoIter = indexmap::set::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Counters collected during one traversal run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Nodes marked visited and expanded. Equal to the result size.
    pub expanded: usize,

    /// Frontier entries discarded because their node was already visited.
    pub skipped: usize,

    /// Largest number of entries the frontier held at once.
    pub peak_frontier: usize,
}

/// A reachability traversal over a borrowed graph.
///
/// The traversal holds no per-run state, so one value can serve any number
/// of roots.
#[derive(Debug, Clone, Copy)]
pub struct Traversal<'g> {
    graph: &'g Graph,
    config: TraversalConfig,
}

impl<'g> Traversal<'g> {
    /// Create a depth-first traversal.
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_config(graph, TraversalConfig::default())
    }

    /// Create a traversal with explicit options.
    pub fn with_config(graph: &'g Graph, config: TraversalConfig) -> Self {
        Self { graph, config }
    }

    /// Get the frontier policy.
    pub fn order(&self) -> Order {
        self.config.order
    }

    /// Collect every node reachable from `root`.
    pub fn run(&self, root: &str) -> Reachable {
        let (reachable, _) = self.walk(root, &mut |_: &str| {});
        reachable
    }

    /// Collect every node reachable from `root`, reporting each expansion to
    /// `visitor` and returning run counters alongside the result.
    pub fn walk<V>(&self, root: &str, visitor: &mut V) -> (Reachable, TraversalStats)
    where
        V: Visitor + ?Sized,
    {
        let graph: &'g Graph = self.graph;
        let order = self.config.order;
        debug!(root, %order, "starting reachability traversal");

        let mut visited: IndexSet<&str> = IndexSet::new();
        let mut frontier = Frontier::seeded(order, root);
        let mut skipped = 0;

        while let Some(node) = frontier.pop() {
            if !visited.insert(node) {
                skipped += 1;
                trace!(node, "already visited");
                continue;
            }

            visitor.visit(node);
            frontier.push_neighbors(graph.neighbors(node));
        }

        let stats = TraversalStats {
            expanded: visited.len(),
            skipped,
            peak_frontier: frontier.peak(),
        };
        debug!(
            root,
            %order,
            expanded = stats.expanded,
            skipped = stats.skipped,
            peak_frontier = stats.peak_frontier,
            "finished reachability traversal"
        );

        let nodes = visited.into_iter().map(NodeId::from).collect();
        (Reachable { nodes }, stats)
    }
}

impl Graph {
    /// Collect every node reachable from `root`, depth-first.
    pub fn reachable_from(&self, root: &str) -> Reachable {
        Traversal::new(self).run(root)
    }
}
