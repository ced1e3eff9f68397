//! Breadth-first distances from a root.

use std::collections::VecDeque;

use indexmap::IndexMap;
use tracing::debug;

use crate::graph::{Graph, NodeId};

/// Compute the shortest edge count from `root` to every reachable node.
///
/// The root is at distance 0. Nodes are returned in breadth-first expansion
/// order, so distances are non-decreasing along the map. Like the plain
/// traversal, a node is recorded the first time it is popped and ignored
/// afterwards; FIFO order guarantees that first pop carries the minimum.
pub fn distances(graph: &Graph, root: &str) -> IndexMap<NodeId, usize> {
    let mut settled: IndexMap<&str, usize> = IndexMap::new();
    let mut queue = VecDeque::from([(root, 0_usize)]);

    while let Some((node, distance)) = queue.pop_front() {
        if settled.contains_key(node) {
            continue;
        }
        settled.insert(node, distance);

        for neighbor in graph.neighbors(node) {
            queue.push_back((neighbor.as_str(), distance + 1));
        }
    }

    debug!(root, reached = settled.len(), "computed distances");

    settled
        .into_iter()
        .map(|(node, distance)| (NodeId::from(node), distance))
        .collect()
}
