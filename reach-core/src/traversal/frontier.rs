//! Frontier
//!
//! The frontier holds nodes that have been discovered but not yet expanded.
//! Both policies pop from the front of a single deque; they differ only in
//! where newly discovered neighbors are inserted:
//!
//! - Depth-first: at the front, in reverse, so the first listed neighbor is
//!   taken next.
//! - Breadth-first: at the back, in order.
//!
//! Entries borrow their identifiers from the graph (or from the caller, for
//! the root), so pushing a neighbor never allocates a string.

use std::collections::VecDeque;

use super::order::Order;
use crate::graph::NodeId;

/// Pending nodes of a single traversal run.
#[derive(Debug)]
pub struct Frontier<'a> {
    order: Order,
    pending: VecDeque<&'a str>,
    peak: usize,
}

impl<'a> Frontier<'a> {
    /// Create an empty frontier.
    pub fn new(order: Order) -> Self {
        Self {
            order,
            pending: VecDeque::new(),
            peak: 0,
        }
    }

    /// Create a frontier holding only `root`.
    pub fn seeded(order: Order, root: &'a str) -> Self {
        let mut frontier = Self::new(order);
        frontier.pending.push_back(root);
        frontier.peak = 1;
        frontier
    }

    /// Get the policy of this frontier.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Take the next node to consider.
    pub fn pop(&mut self) -> Option<&'a str> {
        self.pending.pop_front()
    }

    /// Add the neighbors of a freshly expanded node.
    pub fn push_neighbors(&mut self, neighbors: &'a [NodeId]) {
        match self.order {
            Order::DepthFirst => {
                for neighbor in neighbors.iter().rev() {
                    self.pending.push_front(neighbor.as_str());
                }
            }
            Order::BreadthFirst => {
                self.pending
                    .extend(neighbors.iter().map(NodeId::as_str));
            }
        }
        self.peak = self.peak.max(self.pending.len());
    }

    /// Get the number of pending entries. Includes entries that will turn out
    /// to be already visited.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Get the largest length the frontier has reached.
    pub fn peak(&self) -> usize {
        self.peak
    }
}
