//! Visitation hooks.
//!
//! A [`Visitor`] is told about every node at the moment it is expanded. The
//! returned set cannot show the order in which nodes were explored; a
//! visitor can.

use crate::graph::NodeId;

/// Receives each node exactly once, in expansion order.
pub trait Visitor {
    /// Called when `node` is marked visited, before its neighbors are pushed.
    fn visit(&mut self, node: &str);
}

impl<F> Visitor for F
where
    F: FnMut(&str),
{
    fn visit(&mut self, node: &str) {
        self(node)
    }
}

/// A visitor that records the expansion sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitLog {
    sequence: Vec<NodeId>,
}

impl VisitLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded sequence.
    pub fn as_slice(&self) -> &[NodeId] {
        &self.sequence
    }

    /// Consume the log and return the recorded sequence.
    pub fn into_inner(self) -> Vec<NodeId> {
        self.sequence
    }

    /// Get the position at which `node` was expanded.
    pub fn position(&self, node: &str) -> Option<usize> {
        self.sequence.iter().position(|visited| visited == node)
    }
}

impl Visitor for VisitLog {
    fn visit(&mut self, node: &str) {
        self.sequence.push(NodeId::from(node));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_a_visitor() {
        let mut count = 0;
        let mut visitor = |_: &str| count += 1;

        visitor.visit("a");
        visitor.visit("b");

        assert_eq!(count, 2);
    }

    #[test]
    fn log_records_in_order() {
        let mut log = VisitLog::new();
        log.visit("x");
        log.visit("y");

        assert_eq!(log.position("y"), Some(1));
        assert_eq!(log.position("z"), None);
        assert_eq!(log.into_inner(), vec![NodeId::from("x"), NodeId::from("y")]);
    }
}
