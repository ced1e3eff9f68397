//! Traversal order policy and configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the frontier hands out pending nodes.
///
/// The order never changes which nodes are reached, only the sequence in
/// which they are expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    /// Last in, first out. Peak frontier size tracks the depth of the graph
    /// rather than its width.
    #[default]
    #[serde(alias = "dfs")]
    DepthFirst,

    /// First in, first out. Nodes are expanded in non-decreasing distance
    /// from the root.
    #[serde(alias = "bfs")]
    BreadthFirst,
}

impl Order {
    /// Get the canonical name of the order.
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::DepthFirst => "depth_first",
            Order::BreadthFirst => "breadth_first",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a traversal order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown traversal order `{0}`, expected `depth_first` or `breadth_first`")]
pub struct ParseOrderError(String);

impl FromStr for Order {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "depth_first" | "dfs" => Ok(Order::DepthFirst),
            "breadth_first" | "bfs" => Ok(Order::BreadthFirst),
            other => Err(ParseOrderError(other.to_owned())),
        }
    }
}

/// Errors produced when loading a [`TraversalConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input was not a JSON object with the expected fields.
    #[error("invalid traversal config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options for a [`Traversal`](super::Traversal).
///
/// Missing fields fall back to their defaults when deserializing, so `{}`
/// is a valid configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Frontier policy.
    pub order: Order,
}

impl TraversalConfig {
    /// Create the default configuration (depth-first).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the frontier policy.
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    /// Parse a configuration from JSON, e.g. `{"order": "breadth_first"}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_depth_first() {
        assert_eq!(Order::default(), Order::DepthFirst);
        assert_eq!(TraversalConfig::new().order, Order::DepthFirst);
    }

    #[test]
    fn parse_order_names() {
        assert_eq!("depth_first".parse::<Order>(), Ok(Order::DepthFirst));
        assert_eq!("bfs".parse::<Order>(), Ok(Order::BreadthFirst));

        let err = "sideways".parse::<Order>().unwrap_err();
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn display_matches_parse() {
        for order in [Order::DepthFirst, Order::BreadthFirst] {
            assert_eq!(order.to_string().parse::<Order>(), Ok(order));
        }
    }

    #[test]
    fn config_from_json() {
        let config = TraversalConfig::from_json(r#"{"order": "breadth_first"}"#).unwrap();
        assert_eq!(config.order, Order::BreadthFirst);

        let config = TraversalConfig::from_json(r#"{"order": "dfs"}"#).unwrap();
        assert_eq!(config.order, Order::DepthFirst);
    }

    #[test]
    fn config_fields_default_when_missing() {
        let config = TraversalConfig::from_json("{}").unwrap();
        assert_eq!(config, TraversalConfig::default());
    }

    #[test]
    fn config_rejects_unknown_order() {
        let err = TraversalConfig::from_json(r#"{"order": "random"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("invalid traversal config JSON"));
    }

    #[test]
    fn config_rejects_malformed_json() {
        let err = TraversalConfig::from_json("order = bfs").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
