//! Core identifier types shared across the graph engine.
//!
//! This module defines [`NodeId`], the opaque handle used to reference nodes
//! everywhere in the crate: inside edges, in the graph's arena index, and in
//! all structural errors. Edges store identifiers rather than node
//! references, so every "other endpoint" lookup resolves through the owning
//! [`Graph`](crate::graph::Graph).
//!
//! # Examples
//!
//! ```rust
//! use procgraph::types::NodeId;
//!
//! let id = NodeId::from("load_collection_2");
//! assert_eq!(id.as_str(), "load_collection_2");
//! assert_eq!(id.to_string(), "load_collection_2");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a node, unique within a graph.
///
/// Translators typically derive it from the source document key plus a
/// per-node counter (e.g. `"reduce_bands_3"`), but the engine treats it as
/// an opaque string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create an identifier from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Developer Experience: allow using string literals where a NodeId is expected.
impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
