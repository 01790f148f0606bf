//! Graph vertices generic over an opaque content payload.
//!
//! A [`Node`] owns its identifier, an optional display name, an optional
//! payload, an optional hierarchy depth, and the ordered list of incident
//! edges. The relative-finding primitives here are *identifier-level*: they
//! are computed purely from the node's own edge list and yield [`NodeId`]s.
//! Materializing those identifiers into sub-graphs is the container's job
//! (see [`Graph`](crate::graph::Graph)), which resolves them through its
//! arena.
//!
//! The ancestor/descendant sense is positional: a node occupying slot 1 of
//! an edge sees the slot-0 endpoint as an ancestor, and vice versa. See
//! [`Edge`](crate::graph::Edge) for the slot convention.
//!
//! # Examples
//!
//! ```rust
//! use procgraph::graph::{Edge, Node};
//! use procgraph::types::NodeId;
//!
//! let mut ndvi: Node<()> = Node::new("ndvi_6").with_depth(1);
//! ndvi.add_edge(Edge::new("data", ["red_4".into(), "ndvi_6".into()]))
//!     .add_edge(Edge::new("data", ["nir_5".into(), "ndvi_6".into()]));
//!
//! let inputs: Vec<&NodeId> = ndvi.ancestor_ids(Some("data"));
//! assert_eq!(inputs.len(), 2);
//! assert!(ndvi.descendant_ids(None).is_empty());
//! ```

use crate::graph::edge::{ANCESTOR_SLOT, DESCENDANT_SLOT};
use crate::graph::{Edge, GraphError};
use crate::types::NodeId;
use serde::{Deserialize, Serialize};

/// A graph vertex with an opaque content payload.
///
/// Two nodes are equal when their identifiers are equal; content, edges,
/// name, and depth are irrelevant to identity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Node<P> {
    id: NodeId,
    name: Option<String>,
    content: Option<P>,
    edges: Vec<Edge>,
    depth: Option<u32>,
}

impl<P> Node<P> {
    /// Create a node with the given identifier and nothing else.
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            content: None,
            edges: Vec::new(),
            depth: None,
        }
    }

    /// Attach a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a content payload.
    #[must_use]
    pub fn with_content(mut self, content: P) -> Self {
        self.content = Some(content);
        self
    }

    /// Assign a hierarchy depth (0 for the top-level graph).
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    /// This node's identifier.
    #[must_use]
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Optional display name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Optional content payload.
    #[must_use]
    pub fn content(&self) -> Option<&P> {
        self.content.as_ref()
    }

    /// Incident edges, in attachment order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Optional hierarchy depth.
    #[must_use]
    pub fn depth(&self) -> Option<u32> {
        self.depth
    }

    /// Attach an edge unless an equal edge is already present.
    ///
    /// Idempotent by [`Edge`] equality; returns `&mut Self` so construction
    /// code can chain attachments.
    pub fn add_edge(&mut self, edge: Edge) -> &mut Self {
        if !self.edges.contains(&edge) {
            self.edges.push(edge);
        }
        self
    }

    /// Identifiers of direct relatives, in edge-iteration order.
    ///
    /// Scans the incident edges: an edge qualifies when this node occupies
    /// the slot matching the requested sense (slot 1 for ancestors, slot 0
    /// for descendants) and the label matches — or unconditionally when no
    /// label is given. The collected identifiers are the other endpoints.
    #[must_use]
    pub fn relative_ids(&self, label: Option<&str>, ancestors: bool) -> Vec<&NodeId> {
        let own_slot = if ancestors { DESCENDANT_SLOT } else { ANCESTOR_SLOT };
        let other_slot = 1 - own_slot;

        self.edges
            .iter()
            .filter(|edge| edge.endpoints()[own_slot] == self.id)
            .filter(|edge| label.is_none_or(|label| edge.label() == label))
            .map(|edge| &edge.endpoints()[other_slot])
            .collect()
    }

    /// Identifiers of all ancestors along `label` (all labels when `None`).
    #[must_use]
    pub fn ancestor_ids(&self, label: Option<&str>) -> Vec<&NodeId> {
        self.relative_ids(label, true)
    }

    /// Identifiers of all descendants along `label` (all labels when `None`).
    #[must_use]
    pub fn descendant_ids(&self, label: Option<&str>) -> Vec<&NodeId> {
        self.relative_ids(label, false)
    }

    /// Identifier of the single parent along `label`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MultipleParents`] when more than one ancestor
    /// qualifies; zero ancestors is `Ok(None)`.
    pub fn parent_id(&self, label: Option<&str>) -> Result<Option<&NodeId>, GraphError> {
        let ancestors = self.ancestor_ids(label);
        match ancestors.as_slice() {
            [] => Ok(None),
            [only] => Ok(Some(only)),
            many => Err(GraphError::MultipleParents {
                node: self.id.clone(),
                label: label.unwrap_or("any").to_string(),
                count: many.len(),
            }),
        }
    }

    /// Identifier of the single child along `label`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MultipleChildren`] when more than one
    /// descendant qualifies; zero descendants is `Ok(None)`.
    pub fn child_id(&self, label: Option<&str>) -> Result<Option<&NodeId>, GraphError> {
        let descendants = self.descendant_ids(label);
        match descendants.as_slice() {
            [] => Ok(None),
            [only] => Ok(Some(only)),
            many => Err(GraphError::MultipleChildren {
                node: self.id.clone(),
                label: label.unwrap_or("any").to_string(),
                count: many.len(),
            }),
        }
    }
}

impl<P> PartialEq for Node<P> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<P> Eq for Node<P> {}
