//! Labeled connections between exactly two nodes.
//!
//! An [`Edge`] is a *directional-but-undirected* pair: it does not carry an
//! arrow, it carries two positional slots. The node in slot 1 regards the
//! node in slot 0 as an ancestor, and slot 0 regards slot 1 as a descendant.
//! All relative queries on [`Node`](crate::graph::Node) are defined in terms
//! of which slot a node occupies, never in terms of an absolute direction.
//!
//! Edges store [`NodeId`] handles, not node references; the owning
//! [`Graph`](crate::graph::Graph) resolves the other endpoint on demand.
//!
//! # Examples
//!
//! ```rust
//! use procgraph::graph::Edge;
//!
//! // "load_collection_2" is an ancestor of "reduce_bands_3" along "data".
//! let edge = Edge::new("data", ["load_collection_2".into(), "reduce_bands_3".into()]);
//! assert_eq!(edge.label(), "data");
//! assert!(!edge.is_hidden());
//!
//! // Equality is positional: swapping the endpoints is a different edge.
//! let swapped = Edge::new("data", ["reduce_bands_3".into(), "load_collection_2".into()]);
//! assert_ne!(edge, swapped);
//! ```

use crate::graph::GraphError;
use crate::types::NodeId;
use serde::{Deserialize, Serialize};

/// Slot index of the ancestor-side endpoint.
pub(crate) const ANCESTOR_SLOT: usize = 0;
/// Slot index of the descendant-side endpoint.
pub(crate) const DESCENDANT_SLOT: usize = 1;

/// An immutable, labeled connection between exactly two nodes.
///
/// Two edges are equal when their endpoint identifiers match *positionally*
/// and their labels match; the optional identifier and the `hidden` flag do
/// not participate in equality.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Edge {
    /// Optional identifier, assigned by the translator when useful.
    id: Option<String>,
    /// Role name of the connection, e.g. `"data"` or `"callback"`.
    label: String,
    /// The two endpoints. Slot 1 regards slot 0 as its ancestor.
    endpoints: [NodeId; 2],
    /// Excludes the edge from consumer-defined traversals; the engine only
    /// carries the flag.
    hidden: bool,
}

impl Edge {
    /// Create an edge from its label and two ordered endpoints.
    ///
    /// The two-endpoint invariant is enforced by the array type; use
    /// [`try_from_endpoints`](Self::try_from_endpoints) when holding a
    /// runtime-sized list.
    pub fn new(label: impl Into<String>, endpoints: [NodeId; 2]) -> Self {
        Self {
            id: None,
            label: label.into(),
            endpoints,
            hidden: false,
        }
    }

    /// Create an edge from a runtime endpoint list.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EndpointCount`] unless the list holds exactly
    /// two identifiers.
    pub fn try_from_endpoints(
        label: impl Into<String>,
        endpoints: &[NodeId],
    ) -> Result<Self, GraphError> {
        match endpoints {
            [ancestor, descendant] => Ok(Self::new(
                label,
                [ancestor.clone(), descendant.clone()],
            )),
            other => Err(GraphError::EndpointCount { count: other.len() }),
        }
    }

    /// Attach an identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the hidden flag.
    #[must_use]
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Optional identifier.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Role name of the connection.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The two endpoint identifiers, in slot order.
    #[must_use]
    pub fn endpoints(&self) -> &[NodeId; 2] {
        &self.endpoints
    }

    /// Whether consumers should skip this edge.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// The slot (`0` or `1`) the given node occupies, if any.
    #[must_use]
    pub fn slot_of(&self, id: &NodeId) -> Option<usize> {
        self.endpoints.iter().position(|endpoint| endpoint == id)
    }

    /// The endpoint opposite to `id`, if `id` is an endpoint at all.
    #[must_use]
    pub fn other_endpoint(&self, id: &NodeId) -> Option<&NodeId> {
        match self.slot_of(id) {
            Some(slot) => Some(&self.endpoints[1 - slot]),
            None => None,
        }
    }

    /// Whether the given node is one of the two endpoints.
    #[must_use]
    pub fn touches(&self, id: &NodeId) -> bool {
        self.slot_of(id).is_some()
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.endpoints == other.endpoints && self.label == other.label
    }
}

impl Eq for Edge {}
