//! Structural errors raised by the generic graph engine.
//!
//! Every variant here is a structural-invariant violation: the graph (or the
//! request made of it) is malformed, and the operation that detected the
//! problem aborts immediately. "No parent", "no ancestors", and "no node with
//! that name" are *absence*, not errors — those come back as `None` or an
//! empty graph.

use crate::types::NodeId;
use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by [`Edge`](crate::graph::Edge), [`Node`](crate::graph::Node)
/// and [`Graph`](crate::graph::Graph) operations.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge was built from a runtime endpoint list of the wrong length.
    #[error("an edge connects exactly two nodes ({count} given)")]
    #[diagnostic(
        code(procgraph::graph::endpoint_count),
        help("Pass exactly two node identifiers, ordered: [descendant side, ancestor side].")
    )]
    EndpointCount { count: usize },

    /// A singular-parent query found more than one qualifying ancestor.
    #[error("node '{node}' is restricted to one parent along '{label}' edges ({count} found)")]
    #[diagnostic(
        code(procgraph::graph::multiple_parents),
        help("Use `ancestors` to enumerate all of them, or fix the edge set.")
    )]
    MultipleParents {
        node: NodeId,
        label: String,
        count: usize,
    },

    /// A singular-child query found more than one qualifying descendant.
    #[error("node '{node}' is restricted to one child along '{label}' edges ({count} found)")]
    #[diagnostic(
        code(procgraph::graph::multiple_children),
        help("Use `descendants` to enumerate all of them, or fix the edge set.")
    )]
    MultipleChildren {
        node: NodeId,
        label: String,
        count: usize,
    },

    /// `sort` was asked for a strategy this engine does not implement.
    #[error("unknown sort strategy '{strategy}'")]
    #[diagnostic(
        code(procgraph::graph::unknown_sort_strategy),
        help("The generic container only supports \"depth\".")
    )]
    UnknownSortStrategy { strategy: String },

    /// Depth sorting requires every node to carry a depth level.
    #[error("node '{node}' has no depth assigned")]
    #[diagnostic(
        code(procgraph::graph::missing_depth),
        help("The translator must assign a depth to every node before depth sorting.")
    )]
    MissingDepth { node: NodeId },

    /// An identifier was looked up that is not a member of this graph.
    #[error("no node with id '{id}' in this graph")]
    #[diagnostic(code(procgraph::graph::unknown_node))]
    UnknownNode { id: NodeId },
}
