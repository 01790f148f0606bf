//! Generic graph engine: nodes, labeled edges, and traversal queries.
//!
//! This module is the domain-agnostic half of the crate. A [`Graph`] is an
//! insertion-ordered arena of [`Node`]s connected by [`Edge`]s; nodes are
//! generic over an opaque content payload, so the same engine serves any
//! declarative graph document. Process-specific semantics live in
//! [`crate::process`] and never leak down here.
//!
//! # Core concepts
//!
//! - **Edges are positional, not directed**: an edge has two slots, and the
//!   slot a node occupies decides whether the other endpoint is an ancestor
//!   or a descendant of it. See [`Edge`].
//! - **Handles, not references**: edges carry [`NodeId`]s; the graph's arena
//!   resolves every "other endpoint" lookup, so there is no shared-pointer
//!   aliasing to maintain.
//! - **Queries allocate, mutations are explicit**: `relatives`, `lineage`,
//!   `find_siblings`, `find_partners`, and `sort` return new graphs;
//!   only [`Graph::update`] and [`Node::add_edge`] mutate.
//!
//! # Quick start
//!
//! ```rust
//! use procgraph::graph::{Edge, Graph, Node};
//!
//! // b consumes a; c consumes b. Attach each edge to one side only.
//! let mut a: Node<()> = Node::new("a").with_depth(0);
//! let b: Node<()> = Node::new("b").with_depth(0);
//! let mut c: Node<()> = Node::new("c").with_depth(0);
//! a.add_edge(Edge::new("data", ["a".into(), "b".into()]));
//! c.add_edge(Edge::new("data", ["b".into(), "c".into()]));
//!
//! let mut graph = Graph::from_list(vec![a, b, c]);
//! graph.update(); // complete edge symmetry
//!
//! let upstream = graph.lineage(&"c".into(), Some("data"), true, false).unwrap();
//! assert_eq!(upstream.len(), 2);
//! ```
//!
//! [`NodeId`]: crate::types::NodeId

mod container;
mod edge;
mod error;
mod node;

#[cfg(feature = "petgraph-compat")]
mod petgraph_compat;

pub use container::Graph;
pub use edge::Edge;
pub use error::GraphError;
pub use node::Node;

#[cfg(feature = "petgraph-compat")]
pub use petgraph_compat::{PetgraphConversion, ProcDiGraph, is_cyclic, to_dot, to_petgraph};
