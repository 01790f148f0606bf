//! # Procgraph: Traversable Process-Graph Model
//!
//! Procgraph models a declarative process graph — a JSON-encoded directed
//! graph describing a computation pipeline, such as a geospatial processing
//! workflow — as an in-memory, traversable graph of typed nodes connected
//! by labeled edges, and provides the operations needed to inspect,
//! validate, and topologically order it.
//!
//! ## Core Concepts
//!
//! - **Edges**: labeled, positional connections — the slot a node occupies
//!   decides the ancestor/descendant sense
//! - **Nodes**: generic vertices carrying an opaque content payload, an
//!   edge list, and a hierarchy depth
//! - **Graph**: an insertion-ordered arena with lineage, sibling/partner,
//!   and ordering queries
//! - **Process layer**: argument default-filling, data/callback dependency
//!   resolution, reducer dimensions — layered on the generic engine, never
//!   baked into it
//! - **Validation**: warn-and-continue cross-checks against process and
//!   collection definitions
//!
//! Translating raw JSON into the initial node/edge set and loading
//! definition documents from disk or network are *not* part of this crate;
//! it consumes a populated [`graph::Graph`] and already-decoded definition
//! documents.
//!
//! ## Quick Start
//!
//! ```rust
//! use procgraph::graph::{Edge, Graph, Node};
//! use procgraph::process::{DATA_LINK, ProcessContent};
//! use procgraph::registry::Registry;
//! use procgraph::validate::validate;
//! use serde_json::json;
//!
//! // A two-node pipeline: save_1 consumes load_0.
//! let mut graph = Graph::from_list(vec![
//!     Node::new("load_0")
//!         .with_content(ProcessContent::new("load_collection").with_argument("id", json!("S2")))
//!         .with_depth(0),
//!     Node::new("save_1")
//!         .with_content(ProcessContent::new("save_result").as_result())
//!         .with_depth(0),
//! ]);
//! graph
//!     .get_mut(&"save_1".into())
//!     .unwrap()
//!     .add_edge(Edge::new(DATA_LINK, ["load_0".into(), "save_1".into()]));
//! graph.update();
//!
//! // Dependency-respecting order for an executor.
//! let ordered = graph.sort_by_dependencies().unwrap();
//! assert_eq!(
//!     ordered.ids().map(|id| id.as_str()).collect::<Vec<_>>(),
//!     ["load_0", "save_1"],
//! );
//!
//! // Cross-check against definitions (empty here, so everything is
//! // reported — and traversal above still worked).
//! let report = validate(&graph, &Registry::new());
//! assert!(!report.is_valid());
//! ```
//!
//! ## Error Handling
//!
//! Absence is a value, not an error: "no parent", "no ancestors", "no
//! result process" come back as `None` or an empty graph. Errors are
//! reserved for structural-invariant violations — an ambiguous parent, an
//! unknown sort strategy, a dependency cycle — and carry
//! [`miette::Diagnostic`] codes:
//!
//! ```rust
//! use procgraph::graph::{Edge, Graph, GraphError, Node};
//!
//! let mut child: Node<()> = Node::new("child");
//! child.add_edge(Edge::new("data", ["p1".into(), "child".into()]));
//! child.add_edge(Edge::new("data", ["p2".into(), "child".into()]));
//!
//! // Two qualifying ancestors: the singular query refuses to pick one.
//! assert!(matches!(
//!     child.parent_id(Some("data")),
//!     Err(GraphError::MultipleParents { .. })
//! ));
//! // The plural query on the same input succeeds.
//! assert_eq!(child.ancestor_ids(Some("data")).len(), 2);
//! ```
//!
//! ## Module Guide
//!
//! - [`types`] - Node identifiers
//! - [`graph`] - Generic nodes, edges, container, and traversal queries
//! - [`process`] - Process semantics: arguments, dependencies, callbacks,
//!   reducers
//! - [`registry`] - Process/collection definition documents and lookup
//! - [`validate`] - Definition cross-checks with accumulated findings
//! - [`telemetry`] - Tracing subscriber bootstrap

pub mod graph;
pub mod process;
pub mod registry;
pub mod telemetry;
pub mod types;
pub mod validate;
