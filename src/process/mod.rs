//! Process semantics layered on the generic graph engine.
//!
//! A process graph is a [`Graph`](crate::graph::Graph) whose payload is
//! [`ProcessContent`]: each node declares one process invocation, and two
//! edge labels carry all domain meaning:
//!
//! - [`DATA_LINK`] (`"data"`): the ancestor endpoint produces a value the
//!   descendant endpoint consumes.
//! - [`CALLBACK_LINK`] (`"callback"`): the ancestor endpoint belongs to a
//!   sub-graph embedded in the descendant endpoint's arguments — a
//!   parameterized function body, e.g. a reducer's per-element computation.
//!
//! The specialization is layered, not inherited: node-level accessors
//! (process id, default-filled arguments, sub-parameters, reducer
//! classification) are inherent methods on `Node<ProcessContent>`,
//! graph-level resolution (dependencies, parent/child processes, reducer
//! dimension, dependency ordering) lives on `Graph<ProcessContent>`, and
//! the generic engine stays free of process knowledge.
//!
//! # Examples
//!
//! ```rust
//! use procgraph::graph::{Edge, Graph, Node};
//! use procgraph::process::{CALLBACK_LINK, DATA_LINK, ProcessContent};
//! use serde_json::json;
//!
//! // reduce_1 consumes load_0 and embeds mean_2 as its reducer body.
//! let mut graph = Graph::from_list(vec![
//!     Node::new("load_0")
//!         .with_content(ProcessContent::new("load_collection").with_argument("id", json!("S2")))
//!         .with_depth(0),
//!     Node::new("reduce_1")
//!         .with_content(ProcessContent::new("reduce_dimension"))
//!         .with_depth(0),
//!     Node::new("mean_2")
//!         .with_content(ProcessContent::new("mean").as_result())
//!         .with_depth(1),
//! ]);
//! graph
//!     .get_mut(&"reduce_1".into())
//!     .unwrap()
//!     .add_edge(Edge::new(DATA_LINK, ["load_0".into(), "reduce_1".into()]))
//!     .add_edge(Edge::new(CALLBACK_LINK, ["mean_2".into(), "reduce_1".into()]));
//! graph.update();
//!
//! // reduce_1 depends on its data input and on its embedded result.
//! let deps = graph.dependencies(&"reduce_1".into()).unwrap();
//! assert_eq!(deps.len(), 2);
//!
//! let ordered = graph.sort_by_dependencies().unwrap();
//! assert_eq!(ordered.ids().last().unwrap().as_str(), "reduce_1");
//! ```

mod content;
mod error;
mod graph;
mod node;

pub use content::{ParameterDecl, ProcessContent};
pub use error::ProcessGraphError;

/// Edge label for direct data dependencies.
pub const DATA_LINK: &str = "data";

/// Edge label for embedded sub-graph (callback) relationships.
pub const CALLBACK_LINK: &str = "callback";
