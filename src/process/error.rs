//! Errors specific to the process-semantics layer.

use crate::graph::GraphError;
use crate::types::NodeId;
use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by process-level dependency and hierarchy resolution.
#[derive(Debug, Error, Diagnostic)]
pub enum ProcessGraphError {
    /// A structural error from the underlying graph engine.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),

    /// A node is embedded in more than one parent process.
    #[error("node '{node}' is restricted to one parent process ({count} found)")]
    #[diagnostic(
        code(procgraph::process::multiple_parent_processes),
        help("A process node can be embedded in at most one callback.")
    )]
    MultipleParentProcesses { node: NodeId, count: usize },

    /// More than one child process claims to be the embedded sub-graph's
    /// result.
    #[error("node '{node}' has {count} child processes flagged as result; only one is allowed")]
    #[diagnostic(
        code(procgraph::process::multiple_result_nodes),
        help("Exactly one node of an embedded sub-graph may carry \"result\": true.")
    )]
    MultipleResultNodes { node: NodeId, count: usize },

    /// The dependency relation is cyclic, so no dependency-respecting order
    /// exists.
    #[error("dependency cycle among nodes: {}", nodes.iter().map(|n| n.as_str()).collect::<Vec<_>>().join(", "))]
    #[diagnostic(
        code(procgraph::process::dependency_cycle),
        help("A process graph must be acyclic across \"data\" edges and embedded results.")
    )]
    DependencyCycle { nodes: Vec<NodeId> },

    /// An argument's nested `"parameters"` list did not decode.
    #[error("malformed parameter declaration on node '{node}': {source}")]
    #[diagnostic(code(procgraph::process::parameter_decl))]
    ParameterDecl {
        node: NodeId,
        #[source]
        source: serde_json::Error,
    },
}
