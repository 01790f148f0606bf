//! Optional petgraph compatibility layer.
//!
//! Converts a [`Graph`] into a `petgraph::DiGraph` so its algorithm library
//! (cycle checks, path searches) and DOT visualization can be applied to a
//! process graph. Edges are emitted in their data-flow direction: from the
//! ancestor slot to the descendant slot, weighted with the edge label.
//!
//! Only available with the `petgraph-compat` feature:
//!
//! ```toml
//! [dependencies]
//! procgraph = { version = "0.1", features = ["petgraph-compat"] }
//! ```

use crate::graph::Graph;
use crate::types::NodeId;
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::{FxHashMap, FxHashSet};

/// A petgraph-compatible directed view of a process graph.
///
/// Node weights are [`NodeId`]s, edge weights are the edge labels.
pub type ProcDiGraph = DiGraph<NodeId, String>;

/// Result of converting a [`Graph`] to petgraph form.
#[derive(Debug, Clone)]
pub struct PetgraphConversion {
    /// The petgraph directed graph.
    pub graph: ProcDiGraph,
    /// Mapping from node identifier to petgraph index.
    pub index_map: FxHashMap<NodeId, NodeIndex>,
}

impl PetgraphConversion {
    /// Look up the petgraph index for a node identifier.
    #[must_use]
    pub fn index_of(&self, id: &NodeId) -> Option<NodeIndex> {
        self.index_map.get(id).copied()
    }

    /// Get the node identifier at a petgraph index.
    #[must_use]
    pub fn node_at(&self, index: NodeIndex) -> Option<&NodeId> {
        self.graph.node_weight(index)
    }
}

/// Convert a graph to a petgraph `DiGraph`.
///
/// Node indices follow container order, so the conversion is deterministic.
/// After [`Graph::update`] both endpoints hold each edge; duplicates are
/// collapsed so every connection appears exactly once. Hidden edges are
/// skipped. Edges naming endpoints outside the graph are skipped as well.
#[must_use]
pub fn to_petgraph<P>(source: &Graph<P>) -> PetgraphConversion {
    let mut graph = DiGraph::new();
    let mut index_map: FxHashMap<NodeId, NodeIndex> = FxHashMap::default();

    for node in source.nodes() {
        let idx = graph.add_node(node.id().clone());
        index_map.insert(node.id().clone(), idx);
    }

    let mut seen: FxHashSet<(NodeId, NodeId, String)> = FxHashSet::default();
    for node in source.nodes() {
        for edge in node.edges() {
            if edge.is_hidden() {
                continue;
            }
            let [ancestor, descendant] = edge.endpoints();
            let key = (
                ancestor.clone(),
                descendant.clone(),
                edge.label().to_string(),
            );
            if !seen.insert(key) {
                continue;
            }
            if let (Some(&from), Some(&to)) = (index_map.get(ancestor), index_map.get(descendant))
            {
                graph.add_edge(from, to, edge.label().to_string());
            }
        }
    }

    PetgraphConversion { graph, index_map }
}

/// Export a graph to DOT format for visualization.
///
/// The output can be rendered with Graphviz (`dot -Tpng graph.dot`). Node
/// labels are identifiers; edge labels are the connection role names.
#[must_use]
pub fn to_dot<P>(source: &Graph<P>) -> String {
    use std::fmt::Write;

    let conversion = to_petgraph(source);
    let mut output = String::new();

    writeln!(output, "digraph {{").unwrap();
    writeln!(output, "    rankdir=TB;").unwrap();
    writeln!(output, "    node [shape=box, style=rounded];").unwrap();

    for idx in conversion.graph.node_indices() {
        let id = conversion.graph.node_weight(idx).unwrap();
        writeln!(output, "    {} [ label=\"{}\" ];", idx.index(), id).unwrap();
    }

    writeln!(output).unwrap();

    for edge in conversion.graph.edge_indices() {
        let (from, to) = conversion.graph.edge_endpoints(edge).unwrap();
        let label = conversion.graph.edge_weight(edge).unwrap();
        writeln!(
            output,
            "    {} -> {} [ label=\"{}\" ];",
            from.index(),
            to.index(),
            label
        )
        .unwrap();
    }

    writeln!(output, "}}").unwrap();

    output
}

/// Check for cycles in the data-flow direction using petgraph's algorithm.
#[must_use]
pub fn is_cyclic<P>(source: &Graph<P>) -> bool {
    let conversion = to_petgraph(source);
    petgraph::algo::is_cyclic_directed(&conversion.graph)
}
