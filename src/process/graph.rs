//! Dependency and hierarchy resolution across a process graph.
//!
//! These inherent methods specialize [`Graph`] for [`ProcessContent`]
//! payloads. They resolve the relationships a single node cannot see from
//! its own edge list: which nodes must run before it (data inputs plus the
//! result of an embedded sub-graph), which process embeds it, which
//! processes it embeds, and the dimension a reducer collapses.
//!
//! [`sort_by_dependencies`](Graph::sort_by_dependencies) is the
//! dependency-respecting ordering the executor consumes: every node comes
//! strictly after all of its dependencies, ties broken by original
//! container order.

use crate::graph::{Graph, GraphError, Node};
use crate::process::{CALLBACK_LINK, DATA_LINK, ProcessContent, ProcessGraphError};
use crate::registry::DefinitionSource;
use crate::types::NodeId;
use rustc_hash::FxHashSet;
use serde_json::Value;

impl Graph<ProcessContent> {
    /// Resolve an identifier that must be a member.
    fn process_member(&self, id: &NodeId) -> Result<&Node<ProcessContent>, ProcessGraphError> {
        self.get(id)
            .ok_or_else(|| GraphError::UnknownNode { id: id.clone() }.into())
    }

    /// Identifiers of everything `id` depends on: its direct data inputs
    /// plus the result of its embedded sub-graph, if it has one.
    fn dependency_ids(&self, id: &NodeId) -> Result<Vec<NodeId>, ProcessGraphError> {
        let node = self.process_member(id)?;
        let mut dependencies: Vec<NodeId> = node
            .ancestor_ids(Some(DATA_LINK))
            .into_iter()
            .cloned()
            .collect();
        if let Some(result) = self.result_process(id)? {
            dependencies.push(result.id().clone());
        }
        Ok(dependencies)
    }

    /// The nodes that must complete before `id` can run, as a new
    /// sub-graph.
    ///
    /// Union of (a) all ancestors along `"data"` edges and (b) the result
    /// node of an embedded sub-graph, when one exists: a node wrapping a
    /// callback needs the callback's result in addition to its direct
    /// inputs. Recomputed fresh on every call.
    ///
    /// # Errors
    ///
    /// Propagates membership errors and
    /// [`ProcessGraphError::MultipleResultNodes`].
    pub fn dependencies(&self, id: &NodeId) -> Result<Graph<ProcessContent>, ProcessGraphError> {
        let mut nodes = Vec::new();
        for dependency_id in self.dependency_ids(id)? {
            nodes.push(self.process_member(&dependency_id)?.clone());
        }
        Ok(Graph::from_list(nodes))
    }

    /// The process this node is embedded in, one hierarchy level up.
    ///
    /// # Errors
    ///
    /// [`ProcessGraphError::MultipleParentProcesses`] when more than one
    /// callback edge claims the node.
    pub fn parent_process(
        &self,
        id: &NodeId,
    ) -> Result<Option<&Node<ProcessContent>>, ProcessGraphError> {
        let parents = self.process_member(id)?.descendant_ids(Some(CALLBACK_LINK));
        match parents.as_slice() {
            [] => Ok(None),
            [only] => Ok(Some(self.process_member(only)?)),
            many => Err(ProcessGraphError::MultipleParentProcesses {
                node: id.clone(),
                count: many.len(),
            }),
        }
    }

    /// All processes forming this node's embedded sub-graph, one hierarchy
    /// level down, as a new sub-graph.
    pub fn child_processes(
        &self,
        id: &NodeId,
    ) -> Result<Graph<ProcessContent>, ProcessGraphError> {
        self.ancestors(id, Some(CALLBACK_LINK))
            .map_err(ProcessGraphError::from)
    }

    /// The child process whose output is the embedded sub-graph's overall
    /// output.
    ///
    /// `None` when the node embeds nothing, or none of its children is
    /// flagged.
    ///
    /// # Errors
    ///
    /// [`ProcessGraphError::MultipleResultNodes`] when more than one child
    /// carries the result flag.
    pub fn result_process(
        &self,
        id: &NodeId,
    ) -> Result<Option<&Node<ProcessContent>>, ProcessGraphError> {
        let mut result: Option<&Node<ProcessContent>> = None;
        let mut flagged = 0usize;
        for child_id in self.process_member(id)?.child_process_ids() {
            let child = self.process_member(child_id)?;
            if child.is_result() {
                flagged += 1;
                result = Some(child);
            }
        }
        if flagged > 1 {
            return Err(ProcessGraphError::MultipleResultNodes {
                node: id.clone(),
                count: flagged,
            });
        }
        Ok(result)
    }

    /// The dimension a reducer collapses.
    ///
    /// A reducer's own `"dimension"` argument when present; otherwise
    /// inherited from the parent process, walking upward as long as the
    /// parents are reducers themselves. `None` for non-reducers and when
    /// the chain runs out. A malformed callback cycle terminates as `None`.
    ///
    /// # Errors
    ///
    /// Propagates membership and parent-cardinality errors.
    pub fn reducer_dimension(
        &self,
        id: &NodeId,
        definitions: &impl DefinitionSource,
    ) -> Result<Option<Value>, ProcessGraphError> {
        let mut visited: FxHashSet<NodeId> = FxHashSet::default();
        let mut current = id.clone();
        loop {
            if !visited.insert(current.clone()) {
                return Ok(None);
            }
            let node = self.process_member(&current)?;
            if !node.is_reducer(definitions) {
                return Ok(None);
            }
            if let Some(arguments) = node.arguments(definitions)
                && let Some(dimension) = arguments.get("dimension")
            {
                return Ok(Some(dimension.clone()));
            }
            match self.parent_process(&current)? {
                Some(parent) => current = parent.id().clone(),
                None => return Ok(None),
            }
        }
    }

    /// A new graph in dependency-respecting order.
    ///
    /// Every node appears strictly after all of its dependencies (data
    /// inputs and embedded results); nodes whose dependencies tie are kept
    /// in original container order. This is a proper topological sort over
    /// the dependency relation — depth plays no role here.
    ///
    /// # Errors
    ///
    /// [`ProcessGraphError::DependencyCycle`] naming the unplaceable nodes
    /// when the dependency relation is cyclic, plus any membership or
    /// result-cardinality error met while computing dependencies.
    pub fn sort_by_dependencies(&self) -> Result<Graph<ProcessContent>, ProcessGraphError> {
        let mut dependency_sets: Vec<FxHashSet<NodeId>> = Vec::with_capacity(self.len());
        for node in self.nodes() {
            dependency_sets.push(self.dependency_ids(node.id())?.into_iter().collect());
        }

        let mut placed: FxHashSet<NodeId> = FxHashSet::default();
        let mut ordered: Vec<Node<ProcessContent>> = Vec::with_capacity(self.len());
        let mut remaining: Vec<usize> = (0..self.len()).collect();

        while !remaining.is_empty() {
            let mut progressed = false;
            remaining.retain(|&slot| {
                let node = &self[slot];
                let ready = dependency_sets[slot]
                    .iter()
                    .all(|dependency| placed.contains(dependency));
                if ready {
                    placed.insert(node.id().clone());
                    ordered.push(node.clone());
                    progressed = true;
                }
                !ready
            });

            if !progressed {
                return Err(ProcessGraphError::DependencyCycle {
                    nodes: remaining
                        .iter()
                        .map(|&slot| self[slot].id().clone())
                        .collect(),
                });
            }
        }

        Ok(Graph::from_list(ordered))
    }
}
