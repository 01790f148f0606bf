//! Cross-checking a process graph against its definitions.
//!
//! Validation is warn-and-continue: every node is inspected, every finding
//! is accumulated as a [`ValidationIssue`], and the overall verdict is
//! simply "no issues found". Nothing here stops at the first mismatch, and
//! nothing here is a structural error — an unknown process id or a missing
//! required argument leaves the graph perfectly traversable.
//!
//! Each recorded issue is also emitted through `tracing::warn!`, so a
//! subscriber installed via [`crate::telemetry`] surfaces findings as they
//! are made.
//!
//! # Examples
//!
//! ```rust
//! use procgraph::graph::{Graph, Node};
//! use procgraph::process::ProcessContent;
//! use procgraph::registry::Registry;
//! use procgraph::validate::validate;
//! use serde_json::json;
//!
//! let graph = Graph::from_list(vec![Node::new("load_1").with_content(
//!     ProcessContent::new("load_collection").with_argument("id", json!("S2")),
//! )]);
//!
//! // An empty registry knows neither the process nor the collection.
//! let report = validate(&graph, &Registry::new());
//! assert!(!report.is_valid());
//! assert_eq!(report.issues().len(), 2);
//! ```

use crate::graph::Graph;
use crate::process::ProcessContent;
use crate::registry::DefinitionSource;
use crate::types::NodeId;
use serde_json::Value;
use std::fmt;

/// The process id that loads a collection; its `"id"` and `"bands"`
/// arguments are checked against collection definitions.
const LOAD_COLLECTION: &str = "load_collection";

/// One validation finding on one node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The declared process id has no definition.
    UnknownProcess { node: NodeId, process_id: String },
    /// The definition requires a parameter the declaration omits.
    MissingRequiredArgument {
        node: NodeId,
        process_id: String,
        parameter: String,
    },
    /// The referenced collection has no definition.
    UnknownCollection {
        node: NodeId,
        collection_id: String,
    },
    /// A declared band name is not offered by the collection.
    UnknownBand {
        node: NodeId,
        collection_id: String,
        band: String,
        available: Vec<String>,
    },
}

impl ValidationIssue {
    /// The node the finding is about.
    #[must_use]
    pub fn node(&self) -> &NodeId {
        match self {
            Self::UnknownProcess { node, .. }
            | Self::MissingRequiredArgument { node, .. }
            | Self::UnknownCollection { node, .. }
            | Self::UnknownBand { node, .. } => node,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownProcess { node, process_id } => write!(
                f,
                "node '{node}': '{process_id}' is not in the current set of process definitions"
            ),
            Self::MissingRequiredArgument {
                node,
                process_id,
                parameter,
            } => write!(
                f,
                "node '{node}': parameter '{parameter}' is required for process '{process_id}'"
            ),
            Self::UnknownCollection {
                node,
                collection_id,
            } => write!(
                f,
                "node '{node}': '{collection_id}' is not in the current set of collections"
            ),
            Self::UnknownBand {
                node,
                collection_id,
                band,
                available,
            } => write!(
                f,
                "node '{node}': '{band}' is not a valid band name for collection \
                 '{collection_id}' with the following bands: {}",
                available
                    .iter()
                    .map(|name| format!("'{name}'"))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}

/// Accumulated findings plus the overall verdict.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Create an empty (valid) report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no issues were found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// All findings, in discovery order.
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Record a finding and emit it as a warning.
    pub fn record(&mut self, issue: ValidationIssue) {
        tracing::warn!(node = %issue.node(), "{issue}");
        self.issues.push(issue);
    }

    /// Fold another report's findings into this one.
    #[must_use]
    pub fn merge(mut self, other: ValidationReport) -> Self {
        self.issues.extend(other.issues);
        self
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "valid");
        }
        for issue in &self.issues {
            writeln!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// Check every node's process id and required arguments against the
/// definitions.
///
/// Content-less nodes are skipped: they declare nothing to check. Required
/// arguments are checked against the *declared* arguments — a schema
/// default does not satisfy a required parameter.
pub fn validate_processes(
    graph: &Graph<ProcessContent>,
    definitions: &impl DefinitionSource,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    for node in graph.nodes() {
        let Some(content) = node.content() else {
            continue;
        };
        let Some(definition) = definitions.process(&content.process_id) else {
            report.record(ValidationIssue::UnknownProcess {
                node: node.id().clone(),
                process_id: content.process_id.clone(),
            });
            continue;
        };
        for parameter in &definition.parameters {
            if parameter.required && !content.arguments.contains_key(&parameter.name) {
                report.record(ValidationIssue::MissingRequiredArgument {
                    node: node.id().clone(),
                    process_id: content.process_id.clone(),
                    parameter: parameter.name.clone(),
                });
            }
        }
    }
    report
}

/// Check every collection-loading node's collection id and band names
/// against the definitions.
///
/// Band comparison is case-insensitive. The band check only applies when
/// both the node declares `"bands"` and the collection definition lists
/// its bands.
pub fn validate_collections(
    graph: &Graph<ProcessContent>,
    definitions: &impl DefinitionSource,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    for node in graph.nodes() {
        let Some(content) = node.content() else {
            continue;
        };
        if content.process_id != LOAD_COLLECTION {
            continue;
        }
        let Some(collection_id) = content.arguments.get("id").and_then(Value::as_str) else {
            continue;
        };
        let Some(collection) = definitions.collection(collection_id) else {
            report.record(ValidationIssue::UnknownCollection {
                node: node.id().clone(),
                collection_id: collection_id.to_string(),
            });
            continue;
        };

        let Some(declared_bands) = content.arguments.get("bands").and_then(Value::as_array)
        else {
            continue;
        };
        let available = collection.band_names();
        if available.is_empty() {
            continue;
        }
        let available_lower: Vec<String> =
            available.iter().map(|name| name.to_lowercase()).collect();
        for band in declared_bands.iter().filter_map(Value::as_str) {
            if !available_lower.contains(&band.to_lowercase()) {
                report.record(ValidationIssue::UnknownBand {
                    node: node.id().clone(),
                    collection_id: collection_id.to_string(),
                    band: band.to_string(),
                    available: available.iter().map(ToString::to_string).collect(),
                });
            }
        }
    }
    report
}

/// Run both process and collection validation and merge the findings.
pub fn validate(
    graph: &Graph<ProcessContent>,
    definitions: &impl DefinitionSource,
) -> ValidationReport {
    validate_processes(graph, definitions).merge(validate_collections(graph, definitions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Node;
    use crate::registry::Registry;
    use serde_json::json;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.add_process(
            serde_json::from_value(json!({
                "id": "load_collection",
                "parameters": [
                    {"name": "id", "required": true},
                    {"name": "spatial_extent", "required": true},
                    {"name": "bands", "default": null}
                ]
            }))
            .unwrap(),
        );
        registry.add_collection(
            serde_json::from_value(json!({
                "id": "COPERNICUS/S2",
                "bands": [{"name": "B4"}, {"name": "B8"}]
            }))
            .unwrap(),
        );
        registry
    }

    fn load_node(arguments: Value) -> Node<ProcessContent> {
        Node::new("load_1").with_content(
            serde_json::from_value(json!({
                "process_id": "load_collection",
                "arguments": arguments
            }))
            .unwrap(),
        )
    }

    #[test]
    fn test_valid_graph_produces_empty_report() {
        let graph = Graph::from_list(vec![load_node(json!({
            "id": "COPERNICUS/S2",
            "spatial_extent": {"west": 16.1, "east": 16.6, "north": 48.6, "south": 47.2},
            "bands": ["B4", "b8"]
        }))]);
        let report = validate(&graph, &registry());
        assert!(report.is_valid());
        assert_eq!(report.to_string(), "valid");
    }

    #[test]
    fn test_unknown_process_is_reported_not_fatal() {
        let graph = Graph::from_list(vec![
            Node::new("mystery_0").with_content(ProcessContent::new("mystery")),
            load_node(json!({
                "id": "COPERNICUS/S2",
                "spatial_extent": {}
            })),
        ]);
        let report = validate(&graph, &registry());
        assert!(!report.is_valid());
        // The second node was still checked and is fine.
        assert_eq!(report.issues().len(), 1);
        assert!(matches!(
            &report.issues()[0],
            ValidationIssue::UnknownProcess { process_id, .. } if process_id == "mystery"
        ));
    }

    #[test]
    fn test_missing_required_argument() {
        let graph = Graph::from_list(vec![load_node(json!({"id": "COPERNICUS/S2"}))]);
        let report = validate_processes(&graph, &registry());
        assert_eq!(report.issues().len(), 1);
        assert!(matches!(
            &report.issues()[0],
            ValidationIssue::MissingRequiredArgument { parameter, .. }
                if parameter == "spatial_extent"
        ));
    }

    #[test]
    fn test_unknown_collection_and_band_accumulate() {
        let graph = Graph::from_list(vec![
            load_node(json!({"id": "NOT/A/COLLECTION", "spatial_extent": {}})),
        ]);
        let report = validate_collections(&graph, &registry());
        assert_eq!(report.issues().len(), 1);
        assert!(matches!(
            &report.issues()[0],
            ValidationIssue::UnknownCollection { collection_id, .. }
                if collection_id == "NOT/A/COLLECTION"
        ));

        let graph = Graph::from_list(vec![load_node(json!({
            "id": "COPERNICUS/S2",
            "spatial_extent": {},
            "bands": ["B4", "B99"]
        }))]);
        let report = validate_collections(&graph, &registry());
        assert_eq!(report.issues().len(), 1);
        assert!(matches!(
            &report.issues()[0],
            ValidationIssue::UnknownBand { band, available, .. }
                if band == "B99" && available == &["B4".to_string(), "B8".to_string()]
        ));
    }

    #[test]
    fn test_band_check_is_case_insensitive() {
        let graph = Graph::from_list(vec![load_node(json!({
            "id": "COPERNICUS/S2",
            "spatial_extent": {},
            "bands": ["b4", "B8"]
        }))]);
        assert!(validate_collections(&graph, &registry()).is_valid());
    }
}
