//! Process accessors on a single node.
//!
//! These inherent methods specialize the generic [`Node`] for
//! [`ProcessContent`] payloads. Everything here is computed on demand from
//! the stored content and a [`DefinitionSource`]; nothing is cached, and
//! the stored content is never mutated — [`arguments`](Node::arguments)
//! works on a deep copy.
//!
//! Accessors that need to see *other* nodes (dependencies, parent/child
//! processes, reducer dimension) live on the container instead; see
//! [`crate::process`] for the graph-level half.

use crate::graph::Node;
use crate::process::{CALLBACK_LINK, ParameterDecl, ProcessContent, ProcessGraphError};
use crate::registry::DefinitionSource;
use crate::types::NodeId;
use serde_json::{Map, Value};

impl Node<ProcessContent> {
    /// The declared process name, or `None` for a content-less node.
    #[must_use]
    pub fn process_id(&self) -> Option<&str> {
        self.content().map(|content| content.process_id.as_str())
    }

    /// The declared description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.content().and_then(|content| content.description.as_deref())
    }

    /// Whether this node is flagged as its (sub-)graph's result.
    #[must_use]
    pub fn is_result(&self) -> bool {
        self.content().is_some_and(|content| content.result)
    }

    /// The arguments exactly as declared, without default-filling.
    #[must_use]
    pub fn declared_arguments(&self) -> Option<&Map<String, Value>> {
        self.content().map(|content| &content.arguments)
    }

    /// The declared arguments, extended with schema defaults.
    ///
    /// Returns a deep copy of the declaration plus, for every parameter the
    /// definition lists but the declaration omits, that parameter's default
    /// (null when the definition declares none). Repeated calls return the
    /// same map; the stored content is never touched. `None` only for a
    /// content-less node. When the process definition is unknown, the
    /// declared arguments come back unextended — the validator reports
    /// that condition separately.
    #[must_use]
    pub fn arguments(&self, definitions: &impl DefinitionSource) -> Option<Map<String, Value>> {
        let content = self.content()?;
        let mut arguments = content.arguments.clone();
        if let Some(definition) = definitions.process(&content.process_id) {
            for parameter in &definition.parameters {
                if !arguments.contains_key(&parameter.name) {
                    arguments.insert(
                        parameter.name.clone(),
                        parameter.default.clone().unwrap_or(Value::Null),
                    );
                }
            }
        }
        Some(arguments)
    }

    /// Formal sub-parameters declared on this node's arguments.
    ///
    /// Scans the (default-filled) arguments in order and decodes the nested
    /// `"parameters"` list of the first argument value that carries one —
    /// the variables a callback argument exposes to its embedded sub-graph.
    /// Empty when no argument declares any.
    ///
    /// # Errors
    ///
    /// [`ProcessGraphError::ParameterDecl`] when the nested list does not
    /// decode.
    pub fn parameters(
        &self,
        definitions: &impl DefinitionSource,
    ) -> Result<Vec<ParameterDecl>, ProcessGraphError> {
        let Some(arguments) = self.arguments(definitions) else {
            return Ok(Vec::new());
        };
        for value in arguments.values() {
            if let Some(declarations) = value.get("parameters") {
                return serde_json::from_value(declarations.clone()).map_err(|source| {
                    ProcessGraphError::ParameterDecl {
                        node: self.id().clone(),
                        source,
                    }
                });
            }
        }
        Ok(Vec::new())
    }

    /// Whether the definition classifies this node's process as a reducer.
    ///
    /// `false` when the node has no content or the definition is unknown —
    /// absence of a definition is reportable, not fatal.
    #[must_use]
    pub fn is_reducer(&self, definitions: &impl DefinitionSource) -> bool {
        self.process_id()
            .and_then(|process_id| definitions.process(process_id))
            .is_some_and(|definition| definition.is_reducer())
    }

    /// Identifiers of the processes forming this node's embedded sub-graph.
    #[must_use]
    pub fn child_process_ids(&self) -> Vec<&NodeId> {
        self.ancestor_ids(Some(CALLBACK_LINK))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use serde_json::json;

    fn scale_registry() -> Registry {
        let mut registry = Registry::new();
        registry.add_process(
            serde_json::from_value(json!({
                "id": "linear_scale_range",
                "parameters": [
                    {"name": "x", "required": true},
                    {"name": "inputMin", "required": true},
                    {"name": "inputMax", "required": true},
                    {"name": "outputMin", "default": 0},
                    {"name": "outputMax", "default": 1}
                ]
            }))
            .unwrap(),
        );
        registry
    }

    fn scale_node() -> Node<ProcessContent> {
        Node::new("lsr_1").with_content(
            ProcessContent::new("linear_scale_range")
                .with_argument("x", json!({"from_parameter": "x"}))
                .with_argument("inputMin", json!(0))
                .with_argument("inputMax", json!(8000)),
        )
    }

    #[test]
    fn test_arguments_fill_schema_defaults() {
        let node = scale_node();
        let registry = scale_registry();

        let arguments = node.arguments(&registry).unwrap();
        assert_eq!(arguments["outputMin"], json!(0));
        assert_eq!(arguments["outputMax"], json!(1));
        // Declared values win over defaults.
        assert_eq!(arguments["inputMax"], json!(8000));
    }

    #[test]
    fn test_arguments_never_mutate_stored_content() {
        let node = scale_node();
        let registry = scale_registry();

        let first = node.arguments(&registry).unwrap();
        // The stored declaration still has only the three declared keys.
        assert_eq!(node.declared_arguments().unwrap().len(), 3);
        let second = node.arguments(&registry).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_arguments_without_definition_stay_declared() {
        let node = scale_node();
        let empty = Registry::new();
        let arguments = node.arguments(&empty).unwrap();
        assert_eq!(arguments.len(), 3);
        assert!(!arguments.contains_key("outputMin"));
    }

    #[test]
    fn test_parameters_found_on_first_carrying_argument() {
        let node: Node<ProcessContent> = Node::new("reduce_3").with_content(
            ProcessContent::new("reduce")
                .with_argument("data", json!({"from_node": "load_1"}))
                .with_argument(
                    "reducer",
                    json!({
                        "callback": {},
                        "parameters": [{"name": "data"}, {"name": "context"}]
                    }),
                ),
        );
        let parameters = node.parameters(&Registry::new()).unwrap();
        assert_eq!(parameters.len(), 2);
        assert_eq!(parameters[0].name, "data");
    }

    #[test]
    fn test_parameters_empty_when_none_declared() {
        let node = scale_node();
        assert!(node.parameters(&Registry::new()).unwrap().is_empty());
    }

    #[test]
    fn test_parameters_malformed_list_is_an_error() {
        let node: Node<ProcessContent> = Node::new("bad").with_content(
            ProcessContent::new("reduce")
                .with_argument("reducer", json!({"parameters": [{"no_name": true}]})),
        );
        assert!(matches!(
            node.parameters(&Registry::new()),
            Err(ProcessGraphError::ParameterDecl { .. })
        ));
    }

    #[test]
    fn test_reducer_classification_and_content_less_nodes() {
        let mut registry = Registry::new();
        registry.add_process(
            serde_json::from_value(json!({"id": "reduce", "categories": ["reducer"]})).unwrap(),
        );

        let reducer: Node<ProcessContent> =
            Node::new("r").with_content(ProcessContent::new("reduce"));
        let unknown: Node<ProcessContent> =
            Node::new("u").with_content(ProcessContent::new("mystery"));
        let bare: Node<ProcessContent> = Node::new("b");

        assert!(reducer.is_reducer(&registry));
        assert!(!unknown.is_reducer(&registry));
        assert!(!bare.is_reducer(&registry));
        assert_eq!(bare.process_id(), None);
        assert!(!bare.is_result());
    }
}
