//! Process and collection definition documents.
//!
//! The domain layer and the validator consult definitions *by name*: a
//! process id resolves to its parameter schema and reducer classification, a
//! collection id to its available bands. This module owns those document
//! types, the [`DefinitionSource`] lookup seam, and an in-memory [`Registry`]
//! built from already-decoded JSON definition documents.
//!
//! Fetching definition documents from a directory or a remote endpoint is
//! I/O and deliberately lives outside this crate; callers decode the JSON
//! however they obtained it and hand the values to
//! [`Registry::from_definitions`].
//!
//! Absence of a definition is a normal, reportable condition — lookups
//! return `Option`, never an error.
//!
//! # Examples
//!
//! ```rust
//! use procgraph::registry::{DefinitionSource, Registry};
//! use serde_json::json;
//!
//! let registry = Registry::from_definitions(
//!     vec![json!({
//!         "id": "reduce_dimension",
//!         "categories": ["cubes", "reducer"],
//!         "parameters": [
//!             {"name": "data", "required": true},
//!             {"name": "dimension", "required": true},
//!             {"name": "context", "default": null}
//!         ]
//!     })],
//!     vec![json!({
//!         "id": "COPERNICUS/S2",
//!         "bands": [{"name": "B4"}, {"name": "B8"}]
//!     })],
//! ).unwrap();
//!
//! let process = registry.process("reduce_dimension").unwrap();
//! assert!(process.is_reducer());
//! assert_eq!(registry.collection("COPERNICUS/S2").unwrap().band_names(), ["B4", "B8"]);
//! assert!(registry.process("no_such_process").is_none());
//! ```

use miette::Diagnostic;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors raised while decoding definition documents.
#[derive(Debug, Error, Diagnostic)]
pub enum RegistryError {
    /// A process definition document did not decode.
    #[error("invalid process definition: {source}")]
    #[diagnostic(
        code(procgraph::registry::invalid_process),
        help("A process definition needs at least an \"id\" field.")
    )]
    InvalidProcess {
        #[source]
        source: serde_json::Error,
    },

    /// A collection definition document did not decode.
    #[error("invalid collection definition: {source}")]
    #[diagnostic(
        code(procgraph::registry::invalid_collection),
        help("A collection definition needs at least an \"id\" field.")
    )]
    InvalidCollection {
        #[source]
        source: serde_json::Error,
    },
}

/// One formal parameter of a process definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessParameter {
    /// Parameter name, the key a declaration uses under `"arguments"`.
    pub name: String,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether a declaration must supply this parameter.
    #[serde(default)]
    pub required: bool,
    /// Value substituted when a declaration omits the parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Raw JSON schema of accepted values; opaque to this crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

/// A process definition: parameter schema plus classification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessDefinition {
    /// Process id, the name a node declares under `"process_id"`.
    pub id: String,
    /// One-line summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Category tags; the `"reducer"` tag classifies reducers.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Formal parameters, in definition order.
    #[serde(default)]
    pub parameters: Vec<ProcessParameter>,
}

impl ProcessDefinition {
    /// Whether this process collapses a dimension using an embedded
    /// callback, per its category tags.
    #[must_use]
    pub fn is_reducer(&self) -> bool {
        self.categories.iter().any(|category| category == "reducer")
    }

    /// The formal parameter with the given name, if declared.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&ProcessParameter> {
        self.parameters.iter().find(|parameter| parameter.name == name)
    }
}

/// One band of a collection definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Band name; definition documents may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A collection definition: the data sets a pipeline can load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollectionDefinition {
    /// Collection id, referenced by collection-loading nodes.
    pub id: String,
    /// Human-readable title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Available bands.
    #[serde(default)]
    pub bands: Vec<Band>,
}

impl CollectionDefinition {
    /// Names of all bands that carry one, in definition order.
    #[must_use]
    pub fn band_names(&self) -> Vec<&str> {
        self.bands
            .iter()
            .filter_map(|band| band.name.as_deref())
            .collect()
    }
}

/// Lookup seam between the graph core and wherever definitions come from.
///
/// The core only ever asks by name; owning, loading, and caching the
/// documents is the implementor's business.
pub trait DefinitionSource {
    /// The process definition for `id`, if known.
    fn process(&self, id: &str) -> Option<&ProcessDefinition>;

    /// The collection definition for `id`, if known.
    fn collection(&self, id: &str) -> Option<&CollectionDefinition>;
}

/// In-memory [`DefinitionSource`] over decoded definition documents.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    processes: FxHashMap<String, ProcessDefinition>,
    collections: FxHashMap<String, CollectionDefinition>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from decoded JSON definition documents.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when any document fails to decode.
    pub fn from_definitions(
        processes: impl IntoIterator<Item = Value>,
        collections: impl IntoIterator<Item = Value>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for document in processes {
            let definition: ProcessDefinition = serde_json::from_value(document)
                .map_err(|source| RegistryError::InvalidProcess { source })?;
            registry.add_process(definition);
        }
        for document in collections {
            let definition: CollectionDefinition = serde_json::from_value(document)
                .map_err(|source| RegistryError::InvalidCollection { source })?;
            registry.add_collection(definition);
        }
        Ok(registry)
    }

    /// Register a process definition, replacing any previous one with the
    /// same id.
    pub fn add_process(&mut self, definition: ProcessDefinition) -> &mut Self {
        self.processes.insert(definition.id.clone(), definition);
        self
    }

    /// Register a collection definition, replacing any previous one with
    /// the same id.
    pub fn add_collection(&mut self, definition: CollectionDefinition) -> &mut Self {
        self.collections.insert(definition.id.clone(), definition);
        self
    }

    /// Number of registered process definitions.
    #[must_use]
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Number of registered collection definitions.
    #[must_use]
    pub fn collection_count(&self) -> usize {
        self.collections.len()
    }
}

impl DefinitionSource for Registry {
    fn process(&self, id: &str) -> Option<&ProcessDefinition> {
        self.processes.get(id)
    }

    fn collection(&self, id: &str) -> Option<&CollectionDefinition> {
        self.collections.get(id)
    }
}
