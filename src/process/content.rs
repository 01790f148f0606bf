//! Content payload of a process-graph node.
//!
//! [`ProcessContent`] is the decoded record a translator stores on each
//! node: which process the node invokes, with which arguments, plus the
//! optional description and result flag. It is plain data — everything
//! derived from it (filled arguments, dependencies, reducer classification)
//! is computed on demand by the accessors in this module's siblings and
//! never stored back.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single process invocation, as declared in the source document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessContent {
    /// Name of the invoked process.
    pub process_id: String,
    /// Declared arguments, in document order.
    #[serde(default)]
    pub arguments: Map<String, Value>,
    /// Optional human-readable description of this invocation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether this node is its (sub-)graph's designated result.
    #[serde(default)]
    pub result: bool,
}

impl ProcessContent {
    /// Create a content record invoking the given process with no
    /// arguments.
    pub fn new(process_id: impl Into<String>) -> Self {
        Self {
            process_id: process_id.into(),
            arguments: Map::new(),
            description: None,
            result: false,
        }
    }

    /// Add one declared argument.
    #[must_use]
    pub fn with_argument(mut self, name: impl Into<String>, value: Value) -> Self {
        self.arguments.insert(name.into(), value);
        self
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Flag this invocation as the (sub-)graph result.
    #[must_use]
    pub fn as_result(mut self) -> Self {
        self.result = true;
        self
    }
}

/// A formal sub-parameter declared on an argument value.
///
/// Callback arguments may declare the variables their embedded sub-graph is
/// allowed to reference, as a `"parameters"` list nested inside the
/// argument value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterDecl {
    /// Variable name the embedded sub-graph may reference.
    pub name: String,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw JSON schema of accepted values; opaque to this crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
    /// Value used when the caller binds nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}
