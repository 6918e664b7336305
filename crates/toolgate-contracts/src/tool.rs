//! Tool metadata and the tool/handler pairing handed to a registrar.
//!
//! The gating core only ever reads a tool's `name`. Everything else on
//! `Tool` is forwarded untouched to whatever serves the tools.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ToolgateResult;

/// Opaque executable attached to a tool.
///
/// The gating layer never calls it; it is only forwarded to the registrar.
pub type ToolHandler =
    Arc<dyn Fn(&serde_json::Value) -> ToolgateResult<serde_json::Value> + Send + Sync>;

/// Optional hints describing a tool's behavior to clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolAnnotations {
    /// Human-readable display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// True when the tool does not modify its environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only_hint: Option<bool>,
}

/// Metadata describing a single tool.
///
/// Tool names are expected to be unique across every toolset in a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    /// JSON Schema for the tool's arguments.
    pub input_schema: serde_json::Value,
    #[serde(default)]
    pub annotations: ToolAnnotations,
}

impl Tool {
    /// Build a tool with an empty object input schema and no annotations.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: serde_json::json!({ "type": "object", "properties": {} }),
            annotations: ToolAnnotations::default(),
        }
    }

    /// Replace the input schema.
    pub fn with_input_schema(mut self, schema: serde_json::Value) -> Self {
        self.input_schema = schema;
        self
    }

    /// Replace the annotations.
    pub fn with_annotations(mut self, annotations: ToolAnnotations) -> Self {
        self.annotations = annotations;
        self
    }
}

/// A tool paired with the handler that serves it.
#[derive(Clone)]
pub struct ServerTool {
    pub tool: Tool,
    pub handler: ToolHandler,
}

impl ServerTool {
    pub fn new(tool: Tool, handler: ToolHandler) -> Self {
        Self { tool, handler }
    }

    /// The tool's name, used for disablement lookups.
    pub fn name(&self) -> &str {
        &self.tool.name
    }
}

impl fmt::Debug for ServerTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerTool")
            .field("tool", &self.tool)
            .field("handler", &"<handler>")
            .finish()
    }
}
