//! Introspection snapshot of a toolset group.

use serde::{Deserialize, Serialize};

/// Point-in-time description of one toolset, produced by
/// `ToolsetGroup::manifest()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsetInfo {
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub read_only: bool,
    /// Every declared tool the toolset could expose, ignoring enablement and
    /// disablement.
    pub available_tools: Vec<String>,
    /// The tools that would be registered right now.
    pub active_tools: Vec<String>,
}
